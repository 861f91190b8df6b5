//! Construction of the global N-Queens constraint.
//!
//! The constraint is the conjunction of one [`ConstraintBuilder::cell_rule`] per cell ("a queen
//! here means no queen on any attacked cell") and a single
//! [`ConstraintBuilder::row_coverage_rule`] ("every row holds a queen"). Because a row holds at
//! most one queen by the cell rules, row coverage makes it exactly one, and the column and
//! diagonal rules follow from the cell rules alone.
mod queens_rules;

pub use queens_rules::ConstraintBuilder;
