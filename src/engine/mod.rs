//! The Boolean-function engine the configurator reasons with.
//!
//! The board never inspects how functions are represented; it only builds them from literals and
//! connectives, cofactors them, and asks whether a function is unsatisfiable or has exactly one
//! model. Those operations form the [`SymbolicEngine`] trait. [`BddEngine`] implements it with
//! reduced ordered binary decision diagrams.
mod bdd_engine;
mod symbolic_engine;

pub use bdd_engine::BddEngine;
pub use bdd_engine::MAX_BDD_VARIABLES;
pub use symbolic_engine::EngineLimits;
pub use symbolic_engine::SymbolicEngine;
