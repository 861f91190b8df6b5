//! The mapping between board cells and engine variables, and the attack relation between cells.
mod attacks;
mod variable_encoding;

pub use attacks::attackers;
pub use attacks::attacks;
pub use variable_encoding::VariableEncoding;
