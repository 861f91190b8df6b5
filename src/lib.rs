//! An interactive configurator for the N-Queens problem.
//!
//! The rules of the puzzle are compiled once into a Boolean function over one variable per cell.
//! As queens are placed, the function is cofactored by the committed queens and every remaining
//! cell is classified:
//! - [`CellState::Blocked`] if no complete solution puts a queen there any more,
//! - [`CellState::Queen`] if only one completion is left, in which case the cell is forced,
//! - [`CellState::Open`] otherwise.
//!
//! The entry point is [`Board`].
pub mod asserts;
mod basic_types;
mod board;
pub mod constraints;
pub mod encoding;
pub mod engine;
mod propagation;
pub mod runner;
mod solver;

#[cfg(test)]
mod tests;

pub use basic_types::BoardError;
pub use basic_types::Cell;
pub use basic_types::CellState;
pub use basic_types::EngineError;
pub use basic_types::Variable;
pub use board::Board;
pub use board::BoardOptions;
pub use board::BoardSnapshot;
pub use board::PlacementOutcome;
pub use propagation::PropagationStatistics;
