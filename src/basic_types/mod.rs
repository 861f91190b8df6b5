mod cell;
mod cell_state;
mod errors;

pub use cell::Cell;
pub use cell::Variable;
pub use cell_state::CellState;
pub use errors::BoardError;
pub use errors::EngineError;

pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
