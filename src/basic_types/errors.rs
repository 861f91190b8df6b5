use thiserror::Error;

/// Failures reported by a [`SymbolicEngine`](crate::engine::SymbolicEngine).
///
/// Both variants are fatal for the session that triggered them: the engine cannot represent the
/// constraint that was asked of it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("the engine supports at most {max} variables, but {requested} were requested")]
    TooManyVariables { requested: usize, max: usize },
    #[error("a function grew to {nodes} nodes, which exceeds the limit of {limit}")]
    CapacityExceeded { nodes: usize, limit: usize },
}

/// Errors returned by the public [`Board`](crate::Board) surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("a board needs at least one row and a cell count that fits in memory, got size {size}")]
    InvalidSize { size: usize },
    #[error("cell (column {column}, row {row}) lies outside a board of size {size}")]
    OutOfBounds {
        column: usize,
        row: usize,
        size: usize,
    },
    #[error("a queen at (column {column}, row {row}) is not part of any complete solution")]
    InfeasiblePlacement { column: usize, row: usize },
    #[error(transparent)]
    Engine(#[from] EngineError),
}
