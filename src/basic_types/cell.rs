use std::fmt::Display;
use std::fmt::Formatter;

/// A square on the board, addressed by `row` and `column`, both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Cell { row, column }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.column)
    }
}

/// The Boolean unknown stating whether a queen occupies a particular [`Cell`].
///
/// Variables are dense indices in `[0, size * size)`; see
/// [`VariableEncoding`](crate::encoding::VariableEncoding) for the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(usize);

impl Variable {
    pub fn new(index: usize) -> Self {
        Variable(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}
