use crate::basic_types::Cell;
use crate::basic_types::Variable;
use crate::queens_assert_simple;

/// Row-major bijection between the cells of a `size`×`size` board and the variables
/// `[0, size * size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableEncoding {
    size: usize,
}

impl VariableEncoding {
    pub fn new(size: usize) -> Self {
        VariableEncoding { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_variables(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.column < self.size
    }

    pub fn to_variable(&self, cell: Cell) -> Variable {
        queens_assert_simple!(self.contains(cell), "{cell} is not on the board");
        Variable::new(cell.row * self.size + cell.column)
    }

    pub fn to_cell(&self, variable: Variable) -> Cell {
        queens_assert_simple!(variable.index() < self.num_variables());
        Cell::new(variable.index() / self.size, variable.index() % self.size)
    }

    /// All variables, in the same order as [`VariableEncoding::cells`].
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        (0..self.num_variables()).map(Variable::new)
    }

    /// All cells of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| Cell::new(row, column)))
    }

    /// The variables of a single row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Variable> {
        let size = self.size;
        (0..size).map(move |column| Variable::new(row * size + column))
    }
}

#[cfg(test)]
mod tests {
    use super::VariableEncoding;
    use crate::basic_types::Cell;
    use crate::basic_types::Variable;

    #[test]
    fn cells_map_row_major() {
        let encoding = VariableEncoding::new(4);

        assert_eq!(encoding.to_variable(Cell::new(0, 1)), Variable::new(1));
        assert_eq!(encoding.to_variable(Cell::new(2, 0)), Variable::new(8));
        assert_eq!(encoding.to_cell(Variable::new(15)), Cell::new(3, 3));
    }

    #[test]
    fn encoding_is_a_bijection() {
        let encoding = VariableEncoding::new(5);

        let round_tripped = encoding
            .variables()
            .map(|variable| encoding.to_variable(encoding.to_cell(variable)))
            .collect::<Vec<_>>();

        assert_eq!(round_tripped, encoding.variables().collect::<Vec<_>>());
        assert!(encoding
            .cells()
            .zip(encoding.variables())
            .all(|(cell, variable)| encoding.to_variable(cell) == variable));
    }

    #[test]
    fn bounds_are_exclusive() {
        let encoding = VariableEncoding::new(3);

        assert!(encoding.contains(Cell::new(2, 2)));
        assert!(!encoding.contains(Cell::new(3, 0)));
        assert!(!encoding.contains(Cell::new(0, 3)));
    }
}
