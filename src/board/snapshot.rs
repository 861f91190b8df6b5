use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Cell;
use crate::basic_types::CellState;

/// A copy of the classification of every cell at one point in time, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    size: usize,
    cells: Vec<CellState>,
}

impl BoardSnapshot {
    pub(crate) fn new(size: usize, cells: Vec<CellState>) -> Self {
        BoardSnapshot { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The state of the cell at `column` and `row`, or `None` outside the board.
    pub fn get(&self, column: usize, row: usize) -> Option<CellState> {
        if column < self.size && row < self.size {
            Some(self.cells[row * self.size + column])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// The cells currently in `state`, row by row.
    pub fn cells_in(&self, state: CellState) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &cell_state)| cell_state == state)
            .map(|(index, _)| Cell::new(index / self.size, index % self.size))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// The board as `-1`/`0`/`1` integers, indexed `[row][column]`. See [`CellState::encoded`].
    pub fn encoded(&self) -> Vec<Vec<i8>> {
        self.rows()
            .map(|row| row.iter().map(|state| state.encoded()).collect())
            .collect()
    }
}

impl Display for BoardSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let row_separator = format!("{}+", "+---".repeat(self.size));

        for row in self.rows() {
            writeln!(f, "{row_separator}")?;

            for state in row {
                let string = match state {
                    CellState::Queen => "| Q ",
                    CellState::Blocked => "| x ",
                    CellState::Open => "|   ",
                };

                write!(f, "{string}")?;
            }

            writeln!(f, "|")?;
        }

        write!(f, "{row_separator}")
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSnapshot;
    use crate::basic_types::Cell;
    use crate::basic_types::CellState;

    fn snapshot() -> BoardSnapshot {
        BoardSnapshot::new(
            2,
            vec![
                CellState::Queen,
                CellState::Blocked,
                CellState::Blocked,
                CellState::Open,
            ],
        )
    }

    #[test]
    fn get_is_column_then_row() {
        let snapshot = snapshot();

        assert_eq!(snapshot.get(1, 0), Some(CellState::Blocked));
        assert_eq!(snapshot.get(1, 1), Some(CellState::Open));
        assert_eq!(snapshot.get(2, 0), None);
    }

    #[test]
    fn encoded_uses_legacy_integers() {
        assert_eq!(snapshot().encoded(), vec![vec![1, -1], vec![-1, 0]]);
    }

    #[test]
    fn cells_are_listed_by_state() {
        let snapshot = snapshot();

        assert_eq!(
            snapshot.cells_in(CellState::Blocked).collect::<Vec<_>>(),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
        assert_eq!(snapshot.count(CellState::Queen), 1);
    }

    #[test]
    fn renders_as_grid() {
        let expected = "+---+---+\n| Q | x |\n+---+---+\n| x |   |\n+---+---+";

        assert_eq!(snapshot().to_string(), expected);
    }
}
