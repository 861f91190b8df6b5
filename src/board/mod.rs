//! The interactive board: the only state a caller sees and mutates.
mod options;
mod snapshot;

use log::debug;
use log::warn;

pub use options::BoardOptions;
pub use snapshot::BoardSnapshot;

use crate::basic_types::BoardError;
use crate::basic_types::Cell;
use crate::basic_types::CellState;
use crate::constraints::ConstraintBuilder;
use crate::encoding::VariableEncoding;
use crate::engine::BddEngine;
use crate::engine::SymbolicEngine;
use crate::propagation::LegalityPropagator;
use crate::propagation::PropagationStatistics;
use crate::queens_assert_eq_simple;
use crate::solver::IncrementalSolver;

/// What [`Board::insert_queen`] did with a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(
    variant_size_differences,
    reason = "outcomes are returned once per move and stay `Copy`"
)]
pub enum PlacementOutcome {
    /// The cell was already decided; the board is unchanged.
    Ignored(CellState),
    /// The queen was committed and the rest of the board was reclassified.
    Committed(PropagationStatistics),
}

/// An N-Queens board which, after every placement, classifies each remaining cell as open,
/// blocked, or a forced queen.
///
/// Each board owns its own engine instance; boards are fully independent of each other.
///
/// # Example
/// ```
/// use queens_configurator::Board;
/// use queens_configurator::CellState;
///
/// let mut board = Board::new(4)?;
/// let _ = board.insert_queen(1, 0)?;
///
/// assert!(board.is_solved());
/// assert_eq!(board.cell(3, 1)?, CellState::Queen);
/// # Ok::<(), queens_configurator::BoardError>(())
/// ```
#[derive(Debug)]
pub struct Board<Engine: SymbolicEngine = BddEngine> {
    encoding: VariableEncoding,
    /// Indexed by variable.
    cells: Vec<CellState>,
    solver: IncrementalSolver<Engine>,
    propagator: LegalityPropagator,
    options: BoardOptions,
}

impl Board {
    /// Create a board of `size`×`size` cells with the default engine and options.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_options(size, BoardOptions::default())
    }
}

impl<Engine: SymbolicEngine> Board<Engine> {
    /// Create a board of `size`×`size` cells. Every cell starts open; no classification is done
    /// until the first queen is placed.
    pub fn with_options(size: usize, options: BoardOptions) -> Result<Self, BoardError> {
        if size == 0 || size.checked_mul(size).is_none() {
            return Err(BoardError::InvalidSize { size });
        }

        let encoding = VariableEncoding::new(size);
        let engine = Engine::create(encoding.num_variables(), options.limits)?;
        let global = ConstraintBuilder::new(&engine, encoding).build()?;

        debug!("initialised a board of size {size}");

        Ok(Board {
            encoding,
            cells: vec![CellState::Open; encoding.num_variables()],
            solver: IncrementalSolver::new(engine, global),
            propagator: LegalityPropagator,
            options,
        })
    }

    /// Discard the current session, including its engine, and start a fresh board of `size`.
    ///
    /// On error the current board is left untouched.
    pub fn initialize(&mut self, size: usize) -> Result<(), BoardError> {
        *self = Self::with_options(size, self.options)?;
        Ok(())
    }

    /// Place a queen at `column`, `row` and reclassify the remaining cells.
    ///
    /// Placing on a cell which already holds a queen or is blocked does nothing.
    pub fn insert_queen(
        &mut self,
        column: usize,
        row: usize,
    ) -> Result<PlacementOutcome, BoardError> {
        let cell = self.checked_cell(column, row)?;
        let variable = self.encoding.to_variable(cell);

        let state = self.cells[variable.index()];
        if state.is_decided() {
            debug!("ignoring a queen on {cell}, which is {state:?}");
            return Ok(PlacementOutcome::Ignored(state));
        }

        if self.options.validate_first_move && !self.solver.is_feasible(variable) {
            return Err(BoardError::InfeasiblePlacement { column, row });
        }

        self.cells[variable.index()] = CellState::Queen;
        self.solver.place(variable);

        let statistics =
            self.propagator
                .propagate(&mut self.solver, &self.encoding, &mut self.cells);

        queens_assert_eq_simple!(
            self.solver.num_committed(),
            self.cells
                .iter()
                .filter(|&&state| state == CellState::Queen)
                .count()
        );

        debug!("placed a queen on {cell}: {statistics}");
        if !self.solver.is_satisfiable() {
            warn!("the queen on {cell} is not part of any solution; no cell remains open");
        }

        Ok(PlacementOutcome::Committed(statistics))
    }

    /// The current classification of every cell.
    pub fn board(&self) -> BoardSnapshot {
        let cells = self
            .encoding
            .cells()
            .map(|cell| self.cells[self.encoding.to_variable(cell).index()])
            .collect();

        BoardSnapshot::new(self.encoding.size(), cells)
    }

    pub fn cell(&self, column: usize, row: usize) -> Result<CellState, BoardError> {
        let cell = self.checked_cell(column, row)?;
        Ok(self.cells[self.encoding.to_variable(cell).index()])
    }

    pub fn size(&self) -> usize {
        self.encoding.size()
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    /// The cells holding a queen, whether placed or forced, row by row.
    pub fn queens(&self) -> Vec<Cell> {
        self.encoding
            .cells()
            .filter(|&cell| self.solver.is_committed(self.encoding.to_variable(cell)))
            .collect()
    }

    pub fn num_queens(&self) -> usize {
        self.solver.num_committed()
    }

    /// Whether every row holds a queen.
    pub fn is_solved(&self) -> bool {
        self.solver.num_committed() == self.size() && self.solver.is_satisfiable()
    }

    /// Whether at least one complete solution extends the queens on the board.
    pub fn is_satisfiable(&self) -> bool {
        self.solver.is_satisfiable()
    }

    fn checked_cell(&self, column: usize, row: usize) -> Result<Cell, BoardError> {
        let cell = Cell::new(row, column);

        if self.encoding.contains(cell) {
            Ok(cell)
        } else {
            Err(BoardError::OutOfBounds {
                column,
                row,
                size: self.encoding.size(),
            })
        }
    }
}
