use log::trace;

use super::PropagationStatistics;
use crate::basic_types::CellState;
use crate::encoding::attacks;
use crate::encoding::VariableEncoding;
use crate::engine::SymbolicEngine;
use crate::queens_assert_extreme;
use crate::queens_assert_moderate;
use crate::queens_assert_simple;
use crate::solver::IncrementalSolver;

/// Classifies the undecided cells of a board against the restricted constraint.
///
/// For every cell that is still [`CellState::Open`]:
/// 1. if a queen on it admits no completion, it becomes [`CellState::Blocked`];
/// 2. otherwise, if the committed queens have a unique completion, the cell must be part of it
///    and is committed as a forced [`CellState::Queen`];
/// 3. otherwise it stays open.
///
/// Step 1 is evaluated first: uniqueness only implies a queen on cells already known to be
/// feasible. A forced queen changes the restricted constraint, so passes are repeated until one
/// of them forces nothing.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LegalityPropagator;

impl LegalityPropagator {
    /// Run classification passes until a fixpoint is reached.
    ///
    /// `cells` is indexed by variable.
    pub(crate) fn propagate<Engine: SymbolicEngine>(
        &self,
        solver: &mut IncrementalSolver<Engine>,
        encoding: &VariableEncoding,
        cells: &mut [CellState],
    ) -> PropagationStatistics {
        queens_assert_simple!(
            cells.len() == encoding.num_variables(),
            "expected one state per cell"
        );

        let mut statistics = PropagationStatistics::default();

        loop {
            statistics.passes += 1;

            let forced = self.classification_pass(solver, encoding, cells, &mut statistics);
            statistics.forced += forced;

            // Every forcing pass commits at least one of the finitely many free cells.
            queens_assert_simple!(statistics.forced <= encoding.num_variables());

            if forced == 0 {
                break;
            }
        }

        statistics.open = cells
            .iter()
            .filter(|&&state| state == CellState::Open)
            .count();

        queens_assert_moderate!(encoding.variables().all(|variable| {
            cells[variable.index()] != CellState::Open || solver.is_feasible(variable)
        }));
        queens_assert_extreme!(
            queens_are_independent(encoding, cells),
            "two committed queens attack each other"
        );

        statistics
    }

    /// Returns the number of queens forced during this pass.
    fn classification_pass<Engine: SymbolicEngine>(
        &self,
        solver: &mut IncrementalSolver<Engine>,
        encoding: &VariableEncoding,
        cells: &mut [CellState],
        statistics: &mut PropagationStatistics,
    ) -> usize {
        let mut forced = 0;

        for variable in encoding.variables() {
            let state = &mut cells[variable.index()];

            // Blocked cells stay blocked: the restricted constraint only ever shrinks.
            if state.is_decided() {
                continue;
            }

            if !solver.is_feasible(variable) {
                *state = CellState::Blocked;
                statistics.newly_blocked += 1;

                trace!("{} is blocked", encoding.to_cell(variable));
            } else if solver.has_unique_completion() {
                *state = CellState::Queen;
                solver.place(variable);
                forced += 1;

                trace!("{} is forced", encoding.to_cell(variable));
            }
        }

        forced
    }
}

fn queens_are_independent(encoding: &VariableEncoding, cells: &[CellState]) -> bool {
    let queens = encoding
        .cells()
        .filter(|&cell| cells[encoding.to_variable(cell).index()] == CellState::Queen)
        .collect::<Vec<_>>();

    queens.iter().enumerate().all(|(index, &first)| {
        queens[index + 1..]
            .iter()
            .all(|&second| !attacks(first, second))
    })
}
