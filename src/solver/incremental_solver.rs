use log::trace;

use crate::basic_types::HashSet;
use crate::basic_types::Variable;
use crate::engine::SymbolicEngine;
use crate::queens_assert_simple;

/// Tracks the committed queens of a session together with the cofactor of the global constraint
/// under those commitments.
///
/// The cofactor is always recomputed from the immutable global constraint, never from the
/// previous cofactor.
#[derive(Debug)]
pub(crate) struct IncrementalSolver<Engine: SymbolicEngine> {
    engine: Engine,
    /// Valid placements over the whole board; fixed for the lifetime of the session.
    global: Engine::Function,
    /// Only grows.
    committed: HashSet<Variable>,
    /// `global` with every committed variable fixed to true.
    restricted: Engine::Function,
    /// Whether exactly one complete board extends the committed queens.
    unique_completion: bool,
}

impl<Engine: SymbolicEngine> IncrementalSolver<Engine> {
    pub(crate) fn new(engine: Engine, global: Engine::Function) -> Self {
        let unique_completion = engine.has_unique_solution(&global);

        IncrementalSolver {
            restricted: global.clone(),
            engine,
            global,
            committed: HashSet::default(),
            unique_completion,
        }
    }

    /// Commit a queen on `variable`.
    pub(crate) fn place(&mut self, variable: Variable) {
        let newly_inserted = self.committed.insert(variable);
        queens_assert_simple!(newly_inserted, "{variable} was already committed");

        self.update_restriction();
    }

    fn update_restriction(&mut self) {
        let committed = self.committed.iter().copied().collect::<Vec<_>>();

        self.restricted = self.engine.restrict(&self.global, &committed);

        // The cofactor no longer mentions the committed variables, so counting its models would
        // count every committed variable as a free choice. Count completions on the global
        // constraint conjoined with the commitments instead.
        let commitments = committed
            .iter()
            .fold(self.engine.constant(true), |cube, &variable| {
                self.engine
                    .and(&cube, &self.engine.literal(variable, true))
            });
        let completions = self.engine.and(&self.global, &commitments);
        self.unique_completion = self.engine.has_unique_solution(&completions);

        trace!(
            "restricted constraint has {} nodes after committing {} queens (unique: {})",
            self.engine.node_count(&self.restricted),
            committed.len(),
            self.unique_completion
        );
    }

    /// Whether a queen on `variable` is consistent with at least one completion of the committed
    /// queens.
    pub(crate) fn is_feasible(&self, variable: Variable) -> bool {
        let probe = self.engine.restrict(&self.restricted, &[variable]);
        !self.engine.is_false(&probe)
    }

    pub(crate) fn has_unique_completion(&self) -> bool {
        self.unique_completion
    }

    pub(crate) fn is_satisfiable(&self) -> bool {
        !self.engine.is_false(&self.restricted)
    }

    pub(crate) fn is_committed(&self, variable: Variable) -> bool {
        self.committed.contains(&variable)
    }

    pub(crate) fn num_committed(&self) -> usize {
        self.committed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::IncrementalSolver;
    use crate::basic_types::Cell;
    use crate::constraints::ConstraintBuilder;
    use crate::encoding::VariableEncoding;
    use crate::engine::BddEngine;
    use crate::engine::EngineLimits;
    use crate::engine::SymbolicEngine;

    fn solver(size: usize) -> (IncrementalSolver<BddEngine>, VariableEncoding) {
        let encoding = VariableEncoding::new(size);
        let engine = BddEngine::create(encoding.num_variables(), EngineLimits::default())
            .expect("Expected no error");
        let global = ConstraintBuilder::new(&engine, encoding)
            .build()
            .expect("Expected no error");

        (IncrementalSolver::new(engine, global), encoding)
    }

    #[test]
    fn fresh_solver_has_nothing_committed() {
        let (solver, encoding) = solver(4);

        assert_eq!(solver.num_committed(), 0);
        assert!(solver.is_satisfiable());
        assert!(!solver.has_unique_completion());
        assert!(encoding.variables().all(|variable| !solver.is_committed(variable)));
    }

    #[test]
    fn placing_a_queen_on_a_solution_makes_completion_unique() {
        let (mut solver, encoding) = solver(4);

        solver.place(encoding.to_variable(Cell::new(0, 1)));

        assert!(solver.is_satisfiable());
        assert!(solver.has_unique_completion());
        assert!(solver.is_feasible(encoding.to_variable(Cell::new(1, 3))));
        assert!(!solver.is_feasible(encoding.to_variable(Cell::new(1, 2))));
    }

    #[test]
    fn placing_a_queen_outside_every_solution_leaves_nothing() {
        let (mut solver, encoding) = solver(4);

        solver.place(encoding.to_variable(Cell::new(0, 0)));

        assert!(!solver.is_satisfiable());
        assert!(!solver.has_unique_completion());
        assert!(encoding
            .variables()
            .all(|variable| !solver.is_feasible(variable)));
    }

    #[test]
    fn single_cell_board_is_unique_before_any_placement() {
        let (mut solver, encoding) = solver(1);
        let only = encoding.to_variable(Cell::new(0, 0));

        assert!(solver.has_unique_completion());

        solver.place(only);

        assert!(solver.is_committed(only));
        assert!(solver.is_satisfiable());
        assert!(solver.has_unique_completion());
    }
}
