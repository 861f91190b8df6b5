mod incremental_solver;

pub(crate) use incremental_solver::IncrementalSolver;
