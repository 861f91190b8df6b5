use std::fmt::Display;
use std::fmt::Formatter;

/// Counters describing one run of the legality propagation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStatistics {
    /// Full classification passes over the board, including the final one which changed nothing.
    pub passes: usize,
    /// Queens committed because they were the only way to complete the board.
    pub forced: usize,
    /// Cells which became blocked during this run.
    pub newly_blocked: usize,
    /// Cells left open when the fixpoint was reached.
    pub open: usize,
}

impl Display for PropagationStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "passes={} forced={} newly_blocked={} open={}",
            self.passes, self.forced, self.newly_blocked, self.open
        )
    }
}
