mod legality_propagator;
mod statistics;

pub(crate) use legality_propagator::LegalityPropagator;
pub use statistics::PropagationStatistics;
