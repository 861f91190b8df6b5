use std::fmt::Debug;

use num_bigint::BigInt;

use crate::basic_types::EngineError;
use crate::basic_types::Variable;

/// Resource limits applied to an engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineLimits {
    /// The largest number of nodes a single function may have before
    /// [`SymbolicEngine::check_capacity`] reports [`EngineError::CapacityExceeded`]. `None` means
    /// unbounded.
    pub max_nodes: Option<usize>,
}

/// A symbolic representation of Boolean functions over a fixed set of variables.
///
/// An engine instance owns its variable space; functions created by one instance must not be
/// passed to another.
pub trait SymbolicEngine: Debug + Sized {
    type Function: Clone + Debug;

    /// Create an engine over `num_variables` independent variables.
    fn create(num_variables: usize, limits: EngineLimits) -> Result<Self, EngineError>;

    fn num_variables(&self) -> usize;

    fn limits(&self) -> EngineLimits;

    /// The literal `variable` if `polarity` is true, its negation otherwise.
    fn literal(&self, variable: Variable, polarity: bool) -> Self::Function;

    fn constant(&self, value: bool) -> Self::Function;

    fn and(&self, left: &Self::Function, right: &Self::Function) -> Self::Function;

    fn or(&self, left: &Self::Function, right: &Self::Function) -> Self::Function;

    fn implies(&self, left: &Self::Function, right: &Self::Function) -> Self::Function;

    /// The cofactor of `function` in which every variable of `fixed` is set to true.
    fn restrict(&self, function: &Self::Function, fixed: &[Variable]) -> Self::Function;

    fn is_false(&self, function: &Self::Function) -> bool;

    /// The number of assignments to *all* variables of the engine which satisfy `function`.
    fn count_solutions(&self, function: &Self::Function) -> BigInt;

    fn node_count(&self, function: &Self::Function) -> usize;

    fn has_unique_solution(&self, function: &Self::Function) -> bool {
        self.count_solutions(function) == BigInt::from(1)
    }

    fn conjunction<'a>(
        &self,
        functions: impl IntoIterator<Item = &'a Self::Function>,
    ) -> Self::Function
    where
        Self::Function: 'a,
    {
        functions
            .into_iter()
            .fold(self.constant(true), |acc, function| self.and(&acc, function))
    }

    fn disjunction<'a>(
        &self,
        functions: impl IntoIterator<Item = &'a Self::Function>,
    ) -> Self::Function
    where
        Self::Function: 'a,
    {
        functions
            .into_iter()
            .fold(self.constant(false), |acc, function| self.or(&acc, function))
    }

    /// Fails if `function` is larger than [`EngineLimits::max_nodes`] allows.
    fn check_capacity(&self, function: &Self::Function) -> Result<(), EngineError> {
        match self.limits().max_nodes {
            Some(limit) => {
                let nodes = self.node_count(function);
                if nodes > limit {
                    Err(EngineError::CapacityExceeded { nodes, limit })
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}
