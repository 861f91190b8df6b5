use std::fmt::Debug;
use std::fmt::Formatter;

use biodivine_lib_bdd::Bdd;
use biodivine_lib_bdd::BddVariable;
use biodivine_lib_bdd::BddVariableSet;
use num_bigint::BigInt;

use super::EngineLimits;
use super::SymbolicEngine;
use crate::basic_types::EngineError;
use crate::basic_types::Variable;
use crate::queens_assert_simple;

/// The largest variable count `BddVariableSet` accepts; the two highest `u16` values are
/// reserved for its terminal nodes.
pub const MAX_BDD_VARIABLES: usize = u16::MAX as usize - 2;

/// A [`SymbolicEngine`] backed by `biodivine-lib-bdd`.
///
/// Variables are ordered by their index, so for a board the diagram tests cells row by row.
pub struct BddEngine {
    variable_set: BddVariableSet,
    variables: Vec<BddVariable>,
    limits: EngineLimits,
}

impl Debug for BddEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BddEngine")
            .field("num_variables", &self.variables.len())
            .field("limits", &self.limits)
            .finish()
    }
}

impl BddEngine {
    fn bdd_variable(&self, variable: Variable) -> BddVariable {
        queens_assert_simple!(
            variable.index() < self.variables.len(),
            "variable {variable} does not belong to this engine"
        );
        self.variables[variable.index()]
    }
}

impl SymbolicEngine for BddEngine {
    type Function = Bdd;

    fn create(num_variables: usize, limits: EngineLimits) -> Result<Self, EngineError> {
        let too_many = EngineError::TooManyVariables {
            requested: num_variables,
            max: MAX_BDD_VARIABLES,
        };
        if num_variables > MAX_BDD_VARIABLES {
            return Err(too_many);
        }
        let num_vars = u16::try_from(num_variables).map_err(|_| too_many)?;

        let variable_set = BddVariableSet::new_anonymous(num_vars);
        let variables = variable_set.variables();

        Ok(BddEngine {
            variable_set,
            variables,
            limits,
        })
    }

    fn num_variables(&self) -> usize {
        self.variables.len()
    }

    fn limits(&self) -> EngineLimits {
        self.limits
    }

    fn literal(&self, variable: Variable, polarity: bool) -> Bdd {
        let variable = self.bdd_variable(variable);
        if polarity {
            self.variable_set.mk_var(variable)
        } else {
            self.variable_set.mk_not_var(variable)
        }
    }

    fn constant(&self, value: bool) -> Bdd {
        if value {
            self.variable_set.mk_true()
        } else {
            self.variable_set.mk_false()
        }
    }

    fn and(&self, left: &Bdd, right: &Bdd) -> Bdd {
        left.and(right)
    }

    fn or(&self, left: &Bdd, right: &Bdd) -> Bdd {
        left.or(right)
    }

    fn implies(&self, left: &Bdd, right: &Bdd) -> Bdd {
        left.imp(right)
    }

    fn restrict(&self, function: &Bdd, fixed: &[Variable]) -> Bdd {
        let assignment = fixed
            .iter()
            .map(|&variable| (self.bdd_variable(variable), true))
            .collect::<Vec<_>>();

        function.restrict(&assignment)
    }

    fn is_false(&self, function: &Bdd) -> bool {
        function.is_false()
    }

    fn count_solutions(&self, function: &Bdd) -> BigInt {
        function.exact_cardinality()
    }

    fn node_count(&self, function: &Bdd) -> usize {
        function.size()
    }
}
