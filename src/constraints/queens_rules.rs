use log::debug;
use log::trace;

use crate::basic_types::EngineError;
use crate::basic_types::Variable;
use crate::encoding::attackers;
use crate::encoding::VariableEncoding;
use crate::engine::SymbolicEngine;

/// Assembles the rules of the N-Queens problem as functions of a [`SymbolicEngine`].
#[derive(Debug)]
pub struct ConstraintBuilder<'engine, Engine> {
    engine: &'engine Engine,
    encoding: VariableEncoding,
}

impl<'engine, Engine: SymbolicEngine> ConstraintBuilder<'engine, Engine> {
    pub fn new(engine: &'engine Engine, encoding: VariableEncoding) -> Self {
        ConstraintBuilder { engine, encoding }
    }

    /// `variable ⇒ ⋀ ¬attacker` over every attacker of `variable`.
    pub fn cell_rule(&self, variable: Variable) -> Engine::Function {
        let no_attacker = attackers(&self.encoding, variable)
            .into_iter()
            .fold(self.engine.constant(true), |rule, attacker| {
                self.engine
                    .and(&rule, &self.engine.literal(attacker, false))
            });

        self.engine
            .implies(&self.engine.literal(variable, true), &no_attacker)
    }

    /// `⋀_row ⋁_column queen(row, column)`.
    pub fn row_coverage_rule(&self) -> Engine::Function {
        (0..self.encoding.size()).fold(self.engine.constant(true), |rule, row| {
            let occupied = self
                .encoding
                .row(row)
                .fold(self.engine.constant(false), |clause, variable| {
                    self.engine
                        .or(&clause, &self.engine.literal(variable, true))
                });

            self.engine.and(&rule, &occupied)
        })
    }

    /// The conjunction of every cell rule and the row coverage rule.
    ///
    /// The engine's capacity is checked after every conjunct; an oversized intermediate result
    /// aborts construction rather than yielding a partial constraint.
    pub fn build(&self) -> Result<Engine::Function, EngineError> {
        let mut global = self.engine.constant(true);

        for variable in self.encoding.variables() {
            global = self.engine.and(&global, &self.cell_rule(variable));
            self.engine.check_capacity(&global)?;

            trace!(
                "conjoined rule for {variable}: {} nodes",
                self.engine.node_count(&global)
            );
        }

        global = self.engine.and(&global, &self.row_coverage_rule());
        self.engine.check_capacity(&global)?;

        debug!(
            "built the {0}x{0} constraint with {1} nodes",
            self.encoding.size(),
            self.engine.node_count(&global)
        );

        Ok(global)
    }
}
