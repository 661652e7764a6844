//! ExpressionEngine — the stateful calculator brain.
//!
//! Owns the current recorded program, grown by push operations and reset
//! by [`clear`]. Evaluation, description, and variable collection delegate
//! to the pure functions in [`eval`](crate::eval) and
//! [`describe`](crate::describe), which also accept externally supplied
//! program values with no tie to any engine instance.
//!
//! [`clear`]: ExpressionEngine::clear

use crate::describe::describe_program;
use crate::error::EvalResult;
use crate::eval;
use std::collections::BTreeSet;
use tally_types::{Program, Token, Variables};

/// Accumulates a postfix token sequence and evaluates it.
///
/// Intended to be owned by one UI control flow: the host pushes operands,
/// variables, and operators as the user enters them, then asks for the
/// result to display. Repeated evaluation of the same accumulated state
/// yields the same result; evaluation never mutates the program.
#[derive(Debug, Clone, Default)]
pub struct ExpressionEngine {
    /// The current recorded program.
    program: Program,
}

impl ExpressionEngine {
    /// Create an engine with an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current program.
    ///
    /// Snapshot it to replay or describe later, independent of further
    /// pushes to this engine.
    pub fn program(&self) -> &Program {
        &self.program
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Append a literal operand.
    pub fn push_operand(&mut self, value: f64) {
        self.program.push(Token::Number(value));
    }

    /// Append a named operand. Whether `name` resolves is decided at
    /// evaluation time, not here.
    pub fn push_variable(&mut self, name: impl Into<String>) {
        self.program.push(Token::Variable(name.into()));
    }

    /// Append an operator token without evaluating.
    ///
    /// The symbol is not checked against the vocabulary; an unknown symbol
    /// surfaces during evaluation or description.
    pub fn push_operation(&mut self, symbol: impl Into<String>) {
        self.program.push(Token::Operator(symbol.into()));
    }

    /// Empty the current program.
    pub fn clear(&mut self) {
        self.program.clear();
    }

    // ── Evaluation ───────────────────────────────────────────────────

    /// Evaluate the current program with no variable bindings.
    ///
    /// Lenient: malformed steps read as the 0.0 sentinel (see
    /// [`eval::UNDEFINED`]), indistinguishable from a real zero result.
    pub fn evaluate(&self) -> f64 {
        eval::evaluate_program(&self.program)
    }

    /// Evaluate the current program against `variables`.
    pub fn evaluate_with(&self, variables: &Variables) -> f64 {
        eval::evaluate_program_with(&self.program, variables)
    }

    /// Strict evaluation of the current program.
    pub fn try_evaluate(&self) -> EvalResult<f64> {
        eval::try_evaluate_program(&self.program)
    }

    /// Strict evaluation against `variables`.
    pub fn try_evaluate_with(&self, variables: &Variables) -> EvalResult<f64> {
        eval::try_evaluate_program_with(&self.program, variables)
    }

    /// Push `symbol` and evaluate in one step.
    ///
    /// The single-shot flow for direct callers; [`push_operation`] +
    /// [`evaluate`] is the decoupled equivalent and call sites choose.
    ///
    /// [`push_operation`]: ExpressionEngine::push_operation
    /// [`evaluate`]: ExpressionEngine::evaluate
    pub fn apply_operator(&mut self, symbol: impl Into<String>) -> f64 {
        self.push_operation(symbol);
        self.evaluate()
    }

    /// Push `symbol` and evaluate against `variables` in one step.
    pub fn apply_operator_with(&mut self, symbol: impl Into<String>, variables: &Variables) -> f64 {
        self.push_operation(symbol);
        self.evaluate_with(variables)
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Infix rendering of the current program.
    pub fn describe(&self) -> String {
        describe_program(&self.program)
    }

    /// Distinct variable names in the current program.
    pub fn variables_used(&self) -> BTreeSet<String> {
        eval::variables_used(&self.program)
    }
}
