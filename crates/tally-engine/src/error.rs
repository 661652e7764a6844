//! Evaluation error types for the strict evaluator layer.

use thiserror::Error;

/// Errors surfaced by the strict (`try_`) evaluation layer.
///
/// The lenient default never produces these: it degrades each failing
/// reduction step to the 0.0 sentinel instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The program holds no tokens at all.
    #[error("empty program")]
    EmptyProgram,

    /// An operator ran out of operands mid-reduction. Carries the symbol
    /// that came up short.
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(String),

    /// A variable token had no binding in the supplied mapping.
    #[error("unresolved variable: {0}")]
    UnresolvedVariable(String),

    /// An operator symbol outside the vocabulary.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// A binary `/` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result alias for strict evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
