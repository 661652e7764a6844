//! Tally expression engine: reverse-Polish evaluation of recorded programs.
//!
//! [`ExpressionEngine`] accumulates tokens pushed by a host (a calculator
//! UI) and evaluates them. The free functions ([`evaluate_program`],
//! [`describe_program`], [`variables_used`]) operate on any externally
//! supplied [`Program`] value with no engine instance involved.

pub mod describe;
pub mod engine;
pub mod error;
pub mod eval;
pub mod op;

pub use describe::describe_program;
pub use engine::ExpressionEngine;
pub use error::{EvalError, EvalResult};
pub use eval::{
    evaluate_program, evaluate_program_with, try_evaluate_program, try_evaluate_program_with,
    variables_used, UNDEFINED,
};
pub use op::{Arity, Op};

pub use tally_types::{Program, Token, Variables};
