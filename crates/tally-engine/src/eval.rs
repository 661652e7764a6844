//! Reverse-Polish reduction over a recorded program.
//!
//! The token sequence is consumed from the tail: the last pushed token is
//! the top of the stack. Two layers share the same reduction shape:
//!
//! - the lenient layer ([`evaluate_program`]) is total: every failing step
//!   degrades to the [`UNDEFINED`] sentinel and reduction continues, which
//!   is the calculator's legacy behavior;
//! - the strict layer ([`try_evaluate_program`]) propagates the first
//!   failure as an [`EvalError`] for hosts that want diagnosable results.

use crate::error::{EvalError, EvalResult};
use crate::op::{Arity, Op};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use tally_types::{Program, Token, Variables};

/// The numeric stand-in for any failed lenient reduction step.
///
/// Indistinguishable from a genuine zero result; callers that need to
/// tell the two apart use the strict layer.
pub const UNDEFINED: f64 = 0.0;

/// Evaluate a program with no variable bindings.
///
/// Variable tokens read as the sentinel, as does every other malformed
/// step. Never panics; an empty program yields the sentinel. Evaluation
/// does not mutate the input, so replaying the same program gives the
/// same result.
pub fn evaluate_program(program: &Program) -> f64 {
    evaluate_program_with(program, &Variables::new())
}

/// Evaluate a program, resolving variable tokens against `variables`.
pub fn evaluate_program_with(program: &Program, variables: &Variables) -> f64 {
    let mut stack = program.tokens().to_vec();
    reduce(&mut stack, variables)
}

/// Strict evaluation with no variable bindings.
pub fn try_evaluate_program(program: &Program) -> EvalResult<f64> {
    try_evaluate_program_with(program, &Variables::new())
}

/// Strict evaluation: the first malformed reduction step is an error.
pub fn try_evaluate_program_with(program: &Program, variables: &Variables) -> EvalResult<f64> {
    if program.is_empty() {
        return Err(EvalError::EmptyProgram);
    }
    let mut stack = program.tokens().to_vec();
    try_reduce(&mut stack, variables)
}

/// Distinct variable names referenced anywhere in the program.
pub fn variables_used(program: &Program) -> BTreeSet<String> {
    program
        .iter()
        .filter_map(|token| match token {
            Token::Variable(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────
// Lenient reduction
// ─────────────────────────────────────────────────────────────────────

/// Reduce one complete expression off the top of the stack.
///
/// The first recursive call yields the right-hand operand: tokens were
/// pushed left-to-right, so the operand closest to the operator pops
/// first.
fn reduce(stack: &mut Vec<Token>, variables: &Variables) -> f64 {
    let Some(token) = stack.pop() else {
        return UNDEFINED;
    };
    match token {
        Token::Number(value) => value,
        Token::Variable(name) => variables.get(&name).copied().unwrap_or(UNDEFINED),
        Token::Operator(symbol) => match Op::lookup(&symbol) {
            Some(op) => match op.arity() {
                Arity::Nullary => constant(op),
                Arity::Unary => apply_unary(op, reduce(stack, variables)),
                Arity::Binary => {
                    let rhs = reduce(stack, variables);
                    let lhs = reduce(stack, variables);
                    if op == Op::Div && rhs == 0.0 {
                        UNDEFINED
                    } else {
                        apply_binary(op, lhs, rhs)
                    }
                }
            },
            None => UNDEFINED,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────
// Strict reduction
// ─────────────────────────────────────────────────────────────────────

/// Strict counterpart of [`reduce`]: same shape, error-propagating.
fn try_reduce(stack: &mut Vec<Token>, variables: &Variables) -> EvalResult<f64> {
    let Some(token) = stack.pop() else {
        return Err(EvalError::EmptyProgram);
    };
    match token {
        Token::Number(value) => Ok(value),
        Token::Variable(name) => variables
            .get(&name)
            .copied()
            .ok_or(EvalError::UnresolvedVariable(name)),
        Token::Operator(symbol) => {
            let op =
                Op::lookup(&symbol).ok_or_else(|| EvalError::UnknownOperator(symbol.clone()))?;
            match op.arity() {
                Arity::Nullary => Ok(constant(op)),
                Arity::Unary => {
                    let operand = try_operand(stack, variables, &symbol)?;
                    Ok(apply_unary(op, operand))
                }
                Arity::Binary => {
                    let rhs = try_operand(stack, variables, &symbol)?;
                    let lhs = try_operand(stack, variables, &symbol)?;
                    if op == Op::Div && rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(apply_binary(op, lhs, rhs))
                }
            }
        }
    }
}

/// Reduce one operand for `symbol`, reporting which operator came up short.
fn try_operand(stack: &mut Vec<Token>, variables: &Variables, symbol: &str) -> EvalResult<f64> {
    if stack.is_empty() {
        return Err(EvalError::MissingOperand(symbol.to_string()));
    }
    try_reduce(stack, variables)
}

// ─────────────────────────────────────────────────────────────────────
// Operator application
// ─────────────────────────────────────────────────────────────────────

fn constant(op: Op) -> f64 {
    match op {
        Op::Pi => PI,
        Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Sqrt | Op::Sin | Op::Cos => {
            unreachable!("not a nullary operator")
        }
    }
}

/// `√` of a negative follows `f64::sqrt` (NaN); only zero divisors are
/// treated specially.
fn apply_unary(op: Op, operand: f64) -> f64 {
    match op {
        Op::Sqrt => operand.sqrt(),
        Op::Sin => operand.sin(),
        Op::Cos => operand.cos(),
        Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pi => {
            unreachable!("not a unary operator")
        }
    }
}

/// Apply a binary operator. Callers screen zero divisors before `/`.
fn apply_binary(op: Op, lhs: f64, rhs: f64) -> f64 {
    match op {
        Op::Add => lhs + rhs,
        Op::Sub => lhs - rhs,
        Op::Mul => lhs * rhs,
        Op::Div => lhs / rhs,
        Op::Sqrt | Op::Sin | Op::Cos | Op::Pi => {
            unreachable!("not a binary operator")
        }
    }
}
