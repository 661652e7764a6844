//! Infix rendering of a recorded program.
//!
//! Mirrors the evaluation recursion but builds strings instead of numbers:
//! binary operators render fully parenthesised, unary operators as
//! `op(operand)`, leaves by their default formatting.

use crate::op::{Arity, Op};
use tally_types::{Program, Token};

/// Placeholder rendered where an operator lacks an operand.
const MISSING: &str = "?";

/// Render `program` as a human-readable infix expression.
///
/// A program holding several independent complete expressions yields one
/// rendering per expression, joined with `", "` in left-to-right push
/// order. Malformed programs render best-effort; this never fails.
pub fn describe_program(program: &Program) -> String {
    let mut stack = program.tokens().to_vec();
    let mut passes = Vec::new();
    while !stack.is_empty() {
        passes.push(describe_top(&mut stack));
    }
    // Reduction walks tail-first; present expressions in push order.
    passes.reverse();
    passes.join(", ")
}

/// Describe one complete expression off the top of the stack.
fn describe_top(stack: &mut Vec<Token>) -> String {
    let Some(token) = stack.pop() else {
        return MISSING.to_string();
    };
    match token {
        Token::Number(value) => value.to_string(),
        Token::Variable(name) => name,
        Token::Operator(symbol) => match Op::lookup(&symbol) {
            Some(op) => match op.arity() {
                Arity::Nullary => op.symbol().to_string(),
                Arity::Unary => format!("{}({})", op.symbol(), describe_top(stack)),
                Arity::Binary => {
                    let rhs = describe_top(stack);
                    let lhs = describe_top(stack);
                    format!("({lhs} {} {rhs})", op.symbol())
                }
            },
            // Outside the vocabulary: render the symbol as a bare leaf.
            None => symbol,
        },
    }
}
