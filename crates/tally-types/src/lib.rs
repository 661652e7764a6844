//! Shared types for the Tally expression engine.
//!
//! This crate defines the recorded-program model: the [`Token`] variants,
//! the append-only [`Program`] sequence, and the [`Variables`] mapping
//! consulted at evaluation time. Behavior (evaluation, description) lives
//! in `tally-engine`.

mod program;

pub use program::{Program, Token, Variables};
