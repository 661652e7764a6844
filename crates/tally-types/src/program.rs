//! The recorded-program model.
//!
//! A [`Program`] is an ordered sequence of [`Token`]s in postfix push
//! order: operands first, then the operator that combines them. The engine
//! reduces the sequence from the tail; this module only defines the data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Variable bindings supplied per evaluation: name → numeric value.
///
/// Callers pass a fresh mapping to each evaluation that needs one; the
/// engine never stores it.
pub type Variables = BTreeMap<String, f64>;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single entry in a recorded program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// A literal operand: `42`, `3.14`
    Number(f64),
    /// A named operand, resolved against [`Variables`] at evaluation time.
    Variable(String),
    /// An operator symbol: `+`, `√`, `sin`. The symbol is not validated at
    /// push time; an unknown symbol surfaces during evaluation or
    /// description, not here.
    Operator(String),
}

impl Token {
    /// Create a variable token.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create an operator token.
    pub fn operator(symbol: impl Into<String>) -> Self {
        Self::Operator(symbol.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Program
// ─────────────────────────────────────────────────────────────────────

/// An ordered, append-only sequence of tokens.
///
/// Push operations add to the end; `clear` is the only wholesale reset.
/// Evaluation never mutates the sequence, so a program value can be
/// snapshotted, serialized, and replayed by a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the end of the program.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Remove every token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// The tokens in push order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the program holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut program = Program::new();
        program.push(Token::Number(3.0));
        program.push(Token::variable("x"));
        program.push(Token::operator("+"));
        assert_eq!(
            program.tokens(),
            &[
                Token::Number(3.0),
                Token::Variable("x".into()),
                Token::Operator("+".into()),
            ]
        );
    }

    #[test]
    fn test_clear_empties() {
        let mut program: Program = vec![Token::Number(1.0), Token::Number(2.0)].into();
        assert_eq!(program.len(), 2);
        program.clear();
        assert!(program.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let program: Program = [Token::Number(9.0), Token::operator("√")]
            .into_iter()
            .collect();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Token::Number(3.0)), "3");
        assert_eq!(format!("{}", Token::Number(3.5)), "3.5");
        assert_eq!(format!("{}", Token::variable("rate")), "rate");
        assert_eq!(format!("{}", Token::operator("√")), "√");
    }

    #[test]
    fn test_program_json_round_trip() {
        let program: Program = vec![
            Token::Number(3.0),
            Token::variable("x"),
            Token::operator("+"),
        ]
        .into();

        let json = serde_json::to_string(&program).unwrap();
        // Transparent over the token list, lowercase variant tags.
        assert!(json.starts_with('['));
        assert!(json.contains("\"number\""));
        assert!(json.contains("\"variable\""));
        assert!(json.contains("\"operator\""));

        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }
}
