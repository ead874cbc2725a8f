//! Expression trail and its left-to-right fold
//!
//! The trail is what the expression display shows (`1 + 2 *`) and also what
//! `=` evaluates. There is no precedence: `2 + 3 * 4` is `(2 + 3) * 4`.

use super::number::parse_number;
use super::operations::{apply_or_rhs, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in the expression trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Operand text, as typed or as a formatted result
    Operand(String),
    /// Operator symbol
    Operator(Operator),
}

impl Token {
    /// Numeric value of the token; operators read as NaN
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Operand(text) => parse_number(text),
            Self::Operator(_) => f64::NAN,
        }
    }

    /// Returns the operator if this token is one
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            Self::Operand(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Ordered operand/operator tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Creates an empty expression
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operand token
    pub fn push_operand(&mut self, text: impl Into<String>) {
        self.tokens.push(Token::Operand(text.into()));
    }

    /// Appends an operator token
    pub fn push_operator(&mut self, op: Operator) {
        self.tokens.push(Token::Operator(op));
    }

    /// Removes all tokens
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Replaces the whole trail with a single result token
    pub fn replace_with(&mut self, text: impl Into<String>) {
        self.tokens.clear();
        self.push_operand(text);
    }

    /// Returns the tokens in order
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if the last token is an operator
    #[must_use]
    pub fn last_is_operator(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Operator(_)))
    }

    /// Folds the trail strictly left to right
    ///
    /// Starts from the first token and applies each (operator, operand) pair
    /// in order. A missing trailing operand reads as NaN; a non-operator in an
    /// operator slot yields the right-hand operand unchanged.
    /// Returns `None` for an empty trail.
    #[must_use]
    pub fn evaluate(&self) -> Option<f64> {
        let (first, rest) = self.tokens.split_first()?;
        let result = rest.chunks(2).fold(first.value(), |acc, pair| {
            let rhs = pair.get(1).map_or(f64::NAN, Token::value);
            apply_or_rhs(acc, pair[0].as_operator(), rhs)
        });
        Some(result)
    }

    /// Joins the tokens with single spaces, with an optional trailing operand
    #[must_use]
    pub fn join_with(&self, trailing: Option<&str>) -> String {
        let mut parts: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        if let Some(text) = trailing.filter(|t| !t.is_empty()) {
            parts.push(text.to_string());
        }
        parts.join(" ")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(None))
    }
}
