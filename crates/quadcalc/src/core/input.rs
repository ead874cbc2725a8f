//! Keypad input tokens
//!
//! The page hands the reducer one token per button press: a digit (either as
//! a number or a one-character string), `.`, an operator symbol, `=`, `C` or
//! `BACK`.

use super::operations::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token for clearing all state
pub const CLEAR_TOKEN: &str = "C";
/// Token for dropping the last typed character
pub const BACK_TOKEN: &str = "BACK";

/// A single keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A digit (0-9)
    Digit(u8),
    /// The decimal point
    Point,
    /// One of the four operators
    Operator(Operator),
    /// Evaluate the expression
    Equals,
    /// Reset all state
    Clear,
    /// Remove the last typed character
    Back,
}

/// Input that the keypad does not know about
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Unrecognized text token
    #[error("Unhandled input: {0:?}")]
    Unknown(String),
    /// Numeric token that is not a single digit
    #[error("Unhandled numeric input: {0}")]
    NotADigit(f64),
}

impl Input {
    /// Parses a text token
    ///
    /// Matching is exact: padded tokens such as `" 5 "` are unknown input.
    pub fn parse(token: &str) -> Result<Self, InputError> {
        match token {
            "." => return Ok(Self::Point),
            "=" => return Ok(Self::Equals),
            CLEAR_TOKEN => return Ok(Self::Clear),
            BACK_TOKEN => return Ok(Self::Back),
            _ => {}
        }

        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(d) = ch.to_digit(10) {
                return Ok(Self::Digit(d as u8));
            }
            if let Some(op) = Operator::from_symbol(ch) {
                return Ok(Self::Operator(op));
            }
        }

        Err(InputError::Unknown(token.to_string()))
    }

    /// Accepts the numeric form of a digit button (`0.0` through `9.0`)
    pub fn from_number(value: f64) -> Result<Self, InputError> {
        if value.fract() == 0.0 && (0.0..=9.0).contains(&value) {
            Ok(Self::Digit(value as u8))
        } else {
            Err(InputError::NotADigit(value))
        }
    }

    /// Returns the token text for this input
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => CLEAR_TOKEN.to_string(),
            Self::Back => BACK_TOKEN.to_string(),
        }
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
