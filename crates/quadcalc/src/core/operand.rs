//! In-progress operand value object
//!
//! An operand is an unsigned digit string with at most one decimal point.
//! It is never empty: removing the last character yields `None` instead,
//! which is how "no operand in progress" is represented.

use super::number::parse_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The number currently being typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    /// Starts an operand from a single digit (0-9)
    ///
    /// Returns `None` for anything above 9.
    #[must_use]
    pub fn from_digit(digit: u8) -> Option<Self> {
        char::from_digit(u32::from(digit), 10).map(|ch| Self(ch.to_string()))
    }

    /// Starts an operand with a decimal point (`0.`)
    #[must_use]
    pub fn decimal_start() -> Self {
        Self("0.".to_string())
    }

    /// Appends a digit
    pub fn push_digit(&mut self, digit: u8) {
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            self.0.push(ch);
        }
    }

    /// Appends a decimal point unless one is already present
    ///
    /// Returns whether the operand changed.
    pub fn push_point(&mut self) -> bool {
        if self.has_point() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Drops the last character, consuming the operand when it becomes empty
    #[must_use]
    pub fn pop(mut self) -> Option<Self> {
        self.0.pop();
        if self.0.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns true if the operand already contains a decimal point
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Returns the operand text exactly as typed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the operand to a number (only needed at fold time)
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_number(&self.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
