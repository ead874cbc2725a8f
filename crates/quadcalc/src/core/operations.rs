//! Binary operators for the four-function keypad
//!
//! All arithmetic is plain `f64`. Division by zero is not an error: it
//! yields NaN, which then flows through later operations and renders as `NaN`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe operator enum - the keypad only offers these four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol used in the expression trail
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Looks up an operator by its symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `lhs` and `rhs`
    ///
    /// A zero divisor produces NaN rather than an infinity.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies an optional operator, falling back to `rhs` when there is none.
///
/// The fallback only triggers when a token sequence carries something other
/// than an operator in an operator slot; keypad input never produces that on
/// its own.
#[must_use]
pub fn apply_or_rhs(lhs: f64, operator: Option<Operator>, rhs: f64) -> f64 {
    operator.map_or(rhs, |op| op.apply(lhs, rhs))
}
