//! Calculator core: the keypad input reducer
//!
//! - Error prevention: operators, operands and inputs are typed values, so
//!   only the guard conditions below can reject an input
//! - Observability: every applied input and every rejection emits a
//!   `tracing` event

mod expression;
mod input;
mod number;
mod operand;
mod operations;
mod reducer;

pub use expression::{Expression, Token};
pub use input::{Input, InputError, BACK_TOKEN, CLEAR_TOKEN};
pub use number::{format_number, parse_number};
pub use operand::Operand;
pub use operations::{apply_or_rhs, Operator};
pub use reducer::Calculator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guard rejections - the input is refused and state stays untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    /// Operator pressed with no operand and no prior result
    #[error("Enter a number first")]
    NothingToOperateOn,
    /// Operator pressed while another operator is still waiting for its operand
    #[error("Don't enter two operators consecutively")]
    ConsecutiveOperators,
    /// `=` pressed with a pending operator but no second operand
    #[error("Enter a number to complete the operation")]
    MissingSecondOperand,
}

/// Which display surfaces need redrawing after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Refresh {
    /// Redraw the primary readout and the expression trail
    Both,
    /// Redraw the primary readout only
    PrimaryOnly,
    /// Nothing changed
    Nothing,
}

impl Refresh {
    /// Returns true if the primary readout must be redrawn
    #[must_use]
    pub const fn primary(self) -> bool {
        matches!(self, Self::Both | Self::PrimaryOnly)
    }

    /// Returns true if the expression trail must be redrawn
    #[must_use]
    pub const fn expression(self) -> bool {
        matches!(self, Self::Both)
    }
}

/// Result of pressing a raw token
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State was updated (or deliberately left alone, see `Refresh::Nothing`)
    Applied(Refresh),
    /// A guard condition refused the input
    Rejected(Rejection),
    /// The token was not recognized; a diagnostic was logged
    Ignored(InputError),
}

impl Outcome {
    /// Returns the rejection, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the surfaces to redraw (nothing for rejected or ignored input)
    #[must_use]
    pub const fn refresh(&self) -> Refresh {
        match self {
            Self::Applied(r) => *r,
            _ => Refresh::Nothing,
        }
    }
}

impl From<Result<Refresh, Rejection>> for Outcome {
    fn from(result: Result<Refresh, Rejection>) -> Self {
        match result {
            Ok(refresh) => Self::Applied(refresh),
            Err(rejection) => Self::Rejected(rejection),
        }
    }
}
