//! Four-function keypad calculator
//!
//! A single reducer owns the calculator state and applies one keypad input
//! at a time: digits, `.`, `+ - * /`, `=`, `C` and `BACK`. Expressions are
//! evaluated strictly left to right, so `2 + 3 * 4 =` gives `20`.
//!
//! Two read-only render routines turn the state into the primary readout
//! and the expression trail; the [`wasm`] module wires them to a page.
//!
//! # Example
//!
//! ```rust
//! use quadcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for token in ["2", "+", "3", "*", "4", "="] {
//!     calc.press(token);
//! }
//! assert_eq!(primary_text(&calc), "20");
//!
//! // Guard conditions come back as typed rejections
//! let mut calc = Calculator::new();
//! assert_eq!(
//!     calc.press("+"),
//!     Outcome::Rejected(Rejection::NothingToOperateOn)
//! );
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod render;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalcConfig;
    pub use crate::core::{
        format_number, Calculator, Expression, Input, InputError, Operand, Operator, Outcome,
        Refresh, Rejection, Token,
    };
    pub use crate::driver::{CalculatorDriver, CoreDriver};
    pub use crate::render::{expression_text, primary_text, RenderTarget, Renderer, Snapshot};
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
