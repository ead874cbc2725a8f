//! Render routines for the two display surfaces
//!
//! Both routines only read calculator state, so calling them redundantly is
//! harmless. Writes go through [`RenderTarget`]; a missing element is skipped.

use crate::config::CalcConfig;
use crate::core::{format_number, Calculator, Operator, Refresh};
use serde::{Deserialize, Serialize};

/// Placeholder shown when there is nothing to display
pub const ZERO_PLACEHOLDER: &str = "0";

/// Text shown by the primary readout
///
/// The operand being typed wins, then the last result, then `0`.
#[must_use]
pub fn primary_text(calc: &Calculator) -> String {
    if let Some(operand) = calc.current_operand() {
        return operand.as_str().to_string();
    }
    match calc.final_answer() {
        Some(answer) => format_number(answer),
        None => ZERO_PLACEHOLDER.to_string(),
    }
}

/// Text shown by the expression trail
///
/// Right after `=` only the result is shown (empty if there is none).
#[must_use]
pub fn expression_text(calc: &Calculator) -> String {
    if calc.last_action_was_equal() {
        return calc.final_answer().map(format_number).unwrap_or_default();
    }
    calc.expression()
        .join_with(calc.current_operand().map(|o| o.as_str()))
}

/// A surface the renderer can write text into
pub trait RenderTarget {
    /// Writes `text` into the element with `id`
    ///
    /// Returns false if the element does not exist (nothing is written).
    fn set_text(&mut self, id: &str, text: &str) -> bool;
}

/// Writes calculator state to the configured elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    display_id: String,
    expression_id: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&CalcConfig::default())
    }
}

impl Renderer {
    /// Creates a renderer for the element ids in `config`
    #[must_use]
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            display_id: config.display_id.clone(),
            expression_id: config.expression_id.clone(),
        }
    }

    /// Primary readout element id
    #[must_use]
    pub fn display_id(&self) -> &str {
        &self.display_id
    }

    /// Expression trail element id
    #[must_use]
    pub fn expression_id(&self) -> &str {
        &self.expression_id
    }

    /// Redraws the primary readout
    pub fn render_display<T: RenderTarget + ?Sized>(
        &self,
        calc: &Calculator,
        target: &mut T,
    ) -> bool {
        target.set_text(&self.display_id, &primary_text(calc))
    }

    /// Redraws the expression trail
    pub fn render_expression<T: RenderTarget + ?Sized>(
        &self,
        calc: &Calculator,
        target: &mut T,
    ) -> bool {
        target.set_text(&self.expression_id, &expression_text(calc))
    }

    /// Redraws whatever `refresh` asks for
    pub fn apply<T: RenderTarget + ?Sized>(
        &self,
        refresh: Refresh,
        calc: &Calculator,
        target: &mut T,
    ) {
        if refresh.primary() {
            self.render_display(calc, target);
        }
        if refresh.expression() {
            self.render_expression(calc, target);
        }
    }
}

/// Serializable copy of the calculator state plus both rendered texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Primary readout text
    pub display: String,
    /// Expression trail text
    pub expression: String,
    /// Last result, formatted
    pub final_answer: Option<String>,
    /// Operand being typed
    pub current_operand: Option<String>,
    /// Pending operator
    pub current_operator: Option<Operator>,
    /// Expression tokens
    pub tokens: Vec<String>,
    /// Whether the last input was `=`
    pub last_action_was_equal: bool,
}

impl Snapshot {
    /// Captures the current state of `calc`
    #[must_use]
    pub fn capture(calc: &Calculator) -> Self {
        Self {
            display: primary_text(calc),
            expression: expression_text(calc),
            final_answer: calc.final_answer().map(format_number),
            current_operand: calc.current_operand().map(|o| o.as_str().to_string()),
            current_operator: calc.current_operator(),
            tokens: calc
                .expression()
                .tokens()
                .iter()
                .map(ToString::to_string)
                .collect(),
            last_action_was_equal: calc.last_action_was_equal(),
        }
    }

    /// Serializes the snapshot as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
