//! Calculator configuration

use serde::{Deserialize, Serialize};

/// Default id of the primary readout element
pub const DEFAULT_DISPLAY_ID: &str = "display";
/// Default id of the expression trail element
pub const DEFAULT_EXPRESSION_ID: &str = "expression";

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Element id of the primary readout
    pub display_id: String,
    /// Element id of the expression trail
    pub expression_id: String,
    /// Whether `C` also redraws the expression trail
    ///
    /// Off by default: `C` redraws only the primary readout, so the trail
    /// keeps its old text until the next input.
    pub clear_refreshes_expression: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            display_id: DEFAULT_DISPLAY_ID.to_string(),
            expression_id: DEFAULT_EXPRESSION_ID.to_string(),
            clear_refreshes_expression: false,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary readout element id
    #[must_use]
    pub fn with_display_id(mut self, id: impl Into<String>) -> Self {
        self.display_id = id.into();
        self
    }

    /// Set the expression trail element id
    #[must_use]
    pub fn with_expression_id(mut self, id: impl Into<String>) -> Self {
        self.expression_id = id.into();
        self
    }

    /// Set whether `C` redraws the expression trail too
    #[must_use]
    pub const fn with_clear_refreshes_expression(mut self, enabled: bool) -> Self {
        self.clear_refreshes_expression = enabled;
        self
    }
}
