//! Output formatting and notices

use crate::error::CliResult;
use console::{style, Term};
use quadcalc::config::CalcConfig;
use quadcalc::render::{RenderTarget, Snapshot};
use serde::{Deserialize, Serialize};

/// Output format for the final calculator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Expression trail above the primary readout
    #[default]
    Text,
    /// JSON snapshot
    Json,
}

/// Render the final state in `format`
pub fn render_final(snapshot: &Snapshot, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_screen(snapshot)),
        OutputFormat::Json => Ok(snapshot.to_json()?),
    }
}

/// Two-line calculator screen: the trail, then the readout
///
/// An empty trail still takes a line so the readout is always last.
#[must_use]
pub fn render_screen(snapshot: &Snapshot) -> String {
    format!(
        "{}\n{}",
        style(&snapshot.expression).dim(),
        style(&snapshot.display).bold()
    )
}

/// One `--trace` line for the token just pressed
#[must_use]
pub fn render_trace(token: &str, snapshot: &Snapshot) -> String {
    format!(
        "{:>4}  display={:<16} expression={}",
        token, snapshot.display, snapshot.expression
    )
}

/// The two terminal surfaces, keyed by the configured element ids
///
/// Holds whatever was last written; a surface the renderer skips keeps its
/// previous text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    display_id: String,
    expression_id: String,
    display: String,
    expression: String,
}

impl Screen {
    /// Create a blank screen for the ids in `config`
    #[must_use]
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            display_id: config.display_id.clone(),
            expression_id: config.expression_id.clone(),
            display: String::new(),
            expression: String::new(),
        }
    }

    /// Primary readout text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Expression trail text
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl RenderTarget for Screen {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let slot = if id == self.display_id {
            &mut self.display
        } else if id == self.expression_id {
            &mut self.expression
        } else {
            return false;
        };
        text.clone_into(slot);
        true
    }
}

/// Writes notices to stderr
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a rejection notice
    pub fn notice(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("!").yellow().bold().to_string()
        } else {
            "NOTICE".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}
