//! CLI command definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// quadcalc: four-function keypad calculator for the terminal
///
/// Presses each TOKEN in order: digits 0-9, `.`, `+ - * /`, `=`, `C`, `BACK`.
/// With no tokens, reads whitespace-separated tokens from stdin.
#[derive(Parser, Debug)]
#[command(name = "quadcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keypad tokens to press, in order (quote `*` for your shell)
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress notices and diagnostics)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,

    /// Output format for the final state
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Print both displays after every input
    #[arg(long)]
    pub trace: bool,

    /// Stop with a failure on the first rejected input
    #[arg(long)]
    pub strict: bool,

    /// YAML config file
    #[arg(short, long, env = "QUADCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Make `C` redraw the expression trail as well
    #[arg(long)]
    pub clear_refreshes_expression: bool,
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Expression trail above the primary readout
    #[default]
    Text,
    /// State snapshot as JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
