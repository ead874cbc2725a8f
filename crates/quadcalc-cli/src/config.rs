//! CLI configuration

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use quadcalc::config::CalcConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - notices and warnings
    #[default]
    Normal,
    /// Verbose - every dispatched input
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Map the `-q` / `-v` flags onto a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when stderr is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Final state output format
    pub format: OutputFormat,
    /// Print both displays after each input
    pub trace: bool,
    /// Fail on the first rejected input
    pub strict: bool,
    /// Calculator settings
    pub calc: CalcConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from parsed arguments
    ///
    /// Settings from `--config` are loaded first; flags given on the
    /// command line switch behavior on but never off.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut calc = match &cli.config {
            Some(path) => load_calc_config(path)?,
            None => CalcConfig::default(),
        };
        if cli.clear_refreshes_expression {
            calc.clear_refreshes_expression = true;
        }

        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_color(cli.color.into())
            .with_format(cli.format.into())
            .with_trace(cli.trace)
            .with_strict(cli.strict)
            .with_calc(calc))
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set per-input tracing
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set strict mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set calculator settings
    #[must_use]
    pub fn with_calc(mut self, calc: CalcConfig) -> Self {
        self.calc = calc;
        self
    }
}

/// Load calculator settings from a YAML file
///
/// Missing keys keep their defaults; an empty file is an error.
pub fn load_calc_config(path: &Path) -> CliResult<CalcConfig> {
    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(CliError::config(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(serde_yaml_ng::from_str(&text)?)
}
