//! quadcalc CLI: drive the keypad calculator from a terminal
//!
//! ## Usage
//!
//! ```bash
//! quadcalc 2 + 3 '*' 4 =          # prints the trail and the readout (20)
//! echo "9 / 0 =" | quadcalc       # tokens from stdin
//! quadcalc --format json 7 BACK 8 # state snapshot as JSON
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;

pub use commands::{Cli, ColorArg, FormatArg};
pub use config::{load_calc_config, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Reporter};
pub use session::{Session, SessionSummary};
