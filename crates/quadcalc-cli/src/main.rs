//! quadcalc: four-function keypad calculator for the terminal

use clap::Parser;
use quadcalc_cli::{logging, Cli, CliConfig, CliResult, ColorChoice, Session};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli)?;

    let use_color = config.color.should_color();
    console::set_colors_enabled(match config.color {
        ColorChoice::Auto => io::stdout().is_terminal(),
        _ => use_color,
    });
    console::set_colors_enabled_stderr(use_color);
    logging::init(config.verbosity, use_color);
    debug!(?config, "starting session");

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tokens.is_empty() {
        let stdin = io::stdin();
        session.run_reader(stdin.lock(), &mut out)?;
    } else {
        session.run_tokens(&cli.tokens, &mut out)?;
    }

    session.finish(&mut out)?;
    debug!(summary = ?session.summary(), "session finished");
    Ok(())
}
