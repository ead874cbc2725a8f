//! Keypad session: feeds tokens to one calculator

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_final, render_trace, Reporter, Screen};
use quadcalc::core::{Calculator, Outcome};
use quadcalc::render::{Renderer, Snapshot};
use std::io::{BufRead, Write};
use tracing::debug;

/// Counts of what happened to each token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Inputs that changed state
    pub applied: usize,
    /// Inputs refused by a guard
    pub rejected: usize,
    /// Unrecognized tokens
    pub ignored: usize,
}

/// A calculator plus the CLI settings that govern it
///
/// Output comes from the [`Screen`], which is only redrawn where the
/// reducer's `Refresh` says so.
#[derive(Debug)]
pub struct Session {
    calculator: Calculator,
    renderer: Renderer,
    screen: Screen,
    reporter: Reporter,
    config: CliConfig,
    summary: SessionSummary,
}

impl Session {
    /// Create a session from the CLI configuration
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
        let calculator = Calculator::with_config(&config.calc);
        let renderer = Renderer::new(&config.calc);
        let mut screen = Screen::new(&config.calc);
        // the readout starts at the placeholder, the trail starts blank
        renderer.render_display(&calculator, &mut screen);
        Self {
            calculator,
            renderer,
            screen,
            reporter,
            config,
            summary: SessionSummary::default(),
        }
    }

    /// Press one token
    ///
    /// Surrounding whitespace is dropped. Rejections are reported as notices,
    /// or returned as errors in strict mode. With `--trace` both displays are
    /// written to `out` afterwards.
    pub fn press<W: Write>(&mut self, token: &str, out: &mut W) -> CliResult<Outcome> {
        let token = token.trim();
        let outcome = self.calculator.press(token);
        debug!(token, ?outcome, "session input");

        match &outcome {
            Outcome::Applied(_) => self.summary.applied += 1,
            Outcome::Rejected(rejection) => {
                self.summary.rejected += 1;
                if self.config.strict {
                    return Err(CliError::rejected(token, *rejection));
                }
                self.reporter.notice(&rejection.to_string());
            }
            Outcome::Ignored(_) => self.summary.ignored += 1,
        }

        self.renderer
            .apply(outcome.refresh(), &self.calculator, &mut self.screen);

        if self.config.trace {
            writeln!(out, "{}", render_trace(token, &self.snapshot()))?;
        }
        Ok(outcome)
    }

    /// Press every token in order
    pub fn run_tokens<I, S, W>(&mut self, tokens: I, out: &mut W) -> CliResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        for token in tokens {
            self.press(token.as_ref(), out)?;
        }
        Ok(())
    }

    /// Press whitespace-separated tokens read line by line
    pub fn run_reader<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> CliResult<()> {
        for line in reader.lines() {
            let line = line?;
            self.run_tokens(line.split_whitespace(), out)?;
        }
        Ok(())
    }

    /// Write the final state in the configured format
    pub fn finish<W: Write>(&self, out: &mut W) -> CliResult<()> {
        writeln!(out, "{}", render_final(&self.snapshot(), self.config.format)?)?;
        Ok(())
    }

    /// Current state, with the texts the screen is showing
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::capture(&self.calculator);
        self.screen.display().clone_into(&mut snapshot.display);
        self.screen.expression().clone_into(&mut snapshot.expression);
        snapshot
    }

    /// The two surfaces as last drawn
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Token counts so far
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }
}
