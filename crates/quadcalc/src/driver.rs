//! Unified Calculator Driver
//!
//! Write the keypad behaviour checks once, run them against any front end:
//! the bare reducer ([`CoreDriver`]) or the page with its two displays
//! ([`crate::wasm::WasmDriver`]).

use crate::config::CalcConfig;
use crate::core::{Calculator, Outcome, Rejection};
use crate::render::{expression_text, primary_text};

/// Abstract driver trait for keypad interactions
///
/// # Example
///
/// ```rust
/// use quadcalc::driver::{verify_left_to_right, CoreDriver};
///
/// let mut driver = CoreDriver::new();
/// verify_left_to_right(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses one keypad token
    fn press(&mut self, token: &str) -> Outcome;

    /// Text currently shown by the primary readout
    fn display_text(&self) -> String;

    /// Text currently shown by the expression trail
    fn expression_text(&self) -> String;

    /// The most recent rejection reported to the user, if any
    fn last_rejection(&self) -> Option<Rejection>;

    /// Presses whitespace-separated tokens in order
    fn press_all(&mut self, tokens: &str) -> Vec<Outcome> {
        tokens.split_whitespace().map(|t| self.press(t)).collect()
    }
}

/// Driver over the bare reducer; displays are computed on demand
#[derive(Debug, Default)]
pub struct CoreDriver {
    calculator: Calculator,
    last_rejection: Option<Rejection>,
}

impl CoreDriver {
    /// Creates a driver with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with the given configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            last_rejection: None,
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for CoreDriver {
    fn press(&mut self, token: &str) -> Outcome {
        let outcome = self.calculator.press(token);
        if let Some(rejection) = outcome.rejection() {
            self.last_rejection = Some(rejection);
        }
        outcome
    }

    fn display_text(&self) -> String {
        primary_text(&self.calculator)
    }

    fn expression_text(&self) -> String {
        expression_text(&self.calculator)
    }

    fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }
}

// ===== Unified Keypad Checks =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies that typed digits show up verbatim
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 3 0 7");
    assert_eq!(driver.display_text(), "307");
    assert_eq!(driver.expression_text(), "307");

    driver.press_all(". . 5");
    assert_eq!(driver.display_text(), "307.5");
    driver.press("C");
}

/// Verifies strict left-to-right evaluation
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 2 + 3 * 4 =");
    assert_eq!(driver.display_text(), "20");
    assert_eq!(driver.expression_text(), "20");

    driver.press_all("C 5 + 3 + 2 =");
    assert_eq!(driver.display_text(), "10");
    driver.press("C");
}

/// Verifies the running result while operators are chained
pub fn verify_running_result<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 5 + 3 *");
    assert_eq!(driver.display_text(), "8");
    assert_eq!(driver.expression_text(), "5 + 3 *");

    driver.press("2");
    assert_eq!(driver.display_text(), "2");
    assert_eq!(driver.expression_text(), "5 + 3 * 2");
    driver.press("C");
}

/// Verifies that division by zero shows NaN instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 7 / 0 =");
    assert_eq!(driver.display_text(), "NaN");
    assert_eq!(driver.expression_text(), "NaN");
    driver.press("C");
}

/// Verifies how input after `=` behaves
pub fn verify_after_equals<D: CalculatorDriver>(driver: &mut D) {
    // operator continues from the result
    driver.press_all("C 2 + 3 = + 4 =");
    assert_eq!(driver.display_text(), "9");

    // digit starts over
    driver.press_all("C 2 + 3 = 6");
    assert_eq!(driver.display_text(), "6");
    assert_eq!(driver.expression_text(), "6");

    // `=` with no operator commits the operand
    driver.press_all("C 9 =");
    assert_eq!(driver.display_text(), "9");
    assert_eq!(driver.expression_text(), "9");
    driver.press("C");
}

/// Verifies the three guard rejections
pub fn verify_guards<D: CalculatorDriver>(driver: &mut D) {
    driver.press("C");
    assert_eq!(
        driver.press("+"),
        Outcome::Rejected(Rejection::NothingToOperateOn)
    );
    assert_eq!(driver.last_rejection(), Some(Rejection::NothingToOperateOn));
    assert_eq!(driver.display_text(), "0");

    driver.press_all("4 +");
    assert_eq!(
        driver.press("-"),
        Outcome::Rejected(Rejection::ConsecutiveOperators)
    );
    assert_eq!(driver.expression_text(), "4 +");

    assert_eq!(
        driver.press("="),
        Outcome::Rejected(Rejection::MissingSecondOperand)
    );
    assert_eq!(driver.last_rejection(), Some(Rejection::MissingSecondOperand));
    assert_eq!(driver.display_text(), "4");
    driver.press("C");
}

/// Verifies backspace editing
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 1 2");
    driver.press("BACK");
    assert_eq!(driver.display_text(), "1");
    driver.press_all("BACK BACK BACK");
    assert_eq!(driver.display_text(), "0");
    driver.press("C");
}

/// Verifies clear returns the readout to the placeholder
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("C 8 * 8 =");
    driver.press("C");
    assert_eq!(driver.display_text(), "0");
}

/// Runs every check above
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_left_to_right(driver);
    verify_running_result(driver);
    verify_division_by_zero(driver);
    verify_after_equals(driver);
    verify_guards(driver);
    verify_backspace(driver);
    verify_clear(driver);
}
