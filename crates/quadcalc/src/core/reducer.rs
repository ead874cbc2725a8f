//! Keypad input reducer
//!
//! One `Calculator` owns the whole state of a keypad session. Each input is
//! applied by [`Calculator::dispatch`] to completion; the returned
//! [`Refresh`] tells the caller which displays to redraw.

use super::expression::Expression;
use super::input::{Input, InputError};
use super::number::format_number;
use super::operand::Operand;
use super::operations::Operator;
use super::{Outcome, Refresh, Rejection};
use crate::config::CalcConfig;
use tracing::{debug, warn};

/// Four-function calculator state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    /// Last committed result, or the first operand once an operator is pressed
    final_answer: Option<f64>,
    /// The number being typed
    current_operand: Option<Operand>,
    /// Operator waiting for its second operand
    current_operator: Option<Operator>,
    /// Expression trail
    expression: Expression,
    /// Set right after `=`
    last_action_was_equal: bool,
    /// Whether `C` redraws the trail as well
    clear_refreshes_expression: bool,
}

impl Calculator {
    /// Creates a calculator with empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator using the given configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self {
            clear_refreshes_expression: config.clear_refreshes_expression,
            ..Self::default()
        }
    }

    // ===== State accessors =====

    /// Last committed result
    #[must_use]
    pub const fn final_answer(&self) -> Option<f64> {
        self.final_answer
    }

    /// Operand being typed
    #[must_use]
    pub const fn current_operand(&self) -> Option<&Operand> {
        self.current_operand.as_ref()
    }

    /// Pending operator
    #[must_use]
    pub const fn current_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    /// Expression trail
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Whether the last processed input was `=`
    #[must_use]
    pub const fn last_action_was_equal(&self) -> bool {
        self.last_action_was_equal
    }

    /// Returns true if the state equals a freshly cleared calculator
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.final_answer.is_none()
            && self.current_operand.is_none()
            && self.current_operator.is_none()
            && self.expression.is_empty()
            && !self.last_action_was_equal
    }

    // ===== Entry points =====

    /// Presses a text token
    ///
    /// Unknown tokens leave state alone and log a warning.
    pub fn press(&mut self, token: &str) -> Outcome {
        match Input::parse(token) {
            Ok(input) => self.dispatch(input).into(),
            Err(err) => Self::ignore(err),
        }
    }

    /// Presses a numeric digit button
    pub fn press_number(&mut self, value: f64) -> Outcome {
        match Input::from_number(value) {
            Ok(input) => self.dispatch(input).into(),
            Err(err) => Self::ignore(err),
        }
    }

    fn ignore(err: InputError) -> Outcome {
        warn!(error = %err, "ignoring keypad input");
        Outcome::Ignored(err)
    }

    /// Applies one input
    pub fn dispatch(&mut self, input: Input) -> Result<Refresh, Rejection> {
        let result = match input {
            Input::Point => Ok(self.point()),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::Clear => Ok(self.clear()),
            Input::Back => Ok(self.back()),
            Input::Digit(d) => Ok(self.digit(d)),
        };

        match &result {
            Ok(refresh) => debug!(%input, ?refresh, "input applied"),
            Err(rejection) => debug!(%input, %rejection, "input rejected"),
        }
        result
    }

    // ===== Input handlers =====

    fn point(&mut self) -> Refresh {
        match &mut self.current_operand {
            Some(operand) => {
                operand.push_point();
            }
            None => self.current_operand = Some(Operand::decimal_start()),
        }
        self.last_action_was_equal = false;
        Refresh::Both
    }

    fn operator(&mut self, op: Operator) -> Result<Refresh, Rejection> {
        if self.current_operand.is_none() {
            if self.final_answer.is_none() {
                return Err(Rejection::NothingToOperateOn);
            }
            if self.current_operator.is_some() {
                return Err(Rejection::ConsecutiveOperators);
            }
        }

        if let Some(operand) = self.current_operand.take() {
            self.expression.push_operand(operand.as_str());
            let value = operand.value();
            match (self.final_answer, self.current_operator) {
                (None, _) => self.final_answer = Some(value),
                (Some(acc), Some(pending)) => self.final_answer = Some(pending.apply(acc, value)),
                (Some(_), None) => {}
            }
        } else if self.last_action_was_equal && self.expression.is_empty() {
            // continue from the committed result
            if let Some(answer) = self.final_answer {
                self.expression.push_operand(format_number(answer));
            }
        }

        self.expression.push_operator(op);
        self.current_operator = Some(op);
        self.last_action_was_equal = false;
        Ok(Refresh::Both)
    }

    fn equals(&mut self) -> Result<Refresh, Rejection> {
        if self.current_operator.is_none() {
            if let Some(operand) = self.current_operand.take() {
                self.final_answer = Some(operand.value());
            }
            self.expression.clear();
            self.last_action_was_equal = true;
            return Ok(Refresh::Both);
        }

        let Some(operand) = self.current_operand.take() else {
            return Err(Rejection::MissingSecondOperand);
        };

        self.expression.push_operand(operand.as_str());
        let result = self.expression.evaluate().unwrap_or(f64::NAN);

        self.final_answer = Some(result);
        self.current_operator = None;
        self.expression.replace_with(format_number(result));
        self.last_action_was_equal = true;
        Ok(Refresh::Both)
    }

    fn clear(&mut self) -> Refresh {
        self.final_answer = None;
        self.current_operand = None;
        self.current_operator = None;
        self.expression.clear();
        self.last_action_was_equal = false;

        if self.clear_refreshes_expression {
            Refresh::Both
        } else {
            Refresh::PrimaryOnly
        }
    }

    fn back(&mut self) -> Refresh {
        match self.current_operand.take() {
            Some(operand) => {
                self.current_operand = operand.pop();
                Refresh::Both
            }
            None => Refresh::Nothing,
        }
    }

    fn digit(&mut self, digit: u8) -> Refresh {
        let Some(fresh) = Operand::from_digit(digit) else {
            warn!(digit, "ignoring out-of-range digit");
            return Refresh::Nothing;
        };

        if self.last_action_was_equal {
            self.final_answer = None;
            self.expression.clear();
            self.last_action_was_equal = false;
            self.current_operand = Some(fresh);
            return Refresh::Both;
        }

        match &mut self.current_operand {
            Some(operand) => operand.push_digit(digit),
            None => self.current_operand = Some(fresh),
        }
        Refresh::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, tokens: &str) -> Vec<Outcome> {
        tokens.split_whitespace().map(|t| calc.press(t)).collect()
    }

    fn run(tokens: &str) -> Calculator {
        let mut calc = Calculator::new();
        press_all(&mut calc, tokens);
        calc
    }

    fn operand(calc: &Calculator) -> Option<&str> {
        calc.current_operand().map(Operand::as_str)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_new_is_reset() {
        let calc = Calculator::new();
        assert!(calc.is_reset());
        assert_eq!(calc.final_answer(), None);
        assert_eq!(calc.current_operand(), None);
        assert_eq!(calc.current_operator(), None);
        assert!(calc.expression().is_empty());
        assert!(!calc.last_action_was_equal());
    }

    #[test]
    fn test_debug() {
        let calc = Calculator::new();
        assert!(format!("{calc:?}").contains("Calculator"));
    }

    // ===== Digit tests =====

    #[test]
    fn test_digits_accumulate() {
        let calc = run("1 2 3");
        assert_eq!(operand(&calc), Some("123"));
        assert_eq!(calc.final_answer(), None);
    }

    #[test]
    fn test_numeric_digit_input() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_number(4.0), Outcome::Applied(Refresh::Both));
        assert_eq!(calc.press_number(2.0), Outcome::Applied(Refresh::Both));
        assert_eq!(operand(&calc), Some("42"));
    }

    #[test]
    fn test_out_of_range_digit_is_noop() {
        let mut calc = Calculator::new();
        assert_eq!(calc.dispatch(Input::Digit(12)), Ok(Refresh::Nothing));
        assert!(calc.is_reset());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let calc = run("2 + 3 = 7");
        assert_eq!(operand(&calc), Some("7"));
        assert_eq!(calc.final_answer(), None);
        assert!(calc.expression().is_empty());
        assert!(!calc.last_action_was_equal());
    }

    // ===== Decimal point tests =====

    #[test]
    fn test_point_starts_zero_decimal() {
        assert_eq!(operand(&run(".")), Some("0."));
    }

    #[test]
    fn test_point_appends_once() {
        assert_eq!(operand(&run("1 . 5 . 2")), Some("1.52"));
    }

    #[test]
    fn test_point_after_equals_keeps_result() {
        let calc = run("9 = .");
        assert_eq!(operand(&calc), Some("0."));
        assert_eq!(calc.final_answer(), Some(9.0));
        assert!(!calc.last_action_was_equal());
    }

    // ===== Operator tests =====

    #[test]
    fn test_operator_seeds_result() {
        let calc = run("1 2 +");
        assert_eq!(calc.final_answer(), Some(12.0));
        assert_eq!(calc.current_operator(), Some(Operator::Add));
        assert_eq!(calc.current_operand(), None);
        assert_eq!(calc.expression().to_string(), "12 +");
    }

    #[test]
    fn test_operator_folds_pending() {
        let calc = run("5 + 3 *");
        assert_eq!(calc.final_answer(), Some(8.0));
        assert_eq!(calc.current_operator(), Some(Operator::Multiply));
        assert_eq!(calc.expression().to_string(), "5 + 3 *");
    }

    #[test]
    fn test_operator_first_is_rejected() {
        let mut calc = Calculator::new();
        let outcome = calc.press("+");
        assert_eq!(outcome, Outcome::Rejected(Rejection::NothingToOperateOn));
        assert!(calc.is_reset());
    }

    #[test]
    fn test_consecutive_operators_rejected() {
        let mut calc = run("4 +");
        let before = calc.clone();
        assert_eq!(
            calc.press("*"),
            Outcome::Rejected(Rejection::ConsecutiveOperators)
        );
        assert_eq!(calc, before);
    }

    #[test]
    fn test_operator_after_equals_continues() {
        let calc = run("2 + 3 = +");
        assert_eq!(calc.expression().to_string(), "5 +");
        assert_eq!(calc.final_answer(), Some(5.0));
    }

    #[test]
    fn test_operator_after_bare_equals_pushes_result() {
        let calc = run("9 = -");
        assert_eq!(calc.expression().to_string(), "9 -");
        assert_eq!(calc.current_operator(), Some(Operator::Subtract));
    }

    // ===== Equals tests =====

    #[test]
    fn test_left_to_right_no_precedence() {
        assert_eq!(run("2 + 3 * 4 =").final_answer(), Some(20.0));
    }

    #[test]
    fn test_chained_additions() {
        assert_eq!(run("5 + 3 + 2 =").final_answer(), Some(10.0));
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        let calc = run("7 / 0 =");
        assert!(calc.final_answer().unwrap().is_nan());
        assert_eq!(calc.expression().to_string(), "NaN");
    }

    #[test]
    fn test_nan_propagates_through_continuation() {
        let calc = run("7 / 0 = + 1 =");
        assert!(calc.final_answer().unwrap().is_nan());
    }

    #[test]
    fn test_equals_without_operator_commits_operand() {
        let calc = run("9 =");
        assert_eq!(calc.final_answer(), Some(9.0));
        assert_eq!(calc.current_operand(), None);
        assert!(calc.expression().is_empty());
        assert!(calc.last_action_was_equal());
    }

    #[test]
    fn test_equals_on_empty_state() {
        let calc = run("=");
        assert_eq!(calc.final_answer(), None);
        assert!(calc.last_action_was_equal());
    }

    #[test]
    fn test_equals_missing_second_operand() {
        let mut calc = run("8 *");
        let before = calc.clone();
        assert_eq!(
            calc.press("="),
            Outcome::Rejected(Rejection::MissingSecondOperand)
        );
        assert_eq!(calc, before);
    }

    #[test]
    fn test_equals_replaces_trail_with_result() {
        let calc = run("1 . 5 + 1 =");
        assert_eq!(calc.final_answer(), Some(2.5));
        assert_eq!(calc.expression().to_string(), "2.5");
        assert_eq!(calc.current_operator(), None);
    }

    #[test]
    fn test_continue_after_equals() {
        assert_eq!(run("2 + 3 = + 4 =").final_answer(), Some(9.0));
    }

    #[test]
    fn test_repeated_equals_keeps_result() {
        let calc = run("2 + 3 = =");
        assert_eq!(calc.final_answer(), Some(5.0));
        assert!(calc.expression().is_empty());
    }

    #[test]
    fn test_subtraction_below_zero() {
        let calc = run("3 - 1 0 =");
        assert_eq!(calc.final_answer(), Some(-7.0));
        assert_eq!(calc.expression().to_string(), "-7");
    }

    // ===== Clear tests =====

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = run("2 + 3 = + 4");
        assert_eq!(calc.press("C"), Outcome::Applied(Refresh::PrimaryOnly));
        assert!(calc.is_reset());
    }

    #[test]
    fn test_clear_with_config_refreshes_both() {
        let config = CalcConfig::new().with_clear_refreshes_expression(true);
        let mut calc = Calculator::with_config(&config);
        calc.press("5");
        assert_eq!(calc.press("C"), Outcome::Applied(Refresh::Both));
        assert!(calc.is_reset());
    }

    // ===== Backspace tests =====

    #[test]
    fn test_back_drops_last_char() {
        let mut calc = run("1 2 3");
        assert_eq!(calc.press("BACK"), Outcome::Applied(Refresh::Both));
        assert_eq!(operand(&calc), Some("12"));
    }

    #[test]
    fn test_back_to_empty_then_noop() {
        let mut calc = run("7");
        assert_eq!(calc.press("BACK"), Outcome::Applied(Refresh::Both));
        assert_eq!(calc.current_operand(), None);
        assert_eq!(calc.press("BACK"), Outcome::Applied(Refresh::Nothing));
        assert!(calc.is_reset());
    }

    #[test]
    fn test_back_does_not_touch_operator() {
        let calc = run("4 + BACK");
        assert_eq!(calc.current_operator(), Some(Operator::Add));
        assert_eq!(calc.expression().to_string(), "4 +");
    }

    // ===== Unknown input tests =====

    #[test]
    fn test_unknown_token_ignored() {
        let mut calc = run("5");
        let before = calc.clone();
        let outcome = calc.press("%");
        assert!(matches!(outcome, Outcome::Ignored(InputError::Unknown(_))));
        assert_eq!(calc, before);
    }

    #[test]
    fn test_unknown_number_ignored() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.press_number(11.0),
            Outcome::Ignored(InputError::NotADigit(_))
        ));
        assert!(calc.is_reset());
    }

    // ===== Trail quirk tests =====

    #[test]
    fn test_point_after_result_then_operator_keeps_trail() {
        // `.` after `=` does not start a new expression, so the old result
        // token stays in front of the new operand
        let calc = run("2 + 3 = . 5 +");
        assert_eq!(calc.expression().to_string(), "5 0.5 +");
        assert_eq!(calc.final_answer(), Some(5.0));
    }

    #[test]
    fn test_trail_and_operand_invariant() {
        let mut calc = Calculator::new();
        for token in ["1", "+", "2", "*", "3", "-"] {
            calc.press(token);
            assert_eq!(
                calc.expression().last_is_operator(),
                calc.current_operand().is_none()
            );
        }
    }
}
