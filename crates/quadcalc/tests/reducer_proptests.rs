//! Property-based tests for the keypad reducer
//!
//! Error prevention - Property tests catch edge cases that humans miss

use proptest::prelude::*;
use quadcalc::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any of the four operators
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any keypad token, including ones the reducer does not know
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => digit_strategy().prop_map(|d| d.to_string()),
        2 => operator_strategy().prop_map(|op| op.symbol().to_string()),
        1 => Just(".".to_string()),
        1 => Just("=".to_string()),
        1 => Just("C".to_string()),
        1 => Just("BACK".to_string()),
        1 => "[a-z%^]{1,4}",
    ]
}

/// Generate tokens that never include `=`
fn token_without_equals_strategy() -> impl Strategy<Value = String> {
    token_strategy().prop_filter("no equals", |t| t != "=")
}

/// Small non-negative integers keep floating point sums exact
fn small_number_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

fn type_number(calc: &mut Calculator, n: u32) {
    for ch in n.to_string().chars() {
        calc.press(&ch.to_string());
    }
}

fn operand_text(calc: &Calculator) -> Option<String> {
    calc.current_operand().map(|o| o.as_str().to_string())
}

// ===== Digit entry =====

proptest! {
    /// Typed digits appear verbatim and in order
    #[test]
    fn prop_digits_accumulate(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.press(&d.to_string());
        }
        let expected: String = digits.iter().map(u8::to_string).collect();
        prop_assert_eq!(operand_text(&calc), Some(expected.clone()));
        prop_assert_eq!(primary_text(&calc), expected);
    }

    /// A second decimal point in one operand is ignored
    #[test]
    fn prop_single_decimal_point(
        a in prop::collection::vec(digit_strategy(), 1..5),
        b in prop::collection::vec(digit_strategy(), 0..5),
        c in prop::collection::vec(digit_strategy(), 0..5)
    ) {
        let mut calc = Calculator::new();
        for d in &a { calc.press(&d.to_string()); }
        calc.press(".");
        for d in &b { calc.press(&d.to_string()); }
        calc.press(".");
        for d in &c { calc.press(&d.to_string()); }

        let text = operand_text(&calc).unwrap();
        prop_assert_eq!(text.matches('.').count(), 1);
    }

    /// Backspace eventually empties the operand and then does nothing
    #[test]
    fn prop_backspace_drains(
        digits in prop::collection::vec(digit_strategy(), 0..10),
        extra in 1usize..5
    ) {
        let mut calc = Calculator::new();
        for d in &digits {
            calc.press(&d.to_string());
        }
        for _ in 0..digits.len() {
            prop_assert_eq!(calc.press("BACK"), Outcome::Applied(Refresh::Both));
        }
        for _ in 0..extra {
            prop_assert_eq!(calc.press("BACK"), Outcome::Applied(Refresh::Nothing));
        }
        prop_assert!(calc.is_reset());
    }
}

// ===== Evaluation =====

proptest! {
    /// Evaluation is strictly left to right
    #[test]
    fn prop_left_to_right(
        a in small_number_strategy(),
        b in small_number_strategy(),
        c in small_number_strategy(),
        op1 in operator_strategy(),
        op2 in operator_strategy()
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.press(&op1.symbol().to_string());
        type_number(&mut calc, b);
        calc.press(&op2.symbol().to_string());
        type_number(&mut calc, c);
        calc.press("=");

        let expected = op2.apply(op1.apply(f64::from(a), f64::from(b)), f64::from(c));
        prop_assert_eq!(primary_text(&calc), format_number(expected));
    }

    /// Chained additions without `=` in between sum up
    #[test]
    fn prop_chained_sum(numbers in prop::collection::vec(small_number_strategy(), 1..8)) {
        let mut calc = Calculator::new();
        for (i, n) in numbers.iter().enumerate() {
            if i > 0 {
                calc.press("+");
            }
            type_number(&mut calc, *n);
        }
        calc.press("=");
        let sum: u32 = numbers.iter().sum();
        prop_assert_eq!(calc.final_answer(), Some(f64::from(sum)));
    }

    /// Division by zero always renders NaN
    #[test]
    fn prop_division_by_zero(a in small_number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.press("/");
        calc.press("0");
        prop_assert_eq!(calc.press("="), Outcome::Applied(Refresh::Both));
        prop_assert!(calc.final_answer().unwrap().is_nan());
        prop_assert_eq!(primary_text(&calc), "NaN");
    }

    /// `=` without an operator commits the operand unchanged
    #[test]
    fn prop_equals_commits_operand(a in small_number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.press("=");
        prop_assert_eq!(calc.final_answer(), Some(f64::from(a)));
        prop_assert_eq!(expression_text(&calc), a.to_string());
    }

    /// After `=`, an operator continues from the result
    #[test]
    fn prop_continue_after_equals(
        a in small_number_strategy(),
        b in small_number_strategy(),
        c in small_number_strategy()
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.press("+");
        type_number(&mut calc, b);
        calc.press("=");
        calc.press("+");
        type_number(&mut calc, c);
        calc.press("=");
        prop_assert_eq!(calc.final_answer(), Some(f64::from(a) + f64::from(b) + f64::from(c)));
    }

    /// After `=`, a digit starts a brand-new expression
    #[test]
    fn prop_digit_after_equals_starts_over(a in small_number_strategy(), d in digit_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.press("*");
        calc.press("2");
        calc.press("=");
        calc.press(&d.to_string());
        prop_assert_eq!(calc.final_answer(), None);
        prop_assert!(calc.expression().is_empty());
        prop_assert_eq!(operand_text(&calc), Some(d.to_string()));
    }
}

// ===== State invariants =====

proptest! {
    /// Rejected and ignored inputs never change state
    #[test]
    fn prop_refused_inputs_leave_state(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            let before = Snapshot::capture(&calc);
            let outcome = calc.press(token);
            if !matches!(outcome, Outcome::Applied(_)) {
                prop_assert_eq!(Snapshot::capture(&calc), before);
            }
        }
    }

    /// The operand is always a non-empty unsigned digit string with at most one point
    #[test]
    fn prop_operand_shape(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            calc.press(token);
            if let Some(text) = operand_text(&calc) {
                prop_assert!(!text.is_empty());
                prop_assert!(text.chars().all(|c| c.is_ascii_digit() || c == '.'));
                prop_assert!(text.matches('.').count() <= 1);
            }
        }
    }

    /// Without `=`, the trail ends in an operator exactly when no operand is in progress
    #[test]
    fn prop_trail_alternates(
        tokens in prop::collection::vec(token_without_equals_strategy(), 0..40)
    ) {
        let mut calc = Calculator::new();
        for token in &tokens {
            calc.press(token);
            if !calc.expression().is_empty() {
                prop_assert_eq!(
                    calc.expression().last_is_operator(),
                    calc.current_operand().is_none()
                );
            }
        }
    }

    /// `C` always returns to the initial state and the zero placeholder
    #[test]
    fn prop_clear_resets(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            calc.press(token);
        }
        prop_assert_eq!(calc.press("C"), Outcome::Applied(Refresh::PrimaryOnly));
        prop_assert!(calc.is_reset());
        prop_assert_eq!(primary_text(&calc), "0");
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_operator_first_is_rejected() {
    for op in Operator::ALL {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.press(&op.symbol().to_string()),
            Outcome::Rejected(Rejection::NothingToOperateOn)
        );
        assert!(calc.is_reset());
    }
}

#[test]
fn invariant_precedence_is_ignored() {
    let mut calc = Calculator::new();
    for token in ["2", "+", "3", "*", "4", "="] {
        calc.press(token);
    }
    assert_eq!(calc.final_answer(), Some(20.0));
}
