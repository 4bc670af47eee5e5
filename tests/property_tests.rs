//! Property-Based Tests for calctui
//!
//! Uses proptest for testing invariants of the calculator engine:
//! - Digit entry reproduces what was typed
//! - History never exceeds its capacity
//! - Clear is idempotent and keeps history
//! - Replacing an operator never records a calculation
//! - Enum string round-trips

use calctui::engine::{
    format_number, parse_number, Calculator, History, Intent, Operator, ScientificFunction,
};
use calctui::types::KeypadMode;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Strategy for generating binary operators
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Power),
    ]
}

/// Strategy for generating any intent the front end can send
fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Intent::Digit),
        1 => Just(Intent::DecimalPoint),
        2 => operator_strategy().prop_map(Intent::Operator),
        2 => Just(Intent::Equals),
        1 => Just(Intent::Clear),
        1 => Just(Intent::Backspace),
        1 => Just(Intent::ClearHistory),
        1 => (0usize..12).prop_map(Intent::RecallHistory),
        1 => prop::sample::select(ScientificFunction::ALL.to_vec()).prop_map(Intent::Scientific),
    ]
}

fn apply_all(calc: &mut Calculator, intents: &[Intent]) {
    for intent in intents {
        calc.apply(*intent);
    }
}

// =============================================================================
// Entry Properties
// =============================================================================

proptest! {
    /// Typing a number without a leading zero, with at most one decimal
    /// point anywhere after the first digit, shows exactly what was typed
    #[test]
    fn digits_are_reproduced(
        first in 1u8..=9,
        rest in prop::collection::vec(0u8..=9, 0..12),
        point in prop::option::of(any::<prop::sample::Index>()),
    ) {
        let digits: Vec<char> = std::iter::once(first)
            .chain(rest.iter().copied())
            .map(|d| char::from(b'0' + d))
            .collect();
        let point_at = point.map(|i| 1 + i.index(digits.len()));

        let mut calc = Calculator::new();
        let mut expected = String::new();
        for (pos, ch) in digits.iter().enumerate() {
            if point_at == Some(pos) {
                calc.apply(Intent::DecimalPoint);
                expected.push('.');
            }
            calc.apply(Intent::Digit(*ch as u8 - b'0'));
            expected.push(*ch);
        }
        if point_at == Some(digits.len()) {
            calc.apply(Intent::DecimalPoint);
            expected.push('.');
        }
        if point_at.is_some() {
            // a second point is ignored
            calc.apply(Intent::DecimalPoint);
        }

        prop_assert_eq!(calc.current_operand(), expected.as_str());
    }

    /// At most one decimal point ever appears in the operand
    #[test]
    fn at_most_one_decimal_point(intents in prop::collection::vec(
        prop_oneof![(0u8..=9).prop_map(Intent::Digit), Just(Intent::DecimalPoint)],
        0..20,
    )) {
        let mut calc = Calculator::new();
        apply_all(&mut calc, &intents);
        prop_assert!(calc.current_operand().matches('.').count() <= 1);
    }
}

// =============================================================================
// History Properties
// =============================================================================

proptest! {
    /// History never exceeds its capacity, whatever is typed
    #[test]
    fn history_is_bounded(intents in prop::collection::vec(intent_strategy(), 0..200)) {
        let mut calc = Calculator::new();
        for intent in intents {
            calc.apply(intent);
            prop_assert!(calc.history().len() <= History::CAPACITY);
        }
    }

    /// Clear is idempotent and never touches history
    #[test]
    fn clear_is_idempotent(intents in prop::collection::vec(intent_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        apply_all(&mut calc, &intents);
        let history = calc.history().to_vec();

        calc.apply(Intent::Clear);
        let once = calc.clone();
        calc.apply(Intent::Clear);

        prop_assert_eq!(&calc, &once);
        prop_assert_eq!(calc.current_operand(), "0");
        prop_assert_eq!(calc.previous_operand(), "");
        prop_assert_eq!(calc.history().to_vec(), history);
    }

    /// Choosing a second operator replaces the first without a history entry
    #[test]
    fn double_operator_records_nothing(
        a in 1u8..=9,
        first in operator_strategy(),
        second in operator_strategy(),
    ) {
        let mut calc = Calculator::new();
        calc.apply(Intent::Digit(a));
        calc.apply(Intent::Operator(first));
        calc.apply(Intent::Operator(second));

        prop_assert!(calc.history().is_empty());
        prop_assert_eq!(calc.operation(), Some(second));
        prop_assert_eq!(calc.previous_operand(), format!("{} {}", a, second));
    }

    /// A successful binary computation is recorded as the newest entry
    #[test]
    fn computation_recorded_at_front(a in 1u8..=9, b in 1u8..=9, op in operator_strategy()) {
        let mut calc = Calculator::new();
        apply_all(&mut calc, &[
            Intent::Digit(a),
            Intent::Operator(op),
            Intent::Digit(b),
            Intent::Equals,
        ]);

        let newest = calc.history().newest().cloned().expect("Should record");
        prop_assert_eq!(newest.expression, format!("{} {} {}", a, op, b));
        prop_assert_eq!(newest.result.as_str(), calc.current_operand());
    }
}

// =============================================================================
// Number Formatting Properties
// =============================================================================

proptest! {
    /// Integers format without a fractional part and parse back
    #[test]
    fn integers_format_plainly(n in -1_000_000i64..1_000_000) {
        let text = format_number(n as f64);
        prop_assert_eq!(&text, &n.to_string());
        prop_assert_eq!(parse_number(&text), Some(n as f64));
    }
}

// =============================================================================
// Enum Round-Trip Properties
// =============================================================================

proptest! {
    /// Operator: to_string → parse round-trip is identity
    #[test]
    fn operator_roundtrip(op in operator_strategy()) {
        let parsed: Operator = op.to_string().parse().expect("Should parse");
        prop_assert_eq!(op, parsed);
    }

    /// KeypadMode: Display output is lowercase and parses back
    #[test]
    fn keypad_mode_roundtrip(mode in prop_oneof![Just(KeypadMode::Normal), Just(KeypadMode::Scientific)]) {
        let s = mode.to_string();
        prop_assert_eq!(s.clone(), s.to_lowercase());
        let parsed: KeypadMode = s.parse().expect("Should parse");
        prop_assert_eq!(mode, parsed);
    }
}
