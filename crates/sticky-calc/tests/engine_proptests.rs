//! Property-based tests for the calculator engine
//!
//! Property tests catch the key sequences nobody thinks of typing.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use sticky_calc::prelude::*;

// ===== Strategy definitions =====

/// Generate any digit key (0-9 or the decimal point)
fn digit_strategy() -> impl Strategy<Value = Digit> {
    prop_oneof![
        (0u8..=9u8).prop_map(|d| Digit::from_value(d).unwrap()),
        Just(Digit::POINT),
    ]
}

/// Generate any arithmetic operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any logical key
fn key_strategy() -> impl Strategy<Value = LogicalKey> {
    prop_oneof![
        4 => digit_strategy().prop_map(LogicalKey::Digit),
        1 => operator_strategy().prop_map(|op| LogicalKey::Operator(op.into())),
        1 => Just(LogicalKey::Operator(OperatorKey::Equals)),
        1 => Just(LogicalKey::Command(Command::Clear)),
        1 => Just(LogicalKey::Command(Command::PlusMinus)),
        1 => Just(LogicalKey::Command(Command::Percent)),
        1 => Just(LogicalKey::Backspace),
    ]
}

/// Generate a well-formed number as typed: no leading zero, at most one point
fn typed_number_strategy() -> impl Strategy<Value = String> {
    ("[1-9][0-9]{0,7}", proptest::option::of("[0-9]{0,6}")).prop_map(|(int, frac)| match frac {
        Some(frac) => format!("{int}.{frac}"),
        None => int,
    })
}

fn type_text(engine: &mut CalculatorEngine, text: &str) -> String {
    let mut display = engine.display();
    for c in text.chars() {
        display = engine.press_char(c);
    }
    display
}

// ===== Digit entry =====

proptest! {
    /// Well-formed numbers are reproduced exactly
    #[test]
    fn prop_typed_number_is_displayed(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        prop_assert_eq!(type_text(&mut engine, &number), number);
    }

    /// Separator substitution only touches the decimal point
    #[test]
    fn prop_typed_number_with_separator(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::with_display(DisplayConfig::with_separator(','));
        prop_assert_eq!(type_text(&mut engine, &number), number.replacen('.', ",", 1));
    }

    /// Digit keys alone never produce two decimal points or a leading zero
    #[test]
    fn prop_digit_keys_keep_buffer_well_formed(
        digits in proptest::collection::vec(digit_strategy(), 0..30)
    ) {
        let mut engine = CalculatorEngine::new();
        for digit in digits {
            engine.press_digit(digit);
        }
        let buffer = engine.buffer();
        prop_assert!(buffer.matches('.').count() <= 1);
        prop_assert!(!(buffer.starts_with('0') && buffer.len() > 1 && !buffer.starts_with("0.")));
    }
}

// ===== Whole key sequences =====

proptest! {
    /// The display is never empty, whatever was pressed
    #[test]
    fn prop_display_never_empty(keys in proptest::collection::vec(key_strategy(), 0..50)) {
        let mut engine = CalculatorEngine::new();
        for key in keys {
            let display = engine.press(key);
            prop_assert!(!display.is_empty());
        }
    }

    /// Clear returns to the initial state from any history
    #[test]
    fn prop_clear_is_full_reset(keys in proptest::collection::vec(key_strategy(), 0..50)) {
        let mut engine = CalculatorEngine::new();
        for key in keys {
            engine.press(key);
        }
        engine.press_command(Command::Clear);
        prop_assert_eq!(engine.snapshot(), CalculatorEngine::new().snapshot());
    }

    /// Backspace never touches the accumulator
    #[test]
    fn prop_backspace_keeps_phase(keys in proptest::collection::vec(key_strategy(), 0..50)) {
        let mut engine = CalculatorEngine::new();
        for key in keys {
            engine.press(key);
        }
        let phase = *engine.phase();
        engine.backspace();
        // NaN operands compare unequal, so compare the debug form
        prop_assert_eq!(format!("{:?}", engine.phase()), format!("{phase:?}"));
    }

    /// No key sequence leaves a zero followed by more integer digits
    #[test]
    fn prop_no_leading_zero_concatenation(
        keys in proptest::collection::vec(key_strategy(), 0..60)
    ) {
        let mut engine = CalculatorEngine::new();
        for key in keys {
            engine.press(key);
            let unsigned = engine.buffer().trim_start_matches('-');
            let mut chars = unsigned.chars();
            if chars.next() == Some('0') {
                prop_assert!(
                    !chars.next().is_some_and(|c| c.is_ascii_digit()),
                    "buffer {:?}", engine.buffer()
                );
            }
        }
    }

    /// A sticky operand exists exactly when an evaluation has happened
    #[test]
    fn prop_sticky_operand_only_after_evaluation(
        keys in proptest::collection::vec(key_strategy(), 0..50)
    ) {
        let mut engine = CalculatorEngine::new();
        for key in keys {
            engine.press(key);
            let snapshot = engine.snapshot();
            prop_assert_eq!(
                engine.phase().sticky_operand().is_some(),
                snapshot.last_evaluation.is_some()
            );
            prop_assert_eq!(
                snapshot.pending_operator.is_none(),
                matches!(snapshot.phase, EvalPhase::Idle)
            );
        }
    }
}

// ===== Sticky equals arithmetic =====

proptest! {
    /// Pressing "=" n times after "a + b" yields a + n * b
    #[test]
    fn prop_repeated_add(a in 1u32..10_000, b in 1u32..10_000, n in 1usize..20) {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, &a.to_string());
        engine.press_operator(Operator::Add.into());
        type_text(&mut engine, &b.to_string());
        let mut display = String::new();
        for _ in 0..n {
            display = engine.press_operator(OperatorKey::Equals);
        }
        let expected = u64::from(a) + n as u64 * u64::from(b);
        prop_assert_eq!(display, expected.to_string());
    }

    /// Pressing "=" n times after "a * b" multiplies by b each time
    #[test]
    fn prop_repeated_multiply(a in 1u32..100, b in 1u32..10, n in 1u32..6) {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, &a.to_string());
        engine.press_operator(Operator::Multiply.into());
        type_text(&mut engine, &b.to_string());
        let mut display = String::new();
        for _ in 0..n {
            display = engine.press_operator(OperatorKey::Equals);
        }
        let expected = u64::from(a) * u64::from(b).pow(n);
        prop_assert_eq!(display, expected.to_string());
    }

    /// Dividing by zero is displayed as a non-finite value
    #[test]
    fn prop_divide_by_zero_displayed(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, &number);
        engine.press_operator(Operator::Divide.into());
        let display = engine.press_operator(OperatorKey::Equals);
        prop_assert!(display == "Infinity" || display == "NaN", "got {}", display);
    }

    /// Double sign toggle restores the value
    #[test]
    fn prop_plus_minus_involution(number in typed_number_strategy()) {
        let mut engine = CalculatorEngine::new();
        type_text(&mut engine, &number);
        engine.press_command(Command::PlusMinus);
        let display = engine.press_command(Command::PlusMinus);
        prop_assert_eq!(parse_float(&display), parse_float(&number));
    }
}

// ===== Number formatting =====

proptest! {
    /// Formatting round-trips through parsing for every finite value
    #[test]
    fn prop_format_parse_round_trip(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let text = format_number(value);
        prop_assert_eq!(parse_float(&text), if value == 0.0 { 0.0 } else { value });
    }

    /// Integers below 1e21 print without exponent or point
    #[test]
    fn prop_integers_print_plain(value in 0u64..u64::MAX / 2) {
        let as_float = value as f64;
        let text = format_number(as_float);
        prop_assert!(text.chars().all(|c| c.is_ascii_digit()), "got {}", text);
        prop_assert_eq!(text.parse::<f64>().unwrap(), as_float);
    }
}

// ===== Key-code table =====

proptest! {
    /// Translation is total: any code and modifier set is either mapped or not
    #[test]
    fn prop_keycode_translate_total(code in 0u32..512, shift in any::<bool>(), alt in any::<bool>()) {
        let _ = keycode::translate(code, Modifiers::new(shift, alt));
    }

    /// Main-row and keypad digits agree
    #[test]
    fn prop_keypad_matches_main_row(d in 0u32..10) {
        prop_assert_eq!(
            keycode::translate(48 + d, Modifiers::NONE),
            keycode::translate(96 + d, Modifiers::NONE)
        );
    }

    /// Shift together with Alt is never a calculator key
    #[test]
    fn prop_shift_alt_unmapped(code in 0u32..512) {
        prop_assert_eq!(keycode::translate(code, Modifiers::new(true, true)), None);
    }
}
