//! Hardware key-code translation
//!
//! Maps DOM-style `keyCode` values plus modifier state to calculator keys.
//! Digits and the decimal point have two codes each (main row and numeric
//! keypad), and a few keys change meaning with Shift or Alt: `Shift+5` is
//! percent, `Shift+8` and `Shift+;` multiply, `Shift+=` adds, `Alt+-`
//! toggles the sign. Shift and Alt together never match.

use crate::core::{Command, Digit, Operator, OperatorKey};
use crate::keys::{LogicalKey, Modifiers};

/// Backspace key code, the only key without a calculator button
pub const BACKSPACE: u32 = 8;

/// Translates a hardware key code to a logical key
#[must_use]
pub fn translate(code: u32, modifiers: Modifiers) -> Option<LogicalKey> {
    match (modifiers.shift, modifiers.alt) {
        (false, false) => plain(code),
        (true, false) => shifted(code),
        (false, true) => alternate(code),
        (true, true) => None,
    }
}

fn plain(code: u32) -> Option<LogicalKey> {
    let key = match code {
        BACKSPACE => LogicalKey::Backspace,
        13 | 187 => OperatorKey::Equals.into(),
        27 => Command::Clear.into(),
        // main row 0-9 and numeric keypad 0-9
        48..=57 => digit(code - 48)?,
        96..=105 => digit(code - 96)?,
        106 => operator(Operator::Multiply),
        107 => operator(Operator::Add),
        109 | 189 => operator(Operator::Subtract),
        110 | 188 | 190 => Digit::POINT.into(),
        111 | 191 => operator(Operator::Divide),
        _ => return None,
    };
    Some(key)
}

fn shifted(code: u32) -> Option<LogicalKey> {
    let key = match code {
        53 => Command::Percent.into(),
        56 | 186 => operator(Operator::Multiply),
        187 => operator(Operator::Add),
        _ => return None,
    };
    Some(key)
}

fn alternate(code: u32) -> Option<LogicalKey> {
    match code {
        189 => Some(Command::PlusMinus.into()),
        _ => None,
    }
}

fn digit(value: u32) -> Option<LogicalKey> {
    u8::try_from(value)
        .ok()
        .and_then(Digit::from_value)
        .map(LogicalKey::Digit)
}

fn operator(op: Operator) -> LogicalKey {
    LogicalKey::Operator(op.into())
}
