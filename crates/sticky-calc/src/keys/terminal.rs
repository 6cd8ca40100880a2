//! Terminal key translation (crossterm)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Command, Digit, Operator, OperatorKey};
use crate::keys::LogicalKey;

/// Translates a terminal key event to a logical key
///
/// Release events and Ctrl chords are not calculator keys.
#[must_use]
pub fn translate(event: KeyEvent) -> Option<LogicalKey> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release || modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    if modifiers.contains(KeyModifiers::ALT) {
        return match code {
            KeyCode::Char('-') => Some(Command::PlusMinus.into()),
            _ => None,
        };
    }

    match code {
        KeyCode::Char(c) => translate_char(c),
        KeyCode::Enter => Some(OperatorKey::Equals.into()),
        KeyCode::Esc => Some(Command::Clear.into()),
        KeyCode::Backspace => Some(LogicalKey::Backspace),
        _ => None,
    }
}

fn translate_char(c: char) -> Option<LogicalKey> {
    if let Some(digit) = Digit::from_char(c) {
        return Some(digit.into());
    }
    let key = match c {
        ',' => Digit::POINT.into(),
        '+' => LogicalKey::Operator(Operator::Add.into()),
        '-' => LogicalKey::Operator(Operator::Subtract.into()),
        '*' | 'x' => LogicalKey::Operator(Operator::Multiply.into()),
        '/' => LogicalKey::Operator(Operator::Divide.into()),
        '=' => OperatorKey::Equals.into(),
        '%' => Command::Percent.into(),
        '_' => Command::PlusMinus.into(),
        'c' | 'C' => Command::Clear.into(),
        _ => return None,
    };
    Some(key)
}

/// Returns true for the keys that leave an interactive session
#[must_use]
pub fn is_quit(event: KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => event.modifiers.is_empty(),
        _ => false,
    }
}
