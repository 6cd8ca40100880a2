//! Logical keys and the translation of host input into them
//!
//! Hosts never call the engine with raw input. A key-code table, a terminal
//! key mapping or a script token first becomes a [`LogicalKey`], which the
//! engine dispatches.

pub mod keycode;
#[cfg(feature = "tui")]
pub mod terminal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Command, Digit, OperatorKey};

/// A calculator key, independent of how it was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalKey {
    /// Digit or decimal point
    Digit(Digit),
    /// Arithmetic operator or equals
    Operator(OperatorKey),
    /// Clear, plus-minus or percent
    Command(Command),
    /// Delete the last typed character (hardware keyboards only)
    Backspace,
}

impl LogicalKey {
    /// Returns the key name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Operator(op) => op.name().to_string(),
            Self::Command(cmd) => cmd.name().to_string(),
            Self::Backspace => "backspace".to_string(),
        }
    }
}

impl From<Digit> for LogicalKey {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<OperatorKey> for LogicalKey {
    fn from(op: OperatorKey) -> Self {
        Self::Operator(op)
    }
}

impl From<Command> for LogicalKey {
    fn from(cmd: Command) -> Self {
        Self::Command(cmd)
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for LogicalKey {
    type Err = CalcError;

    /// Parses a script token
    ///
    /// Accepts a single digit, `.` or `,` for the decimal point, operator and
    /// command names or symbols, and `backspace`/`bs`/`<`.
    fn from_str(s: &str) -> CalcResult<Self> {
        if s == "," {
            return Ok(Self::Digit(Digit::POINT));
        }
        if let Ok(digit) = s.parse::<Digit>() {
            return Ok(Self::Digit(digit));
        }
        if matches!(s, "backspace" | "bs" | "<" | "⌫") {
            return Ok(Self::Backspace);
        }
        if let Ok(op) = s.parse::<OperatorKey>() {
            return Ok(Self::Operator(op));
        }
        s.parse::<Command>()
            .map(Self::Command)
            .map_err(|_| CalcError::unknown_key(s))
    }
}

/// Parses whitespace separated key tokens
pub fn parse_script(script: &str) -> CalcResult<Vec<LogicalKey>> {
    script.split_whitespace().map(str::parse).collect()
}

/// Modifier keys held during a hardware key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift held
    pub shift: bool,
    /// Alt/Option held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
    };

    /// Shift only
    pub const SHIFT: Self = Self {
        shift: true,
        alt: false,
    };

    /// Alt only
    pub const ALT: Self = Self {
        shift: false,
        alt: true,
    };

    /// Creates a modifier set
    #[must_use]
    pub const fn new(shift: bool, alt: bool) -> Self {
        Self { shift, alt }
    }
}
