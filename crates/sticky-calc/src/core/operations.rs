//! Calculator keys with typed values
//!
//! Type-safe key enums: a `Digit` can only hold `0`-`9` or `.`, and
//! operators and commands are closed sets, so the engine never sees an
//! invalid key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Arithmetic operator of the two-operand accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All arithmetic operators, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Applies the operator with IEEE-754 semantics
    ///
    /// Division by zero yields infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the canonical key name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "add" | "plus" | "+" => Ok(Self::Add),
            "subtract" | "minus" | "-" => Ok(Self::Subtract),
            "multiply" | "times" | "*" | "x" | "×" => Ok(Self::Multiply),
            "divide" | "/" | "÷" => Ok(Self::Divide),
            _ => Err(CalcError::unknown_key(s)),
        }
    }
}

/// An operator key: one of the arithmetic operators, or equals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorKey {
    /// Select an arithmetic operator
    Arithmetic(Operator),
    /// Evaluate the pending operator
    Equals,
}

impl OperatorKey {
    /// Returns the canonical key name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arithmetic(op) => op.name(),
            Self::Equals => "equals",
        }
    }
}

impl From<Operator> for OperatorKey {
    fn from(op: Operator) -> Self {
        Self::Arithmetic(op)
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorKey {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "equals" | "equal" | "=" => Ok(Self::Equals),
            other => other.parse().map(Self::Arithmetic),
        }
    }
}

/// Command keys that act on the buffer or the whole state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    /// Full reset
    Clear,
    /// Negate the buffer value
    PlusMinus,
    /// Divide the buffer value by 100
    Percent,
}

impl Command {
    /// Returns the canonical key name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PlusMinus => "plus-minus",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "clear" | "C" | "AC" => Ok(Self::Clear),
            "plus-minus" | "+/-" | "±" | "neg" => Ok(Self::PlusMinus),
            "percent" | "%" => Ok(Self::Percent),
            _ => Err(CalcError::unknown_key(s)),
        }
    }
}

/// A digit key: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point key
    pub const POINT: Self = Self('.');

    /// The zero key
    pub const ZERO: Self = Self('0');

    /// Creates a digit key from a character, if it is `0`-`9` or `.`
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Self(c))
        } else {
            None
        }
    }

    /// Creates a numeric digit key from its value
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Self)
    }

    /// Returns the character this key inserts
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns true for the decimal point key
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        Self::from_char(c).ok_or(CalcError::InvalidDigit(c))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Digit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CalcError::unknown_key(s)),
        }
    }
}
