//! Core calculator module: numbers, operators and the input engine
//!
//! The engine itself never fails. Errors only come from the parsing entry
//! points that turn text (key names, script tokens, characters) into typed
//! keys.

pub mod engine;
pub mod number;
mod operations;

pub use engine::{CalculatorEngine, EngineSnapshot, EvalPhase, EvaluationKind};
pub use operations::{Command, Digit, Operator, OperatorKey};

use thiserror::Error;

/// Result type for calculator parsing operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A key name or script token that maps to no calculator key
    #[error("Unknown key: {token:?}")]
    UnknownKey {
        /// The offending token
        token: String,
    },
    /// A character outside `0`-`9` and `.`
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey {
            token: token.into(),
        }
    }
}
