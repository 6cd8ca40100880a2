//! Calculator input engine
//!
//! Reduces key events to a display buffer and a two-operand accumulator,
//! reproducing pocket-calculator "sticky equals": pressing `=` again without
//! choosing a new operator reapplies the last right operand to the value on
//! screen.
//!
//! # Example
//!
//! ```rust
//! use sticky_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.press_digit(Digit::from_value(5).unwrap());
//! engine.press_digit(Digit::ZERO);
//! engine.press_operator(Operator::Add.into());
//! engine.press_digit(Digit::from_value(3).unwrap());
//! assert_eq!(engine.press_operator(OperatorKey::Equals), "53");
//! assert_eq!(engine.press_operator(OperatorKey::Equals), "56");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::number::{buffer_value, format_number};
use crate::core::{Command, Digit, Operator, OperatorKey};
use crate::display::{render_display, DisplayConfig};
use crate::keys::LogicalKey;

/// Evaluation phase of the accumulator
///
/// Folds the pending operator, the left operand, the sticky right operand and
/// the "has evaluated once" flag into one value, so a sticky operand can only
/// exist after an evaluation and only while an operator is pending.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum EvalPhase {
    /// No operator pending
    #[default]
    Idle,
    /// Operator chosen, next `=` consumes the buffer as the right operand
    AwaitingOperand {
        /// Pending operator
        operator: Operator,
        /// Left operand captured when the operator was chosen
        a: f64,
    },
    /// At least one `=` since the operator was chosen
    Evaluated {
        /// Pending operator, reapplied on every further `=`
        operator: Operator,
        /// Right operand of the first evaluation
        sticky_b: f64,
    },
}

impl EvalPhase {
    /// Returns the pending operator, if any
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        match self {
            Self::Idle => None,
            Self::AwaitingOperand { operator, .. } | Self::Evaluated { operator, .. } => {
                Some(*operator)
            }
        }
    }

    /// Returns the sticky right operand, defined only after an evaluation
    #[must_use]
    pub const fn sticky_operand(&self) -> Option<f64> {
        match self {
            Self::Evaluated { sticky_b, .. } => Some(*sticky_b),
            _ => None,
        }
    }

    /// Returns true if `=` has been pressed since the operator was chosen
    #[must_use]
    pub const fn has_evaluated(&self) -> bool {
        matches!(self, Self::Evaluated { .. })
    }

    /// Returns the phase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingOperand { .. } => "awaiting-operand",
            Self::Evaluated { .. } => "evaluated",
        }
    }
}

/// Whether an evaluation consumed fresh input or reused the sticky operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationKind {
    /// First `=` after choosing the operator: buffer becomes the right operand
    First,
    /// Repeated `=`: buffer becomes the left operand, sticky operand reused
    Repeat,
}

/// Read-only view of the engine state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Raw input buffer, always with `.` as decimal point
    pub buffer: String,
    /// Rendered display string
    pub display: String,
    /// Operator the UI should highlight
    pub pending_operator: Option<Operator>,
    /// Accumulator phase
    pub phase: EvalPhase,
    /// Kind of the most recent evaluation since the last operator choice
    pub last_evaluation: Option<EvaluationKind>,
}

/// Pocket-calculator input engine
///
/// Every operation is total: invalid keys are ignored and division by zero
/// shows `Infinity` or `NaN`. Each entry point returns the new display
/// string.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    /// Digits typed so far, or the last result
    buffer: String,
    /// Accumulator phase
    phase: EvalPhase,
    /// Kind of the last evaluation
    last_evaluation: Option<EvaluationKind>,
    /// Rendering settings, kept across resets
    display: DisplayConfig,
}

impl CalculatorEngine {
    /// Creates an engine in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that renders with the given display settings
    #[must_use]
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// Returns the raw input buffer
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the accumulator phase
    #[must_use]
    pub const fn phase(&self) -> &EvalPhase {
        &self.phase
    }

    /// Returns the pending operator, for highlighting the selected key
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.phase.pending_operator()
    }

    /// Returns the display settings
    #[must_use]
    pub const fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Returns the string to display
    #[must_use]
    pub fn display(&self) -> String {
        render_display(&self.buffer, &self.display)
    }

    /// Returns a snapshot of the whole state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            buffer: self.buffer.clone(),
            display: self.display(),
            pending_operator: self.pending_operator(),
            phase: self.phase,
            last_evaluation: self.last_evaluation,
        }
    }

    /// Dispatches a logical key to the matching entry point
    pub fn press(&mut self, key: LogicalKey) -> String {
        match key {
            LogicalKey::Digit(digit) => self.press_digit(digit),
            LogicalKey::Operator(op) => self.press_operator(op),
            LogicalKey::Command(cmd) => self.press_command(cmd),
            LogicalKey::Backspace => self.backspace(),
        }
    }

    /// Types a digit or the decimal point
    ///
    /// A zero on an empty buffer and a second decimal point are ignored; a
    /// leading decimal point is seeded with `0`. A digit typed onto a bare
    /// `0` (left by a result, a command or backspace) replaces it.
    pub fn press_digit(&mut self, digit: Digit) -> String {
        if digit == Digit::ZERO && self.buffer.is_empty() {
            trace!("leading zero ignored");
            return self.display();
        }
        if !digit.is_point() && matches!(self.buffer.as_str(), "0" | "-0") {
            trace!(%digit, "leading zero replaced");
            self.buffer.pop();
        }
        if digit.is_point() {
            if self.buffer.contains('.') {
                trace!(buffer = %self.buffer, "second decimal point ignored");
                return self.display();
            }
            if self.buffer.is_empty() {
                self.buffer.push('0');
            }
        }
        self.buffer.push(digit.as_char());
        self.display()
    }

    /// Types a character, ignoring anything that is not a digit or `.`
    pub fn press_char(&mut self, c: char) -> String {
        match Digit::from_char(c) {
            Some(digit) => self.press_digit(digit),
            None => {
                debug!(?c, "non-digit character ignored");
                self.display()
            }
        }
    }

    /// Runs a command key
    pub fn press_command(&mut self, command: Command) -> String {
        match command {
            Command::Clear => self.reset(),
            Command::PlusMinus => self.rewrite_buffer(command, |value| value * -1.0),
            Command::Percent => self.rewrite_buffer(command, |value| value / 100.0),
        }
        self.display()
    }

    /// Chooses an operator or evaluates the pending one
    pub fn press_operator(&mut self, key: OperatorKey) -> String {
        match key {
            OperatorKey::Arithmetic(operator) => self.select_operator(operator),
            OperatorKey::Equals => self.evaluate(),
        }
        self.display()
    }

    /// Removes the last character of the buffer
    pub fn backspace(&mut self) -> String {
        self.buffer.pop();
        self.display()
    }

    fn reset(&mut self) {
        debug!("engine cleared");
        self.buffer.clear();
        self.phase = EvalPhase::Idle;
        self.last_evaluation = None;
    }

    fn rewrite_buffer(&mut self, command: Command, f: impl FnOnce(f64) -> f64) {
        if self.buffer.is_empty() {
            trace!(%command, "command ignored on empty buffer");
            return;
        }
        self.buffer = format_number(f(buffer_value(&self.buffer)));
    }

    fn select_operator(&mut self, operator: Operator) {
        let a = buffer_value(&self.buffer);
        debug!(%operator, a, "operator selected");
        self.phase = EvalPhase::AwaitingOperand { operator, a };
        self.last_evaluation = None;
        self.buffer.clear();
    }

    fn evaluate(&mut self) {
        let (operator, a, b, kind) = match self.phase {
            EvalPhase::Idle => {
                trace!("equals ignored: no pending operator");
                return;
            }
            EvalPhase::AwaitingOperand { operator, a } => (
                operator,
                a,
                buffer_value(&self.buffer),
                EvaluationKind::First,
            ),
            EvalPhase::Evaluated { operator, sticky_b } => (
                operator,
                buffer_value(&self.buffer),
                sticky_b,
                EvaluationKind::Repeat,
            ),
        };

        let result = operator.apply(a, b);
        debug!(%operator, a, b, result, ?kind, "evaluated");

        self.buffer = format_number(result);
        self.phase = EvalPhase::Evaluated {
            operator,
            sticky_b: b,
        };
        self.last_evaluation = Some(kind);
    }
}
