//! Sticky Calc - pocket-calculator input engine
//!
//! Turns discrete key presses (digits, operators, commands) into a running
//! two-operand computation and a display string, the way a physical pocket
//! calculator does, including "sticky" repeated equals.
//!
//! The engine is a pure state machine. Hosts translate their own input
//! (hardware key codes, terminal events, script tokens) into [`LogicalKey`]s
//! and render the returned display string.
//!
//! # Example
//!
//! ```rust
//! use sticky_calc::prelude::*;
//!
//! let mut calc = EngineDriver::new();
//!
//! assert_eq!(calc.press_script("7 7 + 3 =").unwrap(), "80");
//! // Pressing equals again reapplies "+ 3"
//! assert_eq!(calc.press_script("=").unwrap(), "83");
//!
//! // Division by zero is displayed, never raised
//! calc.reset();
//! assert_eq!(calc.press_script("9 / =").unwrap(), "Infinity");
//! ```
//!
//! [`LogicalKey`]: keys::LogicalKey

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod keys;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::number::{format_number, parse_float};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, Command, Digit, EngineSnapshot, EvalPhase,
        EvaluationKind, Operator, OperatorKey,
    };
    pub use crate::display::{
        fit_font_size, render_display, DisplayConfig, FontFit, MonospaceMeasure, TextMeasure,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keys::{keycode, parse_script, LogicalKey, Modifiers};
}
