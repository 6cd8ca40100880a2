//! sticky-calc CLI library
//!
//! Command-line and terminal host for the [`sticky_calc`] engine: replay key
//! scripts, inspect the hardware key-code table, or run the calculator
//! interactively in a raw-mode terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, KeyArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_lcd, OutputFormat, RunReport, StepRecord};
