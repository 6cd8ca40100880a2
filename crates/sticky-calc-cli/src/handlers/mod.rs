//! Command handlers - extracted from main.rs for testability
//!
//! Each handler builds its output as a value; main.rs only prints it.

pub mod config;
#[cfg(feature = "tui")]
pub mod interactive;
pub mod key;
pub mod run;

pub use config::execute_config;
#[cfg(feature = "tui")]
pub use interactive::execute_interactive;
pub use key::{describe_key, execute_key};
pub use run::{execute_run, replay};
