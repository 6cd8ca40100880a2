//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// sticky-calc: pocket calculator with sticky repeated equals
#[derive(Parser, Debug)]
#[command(name = "sticky-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "STICKY_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal separator shown on the display
    #[arg(long, global = true)]
    pub separator: Option<char>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a key script and print the display
    ///
    /// Tokens: digits, `.`, `+ - * /`, `=`, `C`/clear, `+/-`/plus-minus,
    /// `%`/percent, `<`/backspace. Tokens may be separate arguments or one
    /// quoted string.
    Run(RunArgs),

    /// Translate a hardware key code to a calculator key
    Key(KeyArgs),

    /// Run the interactive terminal calculator
    #[cfg(feature = "tui")]
    Interactive,

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Key tokens to press, in order
    #[arg(required = true, num_args = 1..)]
    pub tokens: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Joins the tokens into one whitespace separated script
    #[must_use]
    pub fn script(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Arguments for the key command
#[derive(Parser, Debug)]
pub struct KeyArgs {
    /// Hardware key code (DOM `keyCode`)
    pub code: u32,

    /// Shift held
    #[arg(long)]
    pub shift: bool,

    /// Alt held
    #[arg(long)]
    pub alt: bool,
}

/// Color argument for clap
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Auto-detect
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}
