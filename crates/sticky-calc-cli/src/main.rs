//! sticky-calc: pocket calculator with sticky repeated equals
//!
//! ## Usage
//!
//! ```bash
//! sticky-calc run 7 7 + 3 = =         # prints 83
//! sticky-calc run "9 / =" --steps     # per-key displays
//! sticky-calc --separator , run 7 / 2 =
//! sticky-calc key 53 --shift          # prints percent
//! sticky-calc interactive
//! ```

use clap::Parser;
use sticky_calc_cli::{
    handlers, logging, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    logging::init(config.verbosity)?;
    console::set_colors_enabled(config.color.should_color());

    match cli.command {
        Commands::Run(args) => {
            println!("{}", handlers::execute_run(&config, &args)?);
            Ok(())
        }
        Commands::Key(args) => {
            println!("{}", handlers::execute_key(&args));
            Ok(())
        }
        #[cfg(feature = "tui")]
        Commands::Interactive => handlers::execute_interactive(&config),
        Commands::Config => {
            print!("{}", handlers::execute_config(&config)?);
            Ok(())
        }
    }
}

/// Defaults, then the config file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet));
    }
    if let Some(color) = cli.color {
        config = config.with_color(ColorChoice::from(color));
    }
    if let Some(separator) = cli.separator {
        config = config.with_separator(separator);
    }
    let separator = config.display.decimal_separator;
    if separator.is_ascii_digit() || separator.is_whitespace() {
        return Err(CliError::invalid_argument(format!(
            "decimal separator {separator:?} would be indistinguishable from the number"
        )));
    }

    Ok(config)
}
