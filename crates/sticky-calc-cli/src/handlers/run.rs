//! Run command handler: replay a key script

use sticky_calc::display::{fit_font_size, DisplayConfig, MonospaceMeasure};
use sticky_calc::driver::{CalculatorDriver, EngineDriver};
use sticky_calc::keys::parse_script;
use tracing::{debug, info};

use crate::commands::RunArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, RunReport, StepRecord};

/// Replays a script against a fresh engine
///
/// The whole script is parsed before any key is pressed, so an unknown
/// token fails without partial output.
pub fn replay(script: &str, display: DisplayConfig, record_steps: bool) -> CliResult<RunReport> {
    let keys = parse_script(script)?;
    debug!(keys = keys.len(), "replaying script");

    let mut driver = EngineDriver::with_display(display);
    let mut steps = Vec::new();
    for key in keys {
        let shown = driver.press(key);
        if record_steps {
            steps.push(StepRecord::new(key, shown));
        }
    }

    let state = driver.snapshot();
    let font_px = fit_font_size(
        &state.display,
        &MonospaceMeasure::default(),
        &driver.engine().display_config().font,
    );
    info!(presses = driver.presses(), shown = %state.display, font_px, "script finished");
    Ok(RunReport {
        script: script.to_string(),
        steps,
        state,
        font_px,
    })
}

/// Executes the run command and returns the rendered output
pub fn execute_run(config: &CliConfig, args: &RunArgs) -> CliResult<String> {
    let report = replay(&args.script(), config.display.clone(), args.steps)?;
    match args.format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(report.render_json()?),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(tokens: &[&str], steps: bool, format: OutputFormat) -> RunArgs {
        RunArgs {
            tokens: tokens.iter().map(ToString::to_string).collect(),
            steps,
            format,
        }
    }

    // ===== Replay =====

    #[test]
    fn test_replay_sticky_equals() {
        let report = replay("7 7 + 3 = =", DisplayConfig::default(), false).unwrap();
        assert_eq!(report.state.display, "83");
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_replay_records_steps() {
        let report = replay("5 0 + 3 =", DisplayConfig::default(), true).unwrap();
        let displays: Vec<&str> = report.steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, vec!["5", "50", "0", "3", "53"]);
        assert_eq!(report.steps[2].key, "add");
    }

    #[test]
    fn test_replay_fits_font_to_display() {
        let short = replay("6", DisplayConfig::default(), false).unwrap();
        assert_eq!(short.font_px, 46);

        let long = replay("1 / 3 =", DisplayConfig::default(), false).unwrap();
        assert_eq!(long.state.display, "0.3333333333333333");
        assert_eq!(long.font_px, 19);
    }

    #[test]
    fn test_replay_unknown_token() {
        let err = replay("1 + sqrt", DisplayConfig::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Calc(_)));
    }

    #[test]
    fn test_replay_with_separator() {
        let report = replay("7 / 2 =", DisplayConfig::with_separator(','), false).unwrap();
        assert_eq!(report.state.display, "3,5");
        assert_eq!(report.state.buffer, "3.5");
    }

    // ===== Execute =====

    #[test]
    fn test_execute_run_text() {
        let out = execute_run(&CliConfig::new(), &args(&["9", "/", "="], false, OutputFormat::Text))
            .unwrap();
        assert_eq!(out, "Infinity");
    }

    #[test]
    fn test_execute_run_json() {
        let out = execute_run(&CliConfig::new(), &args(&["2 * 3 ="], false, OutputFormat::Json))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"]["display"], "6");
        assert_eq!(value["state"]["phase"]["phase"], "evaluated");
    }
}
