//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Renders the effective configuration as YAML
pub fn execute_config(config: &CliConfig) -> CliResult<String> {
    config.to_yaml()
}
