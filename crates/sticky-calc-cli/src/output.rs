//! Output formatting

use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};
use sticky_calc::core::{EngineSnapshot, Operator};
use sticky_calc::keys::LogicalKey;

/// Output format for run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after a single key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Key name
    pub key: String,
    /// Display after the key
    pub display: String,
}

impl StepRecord {
    /// Records the display produced by a key
    #[must_use]
    pub fn new(key: LogicalKey, display: impl Into<String>) -> Self {
        Self {
            key: key.name(),
            display: display.into(),
        }
    }
}

/// Result of replaying a key script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// The script as given
    pub script: String,
    /// Per-key displays, empty unless requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepRecord>,
    /// Final engine state
    pub state: EngineSnapshot,
    /// Font size the final display fits at, in pixels
    pub font_px: u32,
}

impl RunReport {
    /// Renders the report as text
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let width = self.steps.iter().map(|s| s.key.len()).max().unwrap_or(0);
        for step in &self.steps {
            out.push_str(&format!("{:<width$}  {}\n", step.key, step.display));
        }
        out.push_str(&self.state.display);
        out
    }

    /// Renders the report as pretty JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders one calculator line: operator indicator then display
///
/// The pending operator is highlighted the way the keypad lights its key.
#[must_use]
pub fn render_lcd(display: &str, pending: Option<Operator>, use_color: bool) -> String {
    let indicator = pending.map_or(" ", Operator::symbol);
    if use_color {
        let indicator = if pending.is_some() {
            style(indicator).yellow().bold().to_string()
        } else {
            indicator.to_string()
        };
        format!("{indicator} {}", style(display).bold())
    } else {
        format!("{indicator} {display}")
    }
}
