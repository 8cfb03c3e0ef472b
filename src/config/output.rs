//! Output configuration

use serde::Deserialize;

/// Report format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report format when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,

    /// Echo the parsed payoff table in text reports
    #[serde(default = "default_show_table")]
    pub show_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_table: default_show_table(),
        }
    }
}

fn default_show_table() -> bool {
    true
}
