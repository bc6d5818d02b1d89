//! Demo configuration loaded from environment variables.

use serde::{Deserialize, Serialize};

/// A part of the demonstration that can be run on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Processes the three fixture orders through the workflow.
    With,

    /// Prints the workflow skeleton.
    Diagram,
}

impl Section {
    /// Every section in display order.
    pub const ALL: [Section; 2] = [Section::With, Section::Diagram];

    /// Returns the section name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::With => "with",
            Section::Diagram => "diagram",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered line per row, failure lines marked.
    #[default]
    Text,

    /// The whole report as pretty-printed JSON.
    Json,
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DEMO_SECTION`: `with`, `diagram` or `all` (default: `all`)
/// - `DEMO_FORMAT`: `text` or `json` (default: `text`)
/// - `DEMO_METRICS`: `true`/`1` to print a Prometheus snapshot (default: off)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
///
/// Values that do not parse fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub sections: Vec<Section>,
    pub format: OutputFormat,
    pub show_metrics: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            sections: lookup("DEMO_SECTION")
                .and_then(|v| parse_sections(&v))
                .unwrap_or(defaults.sections),
            format: lookup("DEMO_FORMAT")
                .and_then(|v| parse_format(&v))
                .unwrap_or(defaults.format),
            show_metrics: lookup("DEMO_METRICS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_metrics),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            format: OutputFormat::Text,
            show_metrics: false,
            log_level: "info".to_string(),
        }
    }
}

fn parse_sections(value: &str) -> Option<Vec<Section>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" => Some(Section::ALL.to_vec()),
        "with" => Some(vec![Section::With]),
        "diagram" => Some(vec![Section::Diagram]),
        _ => None,
    }
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
