//! Logger configuration.

mod presets;

pub use presets::Preset;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human oriented.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for Format {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to [`Format::Compact`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

/// Where formatted events go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    #[default]
    Stderr,
    Stdout,
    /// libtest's captured output.
    Test,
}

/// What each line shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub colors: bool,
    pub time: bool,
    pub target: bool,
    /// File and line of the call site.
    pub source: bool,
    pub thread_ids: bool,
    /// Put event fields at the top level of JSON lines.
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            time: true,
            target: true,
            source: false,
            thread_ids: false,
            flatten: false,
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directives, e.g. `info,tasklane_data=debug`.
    pub level: String,
    pub format: Format,
    pub writer: Writer,
    pub display: DisplayConfig,
    /// When set, every event is recorded inside an `app` span carrying it.
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::default(),
            writer: Writer::default(),
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case(" JSON ", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_parse(#[case] raw: &str, #[case] expected: Format) {
        assert_eq!(raw.parse::<Format>().unwrap(), expected);
    }

    #[test]
    fn deserialize_partial_config() {
        let config: Config = serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, Writer::Stderr);
        assert_eq!(config.display, DisplayConfig::default());
    }
}
