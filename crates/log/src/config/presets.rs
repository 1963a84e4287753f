//! Named presets and environment overrides.
//!
//! | Variable | Effect |
//! |---|---|
//! | `TASKLANE_LOG_PRESET` | base preset: `development`, `production` or `test` |
//! | `TASKLANE_LOG`, then `RUST_LOG` | filter directives |
//! | `TASKLANE_LOG_FORMAT` | `pretty`, `compact` or `json` |
//! | `TASKLANE_SERVICE` | service name on the root span |
//! | `TASKLANE_LOG_SOURCE` | `1`/`true`/`yes` shows call sites, anything else hides them |
//! | `NO_COLOR` | any non-empty value turns colors off |

use std::fmt;

use super::{Config, DisplayConfig, Format, Writer};

/// A named starting point for [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Pretty output at `debug`, with colors and call sites.
    Development,
    /// Flattened JSON at `info`.
    Production,
    /// Compact `trace` output into libtest's capture.
    Test,
}

impl Preset {
    /// Look a preset up by name. Short forms `dev` and `prod` are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        })
    }
}

impl From<Preset> for Config {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Development => Self {
                level: "debug".to_string(),
                format: Format::Pretty,
                display: DisplayConfig {
                    colors: true,
                    source: true,
                    ..DisplayConfig::default()
                },
                ..Self::default()
            },
            Preset::Production => Self {
                level: "info".to_string(),
                format: Format::Json,
                display: DisplayConfig {
                    colors: false,
                    flatten: true,
                    ..DisplayConfig::default()
                },
                ..Self::default()
            },
            Preset::Test => Self {
                level: "trace".to_string(),
                format: Format::Compact,
                writer: Writer::Test,
                display: DisplayConfig {
                    colors: false,
                    time: false,
                    ..DisplayConfig::default()
                },
                ..Self::default()
            },
        }
    }
}

impl Config {
    #[must_use]
    pub fn development() -> Self {
        Preset::Development.into()
    }

    #[must_use]
    pub fn production() -> Self {
        Preset::Production.into()
    }

    #[must_use]
    pub fn test() -> Self {
        Preset::Test.into()
    }

    /// Build from the process environment. See the module docs for variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unknown presets and formats fall back to the defaults. Empty values
    /// count as unset, except for `TASKLANE_LOG_SOURCE`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = set("TASKLANE_LOG_PRESET")
            .and_then(|name| Preset::from_name(&name))
            .map_or_else(Self::default, Self::from);

        if let Some(level) = set("TASKLANE_LOG").or_else(|| set("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = set("TASKLANE_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }
        if let Some(service) = set("TASKLANE_SERVICE") {
            config.service = Some(service.trim().to_owned());
        }
        if set("NO_COLOR").is_some() {
            config.display.colors = false;
        }
        if let Some(source) = lookup("TASKLANE_LOG_SOURCE") {
            config.display.source = matches!(
                source.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
        config
    }
}
