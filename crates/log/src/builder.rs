//! Logger builder implementation

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format, Writer};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// Drop it when the application shuts down.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Shared fmt layer setup; `$style` picks the formatter.
macro_rules! create_fmt_layer {
    ($style:ident, $display:expr, $writer:expr) => {
        tracing_subscriber::fmt::layer()
            .$style()
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_writer($writer)
    };
}

/// Install `Registry + filter + layer`, dropping timestamps when asked.
macro_rules! init_subscriber {
    ($filter:expr, $layer:expr, $time:expr) => {{
        let layer = $layer;
        if $time {
            Registry::default().with($filter).with(layer).try_init()
        } else {
            Registry::default()
                .with($filter)
                .with(layer.without_time())
                .try_init()
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the level cannot be parsed and
    /// [`LogError::Init`] if a global subscriber is already installed.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let config = self.config;
        let filter = EnvFilter::try_new(&config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", config.level)))?;

        let writer = match config.writer {
            Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
            Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
            Writer::Test => BoxMakeWriter::new(TestWriter::default()),
        };

        let display = &config.display;
        let installed = match config.format {
            Format::Pretty => {
                init_subscriber!(filter, create_fmt_layer!(pretty, display, writer), display.time)
            }
            Format::Compact => {
                init_subscriber!(filter, create_fmt_layer!(compact, display, writer), display.time)
            }
            Format::Json => init_subscriber!(
                filter,
                create_fmt_layer!(json, display, writer).flatten_event(display.flatten),
                display.time
            ),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(level = %config.level, format = %config.format, "logger initialized");
        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}
