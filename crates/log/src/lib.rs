//! # Tasklane Log
//!
//! Installs a `tracing` subscriber for applications and tests built on
//! Tasklane crates. Library crates only emit events through `tracing`;
//! whoever owns `main` decides where they go.
//!
//! ```no_run
//! use tasklane_log::{Config, LoggerBuilder};
//!
//! let _guard = LoggerBuilder::from_config(Config::production()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), tasklane_log::LogError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Preset, Writer};
pub use error::{LogError, LogResult};

/// Initialize from environment variables.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Initialize from an explicit configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Install the test preset once per process. Later calls do nothing.
pub fn init_test() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = init_with(Config::test());
    });
}
