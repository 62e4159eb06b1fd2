// src/logging.rs
//! Logger setup for the command-line tool.
//!
//! The library only emits through the `log` facade; installing a logger is
//! left to the application.

use crate::constants::{ENV_LOG_FILE, ENV_LOG_LEVEL};
use crate::error::AppError;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use std::path::PathBuf;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} [{M}:{L}] {m}{n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Reads `LOGLEVEL` (default `info`) and `LOGFILE`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = match lookup(ENV_LOG_LEVEL) {
            Some(level) => level.trim().parse::<LevelFilter>().map_err(|_| {
                AppError::MissingConfiguration(format!(
                    "{} must be one of off, error, warn, info, debug, trace; got {:?}",
                    ENV_LOG_LEVEL, level
                ))
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            level,
            file: lookup(ENV_LOG_FILE)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// Installs a log4rs logger writing to stderr and, if configured, a file.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = &config.file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(config.level))
        .map_err(|e| AppError::Logging(e.to_string()))?;
    log4rs::init_config(log_config).map_err(|e| AppError::Logging(e.to_string()))?;

    if let Some(path) = &config.file {
        log::debug!("Logging to {}", path.display());
    }
    Ok(())
}
