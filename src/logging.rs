//! File logging for the TUI binary. The terminal belongs to the UI, so log
//! records go to a file named by the environment.

use log::LevelFilter;
use std::fs::File;
use std::path::PathBuf;

/// Log file path. Logging stays off when unset.
pub const LOG_PATH_ENV: &str = "DRAW_POKER_LOG";
/// `error`, `warn`, `info`, `debug` or `trace`; defaults to `info`.
pub const LOG_LEVEL_ENV: &str = "DRAW_POKER_LOG_LEVEL";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LogInitError {
    #[error("invalid log level: '{0}'")]
    Level(String),
    #[error("cannot create log file: {0}")]
    File(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LogSettings {
    pub path: PathBuf,
    pub level: LevelFilter,
}

impl LogSettings {
    /// Read settings from the environment; `Ok(None)` when no path is set.
    pub fn from_env() -> Result<Option<Self>, LogInitError> {
        let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
            return Ok(None);
        };
        let level = match std::env::var(LOG_LEVEL_ENV) {
            Ok(s) => parse_level(&s)?,
            Err(_) => LevelFilter::Info,
        };
        Ok(Some(Self { path: PathBuf::from(path), level }))
    }
}

pub fn parse_level(s: &str) -> Result<LevelFilter, LogInitError> {
    s.trim().parse::<LevelFilter>().map_err(|_| LogInitError::Level(s.to_string()))
}

/// Install a global file logger.
pub fn init(settings: &LogSettings) -> Result<(), LogInitError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = File::create(&settings.path)?;
    simplelog::WriteLogger::init(settings.level, config, file)?;
    Ok(())
}
