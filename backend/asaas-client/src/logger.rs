//! Optional logging setup for binaries and tests that use this client.
//!
//! The library itself only emits through `log`; call [`initialize`] once if
//! you want those records on stdout (colored) and optionally in a file.

use crate::error::LoggerError;

use common::ErrorLocation;

use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "asaas-client.log";

/// Level used by callers that have no preference.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the global logger. Later calls log a warning and return `Ok`.
///
/// # Errors
///
/// Returns [`LoggerError`] if the log file cannot be created (checked on every
/// call) or another logger was already installed by someone else.
pub fn initialize(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), LoggerError> {
    let log_file = log_dir.map(open_log_file).transpose()?;

    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            info!("Logger initialized with level: {level:?}");
        }
    });

    result
}

#[track_caller]
fn open_log_file(dir: &Path) -> Result<File, LoggerError> {
    let log_file_path = dir.join(LOG_FILE_NAME);
    fern::log_file(&log_file_path).map_err(|e| LoggerError::LogFile {
        message: format!("{}: {e}", log_file_path.display()),
        location: ErrorLocation::caller(),
    })
}

fn initialize_internal(level: LevelFilter, log_file: Option<File>) -> Result<(), LoggerError> {
    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                target = record.target(),
            ))
        })
        .chain(stdout());

    let mut root = Dispatch::new().level(level).chain(stdout_dispatch);

    if let Some(file) = log_file {
        root = root.chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{file}:{line}]",
                        date = format_rfc3339(SystemTime::now()),
                        level = record.level(),
                        file = record.file().unwrap_or("unknown"),
                        line = record.line().unwrap_or(0),
                    ))
                })
                .chain(file),
        );
    }

    root.apply().map_err(|e| LoggerError::Init {
        message: e.to_string(),
        location: ErrorLocation::caller(),
    })
}
