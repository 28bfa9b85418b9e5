use crate::dir::PhonegateDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

/// Targets too chatty to be useful at debug level.
const NOISY_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "cosmic_text",
    "mio",
    "polling",
    "calloop",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    InvalidLevel(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to open log file: {}", e),
            Self::InvalidLevel(l) => write!(f, "Invalid log level '{}'", l),
        }
    }
}

impl Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

fn is_noisy(target: &str) -> bool {
    NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

/// Logs to stdout and to the log file of the data directory.
pub fn setup_logger(
    log_level: LevelFilter,
    datadir: &PhonegateDirectory,
) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_file())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_noisy(metadata.target()))),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LoggerError> {
    match std::env::var("LOG_LEVEL") {
        Ok(l) => LevelFilter::from_str(&l)
            .map(Some)
            .map_err(|_| LoggerError::InvalidLevel(l)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noisy_targets() {
        assert!(is_noisy("wgpu_core::device"));
        assert!(is_noisy("reqwest::connect"));
        assert!(!is_noisy("phonegate_gui::app"));
        assert!(!is_noisy("phonegate::form"));
    }
}
