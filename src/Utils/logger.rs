//! Logger set up for the calculator binary: always a terminal logger, and a file logger
//! `log_<date>_<time>.txt` on request.
use chrono::Local;
use log::info;
use simplelog::*;
use std::fmt;
use std::fs::File;

#[derive(Debug)]
pub enum LoggerError {
    UnknownLevel(String),
    LogFile(std::io::Error),
    AlreadyInitialised,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(level) => write!(
                f,
                "loglevel must be off, error, warn, info, debug or trace, got '{}'",
                level
            ),
            LoggerError::LogFile(err) => write!(f, "cannot create log file: {}", err),
            LoggerError::AlreadyInitialised => write!(f, "logger is already initialised"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// `None` means `info`
pub fn parse_level(loglevel: Option<&str>) -> Result<LevelFilter, LoggerError> {
    let Some(level) = loglevel else {
        return Ok(LevelFilter::Info);
    };
    match level {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(LoggerError::UnknownLevel(other.to_string())),
    }
}

pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<LevelFilter, LoggerError> {
    let level = parse_level(loglevel)?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let file = File::create(log_file_name()).map_err(LoggerError::LogFile)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers).map_err(|_| LoggerError::AlreadyInitialised)?;
    info!("Program started with loglevel: {}", level);
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None).unwrap(), LevelFilter::Info);
        assert_eq!(parse_level(Some("off")).unwrap(), LevelFilter::Off);
        assert_eq!(parse_level(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(Some("trace")).unwrap(), LevelFilter::Trace);
        assert!(matches!(
            parse_level(Some("verbose")),
            Err(LoggerError::UnknownLevel(level)) if level == "verbose"
        ));
        assert!(parse_level(Some("INFO")).is_err());
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        // log_YYYY-MM-DD_HH-MM-SS.txt
        assert_eq!(name.len(), "log_".len() + 19 + ".txt".len());
    }
}
