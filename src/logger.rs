use std::sync::Arc;

use spdlog::sink::{StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let stdout = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stdout)
        .level_filter(LevelFilter::MoreVerbose(Level::Warn))
        .build()?);

    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .level_filter(LevelFilter::MoreSevereEqual(Level::Warn))
        .build()?);

    let mut builder = Logger::builder();
    builder.sink(stdout).sink(stderr);

    let logger = Arc::new(builder.build()?);
    let level = config.log.as_ref().map(|log| log.level).unwrap_or(LogLevel::Info);
    logger.set_level_filter(LevelFilter::MoreSevereEqual(level.into()));

    spdlog::set_default_logger(logger);

    Ok(())
}
