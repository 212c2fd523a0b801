//! Log setup resolved from the application config.
//!
//! [`LogSettings`] is a plain value: it can build a subscriber for a scope
//! (`tracing::subscriber::with_default`) or install it process-wide once at
//! startup.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(Error::Config(format!("Unknown log level: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Level, message, source file, module and line.
    Verbose,
    /// Level and message.
    Terse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LogSettings {
    /// An explicit level wins; otherwise `DEBUG` in debug mode and `WARNING`
    /// outside it. Anything that is not a known level name falls back to
    /// `ERROR`.
    pub fn resolve(level: Option<&str>, debug: bool) -> Self {
        let requested = match level.map(str::trim).filter(|l| !l.is_empty()) {
            Some(level) => level,
            None if debug => LogLevel::Debug.as_str(),
            None => LogLevel::Warning.as_str(),
        };

        match requested.parse::<LogLevel>() {
            Ok(LogLevel::Debug) => Self {
                level: LogLevel::Debug,
                format: LogFormat::Verbose,
            },
            Ok(level) => Self {
                level,
                format: LogFormat::Terse,
            },
            Err(_) => Self {
                level: LogLevel::Error,
                format: LogFormat::Terse,
            },
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::resolve(config.log_level.as_ref().map(LogLevel::as_str), config.debug)
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::default().add_directive(self.level.as_filter().into())
    }

    /// Subscriber writing to stderr.
    pub fn subscriber(&self) -> Box<dyn Subscriber + Send + Sync> {
        self.subscriber_with_writer(std::io::stderr)
    }

    pub fn subscriber_with_writer<W>(&self, writer: W) -> Box<dyn Subscriber + Send + Sync>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(self.env_filter())
                .with_ansi(false)
                .with_writer(writer)
                .event_format(LineFormat {
                    format: self.format,
                })
                .finish(),
        )
    }

    /// Installs the subscriber as the process-wide default. Only the first
    /// call succeeds.
    pub fn install(&self) -> Result<()> {
        self.subscriber()
            .try_init()
            .map_err(|e| Error::Config(format!("Logging is already configured: {}", e)))
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => LogLevel::Error.as_str(),
        Level::WARN => LogLevel::Warning.as_str(),
        Level::INFO => LogLevel::Info.as_str(),
        Level::DEBUG => LogLevel::Debug.as_str(),
        Level::TRACE => "TRACE",
    }
}

/// `LEVEL:     message`, with `  file:module:line` appended in verbose mode.
/// No timestamp, no colour.
struct LineFormat {
    format: LogFormat,
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(writer, "{}:     ", level_name(meta.level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        if self.format == LogFormat::Verbose {
            write!(
                writer,
                "  {}:{}:{}",
                meta.file().unwrap_or("<unknown>"),
                meta.module_path().unwrap_or_else(|| meta.target()),
                meta.line().unwrap_or(0)
            )?;
        }
        writeln!(writer)
    }
}
