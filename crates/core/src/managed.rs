//! Runtime level control for exposed loggers.

use crate::backend::LoggerBackend;
use indexmap::IndexMap;
use logscope_api::{ApiError, ApiResult, ExposedLogger, RegistrationSink};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    All,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::All => "ALL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(LogLevel::Off),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "ALL" => Ok(LogLevel::All),
            _ => Err(ApiError::InvalidArgument(format!("unknown log level '{}'", s))),
        }
    }
}

/// A registered logger whose level can be read and changed at runtime.
/// An unset level means the logger inherits from its parent.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagedLogger {
    pub name: String,
    pub group: Option<String>,
    pub backend: LoggerBackend,
    pub level: Option<LogLevel>,
}

impl ManagedLogger {
    pub fn new(logger: &ExposedLogger, backend: LoggerBackend) -> Self {
        Self {
            name: logger.name().to_string(),
            group: logger.group().map(str::to_string),
            backend,
            level: None,
        }
    }

    /// Level as shown to operators; empty while inherited.
    pub fn level_label(&self) -> &'static str {
        self.level.map_or("", |l| l.as_str())
    }

    /// Apply a level given as text. Unrecognised input is ignored rather than
    /// silently mapped to some default level. Returns whether the level changed.
    pub fn set_level(&mut self, level: &str) -> bool {
        match level.parse::<LogLevel>() {
            Ok(parsed) => {
                let changed = self.level != Some(parsed);
                self.level = Some(parsed);
                changed
            }
            Err(_) => {
                warn!(logger = %self.name, requested = level, "ignoring unknown log level");
                false
            }
        }
    }
}

/// In-memory registration sink holding one managed logger per key.
#[derive(Debug, Default)]
pub struct ManagedLoggerTable {
    backend: LoggerBackend,
    entries: IndexMap<String, ManagedLogger>,
}

impl ManagedLoggerTable {
    pub fn new(backend: LoggerBackend) -> Self {
        Self {
            backend,
            entries: IndexMap::new(),
        }
    }

    pub fn backend(&self) -> LoggerBackend {
        self.backend
    }

    pub fn get(&self, key: &str) -> Option<&ManagedLogger> {
        self.entries.get(key)
    }

    /// Change the level of the logger registered under `key`.
    pub fn set_level(&mut self, key: &str, level: &str) -> ApiResult<bool> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| ApiError::InvalidArgument(format!("no logger registered as '{}'", key)))?;
        Ok(entry.set_level(level))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManagedLogger)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegistrationSink for ManagedLoggerTable {
    fn register(&mut self, key: &str, logger: &ExposedLogger) -> ApiResult<()> {
        if self.entries.contains_key(key) {
            return Err(ApiError::Registration(format!(
                "'{}' is already registered",
                key
            )));
        }
        debug!(key, backend = %self.backend, "registering managed logger");
        self.entries
            .insert(key.to_string(), ManagedLogger::new(logger, self.backend));
        Ok(())
    }
}
