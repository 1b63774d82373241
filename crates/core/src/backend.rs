use crate::error::LogscopeError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logging library whose loggers are being exposed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoggerBackend {
    #[default]
    Log4j,
    Logback,
}

impl LoggerBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerBackend::Log4j => "log4j",
            LoggerBackend::Logback => "logback",
        }
    }
}

impl fmt::Display for LoggerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerBackend {
    type Err = LogscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log4j" => Ok(LoggerBackend::Log4j),
            "logback" => Ok(LoggerBackend::Logback),
            _ => Err(LogscopeError::UnsupportedBackend(s.to_string())),
        }
    }
}
