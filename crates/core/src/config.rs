//! Exposure settings, read from JSON.
//!
//! ```json
//! { "name": "org.foo", "levels": 2, "omit-class-loggers": true, "backend": "logback" }
//! ```

use crate::backend::LoggerBackend;
use crate::discovery::Discovery;
use crate::error::{LogscopeError, Result};
use crate::selector::NamespaceSelector;
use logscope_api::DEFAULT_DOMAIN;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct ExposureConfig {
    /// Base namespace to expose loggers under
    pub name: String,
    /// Nesting depth below the base namespace
    pub levels: i64,
    /// Drop a trailing class-like segment before truncating
    #[serde(default)]
    pub omit_class_loggers: bool,
    /// Logging library the loggers belong to ("log4j" or "logback")
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Prefix of every registration key
    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_backend() -> String {
    LoggerBackend::default().to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

impl ExposureConfig {
    pub fn new(name: impl Into<String>, levels: i64) -> Self {
        Self {
            name: name.into(),
            levels,
            omit_class_loggers: false,
            backend: default_backend(),
            domain: default_domain(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn backend(&self) -> Result<LoggerBackend> {
        self.backend.parse()
    }

    pub fn selector(&self) -> Result<NamespaceSelector> {
        Ok(NamespaceSelector::new(
            self.name.as_str(),
            self.levels,
            self.omit_class_loggers,
        )?)
    }

    pub fn validate(&self) -> Result<()> {
        self.selector()?;
        self.backend()?;
        if self.domain.trim().is_empty() {
            return Err(LogscopeError::Config(
                "registration domain must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn discovery(&self) -> Result<Discovery> {
        self.validate()?;
        Ok(Discovery::new(self.selector()?).with_domain(self.domain.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logscope_api::ApiError;

    #[test]
    fn test_defaults() {
        let config = ExposureConfig::from_json(r#"{ "name": "org.foo", "levels": 2 }"#).unwrap();

        assert_eq!(config, ExposureConfig::new("org.foo", 2));
        assert_eq!(config.backend().unwrap(), LoggerBackend::Log4j);
        assert_eq!(config.domain, "Spring JMX loggers");
    }

    #[test]
    fn test_kebab_case_keys() {
        let config = ExposureConfig::from_json(
            r#"{ "name": "org.foo", "levels": 1, "omit-class-loggers": true, "backend": "Logback" }"#,
        )
        .unwrap();

        assert!(config.omit_class_loggers);
        assert_eq!(config.backend().unwrap(), LoggerBackend::Logback);
        assert!(config.selector().unwrap().expander().omits_leaf_class());
    }

    #[test]
    fn test_missing_levels_is_json_error() {
        let err = ExposureConfig::from_json(r#"{ "name": "org.foo" }"#).unwrap_err();
        assert!(matches!(err, LogscopeError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ExposureConfig::new("org.foo", -1);
        assert!(matches!(
            config.validate(),
            Err(LogscopeError::Api(ApiError::InvalidArgument(_)))
        ));

        config.levels = 1;
        config.backend = "jul".to_string();
        assert!(matches!(
            config.validate(),
            Err(LogscopeError::UnsupportedBackend(_))
        ));

        config.backend = "log4j".to_string();
        config.domain = " ".to_string();
        assert!(matches!(config.validate(), Err(LogscopeError::Config(_))));

        config.domain = "loggers".to_string();
        config.name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discovery_uses_domain() {
        let mut config = ExposureConfig::new("org.foo", 1);
        config.domain = "loggers".to_string();

        let discovery = config.discovery().unwrap();
        assert_eq!(discovery.domain(), "loggers");
        assert_eq!(discovery.selector().base(), "org.foo");
    }
}
