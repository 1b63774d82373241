use super::candidate::NameCandidate;
use crate::error::{ApiError, ApiResult};
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Registration namespace every exposed logger key is built under.
pub const DEFAULT_DOMAIN: &str = "Spring JMX loggers";

/// A logger selected for exposure, with the level-1 ancestor it is grouped
/// under. Loggers at the base namespace carry no group.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ExposedLogger {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
}

impl ExposedLogger {
    pub fn new(name: impl Into<String>, group: Option<String>) -> ApiResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "exposed logger name must not be empty".to_string(),
            ));
        }
        Ok(Self { name, group })
    }

    /// Build from an already validated candidate and the group candidate in
    /// effect when it was expanded.
    pub fn from_candidate(candidate: &NameCandidate, group: Option<&NameCandidate>) -> Self {
        Self {
            name: candidate.name().to_string(),
            group: group.map(|g| g.name().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Key under the default registration domain.
    pub fn registration_key(&self) -> String {
        self.registration_key_in(DEFAULT_DOMAIN)
    }

    /// Key of the form `<domain>:name=<name>[,type=<group>]`.
    pub fn registration_key_in(&self, domain: &str) -> String {
        let mut key = String::with_capacity(
            domain.len() + self.name.len() + self.group.as_ref().map_or(0, |g| g.len() + 6) + 6,
        );
        key.push_str(domain);
        key.push_str(":name=");
        key.push_str(&self.name);

        if let Some(group) = &self.group {
            key.push_str(",type=");
            key.push_str(group);
        }
        key
    }
}

impl fmt::Display for ExposedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.registration_key())
    }
}
