use crate::error::{ApiError, ApiResult};
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// An ancestor of an observed logger name, truncated to `level` segments
/// below the base namespace. Level 0 is the base namespace itself.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct NameCandidate {
    name: String,
    level: usize,
}

impl NameCandidate {
    pub fn new(name: impl Into<String>, level: usize) -> ApiResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "candidate name must not be empty".to_string(),
            ));
        }
        Ok(Self { name, level })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// The shallowest strict descendant of the base namespace groups
    /// everything expanded below it.
    pub fn is_group_candidate(&self) -> bool {
        self.level == 1
    }

    pub fn is_base(&self) -> bool {
        self.level == 0
    }
}

impl fmt::Display for NameCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.level)
    }
}
