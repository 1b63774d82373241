#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Malformed logger name: '{observed}' is not under base namespace '{base}'")]
    MalformedName { base: String, observed: String },
    #[error("Registration failed: {0}")]
    Registration(String),
}

impl ApiError {
    pub fn malformed(base: &str, observed: &str) -> Self {
        ApiError::MalformedName {
            base: base.to_string(),
            observed: observed.to_string(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
