pub mod collaborator;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use collaborator::{LoggerNameSource, RegistrationSink};
pub use error::{ApiError, ApiResult};
pub use models::*;
