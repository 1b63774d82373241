//! Seams to the systems around selection: where logger names come from and
//! where exposed loggers end up.

use crate::error::ApiResult;
use crate::models::ExposedLogger;

/// Enumerates logger names currently known to a logging backend.
pub trait LoggerNameSource: Send + Sync {
    /// All known names equal to `base` or nested below it as a dotted path.
    fn logger_names(&self, base: &str) -> Vec<String>;
}

/// Receives exposed loggers, keyed by their registration key.
pub trait RegistrationSink: Send {
    fn register(&mut self, key: &str, logger: &ExposedLogger) -> ApiResult<()>;
}
