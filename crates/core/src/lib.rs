pub mod backend;
pub mod config;
pub mod discovery;
pub mod error;
pub mod expander;
pub mod logging;
pub mod managed;
pub mod registry;
pub mod selector;
pub mod source;

pub use backend::LoggerBackend;
pub use config::ExposureConfig;
pub use discovery::{Discovery, DiscoveryReport};
pub use error::{LogscopeError, Result};
pub use expander::{CandidateExpander, expand};
pub use managed::{LogLevel, ManagedLogger, ManagedLoggerTable};
pub use registry::ExposedLoggerRegistry;
pub use selector::{NamespaceSelector, select_for};
pub use source::StaticNameSource;
