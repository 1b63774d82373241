//! Thread-safe record of loggers already exposed.
//!
//! Membership is by name only: a name is exposed once, under whichever group
//! it was first discovered with.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use logscope_api::{ExposedLogger, NameCandidate};

#[derive(Debug, Default)]
pub struct ExposedLoggerRegistry {
    /// Exposed loggers keyed by logger name
    loggers: DashMap<String, ExposedLogger>,
}

impl ExposedLoggerRegistry {
    pub fn new() -> Self {
        Self {
            loggers: DashMap::new(),
        }
    }

    /// Seed from loggers exposed earlier. The first entry per name wins.
    pub fn from_loggers(loggers: impl IntoIterator<Item = ExposedLogger>) -> Self {
        let registry = Self::new();
        for logger in loggers {
            registry.insert_if_absent(logger);
        }
        registry
    }

    pub fn contains_logger_for(&self, candidate: &NameCandidate) -> bool {
        self.contains_name(candidate.name())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// Atomically insert `logger` unless one with the same name is present.
    /// Returns whether it was inserted.
    pub fn insert_if_absent(&self, logger: ExposedLogger) -> bool {
        match self.loggers.entry(logger.name().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(logger);
                true
            }
        }
    }

    /// Release a name, e.g. when registering its logger failed.
    pub fn remove(&self, name: &str) -> Option<ExposedLogger> {
        self.loggers.remove(name).map(|(_, logger)| logger)
    }

    pub fn get(&self, name: &str) -> Option<ExposedLogger> {
        self.loggers.get(name).map(|l| l.clone())
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Snapshot of all exposed loggers, sorted by name.
    pub fn loggers(&self) -> Vec<ExposedLogger> {
        let mut loggers: Vec<ExposedLogger> =
            self.loggers.iter().map(|entry| entry.value().clone()).collect();
        loggers.sort_by(|a, b| a.name().cmp(b.name()));
        loggers
    }
}
