//! One discovery pass: enumerate logger names, select the ones to expose and
//! hand each to a registration sink.

use crate::registry::ExposedLoggerRegistry;
use crate::selector::NamespaceSelector;
use logscope_api::{
    ApiResult, DEFAULT_DOMAIN, ExposedLogger, LoggerNameSource, RegistrationSink,
};
use serde::Serialize;
use tracing::{debug, info, trace, warn};

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Logger names the source reported
    pub observed: usize,
    /// Newly exposed loggers, in discovery order
    pub exposed: Vec<ExposedLogger>,
    /// Registration keys handed to the sink, parallel to `exposed`
    pub registered: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Discovery {
    selector: NamespaceSelector,
    domain: String,
}

impl Discovery {
    pub fn new(selector: NamespaceSelector) -> Self {
        Self {
            selector,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn selector(&self) -> &NamespaceSelector {
        &self.selector
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Names are processed in source order. Each logger claims its name in
    /// `registry` before it is handed to the sink and gives the name back if
    /// the sink refuses it, so `registry` only ever holds registered loggers.
    /// A sink failure stops the pass.
    pub fn run(
        &self,
        source: &dyn LoggerNameSource,
        registry: &ExposedLoggerRegistry,
        sink: &mut dyn RegistrationSink,
    ) -> ApiResult<DiscoveryReport> {
        let names = source.logger_names(self.selector.base());
        let mut report = DiscoveryReport {
            observed: names.len(),
            ..Default::default()
        };

        for name in &names {
            for logger in self.selector.grouped(name)? {
                if !registry.insert_if_absent(logger.clone()) {
                    trace!(name = logger.name(), "logger already exposed");
                    continue;
                }

                let key = logger.registration_key_in(&self.domain);
                if let Err(e) = sink.register(&key, &logger) {
                    warn!(%key, "registration failed: {}", e);
                    registry.remove(logger.name());
                    return Err(e);
                }
                debug!(%key, "registered logger");
                report.registered.push(key);
                report.exposed.push(logger);
            }
        }

        info!(
            base = self.selector.base(),
            observed = report.observed,
            exposed = report.exposed.len(),
            "discovery pass finished"
        );
        Ok(report)
    }
}
