//! Selection of newly exposed loggers from observed logger names.
//!
//! Given a base namespace `org.foo` and a depth of 2, every observed logger
//! below `org.foo` contributes `org.foo`, its first nested package and its
//! second nested package. Level-1 ancestors group the deeper entries, and the
//! shared registry guarantees each name is exposed once.

use crate::expander::CandidateExpander;
use crate::registry::ExposedLoggerRegistry;
use indexmap::IndexSet;
use logscope_api::{ApiError, ApiResult, ExposedLogger, NameCandidate};
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSelector {
    expander: CandidateExpander,
}

impl NamespaceSelector {
    pub fn new(base: impl Into<String>, max_level: i64, omit_leaf_class: bool) -> ApiResult<Self> {
        let max_level = usize::try_from(max_level).map_err(|_| {
            ApiError::InvalidArgument(format!(
                "maximum level must not be negative, got {}",
                max_level
            ))
        })?;
        Ok(Self::from_expander(CandidateExpander::new(
            base,
            max_level,
            omit_leaf_class,
        )?))
    }

    pub fn from_expander(expander: CandidateExpander) -> Self {
        Self { expander }
    }

    pub fn expander(&self) -> &CandidateExpander {
        &self.expander
    }

    pub fn base(&self) -> &str {
        self.expander.base()
    }

    /// Newly exposed loggers for a single observed name.
    pub fn select(
        &self,
        observed: &str,
        registry: &ExposedLoggerRegistry,
    ) -> ApiResult<IndexSet<ExposedLogger>> {
        self.select_all([observed], registry)
    }

    /// Newly exposed loggers for all observed names, in discovery order.
    ///
    /// Every name is expanded before the registry is touched, so a rejected
    /// name leaves the registry unchanged.
    pub fn select_all<I, S>(
        &self,
        observed: I,
        registry: &ExposedLoggerRegistry,
    ) -> ApiResult<IndexSet<ExposedLogger>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expansions = observed
            .into_iter()
            .map(|name| self.grouped(name.as_ref()))
            .collect::<ApiResult<Vec<_>>>()?;

        let mut exposed = IndexSet::new();
        for logger in expansions.into_iter().flatten() {
            if registry.insert_if_absent(logger.clone()) {
                debug!(name = logger.name(), group = ?logger.group(), "exposing logger");
                exposed.insert(logger);
            } else {
                trace!(name = logger.name(), "logger already exposed");
            }
        }
        Ok(exposed)
    }

    /// Every candidate of `observed` paired with its level-1 group, shallowest
    /// first. The registry is not consulted.
    pub fn grouped(&self, observed: &str) -> ApiResult<Vec<ExposedLogger>> {
        let candidates = self.expander.expand(observed)?;
        let mut group: Option<&NameCandidate> = None;

        Ok(candidates
            .iter()
            .map(|candidate| {
                if candidate.is_group_candidate() {
                    group = Some(candidate);
                }
                ExposedLogger::from_candidate(candidate, group)
            })
            .collect())
    }

    /// Candidate names for one observed logger, minus the ones already found.
    pub fn names_for<I, S>(&self, observed: &str, already_found: I) -> ApiResult<IndexSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let already_found: HashSet<String> = already_found
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        Ok(self
            .expander
            .expand(observed)?
            .into_iter()
            .map(|c| c.name().to_string())
            .filter(|name| !already_found.contains(name))
            .collect())
    }
}

/// Run a single selection without building a selector up front.
pub fn select_for<I, S>(
    base: &str,
    observed: I,
    max_level: i64,
    omit_leaf_class: bool,
    registry: &ExposedLoggerRegistry,
) -> ApiResult<IndexSet<ExposedLogger>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NamespaceSelector::new(base, max_level, omit_leaf_class)?.select_all(observed, registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(loggers: &IndexSet<ExposedLogger>) -> Vec<(&str, Option<&str>)> {
        loggers.iter().map(|l| (l.name(), l.group())).collect()
    }

    #[test]
    fn test_group_attachment() {
        let registry = ExposedLoggerRegistry::new();
        let result = select_for("org.foo", ["org.foo.bar.FooBar"], 2, true, &registry).unwrap();

        assert_eq!(
            pairs(&result),
            vec![("org.foo", None), ("org.foo.bar", Some("org.foo.bar"))]
        );
    }

    #[test]
    fn test_deeper_entries_share_level_one_group() {
        let registry = ExposedLoggerRegistry::new();
        let result = select_for("org.a", ["org.a.b.c.MyClass"], 2, true, &registry).unwrap();

        assert_eq!(
            pairs(&result),
            vec![
                ("org.a", None),
                ("org.a.b", Some("org.a.b")),
                ("org.a.b.c", Some("org.a.b")),
            ]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_rediscovery_is_empty() {
        let registry = ExposedLoggerRegistry::new();
        let selector = NamespaceSelector::new("org.a", 3, true).unwrap();
        let names = ["org.a.b.C", "org.a.x.y.Z", "org.a"];

        let first = selector.select_all(names, &registry).unwrap();
        assert!(!first.is_empty());

        let second = selector.select_all(names, &registry).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_overlapping_names_return_only_new() {
        let registry = ExposedLoggerRegistry::new();
        let selector = NamespaceSelector::new("org.a", 2, true).unwrap();

        selector.select("org.a.b.Foo", &registry).unwrap();
        let result = selector.select_all(["org.a.b.Bar", "org.a.c.Baz"], &registry).unwrap();

        assert_eq!(pairs(&result), vec![("org.a.c", Some("org.a.c"))]);
    }

    #[test]
    fn test_first_group_wins_for_duplicate_names() {
        let registry = ExposedLoggerRegistry::from_loggers([ExposedLogger::new(
            "org.a.b",
            Some("legacy".to_string()),
        )
        .unwrap()]);

        let result = select_for("org.a", ["org.a.b.c"], 2, false, &registry).unwrap();

        // org.a.b is suppressed, but still groups org.a.b.c
        assert_eq!(
            pairs(&result),
            vec![("org.a", None), ("org.a.b.c", Some("org.a.b"))]
        );
        assert_eq!(registry.get("org.a.b").unwrap().group(), Some("legacy"));
    }

    #[test]
    fn test_zero_depth_exposes_only_base() {
        let registry = ExposedLoggerRegistry::new();
        let result =
            select_for("org.a", ["org.a.b.c.D", "org.a.e"], 0, true, &registry).unwrap();
        assert_eq!(pairs(&result), vec![("org.a", None)]);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let registry = ExposedLoggerRegistry::new();
        let err = select_for("org.a", ["org.a.b"], -1, true, &registry).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejected_name_leaves_registry_untouched() {
        let registry = ExposedLoggerRegistry::new();
        let selector = NamespaceSelector::new("org.a", 2, true).unwrap();

        let err = selector
            .select_all(["org.a.b.C", "com.elsewhere.D"], &registry)
            .unwrap_err();
        assert_eq!(err, ApiError::malformed("org.a", "com.elsewhere.D"));
        assert!(registry.is_empty());

        assert!(matches!(
            selector.select_all(["org.a.b", ""], &registry),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_grouped_ignores_registry_state() {
        let selector = NamespaceSelector::new("org.a", 2, true).unwrap();
        let registry = ExposedLoggerRegistry::new();
        selector.select("org.a.b.c.MyClass", &registry).unwrap();

        let grouped = selector.grouped("org.a.b.c.MyClass").unwrap();
        let pairs: Vec<(&str, Option<&str>)> =
            grouped.iter().map(|l| (l.name(), l.group())).collect();
        assert_eq!(
            pairs,
            vec![
                ("org.a", None),
                ("org.a.b", Some("org.a.b")),
                ("org.a.b.c", Some("org.a.b")),
            ]
        );
    }

    #[test]
    fn test_names_for() {
        let selector = NamespaceSelector::new("org.springframework", 2, false).unwrap();
        let observed = "org.springframework.jmx.config.LoggerSelectorUnitTest";

        let names = selector.names_for(observed, Vec::<String>::new()).unwrap();
        assert_eq!(names.len(), 3);
        assert!(names.contains("org.springframework"));
        assert!(names.contains("org.springframework.jmx"));
        assert!(names.contains("org.springframework.jmx.config"));

        let names = selector
            .names_for(observed, ["org.springframework", "org.springframework.jmx"])
            .unwrap();
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["org.springframework.jmx.config".to_string()]
        );
    }
}
