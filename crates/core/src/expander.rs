//! Expansion of one observed logger name into its truncated ancestors.

use logscope_api::{ApiError, ApiResult, NameCandidate};

pub const SEPARATOR: char = '.';

/// Expands observed logger names below a base namespace into the ordered list
/// of ancestor candidates, shallowest first, bounded by `max_level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateExpander {
    base: String,
    max_level: usize,
    omit_leaf_class: bool,
}

impl CandidateExpander {
    pub fn new(base: impl Into<String>, max_level: usize, omit_leaf_class: bool) -> ApiResult<Self> {
        let base = base.into();
        validate_base(&base)?;
        Ok(Self {
            base,
            max_level,
            omit_leaf_class,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn omits_leaf_class(&self) -> bool {
        self.omit_leaf_class
    }

    /// Segments of `observed` below the base namespace, after the optional
    /// leaf-class omission. Empty when `observed` is the base itself.
    pub fn segments<'a>(&self, observed: &'a str) -> ApiResult<Vec<&'a str>> {
        if observed.is_empty() {
            return Err(ApiError::InvalidArgument(
                "observed logger name must not be empty".to_string(),
            ));
        }
        if observed == self.base {
            return Ok(Vec::new());
        }

        let suffix = observed
            .strip_prefix(self.base.as_str())
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .ok_or_else(|| ApiError::malformed(&self.base, observed))?;

        let mut segments: Vec<&str> = suffix.split(SEPARATOR).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ApiError::malformed(&self.base, observed));
        }

        if self.omit_leaf_class && segments.last().is_some_and(|s| is_leaf_class_segment(s)) {
            segments.pop();
        }
        Ok(segments)
    }

    pub fn expand(&self, observed: &str) -> ApiResult<Vec<NameCandidate>> {
        let segments = self.segments(observed)?;
        let depth = self.max_level.min(segments.len());

        let mut candidates = Vec::with_capacity(depth + 1);
        let mut name = self.base.clone();
        candidates.push(NameCandidate::new(name.clone(), 0)?);

        for (i, segment) in segments.iter().take(depth).enumerate() {
            name.push(SEPARATOR);
            name.push_str(segment);
            candidates.push(NameCandidate::new(name.clone(), i + 1)?);
        }
        Ok(candidates)
    }
}

/// One-shot expansion without keeping an expander around.
pub fn expand(
    base: &str,
    observed: &str,
    max_level: usize,
    omit_leaf_class: bool,
) -> ApiResult<Vec<NameCandidate>> {
    CandidateExpander::new(base, max_level, omit_leaf_class)?.expand(observed)
}

/// Class names start with an uppercase letter, package segments don't.
pub fn is_leaf_class_segment(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_uppercase)
}

pub fn validate_base(base: &str) -> ApiResult<()> {
    if base.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "base namespace must not be empty".to_string(),
        ));
    }
    if base.starts_with(SEPARATOR) || base.ends_with(SEPARATOR) {
        return Err(ApiError::InvalidArgument(format!(
            "base namespace '{}' must not start or end with '{}'",
            base, SEPARATOR
        )));
    }
    Ok(())
}
