//! # Validation Issues
//!
//! Structured violation reporting: a single [`Issue`] addresses one
//! violated constraint by dot-notation path; [`ValidationError`] carries
//! every issue found in one pass and is never constructed empty.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dot-notation path to the violating field in the input
    /// (`"period.start"`, `"tags[3]"`). Empty for root-level issues.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The error returned by strict validation entry points.
///
/// Carries every violation found across the whole input. The inner
/// list is never empty: the only constructor requires at least one
/// issue and the interpreter only fails when it collected some.
#[derive(Error, Debug, Clone)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Build an error from collected issues.
    ///
    /// Callers must not pass an empty list; the interpreter guarantees
    /// this and the debug assertion documents it.
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty(), "ValidationError requires issues");
        Self { issues }
    }

    /// Returns all violations in input order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} issue(s):", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

/// Discriminated result of a safe validation call.
///
/// Exactly one branch is populated; `Invalid` always carries at least
/// one issue (see [`ValidationError`]).
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// The input conformed; holds the normalized value.
    Valid(Value),
    /// The input violated at least one constraint.
    Invalid(ValidationError),
}

impl ValidationOutcome {
    /// True when validation succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The normalized value, when valid.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid(_) => None,
        }
    }

    /// The failure, when invalid.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Converts into a `Result` for callers that want `?` after all.
    pub fn into_result(self) -> Result<Value, ValidationError> {
        match self {
            Self::Valid(v) => Ok(v),
            Self::Invalid(e) => Err(e),
        }
    }
}

/// Groups a failure's messages by field path.
///
/// Paths appear in first-occurrence order within the map's sorted
/// keys; a field with several violations keeps them in input order.
pub fn extract_errors(failure: &ValidationError) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for issue in failure.issues() {
        map.entry(issue.path.clone())
            .or_default()
            .push(issue.message.clone());
    }
    map
}

/// Flattens a failure into display-ready lines.
///
/// Each entry is `"<path>: <message>"`, or just `"<message>"` when the
/// issue is attached to the root.
pub fn format_errors_for_display(failure: &ValidationError) -> Vec<String> {
    failure.issues().iter().map(|i| i.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ValidationError {
        ValidationError::new(vec![
            Issue::new("name", "too short"),
            Issue::new("email", "bad format"),
            Issue::new("email", "too long"),
            Issue::new("", "object-level rule violated"),
        ])
    }

    #[test]
    fn extract_groups_by_path() {
        let map = extract_errors(&failure());
        assert_eq!(map["name"], vec!["too short"]);
        assert_eq!(map["email"], vec!["bad format", "too long"]);
        assert_eq!(map[""], vec!["object-level rule violated"]);
    }

    #[test]
    fn display_lines_omit_empty_path() {
        let lines = format_errors_for_display(&failure());
        assert_eq!(
            lines,
            vec![
                "name: too short",
                "email: bad format",
                "email: too long",
                "object-level rule violated",
            ]
        );
    }

    #[test]
    fn error_display_counts_issues() {
        let text = failure().to_string();
        assert!(text.starts_with("validation failed with 4 issue(s):"));
        assert!(text.contains("\n  name: too short"));
    }
}
