use crate::prelude::*;
use derive_more::{Deref, Display, IntoIterator};
use std::fmt;

///
/// Severity
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: at {}: {}", self.severity, self.location, self.message)
    }
}

///
/// Diagnostics
///
/// Ordered, append-only list shared by every phase of a run. A diagnostic
/// identical to one already recorded is dropped.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, location: impl Into<String>, message: String) {
        let location = location.into();
        if self
            .0
            .iter()
            .any(|d| d.severity == severity && d.location == location && d.message == message)
        {
            return;
        }

        match severity {
            Severity::Warning => tracing::warn!(location = location.as_str(), "{message}"),
            Severity::Error => tracing::error!(location = location.as_str(), "{message}"),
        }

        self.0.push(Diagnostic {
            severity,
            location,
            message,
        });
    }

    pub fn error(&mut self, location: impl Into<String>, message: String) {
        self.push(Severity::Error, location, message);
    }

    pub fn warning(&mut self, location: impl Into<String>, message: String) {
        self.push(Severity::Warning, location, message);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.0.iter().filter(|d| d.severity == severity).count()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_format_and_preserve_order() {
        let mut diags = Diagnostics::new();
        warning!(diags, "Order.lines", "type {} not found", "Line");
        err!(diags, "Order", "no identifier field");

        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].to_string(), "warning: at Order.lines: type Line not found");
        assert!(diags.has_errors());
        assert_eq!(diags.count(Severity::Error), 1);
    }

    #[test]
    fn repeated_diagnostics_are_recorded_once() {
        let mut diags = Diagnostics::new();
        for _ in 0..3 {
            warning!(diags, "Node.children", "branch omitted");
        }
        warning!(diags, "Node.parent", "branch omitted");
        err!(diags, "Node.children", "branch omitted");

        assert_eq!(diags.len(), 3);
        assert_eq!(diags.count(Severity::Warning), 2);
    }

    #[test]
    fn empty_list_has_no_errors() {
        let diags = Diagnostics::new();

        assert!(diags.is_empty());
        assert!(!diags.has_errors());
    }
}
