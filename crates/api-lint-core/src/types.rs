//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};

/// Severity level for lint rules, following guideline keyword usage.
///
/// Ordering is by importance: `Hint` lowest, `Must` highest. Reports rank
/// violations by this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Editorial hint, lowest importance.
    Hint,
    /// Optional guideline (MAY).
    May,
    /// Recommended guideline (SHOULD).
    Should,
    /// Mandatory guideline (MUST).
    Must,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::May => write!(f, "may"),
            Self::Should => write!(f, "should"),
            Self::Must => write!(f, "must"),
        }
    }
}

/// A guideline violation found in one specification.
///
/// Immutable once constructed; carries the identity of the rule that
/// produced it plus at least one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g. "S004").
    pub code: String,
    /// Rule title (e.g. "Prefer standard media type names").
    pub title: String,
    /// Severity of the violated guideline.
    pub severity: Severity,
    /// Reference link to the guideline section.
    pub url: String,
    /// Why the rule matched.
    pub description: String,
    /// Offending locations (`"<path> <verb>"` or path names), in
    /// specification enumeration order.
    pub locations: Vec<String>,
}

impl Violation {
    /// Creates a violation for `rule` if `locations` is non-empty.
    ///
    /// Returns `None` for an empty location list, so a violation that
    /// points at nothing can never exist. Rules return this directly from
    /// their evaluation.
    #[must_use]
    pub fn from_rule(
        rule: &dyn crate::Rule,
        description: impl Into<String>,
        locations: Vec<String>,
    ) -> Option<Self> {
        if locations.is_empty() {
            return None;
        }
        Some(Self {
            code: rule.code().to_string(),
            title: rule.title().to_string(),
            severity: rule.severity(),
            url: rule.url().to_string(),
            description: description.into(),
            locations,
        })
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{} {} [{}]\n", self.code, self.title, self.severity);
        let _ = writeln!(output, "  {}", self.description);
        for location in &self.locations {
            let _ = writeln!(output, "  at {location}");
        }
        let _ = writeln!(output, "  = see: {}", self.url);
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {}: {} ({} location(s))",
            self.severity,
            self.code,
            self.title,
            self.description,
            self.locations.len()
        )
    }
}

/// Result of running a set of rules against one specification.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, ranked by descending severity then code.
    pub violations: Vec<Violation>,
    /// Number of rules evaluated.
    pub rules_run: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any violation meets or exceeds `severity`.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations filtered by exact severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations as `(must, should, may, hint)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize, usize) {
        let count = |s: Severity| self.violations.iter().filter(|v| v.severity == s).count();
        (
            count(Severity::Must),
            count(Severity::Should),
            count(Severity::May),
            count(Severity::Hint),
        )
    }

    /// Formats a plain-text report of all violations.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for violation in &self.violations {
            let _ = writeln!(report, "{}", violation.format());
        }

        let (must, should, may, hint) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {must} must, {should} should, {may} may, {hint} hint violation(s) from {} rule(s)",
            self.rules_run
        );
        report
    }
}
