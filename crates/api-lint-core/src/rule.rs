//! Rule trait for defining API style checks.

use crate::spec::ApiSpec;
use crate::types::{Severity, Violation};

/// A style-guideline rule evaluated against one parsed specification.
///
/// Implementations are stateless value objects: identity accessors return
/// fixed data and `evaluate` is a pure read-only traversal, so one rule
/// instance can be shared across threads and reused for any number of
/// specifications.
///
/// # Example
///
/// ```ignore
/// use api_lint_core::{ApiSpec, Rule, Severity, Violation};
///
/// pub struct NoEmptyPaths;
///
/// impl Rule for NoEmptyPaths {
///     fn code(&self) -> &'static str { "X001" }
///     fn title(&self) -> &'static str { "Paths must declare operations" }
///     fn url(&self) -> &'static str { "https://example.test/guidelines#x001" }
///     fn severity(&self) -> Severity { Severity::Must }
///
///     fn evaluate(&self, spec: &ApiSpec) -> Option<Violation> {
///         let locations: Vec<String> = spec
///             .paths
///             .iter()
///             .filter(|p| p.operations.is_empty())
///             .map(|p| p.name.clone())
///             .collect();
///         Violation::from_rule(self, "Path declares no operations", locations)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the unique rule code (e.g. "S004").
    ///
    /// Codes never change at runtime; the linter rejects duplicate codes
    /// at registration time.
    fn code(&self) -> &'static str;

    /// Returns the human-readable rule title.
    fn title(&self) -> &'static str;

    /// Returns the reference link to the guideline section.
    fn url(&self) -> &'static str;

    /// Returns the severity of the guideline this rule enforces.
    fn severity(&self) -> Severity;

    /// Evaluates the rule against one specification.
    ///
    /// Returns at most one violation covering every offending location, or
    /// `None` when the specification is clean. Never mutates the
    /// specification.
    fn evaluate(&self, spec: &ApiSpec) -> Option<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
