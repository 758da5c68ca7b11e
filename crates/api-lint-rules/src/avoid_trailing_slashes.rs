//! Rule to forbid trailing slashes in path names.
//!
//! # Rationale
//!
//! `/orders` and `/orders/` look like two different resources to routers,
//! caches, and client generators. Guidelines mandate one canonical form
//! without the trailing slash.

use api_lint_core::{ApiSpec, Rule, Severity, Violation};

/// Rule code for avoid-trailing-slashes.
pub const CODE: &str = "S001";

/// Rule title for avoid-trailing-slashes.
pub const TITLE: &str = "Avoid trailing slashes";

const URL: &str = "https://zalando.github.io/restful-api-guidelines/resources/Resources.html#must-avoid-trailing-slashes";

const DESCRIPTION: &str = "Path names must not end with a trailing slash";

/// Flags path names ending with `/`. The bare root path `/` is exempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidTrailingSlashes;

impl AvoidTrailingSlashes {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AvoidTrailingSlashes {
    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn url(&self) -> &'static str {
        URL
    }

    fn severity(&self) -> Severity {
        Severity::Must
    }

    fn evaluate(&self, spec: &ApiSpec) -> Option<Violation> {
        let locations: Vec<String> = spec
            .paths
            .iter()
            .filter(|path| path.name.len() > 1 && path.name.ends_with('/'))
            .map(|path| path.name.clone())
            .collect();

        Violation::from_rule(self, DESCRIPTION, locations)
    }
}
