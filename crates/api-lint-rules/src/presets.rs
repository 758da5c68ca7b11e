//! Rule presets for common configurations.

use crate::{AvoidTrailingSlashes, MediaTypesRule};
use api_lint_core::RuleBox;

/// Preset configurations for api-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// All rules, for strict guideline enforcement.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `S001` avoid-trailing-slashes
/// - `S004` prefer-standard-media-types
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(AvoidTrailingSlashes::new()),
        Box::new(MediaTypesRule::new()),
    ]
}

/// Returns the strict set of rules (currently every built-in rule).
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes the MUST-level `S001`.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(AvoidTrailingSlashes::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(AvoidTrailingSlashes::new()),
        Box::new(MediaTypesRule::new()),
    ]
}
