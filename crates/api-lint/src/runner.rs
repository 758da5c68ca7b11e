//! Config-driven entry point for running the built-in rule sets.

use api_lint_core::{ApiSpec, Config, LintResult, Linter, LinterError, Severity};
use api_lint_rules::Preset;

/// Errors from assembling or running a configured check.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The configured preset name is not known.
    #[error("Unknown preset `{name}`. Valid presets: recommended, strict, minimal")]
    UnknownPreset {
        /// The unrecognized name.
        name: String,
    },

    /// The configured fail_on severity is not known.
    #[error("Unknown severity `{name}`. Valid values: must, should, may, hint")]
    UnknownSeverity {
        /// The unrecognized name.
        name: String,
    },

    /// The linter could not be assembled.
    #[error(transparent)]
    Linter(#[from] LinterError),
}

/// Runs the configured preset against one specification.
///
/// Preset and per-rule settings come from `config`; the preset defaults to
/// `recommended` when unset.
///
/// # Errors
///
/// Returns an error for an unknown preset name or duplicate rule codes.
pub fn run_checks(spec: &ApiSpec, config: &Config) -> Result<LintResult, CheckError> {
    let preset = resolve_preset(config)?;
    let linter = Linter::builder()
        .rule_boxes(preset.rules())
        .config(config.clone())
        .build()?;
    Ok(linter.check(spec))
}

/// Resolves the effective preset from the config, defaulting to recommended.
fn resolve_preset(config: &Config) -> Result<Preset, CheckError> {
    match config.preset.as_deref().unwrap_or("recommended") {
        "recommended" => Ok(Preset::Recommended),
        "strict" => Ok(Preset::Strict),
        "minimal" => Ok(Preset::Minimal),
        other => Err(CheckError::UnknownPreset {
            name: other.to_string(),
        }),
    }
}

/// Resolves the configured `fail_on` severity, defaulting to `must`.
///
/// # Errors
///
/// Returns an error for an unknown severity name.
pub fn resolve_fail_on(config: &Config) -> Result<Severity, CheckError> {
    match config.fail_on.as_deref().unwrap_or("must") {
        "must" => Ok(Severity::Must),
        "should" => Ok(Severity::Should),
        "may" => Ok(Severity::May),
        "hint" => Ok(Severity::Hint),
        other => Err(CheckError::UnknownSeverity {
            name: other.to_string(),
        }),
    }
}
