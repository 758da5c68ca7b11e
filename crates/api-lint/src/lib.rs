//! # api-lint
//!
//! Style linter for parsed API specifications - catches guideline
//! violations before review does.
//!
//! This facade crate bundles the framework ([`api_lint_core`]) with the
//! built-in rules ([`api_lint_rules`]) and a config-driven entry point.
//!
//! ## Example
//!
//! ```
//! use api_lint::{run_checks, ApiSpec, Config, Operation, OperationEntry};
//!
//! let spec = ApiSpec::new().path(
//!     "/orders",
//!     vec![OperationEntry::new(
//!         "POST",
//!         Operation::new().consumes(["application/vnd.acme+json"]),
//!     )],
//! );
//!
//! let result = run_checks(&spec, &Config::default()).expect("valid config");
//! assert_eq!(result.violations.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod runner;

pub use runner::{resolve_fail_on, run_checks, CheckError};

pub use api_lint_core::{
    ApiSpec, Config, ConfigError, LintResult, Linter, LinterBuilder, LinterError, Operation,
    OperationEntry, PathEntry, Rule, RuleBox, RuleConfig, Severity, Violation,
};
pub use api_lint_rules::{
    all_rules, minimal_rules, recommended_rules, strict_rules, AvoidTrailingSlashes,
    MediaTypesRule, Preset,
};
