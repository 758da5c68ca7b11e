//! # api-lint-core
//!
//! Core framework for linting parsed API specifications against style
//! guidelines.
//!
//! This crate provides the foundational traits and types for building API
//! linters. It includes:
//!
//! - [`Rule`] trait for guideline checks over a parsed specification
//! - [`ApiSpec`] read-only specification model
//! - [`Violation`] for representing findings
//! - [`Linter`] for running a set of rules
//! - media-type classification helpers in [`utils`]
//!
//! ## Example
//!
//! ```ignore
//! use api_lint_core::{ApiSpec, Linter};
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = linter.check(&spec);
//! println!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod rule;
mod spec;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{Linter, LinterBuilder, LinterError};
pub use rule::{Rule, RuleBox};
pub use spec::{ApiSpec, Operation, OperationEntry, PathEntry};
pub use types::{LintResult, Severity, Violation};
