//! # api-lint-rules
//!
//! Built-in style rules for api-lint.
//!
//! This crate provides guideline rules evaluated against a parsed API
//! specification.
//!
//! ## Available Rules
//!
//! | Code | Title | Severity |
//! |------|-------|----------|
//! | S001 | Avoid trailing slashes | must |
//! | S004 | Prefer standard media type names | should |
//!
//! ## Usage
//!
//! ```ignore
//! use api_lint_core::Linter;
//! use api_lint_rules::{AvoidTrailingSlashes, MediaTypesRule};
//!
//! let linter = Linter::builder()
//!     .rule(AvoidTrailingSlashes::new())
//!     .rule(MediaTypesRule::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod avoid_trailing_slashes;
mod media_types;
mod presets;

pub use avoid_trailing_slashes::AvoidTrailingSlashes;
pub use media_types::MediaTypesRule;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use api_lint_core::{Rule, Severity, Violation};
