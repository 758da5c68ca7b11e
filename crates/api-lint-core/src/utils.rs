//! Utility functions for rule implementations.

pub mod media_type;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use media_type::{is_custom_versioned_type, is_standard_json_family, is_violating_media_type};
