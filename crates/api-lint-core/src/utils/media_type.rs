//! Media-type classification for rule implementations.
//!
//! Two independent predicates decide whether a media-type string is
//! acceptable: membership in the standard JSON family, or a vendor-tree
//! type that carries an explicit version indicator. A media type that
//! satisfies neither is a violation candidate.
//!
//! The versioning grammar is fixed here: a `vnd.` vendor prefix, a `+json`
//! suffix, and either a `.v<digits>` name segment or a `version=` media-type
//! parameter. Type, subtype, and parameter names compare case-insensitively;
//! the version token is an opaque non-empty run of non-space, non-semicolon
//! characters.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical JSON media type.
pub const APPLICATION_JSON: &str = "application/json";

/// Canonical Problem+JSON media type (RFC 7807).
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Vendor-tree media type with a mandatory version indicator.
///
/// Accepts `application/vnd.<name>.v<digits>+json` and
/// `application/vnd.<name>+json;version=<token>`, nothing looser.
static VENDOR_VERSIONED: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"(?i)^application/vnd\.",
        r"[a-z0-9]+(?:[._-][a-z0-9]+)*", // vendor name, dot/hyphen/underscore labels
        r"(?:",
        r"\.v[0-9]+\+json",       // version as a name segment
        r"|",
        r"\+json\s*;\s*version=[^\s;]+", // version as a parameter
        r")$",
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid vendor media-type regex: {err}"),
    }
});

/// Returns true for the canonical JSON-family media types.
///
/// Exact allow-list match after trimming and ASCII-lowercasing: no
/// wildcards, no parameters.
#[must_use]
pub fn is_standard_json_family(media_type: &str) -> bool {
    let normalized = media_type.trim().to_ascii_lowercase();
    normalized == APPLICATION_JSON || normalized == APPLICATION_PROBLEM_JSON
}

/// Returns true for vendor-tree JSON media types carrying an explicit
/// version indicator.
///
/// Strings missing the `vnd.` prefix, the `+json` suffix, or a version
/// marker classify as non-versioned.
#[must_use]
pub fn is_custom_versioned_type(media_type: &str) -> bool {
    VENDOR_VERSIONED.is_match(media_type.trim())
}

/// Returns true when a media type is neither standard JSON-family nor a
/// versioned custom type.
///
/// Empty and malformed strings are violating: they satisfy neither allow
/// condition.
#[must_use]
pub fn is_violating_media_type(media_type: &str) -> bool {
    !is_standard_json_family(media_type) && !is_custom_versioned_type(media_type)
}
