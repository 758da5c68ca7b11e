//! Rule to prefer standard media type names.
//!
//! # Rationale
//!
//! APIs should represent payloads as `application/json` (or
//! `application/problem+json` for errors). Custom media types fragment
//! tooling and clients; the one accepted reason to use them is explicit
//! content-negotiation-based versioning, which the vendor-tree versioned
//! grammar expresses.
//!
//! # Detected Patterns
//!
//! An operation whose `produces` or `consumes` lists any media type that is
//! neither standard JSON-family nor a vendor type with a version indicator,
//! e.g. `application/xml` or `application/vnd.acme+json` without a version.

use api_lint_core::utils::is_violating_media_type;
use api_lint_core::{ApiSpec, Rule, Severity, Violation};
use tracing::debug;

/// Rule code for prefer-standard-media-types.
pub const CODE: &str = "S004";

/// Rule title for prefer-standard-media-types.
pub const TITLE: &str = "Prefer standard media type names";

const URL: &str = "https://zalando.github.io/restful-api-guidelines/data-formats/DataFormats.html#should-prefer-standard-media-type-name-applicationjson";

const DESCRIPTION: &str = "Custom media types should only be used for versioning";

/// Flags operations declaring non-standard, unversioned media types.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaTypesRule;

impl MediaTypesRule {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MediaTypesRule {
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
        Severity::Should
    }

    fn evaluate(&self, spec: &ApiSpec) -> Option<Violation> {
        // produces first, then consumes; duplicates stay, the operation is
        // still listed once
        let locations: Vec<String> = spec
            .operations()
            .filter(|(_, _, operation)| {
                operation
                    .produces
                    .iter()
                    .chain(operation.consumes.iter())
                    .any(|media_type| is_violating_media_type(media_type))
            })
            .map(|(path, verb, _)| format!("{path} {verb}"))
            .collect();

        if !locations.is_empty() {
            debug!("{CODE}: {} offending operation(s)", locations.len());
        }
        Violation::from_rule(self, DESCRIPTION, locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_lint_core::{Operation, OperationEntry};

    fn spec_with_media_types(produces: &[&str], consumes: &[&str]) -> ApiSpec {
        ApiSpec::new().path(
            "/pets",
            vec![OperationEntry::new(
                "GET",
                Operation::new()
                    .produces(produces.iter().copied())
                    .consumes(consumes.iter().copied()),
            )],
        )
    }

    #[test]
    fn standard_json_passes() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(&["application/json"], &["application/problem+json"]);
        assert!(rule.evaluate(&spec).is_none());
    }

    #[test]
    fn versioned_custom_type_passes() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(
            &["application/vnd.acme.v3+json"],
            &["application/vnd.acme+json;version=2"],
        );
        assert!(rule.evaluate(&spec).is_none());
    }

    #[test]
    fn unversioned_custom_type_fails() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(&[], &["application/vnd.acme+json"]);
        let violation = rule.evaluate(&spec).expect("violation expected");
        assert_eq!(violation.code, CODE);
        assert_eq!(violation.severity, Severity::Should);
        assert_eq!(violation.description, DESCRIPTION);
        assert_eq!(violation.locations, vec!["/pets GET"]);
    }

    #[test]
    fn operation_is_listed_once_despite_repeated_offenders() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(&["application/xml"], &["application/xml"]);
        let violation = rule.evaluate(&spec).expect("violation expected");
        assert_eq!(violation.locations, vec!["/pets GET"]);
    }

    #[test]
    fn locations_keep_specification_order() {
        let rule = MediaTypesRule::new();
        let spec = ApiSpec::new()
            .path(
                "/orders",
                vec![
                    OperationEntry::new("GET", Operation::new().produces(["application/xml"])),
                    OperationEntry::new("POST", Operation::new().produces(["application/json"])),
                ],
            )
            .path(
                "/pets",
                vec![OperationEntry::new(
                    "PUT",
                    Operation::new().consumes(["text/plain"]),
                )],
            );

        let violation = rule.evaluate(&spec).expect("violation expected");
        assert_eq!(violation.locations, vec!["/orders GET", "/pets PUT"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(&["application/xml"], &[]);
        assert_eq!(rule.evaluate(&spec), rule.evaluate(&spec));
    }

    #[test]
    fn adding_an_offender_never_removes_locations() {
        let rule = MediaTypesRule::new();
        let before = ApiSpec::new()
            .path(
                "/orders",
                vec![OperationEntry::new(
                    "GET",
                    Operation::new().produces(["application/xml"]),
                )],
            )
            .path(
                "/pets",
                vec![OperationEntry::new(
                    "GET",
                    Operation::new().produces(["application/json"]),
                )],
            );
        let after = ApiSpec::new()
            .path(
                "/orders",
                vec![OperationEntry::new(
                    "GET",
                    Operation::new().produces(["application/xml"]),
                )],
            )
            .path(
                "/pets",
                vec![OperationEntry::new(
                    "GET",
                    Operation::new().produces(["application/json", "text/csv"]),
                )],
            );

        let locations_before = rule
            .evaluate(&before)
            .expect("violation expected")
            .locations;
        let locations_after = rule.evaluate(&after).expect("violation expected").locations;
        assert!(locations_before
            .iter()
            .all(|l| locations_after.contains(l)));
        assert_eq!(locations_after, vec!["/orders GET", "/pets GET"]);
    }

    #[test]
    fn empty_spec_passes() {
        let rule = MediaTypesRule::new();
        assert!(rule.evaluate(&ApiSpec::new()).is_none());
    }

    #[test]
    fn operation_without_media_types_passes() {
        let rule = MediaTypesRule::new();
        let spec = spec_with_media_types(&[], &[]);
        assert!(rule.evaluate(&spec).is_none());
    }
}
