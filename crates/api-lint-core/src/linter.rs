//! Linter for orchestrating rule evaluation.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::spec::ApiSpec;
use crate::types::LintResult;

use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while assembling a linter.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Two registered rules share a code.
    #[error("Duplicate rule code registered: {code}")]
    DuplicateRuleCode {
        /// The code registered more than once.
        code: String,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the linter.
    #[must_use]
    pub fn rule_boxes<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if two registered rules share a code.
    pub fn build(self) -> Result<Linter, LinterError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.code()) {
                return Err(LinterError::DuplicateRuleCode {
                    code: rule.code().to_string(),
                });
            }
        }

        Ok(Linter {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Runs registered rules against one specification at a time.
///
/// Use [`Linter::builder()`] to construct an instance. Rules are handed in
/// explicitly; there is no discovery. The linter itself holds no mutable
/// state, so one instance can check many specifications.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks one specification against every enabled rule.
    ///
    /// Collects at most one violation per rule, applies configured severity
    /// overrides, and ranks the result by descending severity then code.
    #[must_use]
    pub fn check(&self, spec: &ApiSpec) -> LintResult {
        info!("Checking specification with {} rule(s)", self.rules.len());

        let mut result = LintResult::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.code()) {
                debug!("Skipping disabled rule: {}", rule.code());
                continue;
            }

            result.rules_run += 1;
            let Some(mut violation) = rule.evaluate(spec) else {
                debug!("Rule {} found nothing", rule.code());
                continue;
            };

            if let Some(severity) = self.config.rule_severity(rule.code()) {
                violation.severity = severity;
            }
            debug!(
                "Rule {} matched at {} location(s)",
                rule.code(),
                violation.locations.len()
            );
            result.violations.push(violation);
        }

        // Rank by descending severity, ties broken by code
        result
            .violations
            .sort_by(|a, b| b.severity.cmp(&a.severity).then(a.code.cmp(&b.code)));

        info!(
            "Check complete: {} violation(s) from {} rule(s)",
            result.violations.len(),
            result.rules_run
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Operation, OperationEntry};
    use crate::types::{Severity, Violation};

    struct FixedRule {
        code: &'static str,
        severity: Severity,
    }

    impl Rule for FixedRule {
        fn code(&self) -> &'static str {
            self.code
        }
        fn title(&self) -> &'static str {
            "Fixed rule"
        }
        fn url(&self) -> &'static str {
            "https://example.test/guidelines"
        }
        fn severity(&self) -> Severity {
            self.severity
        }
        fn evaluate(&self, spec: &ApiSpec) -> Option<Violation> {
            let locations = spec
                .operations()
                .map(|(path, verb, _)| format!("{path} {verb}"))
                .collect();
            Violation::from_rule(self, "matched", locations)
        }
    }

    fn one_op_spec() -> ApiSpec {
        ApiSpec::new().path("/pets", vec![OperationEntry::new("GET", Operation::new())])
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let result = Linter::builder()
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Must,
            })
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Should,
            })
            .build();
        assert!(matches!(
            result,
            Err(LinterError::DuplicateRuleCode { code }) if code == "R001"
        ));
    }

    #[test]
    fn violations_rank_by_descending_severity() {
        let linter = Linter::builder()
            .rule(FixedRule {
                code: "R002",
                severity: Severity::May,
            })
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Must,
            })
            .build()
            .expect("unique codes");

        let result = linter.check(&one_op_spec());
        let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["R001", "R002"]);
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let config = Config::parse("[rules.R001]\nenabled = false\n").expect("valid config");
        let linter = Linter::builder()
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Must,
            })
            .config(config)
            .build()
            .expect("unique codes");

        let result = linter.check(&one_op_spec());
        assert!(result.violations.is_empty());
        assert_eq!(result.rules_run, 0);
    }

    #[test]
    fn severity_override_applies_to_violations() {
        let config = Config::parse("[rules.R001]\nseverity = \"hint\"\n").expect("valid config");
        let linter = Linter::builder()
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Must,
            })
            .config(config)
            .build()
            .expect("unique codes");

        let result = linter.check(&one_op_spec());
        assert_eq!(result.violations[0].severity, Severity::Hint);
    }

    #[test]
    fn clean_spec_produces_empty_result() {
        let linter = Linter::builder()
            .rule(FixedRule {
                code: "R001",
                severity: Severity::Must,
            })
            .build()
            .expect("unique codes");

        let result = linter.check(&ApiSpec::new());
        assert!(result.violations.is_empty());
        assert_eq!(result.rules_run, 1);
    }
}
