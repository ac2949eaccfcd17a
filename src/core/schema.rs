//! Declarative form validation schema
//!
//! Each form screen declares its fields and the rules attached to them.
//! Validation is a pure function of the current field values: rules run in
//! declaration order and the first failing rule's message becomes the
//! field's error.

use std::collections::BTreeMap;

/// A single validation rule attached to a field
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be non-empty
    Required,
    /// Value must look like `local@domain` with a dot inside the domain
    Email,
    /// Value must equal the current value of another field
    MatchesField(&'static str),
}

impl Rule {
    /// Check this rule against a value. `values` carries the whole form so
    /// cross-field rules can look up their referenced field.
    fn check(&self, value: &str, values: &BTreeMap<String, String>) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => is_valid_email(value),
            Rule::MatchesField(other) => {
                value == values.get(*other).map(String::as_str).unwrap_or_default()
            }
        }
    }
}

/// Minimal email shape check: a non-empty local part, a single `@`, and at
/// least one dot inside the domain.
fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Named rule set for one form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    rules: Vec<(Rule, &'static str)>,
}

impl FieldSpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attach a rule with the message reported when it fails
    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }

    pub fn required(self, message: &'static str) -> Self {
        self.rule(Rule::Required, message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.rule(Rule::Email, message)
    }

    pub fn matches(self, other: &'static str, message: &'static str) -> Self {
        self.rule(Rule::MatchesField(other), message)
    }

    /// First failing rule's message, or None when the field is valid.
    /// A field with no rules is always valid.
    fn error_for(&self, values: &BTreeMap<String, String>) -> Option<&'static str> {
        let value = values.get(self.name).map(String::as_str).unwrap_or_default();
        self.rules
            .iter()
            .find(|(rule, _)| !rule.check(value, values))
            .map(|(_, message)| *message)
    }
}

/// Complete set of field specs for one screen
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field spec. Field names must be unique within a schema.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        debug_assert!(
            !self.fields.iter().any(|f| f.name == spec.name),
            "duplicate field name in schema: {}",
            spec.name
        );
        self.fields.push(spec);
        self
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Validate all fields against the current values.
    ///
    /// Returns a map from field name to error message; a field absent from
    /// the map is valid. Pure and idempotent: identical values always
    /// produce an identical error map.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .error_for(values)
                    .map(|message| (field.name.to_string(), message.to_string()))
            })
            .collect()
    }
}

/// Schema for the sign-up screen (username, email, password, confirmPassword)
pub fn signup_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("username").required("Username is required"))
        .field(
            FieldSpec::new("email")
                .required("Email is required")
                .email("Invalid email"),
        )
        .field(FieldSpec::new("password").required("Password is required"))
        .field(
            FieldSpec::new("confirmPassword")
                .required("Confirm Password is required")
                .matches("password", "Passwords must match"),
        )
}

/// Schema for the sign-in screen (email-or-username, password)
pub fn login_schema() -> FormSchema {
    FormSchema::new()
        .field(FieldSpec::new("email").required("Email or Username is required"))
        .field(FieldSpec::new("password").required("Password is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_required_fields() {
        let errors = signup_schema().validate(&values(&[]));

        assert_eq!(
            errors.get("username").map(String::as_str),
            Some("Username is required")
        );
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password is required")
        );
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Confirm Password is required")
        );
    }

    #[test]
    fn test_login_required_fields() {
        let errors = login_schema().validate(&values(&[]));

        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Email or Username is required")
        );
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password is required")
        );
    }

    #[test]
    fn test_rule_order_first_failure_wins() {
        // Required comes before Email, so an empty value reports the
        // required message rather than the format message
        let errors = signup_schema().validate(&values(&[("email", "")]));
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn test_malformed_emails() {
        for bad in [
            "plainaddress",
            "no-at-sign.com",
            "user@nodot",
            "@missing.local",
            "user@.com",
            "user@com.",
            "a@b@c.com",
        ] {
            let errors = signup_schema().validate(&values(&[("email", bad)]));
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Invalid email"),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_well_formed_emails() {
        for good in ["user@example.com", "a@b.co", "first.last@sub.domain.org"] {
            let errors = signup_schema().validate(&values(&[("email", good)]));
            assert!(!errors.contains_key("email"), "expected '{good}' to be accepted");
        }
    }

    #[test]
    fn test_password_mismatch_flags_confirm_field() {
        let errors = signup_schema().validate(&values(&[
            ("password", "hunter22"),
            ("confirmPassword", "hunter2"),
        ]));

        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords must match")
        );
        // The password field itself carries no error
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn test_matching_passwords_pass() {
        let errors = signup_schema().validate(&values(&[
            ("password", "hunter22"),
            ("confirmPassword", "hunter22"),
        ]));
        assert!(!errors.contains_key("confirmPassword"));
    }

    #[test]
    fn test_valid_signup_has_no_errors() {
        let errors = signup_schema().validate(&values(&[
            ("username", "jordan"),
            ("email", "jordan@example.com"),
            ("password", "s3cret!!"),
            ("confirmPassword", "s3cret!!"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_field_without_rules_is_always_valid() {
        let schema = FormSchema::new().field(FieldSpec::new("note"));
        assert!(schema.validate(&values(&[])).is_empty());
        assert!(schema.validate(&values(&[("note", "anything")])).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let schema = signup_schema();
        let input = values(&[("email", "broken@"), ("password", "x")]);

        let first = schema.validate(&input);
        let second = schema.validate(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_not_trimmed_before_validation() {
        // Whitespace counts as content: required passes, equality compares verbatim
        let errors = signup_schema().validate(&values(&[
            ("password", "secret"),
            ("confirmPassword", "secret "),
        ]));
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords must match")
        );
    }
}
