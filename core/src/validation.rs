//! Declarative field validation
//!
//! A [`Schema`] lists, per field, the rules its value must satisfy. Rules of
//! a field run in declaration order and the first violation wins, so a field
//! carries at most one message in [`ValidationErrors`].

use serde::Serialize;
use std::collections::BTreeMap;

/// Anything that can hand out field values by name.
pub trait FieldSource {
    fn value(&self, field: &str) -> Option<&str>;
}

impl FieldSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldSource for [(&str, &str)] {
    fn value(&self, field: &str) -> Option<&str> {
        self.iter().find(|(name, _)| *name == field).map(|(_, v)| *v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and non-empty.
    Required { error_msg: String },
    /// Character count must fall inside the inclusive bounds.
    Length {
        min: Option<usize>,
        max: Option<usize>,
        error_msg: String,
    },
}

impl Rule {
    pub fn required(error_msg: impl Into<String>) -> Self {
        Rule::Required {
            error_msg: error_msg.into(),
        }
    }

    pub fn length(min: Option<usize>, max: Option<usize>, error_msg: impl Into<String>) -> Self {
        Rule::Length {
            min,
            max,
            error_msg: error_msg.into(),
        }
    }

    fn check(&self, value: &str) -> Option<&str> {
        match self {
            Rule::Required { error_msg } => value.is_empty().then_some(error_msg.as_str()),
            Rule::Length { min, max, error_msg } => {
                let len = value.chars().count();
                let too_short = min.is_some_and(|min| len < min);
                let too_long = max.is_some_and(|max| len > max);
                (too_short || too_long).then_some(error_msg.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field with its rules. Declaring a field twice appends rules.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => existing.extend(rules),
            None => self.fields.push((name, rules)),
        }
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn validate<S: FieldSource + ?Sized>(&self, data: &S) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        for (name, rules) in &self.fields {
            let value = data.value(name).unwrap_or("");
            let required = rules.iter().any(|r| matches!(r, Rule::Required { .. }));

            // Optional and empty: nothing else to check
            if value.is_empty() && !required {
                continue;
            }

            if let Some(msg) = rules.iter().find_map(|rule| rule.check(value)) {
                errors.insert(name.clone(), msg.to_string());
            }
        }

        errors
    }
}

/// Field name to the message of its first violated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn insert(&mut self, field: String, msg: String) {
        self.0.insert(field, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("username", vec![Rule::required("username required")])
            .field(
                "password",
                vec![
                    Rule::required("password required"),
                    Rule::length(Some(6), Some(12), "password length"),
                ],
            )
    }

    #[test]
    fn test_required_precedes_length() {
        let data: &[(&str, &str)] = &[("username", ""), ("password", "")];
        let errors = schema().validate(data);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("username"), Some("username required"));
        assert_eq!(errors.get("password"), Some("password required"));
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let s = schema();
        for (password, ok) in [
            ("12345", false),
            ("123456", true),
            ("123456789012", true),
            ("1234567890123", false),
        ] {
            let data: &[(&str, &str)] = &[("username", "bob"), ("password", password)];
            let errors = s.validate(data);
            assert_eq!(errors.is_empty(), ok, "password {:?}", password);
            if !ok {
                assert_eq!(errors.get("password"), Some("password length"));
            }
        }
    }

    #[test]
    fn test_length_counts_characters() {
        // 6 characters, 12 bytes
        let data: &[(&str, &str)] = &[("username", "bob"), ("password", "пароль")];
        assert!(schema().validate(data).is_empty());
    }

    #[test]
    fn test_optional_empty_field_skips_rules() {
        let s = Schema::new().field("nickname", vec![Rule::length(Some(3), None, "too short")]);

        let empty: &[(&str, &str)] = &[];
        assert!(s.validate(empty).is_empty());

        let short: &[(&str, &str)] = &[("nickname", "ab")];
        assert_eq!(s.validate(short).get("nickname"), Some("too short"));
    }

    #[test]
    fn test_error_keys_are_schema_fields() {
        let mut data = BTreeMap::new();
        data.insert("unrelated".to_string(), String::new());
        let s = schema();
        let errors = s.validate(&data);

        let names: Vec<&str> = s.field_names().collect();
        assert!(errors.fields().all(|f| names.contains(&f)));
    }

    #[test]
    fn test_redeclared_field_appends_rules() {
        let s = Schema::new()
            .field("code", vec![Rule::required("missing")])
            .field("code", vec![Rule::length(None, Some(2), "too long")]);

        assert_eq!(s.field_names().count(), 1);
        let data: &[(&str, &str)] = &[("code", "abc")];
        assert_eq!(s.validate(data).get("code"), Some("too long"));
    }
}
