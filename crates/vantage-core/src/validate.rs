//! Declarative credential validation.
//!
//! Constraints are data, not a class hierarchy: a [`Schema`] is an ordered
//! list of `(Field, rules)` pairs and one generic evaluator turns a
//! [`Credentials`] value into a [`FieldErrors`] map. Evaluation is pure and
//! never panics; violations are reported only through the returned map.
//!
//! The schema runs twice in the form lifecycle: per-field on every input
//! change (for fields the user has already touched) and wholesale right
//! before a submission attempt.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Both fields are capped at this many characters.
pub const MAX_FIELD_LEN: usize = 255;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// The user-supplied email/password pair for one login attempt.
///
/// Owned exclusively by the form state: initialized with the configured
/// placeholder values, mutated on every field change, cleared on teardown or
/// after a successful authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

/// A form field the schema knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Key into the error map: a schema field, or the synthetic top-level
/// `Submit` entry carrying a collaborator-reported authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(Field),
    Submit,
}

/// Per-field validation failure messages, keyed by [`ErrorKey`].
///
/// Derived, never authored directly: field entries come from schema
/// evaluation, the submit entry from the login reducer's failure arm. An
/// entry is cleared when the corresponding field becomes valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ErrorKey, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn remove(&mut self, key: ErrorKey) {
        self.0.remove(&key);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One declarative constraint with its human-readable message.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Empty string and missing value are both "required" violations.
    Required { message: &'static str },
    /// Syntactic email-address check.
    Email { message: &'static str },
    /// Character-count upper bound.
    MaxLength {
        limit: usize,
        message: &'static str,
    },
}

impl Rule {
    /// Returns the rule's message if `value` violates it.
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required { message } => value.is_empty().then_some(*message),
            Rule::Email { message } => {
                // Required handles the empty case; an absent value is not a
                // syntax violation.
                (!value.is_empty() && !EMAIL_PATTERN.is_match(value)).then_some(*message)
            }
            Rule::MaxLength { limit, message } => {
                (value.chars().count() > *limit).then_some(*message)
            }
        }
    }
}

/// Ordered `(field, rule-set)` pairs evaluated by one generic evaluator.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn new(fields: Vec<(Field, Vec<Rule>)>) -> Self {
        Self { fields }
    }

    /// Evaluates the whole schema. First violated rule per field wins.
    pub fn validate(&self, input: &Credentials) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, rules) in &self.fields {
            if let Some(message) = first_violation(rules, input.get(*field)) {
                errors.insert(ErrorKey::Field(*field), message);
            }
        }
        errors
    }

    /// Evaluates a single field's rules against a candidate value.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, rules)| first_violation(rules, value))
    }
}

fn first_violation(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value))
}

/// The login form's schema: email is required, syntactically valid, and at
/// most 255 characters; password is required and at most 255 characters
/// (no complexity rule).
pub fn credentials() -> Schema {
    Schema::new(vec![
        (
            Field::Email,
            vec![
                Rule::Required {
                    message: "Email is required",
                },
                Rule::Email {
                    message: "Must be a valid email",
                },
                Rule::MaxLength {
                    limit: MAX_FIELD_LEN,
                    message: "Email must be at most 255 characters",
                },
            ],
        ),
        (
            Field::Password,
            vec![
                Rule::Required {
                    message: "Password is required",
                },
                Rule::MaxLength {
                    limit: MAX_FIELD_LEN,
                    message: "Password must be at most 255 characters",
                },
            ],
        ),
    ])
}
