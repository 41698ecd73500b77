//! Declarative form validation.
//!
//! A [`Schema`] maps field names to ordered checks. Checks receive the field
//! value and the whole record, so cross-field rules (confirmation must match)
//! and conditional rules (required only when another field is filled) are
//! ordinary checks. Every field is validated; each failing field reports the
//! message of its first failing check.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use validator::ValidateEmail;

/// Read access to the string fields of a form.
pub trait FormRecord {
    fn value(&self, field: &str) -> &str;
}

type Test<R> = Box<dyn Fn(&str, &R) -> bool + Send + Sync>;
type Condition<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

struct Check<R> {
    test: Test<R>,
    message: String,
    condition: Option<Condition<R>>,
}

impl<R> Check<R> {
    fn passes(&self, value: &str, record: &R) -> bool {
        match &self.condition {
            Some(applies) if !applies(record) => true,
            _ => (self.test)(value, record),
        }
    }
}

/// Checks declared for a single field.
pub struct FieldRules<R> {
    checks: Vec<Check<R>>,
}

impl<R: FormRecord + 'static> FieldRules<R> {
    fn new() -> Self {
        FieldRules { checks: Vec::new() }
    }

    /// Custom check on the field value and the full record.
    pub fn check(mut self, test: impl Fn(&str, &R) -> bool + Send + Sync + 'static, message: &str) -> Self {
        self.checks.push(Check {
            test: Box::new(test),
            message: message.to_string(),
            condition: None,
        });
        self
    }

    pub fn required(self, message: &str) -> Self {
        self.check(|value, _| !value.is_empty(), message)
    }

    /// Well-formed e-mail address. An empty value passes; pair with `required`.
    pub fn email(self, message: &str) -> Self {
        self.check(|value, _| value.is_empty() || value.validate_email(), message)
    }

    pub fn min_len(self, min: usize, message: &str) -> Self {
        self.check(move |value, _| value.chars().count() >= min, message)
    }

    /// Value must equal the value of `other`.
    pub fn matches(self, other: &'static str, message: &str) -> Self {
        self.check(move |value, record| value == record.value(other), message)
    }

    /// Checks declared in `rules` only apply when `condition` holds for the record.
    pub fn when(
        mut self,
        condition: impl Fn(&R) -> bool + Send + Sync + 'static,
        rules: impl FnOnce(FieldRules<R>) -> FieldRules<R>,
    ) -> Self {
        let condition: Condition<R> = Arc::new(condition);

        for mut check in rules(FieldRules::new()).checks {
            check.condition = Some(match check.condition.take() {
                None => condition.clone(),
                Some(inner) => {
                    let outer = condition.clone();
                    let both: Condition<R> = Arc::new(move |record: &R| outer(record) && inner(record));
                    both
                }
            });
            self.checks.push(check);
        }
        self
    }
}

pub struct Schema<R> {
    fields: Vec<(&'static str, FieldRules<R>)>,
}

impl<R: FormRecord + 'static> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord + 'static> Schema<R> {
    pub fn new() -> Self {
        Schema { fields: Vec::new() }
    }

    pub fn field(
        mut self,
        name: &'static str,
        rules: impl FnOnce(FieldRules<R>) -> FieldRules<R>,
    ) -> Self {
        self.fields.push((name, rules(FieldRules::new())));
        self
    }

    /// Validate all fields, collecting one message per failing field.
    pub fn validate(&self, record: &R) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (name, rules) in &self.fields {
            let value = record.value(name);
            if let Some(failed) = rules.checks.iter().find(|c| !c.passes(value, record)) {
                errors.0.insert(name.to_string(), failed.message.clone());
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Field name to user-facing message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}
