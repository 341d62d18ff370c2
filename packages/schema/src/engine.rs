//! Generic rule/refinement validator.
//!
//! Rules are `(field name, predicate)` pairs evaluated in declaration order.
//! Refinements are rules that only run once every per-field rule has passed;
//! a failing refinement attaches its message to the field it names (e.g. the
//! password confirmation field), not to the field it compares against.

/// A single validation failure, keyed by the form field path.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failures from one validation pass, in rule declaration order.
/// Displays as the first failing rule's message.
#[derive(Clone, Debug, PartialEq, Default, thiserror::Error)]
#[error("{}", .0.first().map(|e| e.message.as_str()).unwrap_or(""))]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// Message of the first failing rule. Handlers surface this as the
    /// outcome message.
    pub fn first_message(&self) -> &str {
        self.0.first().map(|e| e.message.as_str()).unwrap_or("")
    }

    /// Message attached to a specific field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

type Check<T> = fn(&T) -> Result<(), String>;

struct Rule<T> {
    field: &'static str,
    check: Check<T>,
}

/// A declarative constraint set for one payload type.
pub struct Schema<T> {
    rules: Vec<Rule<T>>,
    refinements: Vec<Rule<T>>,
}

impl<T> Schema<T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Add a per-field rule.
    pub fn rule(mut self, field: &'static str, check: Check<T>) -> Self {
        self.rules.push(Rule { field, check });
        self
    }

    /// Add a cross-field refinement. Refinements run only when all per-field
    /// rules passed; the failure is attached to `field`.
    pub fn refine(mut self, field: &'static str, check: Check<T>) -> Self {
        self.refinements.push(Rule { field, check });
        self
    }

    /// Evaluate every rule, then (if clean) every refinement.
    pub fn validate(&self, value: &T) -> Result<(), FieldErrors> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            if let Err(message) = (rule.check)(value) {
                errors.push(FieldError {
                    field: rule.field,
                    message,
                });
            }
        }
        if errors.is_empty() {
            for rule in &self.refinements {
                if let Err(message) = (rule.check)(value) {
                    errors.push(FieldError {
                        field: rule.field,
                        message,
                    });
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize an optional form value: trims, and maps the empty string to
/// `None`. Runs before any constraint looks at the field, so an empty
/// submission is indistinguishable from an omitted one.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Shared predicates used by the entity schemas.

pub(crate) fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

pub(crate) fn min_len(value: &str, min: usize, label: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        Err(format!("{label} must be at least {min} characters"))
    } else {
        Ok(())
    }
}

pub(crate) fn email_shape(value: &str, label: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        Err(format!("{label} must be a valid email address"))
    } else {
        Ok(())
    }
}

pub(crate) fn min_int(value: Option<i64>, min: i64, label: &str) -> Result<(), String> {
    match value {
        Some(n) if n >= min => Ok(()),
        Some(_) => Err(format!("{label} must be at least {min}")),
        None => Err(format!("{label} must be a whole number")),
    }
}

pub(crate) fn min_items(len: usize, min: usize, label: &str) -> Result<(), String> {
    if len < min {
        Err(format!("At least {min} {label} required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: String,
        b: String,
    }

    fn pair_schema() -> Schema<Pair> {
        Schema::new()
            .rule("a", |p: &Pair| required(&p.a, "A"))
            .rule("b", |p: &Pair| required(&p.b, "B"))
            .refine("b", |p: &Pair| {
                if p.a == p.b {
                    Ok(())
                } else {
                    Err("Values do not match".to_string())
                }
            })
    }

    #[test]
    fn rules_collect_in_declaration_order() {
        let errors = pair_schema()
            .validate(&Pair {
                a: "".into(),
                b: " ".into(),
            })
            .unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.first_message(), "A is required");
        assert_eq!(errors.get("b"), Some("B is required"));
    }

    #[test]
    fn refinement_skipped_while_field_rules_fail() {
        // Only the per-field error surfaces; the mismatch refinement does
        // not run against a payload that already failed.
        let errors = pair_schema()
            .validate(&Pair {
                a: "x".into(),
                b: "".into(),
            })
            .unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.get("b"), Some("B is required"));
    }

    #[test]
    fn refinement_attaches_to_named_field() {
        let errors = pair_schema()
            .validate(&Pair {
                a: "x".into(),
                b: "y".into(),
            })
            .unwrap_err();
        assert_eq!(errors.get("b"), Some("Values do not match"));
        assert_eq!(errors.get("a"), None);
    }

    #[test]
    fn validation_is_deterministic() {
        let payload = Pair {
            a: "".into(),
            b: "y".into(),
        };
        let schema = pair_schema();
        assert_eq!(schema.validate(&payload), schema.validate(&payload));
    }

    #[test]
    fn optional_normalizes_empty_and_whitespace() {
        assert_eq!(optional(""), None);
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }
}
