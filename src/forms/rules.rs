//! Declarative field validation rules
//!
//! Each rule produces a human-readable message keyed by the field's label.
//! Exactly one message is surfaced per field at a time; rules are evaluated
//! in the fixed order required, max-length, min, max.

use serde_json::Value;

/// A declarative constraint bound to one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Value must be non-null and, for strings, non-empty
    Required,
    /// String length must not exceed the bound (in characters)
    MaxLength(usize),
    /// Numeric value must be at least the bound (inclusive)
    Min(f64),
    /// Numeric value must not exceed the bound (inclusive)
    Max(f64),
}

impl Rule {
    /// Evaluation precedence; lower ranks run first
    fn rank(&self) -> u8 {
        match self {
            Rule::Required => 0,
            Rule::MaxLength(_) => 1,
            Rule::Min(_) => 2,
            Rule::Max(_) => 3,
        }
    }

    /// Check the rule against a field value, returning a message on violation
    pub fn check(&self, value: &Value, label: &str) -> Option<String> {
        match self {
            Rule::Required => match value {
                Value::Null => Some(format!("{} is required", label)),
                Value::String(s) if s.trim().is_empty() => {
                    Some(format!("{} is required", label))
                }
                _ => None,
            },
            Rule::MaxLength(bound) => match value {
                Value::String(s) if s.chars().count() > *bound => Some(format!(
                    "{} must be at most {} characters",
                    label, bound
                )),
                _ => None,
            },
            Rule::Min(bound) => match value.as_f64() {
                Some(n) if n < *bound => {
                    Some(format!("{} must be at least {}", label, fmt_bound(*bound)))
                }
                _ => None,
            },
            Rule::Max(bound) => match value.as_f64() {
                Some(n) if n > *bound => {
                    Some(format!("{} must not exceed {}", label, fmt_bound(*bound)))
                }
                _ => None,
            },
        }
    }
}

/// First failing rule's message in precedence order, or None when all pass
pub fn first_violation(rules: &[Rule], value: &Value, label: &str) -> Option<String> {
    let mut ordered: Vec<&Rule> = rules.iter().collect();
    ordered.sort_by_key(|r| r.rank());
    ordered.iter().find_map(|rule| rule.check(value, label))
}

/// Render a numeric bound without a trailing fraction when it is integral
fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        format!("{}", bound)
    }
}
