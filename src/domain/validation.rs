//! Field validation for user supplied project input.
//!
//! A [`Validatable`] pairs a value with an optional set of constraints.
//! [`validate`] checks every constraint that is present; constraints that
//! do not apply to the value's kind (length bounds on numbers, value bounds
//! on text) are skipped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value under validation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// Constraint set without a value, as stored in configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl Constraints {
    /// Binds these constraints to a value
    pub fn check(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            constraints: self.clone(),
        }
    }
}

/// A value together with the constraints it must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            constraints: Constraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.constraints.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.constraints.max_length = Some(len);
        self
    }

    pub fn min_value(mut self, value: f64) -> Self {
        self.constraints.min_value = Some(value);
        self
    }

    pub fn max_value(mut self, value: f64) -> Self {
        self.constraints.max_value = Some(value);
        self
    }
}

/// Returns true when the value satisfies every supplied constraint
pub fn validate(input: &Validatable) -> bool {
    let c = &input.constraints;

    if c.required && input.value.to_string().trim().is_empty() {
        return false;
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.trim().chars().count();
            if c.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if c.max_length.is_some_and(|max| len > max) {
                return false;
            }
        }
        FieldValue::Number(n) => {
            if c.min_value.is_some_and(|min| *n < min) {
                return false;
            }
            if c.max_value.is_some_and(|max| *n > max) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty() {
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("   \t").required()));
        assert!(validate(&Validatable::new("x").required()));
    }

    #[test]
    fn test_min_length() {
        assert!(!validate(&Validatable::new("ab").min_length(5)));
        assert!(validate(&Validatable::new("hello").required().min_length(5)));
    }

    #[test]
    fn test_length_is_measured_after_trim() {
        assert!(!validate(&Validatable::new("  abc  ").min_length(5)));
        assert!(validate(&Validatable::new("  abc  ").max_length(3)));
    }

    #[test]
    fn test_max_length() {
        assert!(!validate(&Validatable::new("too long").max_length(3)));
        assert!(validate(&Validatable::new("ok").max_length(3)));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate(&Validatable::new(3u32).min_value(1.0)));
        assert!(!validate(&Validatable::new(0u32).min_value(1.0)));
        assert!(!validate(&Validatable::new(11u32).max_value(10.0)));
        assert!(validate(&Validatable::new(10u32).min_value(1.0).max_value(10.0)));
    }

    #[test]
    fn test_bounds_ignored_for_other_kind() {
        // length bounds never apply to numbers
        assert!(validate(&Validatable::new(3u32).min_length(5)));
        // value bounds never apply to text
        assert!(validate(&Validatable::new("1").min_value(5.0)));
    }

    #[test]
    fn test_no_constraints_always_passes() {
        assert!(validate(&Validatable::new("")));
        assert!(validate(&Validatable::new(-4.0)));
    }

    #[test]
    fn test_constraints_check() {
        let rules = Constraints {
            required: true,
            min_length: Some(5),
            ..Constraints::default()
        };
        assert!(validate(&rules.check("Backend work")));
        assert!(!validate(&rules.check("work")));
    }
}
