//! Parameter definitions and constraints for filters.
//!
//! Each filter declares its parameters up front. Raw values coming from the
//! driver are checked against these declarations before any typed parameter
//! is built, so out-of-range input never reaches a filter body.

use crate::core::types::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Whole number
    Integer,
    /// One identifier out of a fixed set
    Choice,
}

impl ParamType {
    /// Check whether a value has this type.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ParamType::Integer, Value::Integer(_)) | (ParamType::Choice, Value::String(_))
        )
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Integer => write!(f, "integer"),
            ParamType::Choice => write!(f, "choice"),
        }
    }
}

/// Constraints that can be applied to parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Constraint {
    /// Integer must be within [min, max]
    Range { min: i64, max: i64 },
    /// Identifier must be one of the listed options
    OneOf(Vec<String>),
}

impl Constraint {
    /// Validate a value against this constraint.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        match self {
            Constraint::Range { min, max } => {
                let Some(num) = value.as_integer() else {
                    return Err(format!("Expected an integer, got {}", value.type_name()));
                };
                if num < *min || num > *max {
                    return Err(format!("Value {} is out of range [{}, {}]", num, min, max));
                }
            }
            Constraint::OneOf(options) => {
                let Some(s) = value.as_str() else {
                    return Err(format!("Expected one of {:?}, got {}", options, value));
                };
                if !options.iter().any(|o| o == s) {
                    return Err(format!("'{}' is not one of {:?}", s, options));
                }
            }
        }
        Ok(())
    }

    /// Short human-readable form used in listings.
    pub fn describe(&self) -> String {
        match self {
            Constraint::Range { min, max } => format!("{}..={}", min, max),
            Constraint::OneOf(options) => options.join("|"),
        }
    }
}

/// Definition of a filter parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Unique name within the filter
    pub name: String,
    /// Type of the parameter
    pub param_type: ParamType,
    /// Value used when the caller does not provide one
    pub default_value: Value,
    /// Description for documentation
    pub description: String,
    /// Constraints for validation
    pub constraints: Vec<Constraint>,
}

impl ParameterDefinition {
    /// Create an integer parameter bounded to `[min, max]`.
    pub fn integer(name: impl Into<String>, default: i64, min: i64, max: i64) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Integer,
            default_value: Value::Integer(default),
            description: String::new(),
            constraints: vec![Constraint::Range { min, max }],
        }
    }

    /// Create a parameter that accepts one identifier from `options`.
    pub fn choice(name: impl Into<String>, default: &str, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Choice,
            default_value: Value::String(default.to_string()),
            description: String::new(),
            constraints: vec![Constraint::OneOf(
                options.iter().map(|o| o.to_string()).collect(),
            )],
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate a value against this parameter's type and constraints.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        if !self.param_type.matches(value) {
            return Err(format!(
                "Type mismatch for parameter '{}': expected {}, got {}",
                self.name,
                self.param_type,
                value.type_name()
            ));
        }

        for constraint in &self.constraints {
            constraint.validate(value)?;
        }

        Ok(())
    }
}

/// Raw, string-keyed parameter values for one filter invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: IndexMap<String, Value>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a value, replacing any earlier one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value given for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_constraint() {
        let c = Constraint::Range { min: 1, max: 100 };
        assert!(c.validate(&Value::Integer(1)).is_ok());
        assert!(c.validate(&Value::Integer(100)).is_ok());
        assert!(c.validate(&Value::Integer(0)).is_err());
        assert!(c.validate(&Value::Integer(101)).is_err());
        assert!(c.validate(&Value::from("ten")).is_err());
    }

    #[test]
    fn test_one_of_constraint() {
        let c = Constraint::OneOf(vec!["red".into(), "green".into()]);
        assert!(c.validate(&Value::from("red")).is_ok());
        let err = c.validate(&Value::from("alpha")).unwrap_err();
        assert!(err.contains("alpha"));
        assert_eq!(c.describe(), "red|green");
    }

    #[test]
    fn test_definition_type_check() {
        let def = ParameterDefinition::integer("threshold", 128, 0, 255);
        let err = def.validate(&Value::from("high")).unwrap_err();
        assert!(err.contains("Type mismatch"));
        assert!(def.validate(&Value::Integer(255)).is_ok());
        assert!(def.validate(&Value::Integer(300)).is_err());
    }

    #[test]
    fn test_parameter_set_keeps_order() {
        let set = ParameterSet::new().with("method", "weighted").with("threshold", 10);
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["method", "threshold"]);
        assert_eq!(set.get("threshold"), Some(&Value::Integer(10)));
        assert_eq!(set.len(), 2);
    }
}
