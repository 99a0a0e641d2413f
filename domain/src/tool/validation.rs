//! Parameter validation
//!
//! Validation is a total function from raw call arguments to validated,
//! coerced [`ToolArgs`]. It always runs before a handler executes and it
//! enumerates every violation, not just the first, so the calling agent
//! gets an actionable error in one round trip.
//!
//! Coercions are exactly those the schema defines:
//!
//! | Declared type | Accepted input | Stored as |
//! |---------------|----------------|-----------|
//! | `string` | JSON string | string |
//! | `number` | JSON number, numeric string | number |
//! | `integer` | integral JSON number, integral string | number |
//! | `boolean` | JSON bool | bool |
//! | `amount` | JSON number, numeric string, `"auto"` | number or `"auto"` |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::entities::{ParamType, ToolCall, ToolDefinition};
use super::value_objects::Amount;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the offending parameter
    pub field: String,
    /// What went wrong
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying every violating field.
#[derive(Debug, Clone, Error)]
#[error("invalid parameters for '{tool}': {}", format_violations(violations))]
pub struct ValidationError {
    /// Declared name of the tool being called
    pub tool: String,
    /// All violations, in parameter declaration order
    pub violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Arguments that passed schema validation, with coercions applied.
///
/// Handlers only ever see this type; accessors reflect the declared
/// parameter types, so lookups after validation cannot fail for
/// type reasons.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    values: HashMap<String, serde_json::Value>,
}

impl ToolArgs {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(|v| v.as_f64())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_amount(&self, key: &str) -> Option<Amount> {
        self.values.get(key).and_then(|v| Amount::from_value(v).ok())
    }

    /// Required string accessor for parameters validation guarantees present.
    pub fn require_str(&self, key: &str) -> Result<&str, String> {
        self.get_str(key)
            .ok_or_else(|| format!("missing required argument: {key}"))
    }

    pub fn require_f64(&self, key: &str) -> Result<f64, String> {
        self.get_f64(key)
            .ok_or_else(|| format!("missing required argument: {key}"))
    }
}

/// Validate a call against a tool definition.
///
/// Checks required parameters, rejects unknown parameters, and applies the
/// declared-type coercions. Returns every violation at once.
pub fn validate_call(call: &ToolCall, definition: &ToolDefinition) -> Result<ToolArgs, ValidationError> {
    let mut violations = Vec::new();
    let mut values = HashMap::new();

    for param in &definition.parameters {
        match call.arguments.get(&param.name) {
            Some(raw) => match coerce(raw, param.param_type) {
                Ok(value) => {
                    values.insert(param.name.clone(), value);
                }
                Err(message) => violations.push(Violation::new(&param.name, message)),
            },
            None if param.required => {
                violations.push(Violation::new(&param.name, "missing required parameter"));
            }
            None => {}
        }
    }

    let declared: std::collections::HashSet<&str> =
        definition.parameters.iter().map(|p| p.name.as_str()).collect();
    for name in call.arguments.keys() {
        if !declared.contains(name.as_str()) {
            violations.push(Violation::new(name, "unknown parameter"));
        }
    }

    if violations.is_empty() {
        Ok(ToolArgs { values })
    } else {
        Err(ValidationError {
            tool: definition.name.clone(),
            violations,
        })
    }
}

/// Coerce a raw JSON value to the declared parameter type.
fn coerce(raw: &serde_json::Value, param_type: ParamType) -> Result<serde_json::Value, String> {
    use serde_json::Value;

    match param_type {
        ParamType::String => match raw {
            Value::String(_) => Ok(raw.clone()),
            other => Err(format!("expected a string, got {other}")),
        },
        ParamType::Number => match raw {
            Value::Number(_) => Ok(raw.clone()),
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("'{s}' is not a number")),
            other => Err(format!("expected a number, got {other}")),
        },
        ParamType::Integer => {
            let n = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.parse::<f64>().ok(),
                _ => None,
            };
            match n {
                Some(f) if f.fract() == 0.0 => Ok(Value::from(f as i64)),
                Some(_) => Err("expected an integer, got a fraction".to_string()),
                None => Err(format!("expected an integer, got {raw}")),
            }
        }
        ParamType::Boolean => match raw {
            Value::Bool(_) => Ok(raw.clone()),
            other => Err(format!("expected a boolean, got {other}")),
        },
        ParamType::Amount => Amount::from_value(raw).map(|amount| match amount {
            Amount::Auto => Value::String("auto".to_string()),
            Amount::Exact(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(n.to_string())),
        }),
    }
}
