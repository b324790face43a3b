//! Field-level validation primitives for raw JSON payloads.
//!
//! Aggregates declare static [`FieldSpec`] tables; the per-aggregate schema
//! module walks the incoming value against them and collects every
//! violation, not just the first one.

use serde_json::Value;
use thiserror::Error;

use crate::shared::datetime;

/// Wire type a scalar field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Float,
    DateTime,
}

impl FieldKind {
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Int => "an integer",
            Self::Float => "a number",
            Self::DateTime => "a timestamp",
        }
    }

    /// Check a present, non-null value against this kind.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Int => value.as_i64().is_some(),
            Self::Float => value.is_number(),
            Self::DateTime => value.as_str().is_some_and(|s| datetime::parse(s).is_some()),
        }
    }
}

/// Declaration of a single scalar field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// One violated constraint, with a dotted/indexed path into the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A payload rejected by schema validation. Carries every violation found.
#[derive(Debug, Error)]
#[error("payload failed validation with {} error(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(path, message)],
        }
    }

    /// Human-readable `path: message` lines, for logs.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect()
    }
}

/// Check the scalar fields of one JSON object against a spec table,
/// appending a [`FieldError`] per violation. `prefix` is the object's path
/// in the enclosing payload, empty at the root.
pub fn check_object(errors: &mut Vec<FieldError>, prefix: &str, map: &serde_json::Map<String, Value>, specs: &[FieldSpec]) {
    for spec in specs {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{prefix}.{}", spec.name)
        };
        match map.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    errors.push(FieldError::new(path, "field required"));
                }
            }
            Some(value) => {
                // Optional strings may legitimately be empty.
                if !spec.kind.check(value) {
                    errors.push(FieldError::new(
                        path,
                        format!("expected {}", spec.kind.expected()),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[FieldSpec] = &[
        FieldSpec::required("Name", FieldKind::Str),
        FieldSpec::required("Seq", FieldKind::Int),
        FieldSpec::required("Amount", FieldKind::Float),
        FieldSpec::required("When", FieldKind::DateTime),
        FieldSpec::optional("Region", FieldKind::Str),
    ];

    fn errors_for(value: serde_json::Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_object(&mut errors, "", value.as_object().unwrap(), SPECS);
        errors
    }

    #[test]
    fn accepts_conforming_object() {
        let errors = errors_for(json!({
            "Name": "x",
            "Seq": 3,
            "Amount": 1.5,
            "When": "2024-12-01 10:00:00",
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn collects_every_violation() {
        let errors = errors_for(json!({
            "Name": 7,
            "Amount": "not a number",
            "When": "garbage",
        }));
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["Name", "Seq", "Amount", "When"]);
    }

    #[test]
    fn int_rejects_fractional_numbers() {
        let errors = errors_for(json!({
            "Name": "x",
            "Seq": 3.5,
            "Amount": 1,
            "When": "2024-12-01 10:00:00",
        }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "Seq");
    }

    #[test]
    fn float_accepts_integers() {
        let errors = errors_for(json!({
            "Name": "x",
            "Seq": 3,
            "Amount": 15000,
            "When": "2024-12-01 10:00:00",
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_field_may_be_absent_null_or_empty() {
        for region in [json!({}), json!({ "Region": null }), json!({ "Region": "" })] {
            let mut base = json!({
                "Name": "x",
                "Seq": 3,
                "Amount": 1.5,
                "When": "2024-12-01 10:00:00",
            });
            base.as_object_mut()
                .unwrap()
                .extend(region.as_object().unwrap().clone());
            assert!(errors_for(base).is_empty());
        }
    }

    #[test]
    fn null_required_field_is_reported_missing() {
        let errors = errors_for(json!({
            "Name": null,
            "Seq": 3,
            "Amount": 1.5,
            "When": "2024-12-01 10:00:00",
        }));
        assert_eq!(errors[0].message, "field required");
    }

    #[test]
    fn nested_paths_use_prefix() {
        let mut errors = Vec::new();
        let value = json!({ "Seq": "x" });
        check_object(
            &mut errors,
            "Last_Actions",
            value.as_object().unwrap(),
            &[FieldSpec::required("Seq", FieldKind::Int)],
        );
        assert_eq!(errors[0].path, "Last_Actions.Seq");
    }
}
