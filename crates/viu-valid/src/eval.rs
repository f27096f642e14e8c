//! # Schema Interpreter
//!
//! One generic evaluation function walks (schema, input) and produces
//! either a normalized value or the full list of violations. All
//! descriptor variants are handled here; the descriptors themselves
//! carry no behavior.
//!
//! ## Aggregation policy
//!
//! Violations are collected across the whole object in one pass.
//! Within a single field the checks short-circuit: a value that fails
//! its type check is not also bounds-checked, and the first violated
//! bound wins. Object-level refinements only run once every field of
//! that object validated cleanly; async refinements only run once the
//! entire synchronous pass (refinements included) is clean.

use futures::future::{join_all, BoxFuture};
use serde_json::{Map, Value};

use crate::issue::{Issue, ValidationError, ValidationOutcome};
use crate::schema::{ObjectSchema, Schema};

impl Schema {
    /// Strict validation: the normalized value, or an error carrying
    /// every violation. Propagate with `?`.
    pub fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        let mut issues = Vec::new();
        let value = check(self, input, "", &mut issues);
        match value {
            Some(v) if issues.is_empty() => Ok(v),
            _ => {
                if issues.is_empty() {
                    issues.push(Issue::new("", "invalid input"));
                }
                Err(ValidationError::new(issues))
            }
        }
    }

    /// Safe validation: never fails, returns a discriminated outcome.
    pub fn safe_validate(&self, input: &Value) -> ValidationOutcome {
        match self.validate(input) {
            Ok(v) => ValidationOutcome::Valid(v),
            Err(e) => ValidationOutcome::Invalid(e),
        }
    }

    /// Strict validation including async refinements.
    ///
    /// The synchronous pass runs first and short-circuits: async
    /// predicates are only awaited when it was clean. All async
    /// refinements then run concurrently and their failures aggregate.
    pub async fn validate_async(&self, input: &Value) -> Result<Value, ValidationError> {
        let normalized = self.validate(input)?;

        let mut pending = Vec::new();
        collect_async(self, &normalized, "", &mut pending);
        if pending.is_empty() {
            return Ok(normalized);
        }

        let (meta, futures): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .map(|(path, message, fut)| ((path, message), fut))
            .unzip();
        let results = join_all(futures).await;

        let issues: Vec<Issue> = meta
            .into_iter()
            .zip(results)
            .filter(|(_, ok)| !ok)
            .map(|((path, message), _)| Issue::new(path, message))
            .collect();

        if issues.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Safe validation including async refinements.
    pub async fn safe_validate_async(&self, input: &Value) -> ValidationOutcome {
        match self.validate_async(input).await {
            Ok(v) => ValidationOutcome::Valid(v),
            Err(e) => ValidationOutcome::Invalid(e),
        }
    }
}

/// Join a parent path and a field name with dot notation.
fn join(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else if key.is_empty() {
        base.to_string()
    } else {
        format!("{base}.{key}")
    }
}

/// Walk one (schema, input) node. Returns the normalized value, or
/// `None` after pushing at least one issue.
fn check(schema: &Schema, input: &Value, path: &str, issues: &mut Vec<Issue>) -> Option<Value> {
    match schema {
        Schema::String(s) => {
            let Value::String(raw) = input else {
                issues.push(Issue::new(path, "expected a string"));
                return None;
            };
            let mut value = raw.as_str();
            if s.trim {
                value = value.trim();
            }
            let value = if s.lowercase {
                value.to_lowercase()
            } else {
                value.to_string()
            };

            let length = value.chars().count();
            if let Some((min, message)) = &s.min_len {
                if length < *min {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            if let Some((max, message)) = &s.max_len {
                if length > *max {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            if let Some((pattern, message)) = &s.pattern {
                if !pattern.is_match(&value) {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            Some(Value::String(value))
        }

        Schema::Integer(s) => {
            let value = match input {
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            let Some(value) = value else {
                issues.push(Issue::new(path, "expected an integer"));
                return None;
            };
            if let Some((min, message)) = &s.min {
                if value < *min {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            if let Some((max, message)) = &s.max {
                if value > *max {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            Some(Value::from(value))
        }

        Schema::Float(s) => {
            let value = match input {
                Value::Number(n) => n.as_f64(),
                _ => None,
            };
            let Some(value) = value else {
                issues.push(Issue::new(path, "expected a number"));
                return None;
            };
            if let Some((min, message)) = &s.min {
                if value < *min {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            if let Some((max, message)) = &s.max {
                if value > *max {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            Some(input.clone())
        }

        Schema::Bool(s) => {
            let Value::Bool(value) = input else {
                issues.push(Issue::new(path, "expected a boolean"));
                return None;
            };
            if let Some(message) = &s.must_be_true {
                if !value {
                    issues.push(Issue::new(path, message));
                    return None;
                }
            }
            Some(Value::Bool(*value))
        }

        Schema::DateTime(s) => {
            let parsed = match input {
                Value::String(raw) => chrono::DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|_| raw.clone()),
                _ => None,
            };
            match parsed {
                Some(raw) => Some(Value::String(raw)),
                None => {
                    let message = s
                        .message
                        .as_deref()
                        .unwrap_or("expected an RFC 3339 datetime");
                    issues.push(Issue::new(path, message));
                    None
                }
            }
        }

        Schema::Enum(s) => {
            let matches = match input {
                Value::String(raw) => s.allowed.iter().any(|a| a == raw),
                _ => false,
            };
            if matches {
                Some(input.clone())
            } else {
                issues.push(Issue::new(path, &s.message));
                None
            }
        }

        Schema::Array(s) => {
            let Value::Array(items) = input else {
                issues.push(Issue::new(path, "expected an array"));
                return None;
            };

            // Array-level bounds short-circuit among themselves, but the
            // elements still validate so their issues aggregate too.
            let mut array_ok = true;
            if let Some((min, message)) = &s.min_items {
                if items.len() < *min {
                    issues.push(Issue::new(path, message));
                    array_ok = false;
                }
            }
            if array_ok {
                if let Some((max, message)) = &s.max_items {
                    if items.len() > *max {
                        issues.push(Issue::new(path, message));
                        array_ok = false;
                    }
                }
            }
            if array_ok {
                if let Some(message) = &s.unique {
                    let duplicated = items
                        .iter()
                        .enumerate()
                        .any(|(i, a)| items[..i].contains(a));
                    if duplicated {
                        issues.push(Issue::new(path, message));
                        array_ok = false;
                    }
                }
            }

            let mut out = Vec::with_capacity(items.len());
            let mut items_ok = true;
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                match check(&s.item, item, &item_path, issues) {
                    Some(v) => out.push(v),
                    None => items_ok = false,
                }
            }

            if array_ok && items_ok {
                Some(Value::Array(out))
            } else {
                None
            }
        }

        Schema::Object(s) => check_object(s, input, path, issues),
    }
}

fn check_object(
    schema: &ObjectSchema,
    input: &Value,
    path: &str,
    issues: &mut Vec<Issue>,
) -> Option<Value> {
    let Value::Object(map) = input else {
        issues.push(Issue::new(path, "expected an object"));
        return None;
    };

    let before = issues.len();
    let mut out = Map::new();

    // Unknown keys are dropped: only declared fields reach the output.
    for field in &schema.fields {
        let field_path = join(path, &field.name);
        match map.get(&field.name) {
            Some(value) if !value.is_null() => {
                if let Some(normalized) = check(&field.schema, value, &field_path, issues) {
                    out.insert(field.name.clone(), normalized);
                }
            }
            _ => {
                if let Some(default) = &field.default {
                    out.insert(field.name.clone(), default.clone());
                } else if field.required {
                    issues.push(Issue::new(&field_path, "is required"));
                }
            }
        }
    }

    // Refinements see the whole normalized object, and only run when
    // every field of this object validated cleanly.
    if issues.len() > before {
        return None;
    }
    let whole = Value::Object(out);
    for refinement in &schema.refinements {
        if !(refinement.predicate)(&whole) {
            issues.push(Issue::new(
                join(path, &refinement.path),
                &refinement.message,
            ));
        }
    }

    if issues.len() == before {
        Some(whole)
    } else {
        None
    }
}

/// Gather every async refinement in the schema tree, paired with the
/// normalized value of its object and its absolute path.
fn collect_async(
    schema: &Schema,
    value: &Value,
    path: &str,
    out: &mut Vec<(String, String, BoxFuture<'static, bool>)>,
) {
    match schema {
        Schema::Object(s) => {
            for refinement in &s.async_refinements {
                out.push((
                    join(path, &refinement.path),
                    refinement.message.clone(),
                    (refinement.predicate)(value),
                ));
            }
            if let Value::Object(map) = value {
                for field in &s.fields {
                    if let Some(v) = map.get(&field.name) {
                        collect_async(&field.schema, v, &join(path, &field.name), out);
                    }
                }
            }
        }
        Schema::Array(s) => {
            if let Value::Array(items) = value {
                for (i, item) in items.iter().enumerate() {
                    collect_async(&s.item, item, &format!("{path}[{i}]"), out);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, boolean, datetime, enumeration, float, integer, object, string};
    use serde_json::json;

    #[test]
    fn string_transforms_apply_before_checks() {
        let schema = object()
            .field("email", string().trim().lowercase().min_len(5, "too short"))
            .build();
        let value = schema
            .validate(&json!({"email": "  ANA@VIU.COM  "}))
            .unwrap();
        assert_eq!(value, json!({"email": "ana@viu.com"}));

        // Trimmed length is what the bound sees.
        let err = schema.validate(&json!({"email": "  a@b  "})).unwrap_err();
        assert_eq!(err.issues()[0].path, "email");
        assert_eq!(err.issues()[0].message, "too short");
    }

    #[test]
    fn per_field_checks_short_circuit() {
        let schema = object()
            .field(
                "name",
                string().min_len(2, "min violated").max_len(4, "max violated"),
            )
            .build();
        // Wrong type: only the type issue, no bounds issues.
        let err = schema.validate(&json!({"name": 7})).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].message, "expected a string");
    }

    #[test]
    fn violations_aggregate_across_fields() {
        let schema = object()
            .field("name", string().min_len(2, "nome muito curto"))
            .field("age", integer().min(0, "idade negativa"))
            .field("active", boolean())
            .build();
        let err = schema
            .validate(&json!({"name": "A", "age": -1, "active": "yes"}))
            .unwrap_err();
        let paths: Vec<&str> = err.issues().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "age", "active"]);
    }

    #[test]
    fn missing_required_field_is_reported() {
        let schema = object().field("name", string()).build();
        let err = schema.validate(&json!({})).unwrap_err();
        assert_eq!(err.issues()[0].path, "name");
        assert_eq!(err.issues()[0].message, "is required");
    }

    #[test]
    fn optional_and_default_fields() {
        let schema = object()
            .optional_field("color", string())
            .field_with_default("limit", integer(), json!(20))
            .build();
        let value = schema.validate(&json!({})).unwrap();
        assert_eq!(value, json!({"limit": 20}));

        // Null counts as absent.
        let value = schema.validate(&json!({"color": null})).unwrap();
        assert_eq!(value, json!({"limit": 20}));
    }

    #[test]
    fn unknown_keys_are_stripped() {
        let schema = object().field("name", string()).build();
        let value = schema
            .validate(&json!({"name": "Ana", "injected": true}))
            .unwrap();
        assert_eq!(value, json!({"name": "Ana"}));
    }

    #[test]
    fn nested_paths_use_dot_notation() {
        let schema = object()
            .field(
                "period",
                object().field("start", datetime()).field("end", datetime()),
            )
            .build();
        let err = schema
            .validate(&json!({"period": {"start": "not-a-date", "end": "2026-01-01T00:00:00Z"}}))
            .unwrap_err();
        assert_eq!(err.issues()[0].path, "period.start");
    }

    #[test]
    fn array_elements_use_index_paths() {
        let schema = object()
            .field("tags", array(string().max_len(3, "tag longa")))
            .build();
        let err = schema
            .validate(&json!({"tags": ["ok", "excessivamente-longa", "ab"]}))
            .unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].path, "tags[1]");
    }

    #[test]
    fn array_bounds_and_uniqueness() {
        let schema = object()
            .field(
                "tags",
                array(string())
                    .max_items(2, "no máximo 2 tags")
                    .unique("tags duplicadas"),
            )
            .build();
        let err = schema
            .validate(&json!({"tags": ["a", "b", "c"]}))
            .unwrap_err();
        assert_eq!(err.issues()[0].message, "no máximo 2 tags");

        let err = schema.validate(&json!({"tags": ["a", "a"]})).unwrap_err();
        assert_eq!(err.issues()[0].message, "tags duplicadas");
    }

    #[test]
    fn enum_membership() {
        let schema = object()
            .field(
                "status",
                enumeration(["PENDENTE", "APROVADA"], "status desconhecido"),
            )
            .build();
        assert!(schema.validate(&json!({"status": "APROVADA"})).is_ok());
        let err = schema.validate(&json!({"status": "OUTRO"})).unwrap_err();
        assert_eq!(err.issues()[0].message, "status desconhecido");
    }

    #[test]
    fn integer_rejects_fractions_and_float_accepts_them() {
        let int_schema = object().field("n", integer()).build();
        assert!(int_schema.validate(&json!({"n": 2.5})).is_err());
        assert!(int_schema.validate(&json!({"n": 2})).is_ok());

        let float_schema = object().field("n", float().max(10.0, "demais")).build();
        assert!(float_schema.validate(&json!({"n": 2.5})).is_ok());
        assert!(float_schema.validate(&json!({"n": 10.5})).is_err());
    }

    #[test]
    fn refinement_attributes_error_to_declared_path() {
        let schema = object()
            .field("start", datetime())
            .field("end", datetime())
            .refine("start", "início após o fim", |value| {
                let start = value["start"].as_str().unwrap_or_default();
                let end = value["end"].as_str().unwrap_or_default();
                start <= end
            })
            .build();

        let ok = schema.validate(&json!({
            "start": "2026-01-01T00:00:00Z",
            "end": "2026-02-01T00:00:00Z",
        }));
        assert!(ok.is_ok());

        let err = schema
            .validate(&json!({
                "start": "2026-03-01T00:00:00Z",
                "end": "2026-02-01T00:00:00Z",
            }))
            .unwrap_err();
        assert_eq!(err.issues()[0].path, "start");
        assert_eq!(err.issues()[0].message, "início após o fim");
    }

    #[test]
    fn refinements_skip_when_fields_are_invalid() {
        let schema = object()
            .field("a", integer())
            .field("b", integer())
            .refine("a", "a must equal b", |v| v["a"] == v["b"])
            .build();
        let err = schema.validate(&json!({"a": "x", "b": 2})).unwrap_err();
        // Only the structural issue; the refinement never ran.
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].message, "expected an integer");
    }

    #[test]
    fn validation_is_idempotent_on_normalized_values() {
        let schema = object()
            .field("email", string().trim().lowercase())
            .field_with_default("limit", integer(), json!(20))
            .build();
        let once = schema
            .validate(&json!({"email": "  ANA@VIU.COM "}))
            .unwrap();
        let twice = schema.validate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn safe_validate_never_fails() {
        let schema = object().field("name", string()).build();
        let outcome = schema.safe_validate(&json!({"name": 1}));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.error().map(|e| e.issues().len()), Some(1));

        let outcome = schema.safe_validate(&json!({"name": "ok"}));
        assert!(outcome.is_valid());
        assert_eq!(outcome.value(), Some(&json!({"name": "ok"})));
    }
}
