//! Schema-driven argument coercion.
//!
//! Interprets the subset of JSON Schema used by the tool descriptors
//! (`type`, `properties`, `required`, `enum`, `minimum`, `maximum`,
//! `minLength`, `maxLength`, `items`, `default`). Only declared properties
//! survive; `null` counts as absent; declared defaults are filled in.

use log::debug;
use serde_json::{Map, Number, Value};

use super::validation::{ValidationError, ValidationErrors};

/// Validate raw tool arguments against `schema` and return the coerced object.
///
/// Missing or `null` arguments are treated as an empty object.
pub fn coerce_arguments(
    schema: &Value,
    arguments: Option<Value>,
) -> Result<Value, ValidationErrors> {
    let input = match arguments {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value,
    };

    let mut errors = ValidationErrors::new();
    let coerced = coerce_value(schema, input, "", &mut errors);
    errors.into_result()?;
    Ok(coerced.unwrap_or_else(|| Value::Object(Map::new())))
}

fn coerce_value(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    match schema.get("type").and_then(Value::as_str) {
        Some("object") => coerce_object(schema, value, path, errors),
        Some("array") => coerce_array(schema, value, path, errors),
        Some("string") => coerce_string(schema, value, path, errors),
        Some("integer") => coerce_integer(schema, value, path, errors),
        Some("number") => coerce_number(schema, value, path, errors),
        Some("boolean") => coerce_boolean(value, path, errors),
        _ => Some(value),
    }
}

fn field_name(path: &str) -> &str {
    if path.is_empty() {
        "arguments"
    } else {
        path
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn coerce_object(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let Value::Object(mut input) = value else {
        errors.add(ValidationError::wrong_type(field_name(path), "object"));
        return None;
    };

    // Free-form object: nothing declared to filter against.
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Some(Value::Object(input));
    };

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut output = Map::new();
    for (name, property) in properties {
        let field = join(path, name);
        let is_required = required.contains(&name.as_str());

        match input.remove(name) {
            None | Some(Value::Null) => {
                if let Some(default) = property.get("default") {
                    output.insert(name.clone(), default.clone());
                } else if is_required {
                    errors.add(ValidationError::missing(&field));
                }
            }
            Some(raw) => {
                if let Some(coerced) = coerce_value(property, raw, &field, errors) {
                    if is_required && coerced.as_str().is_some_and(|s| s.trim().is_empty()) {
                        errors.add(ValidationError::empty(&field));
                        continue;
                    }
                    output.insert(name.clone(), coerced);
                }
            }
        }
    }

    for dropped in input.keys() {
        debug!("dropping undeclared argument '{}'", join(path, dropped));
    }

    Some(Value::Object(output))
}

fn coerce_array(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let Value::Array(items) = value else {
        errors.add(ValidationError::wrong_type(field_name(path), "array"));
        return None;
    };

    let Some(item_schema) = schema.get("items") else {
        return Some(Value::Array(items));
    };

    let before = errors.len();
    let coerced: Vec<Value> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| coerce_value(item_schema, item, &format!("{path}[{i}]"), errors))
        .collect();

    (errors.len() == before).then_some(Value::Array(coerced))
}

fn coerce_string(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let Value::String(text) = value else {
        errors.add(ValidationError::wrong_type(field_name(path), "string"));
        return None;
    };

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
        if !allowed.iter().any(|candidate| candidate.as_str() == Some(text.as_str())) {
            let allowed: Vec<String> = allowed
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            errors.add(ValidationError::not_allowed(field_name(path), &text, &allowed));
            return None;
        }
    }

    let length = text.chars().count() as u64;
    if let Some(min_length) = schema.get("minLength").and_then(Value::as_u64) {
        if length < min_length {
            errors.add(ValidationError::too_short(field_name(path), min_length));
            return None;
        }
    }
    if let Some(max_length) = schema.get("maxLength").and_then(Value::as_u64) {
        if length > max_length {
            errors.add(ValidationError::too_long(field_name(path), max_length));
            return None;
        }
    }

    Some(Value::String(text))
}

fn coerce_integer(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let parsed = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let Some(number) = parsed else {
        errors.add(ValidationError::wrong_type(field_name(path), "integer"));
        return None;
    };

    check_bounds(schema, number as f64, path, errors).then(|| Value::Number(number.into()))
}

fn coerce_number(
    schema: &Value,
    value: Value,
    path: &str,
    errors: &mut ValidationErrors,
) -> Option<Value> {
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(number) = parsed.and_then(Number::from_f64) else {
        errors.add(ValidationError::wrong_type(field_name(path), "number"));
        return None;
    };

    let as_f64 = number.as_f64().unwrap_or_default();
    check_bounds(schema, as_f64, path, errors).then_some(Value::Number(number))
}

fn coerce_boolean(value: Value, path: &str, errors: &mut ValidationErrors) -> Option<Value> {
    match value {
        Value::Bool(flag) => Some(Value::Bool(flag)),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(Value::Bool(true)),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(Value::Bool(false)),
        _ => {
            errors.add(ValidationError::wrong_type(field_name(path), "boolean"));
            None
        }
    }
}

fn check_bounds(schema: &Value, number: f64, path: &str, errors: &mut ValidationErrors) -> bool {
    if let Some(minimum) = schema.get("minimum").and_then(Value::as_f64) {
        if number < minimum {
            errors.add(ValidationError::below_minimum(field_name(path), minimum));
            return false;
        }
    }
    if let Some(maximum) = schema.get("maximum").and_then(Value::as_f64) {
        if number > maximum {
            errors.add(ValidationError::above_maximum(field_name(path), maximum));
            return false;
        }
    }
    true
}
