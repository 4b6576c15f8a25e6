//! Validity flag for form-bound controls.
//!
//! Form libraries keep `touched` and `errors` as nested JSON-like maps keyed
//! by field name, where the name may be a path (`address.city`, `items[0]`).
//! A control is invalid once its field is both touched and in error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ touched, errors }` part of an external form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub touched: Value,
    pub errors: Value,
}

impl FormState {
    pub fn new(touched: Value, errors: Value) -> Self {
        Self { touched, errors }
    }

    /// True when neither map holds anything.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.touched) && is_blank(&self.errors)
    }

    /// Whether `field` has been touched and currently has an error.
    pub fn is_invalid(&self, field: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let touched = get_path(&self.touched, field).is_some_and(is_truthy);
        let errored = get_path(&self.errors, field).is_some_and(is_truthy);
        touched && errored
    }

    /// The error text for `field`, if it is invalid and the error is a string.
    pub fn error_message(&self, field: &str) -> Option<&str> {
        if !self.is_invalid(field) {
            return None;
        }
        get_path(&self.errors, field).and_then(Value::as_str)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a value at a dotted/indexed path such as `items[0].name`.
///
/// A key that literally contains dots is matched before the path is split.
/// A path with no segments reads nothing.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    if let Some(direct) = value.as_object().and_then(|map| map.get(path)) {
        return Some(direct);
    }

    let normalized = path.replace('[', ".").replace(']', "");
    let mut segments = normalized.split('.').filter(|segment| !segment.is_empty()).peekable();
    segments.peek()?;
    segments.try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_form_is_valid() {
        let form = FormState::default();
        assert!(form.is_empty());
        assert!(!form.is_invalid("country"));
    }

    #[test]
    fn test_touched_and_errored() {
        let form = FormState::new(
            json!({ "country": true }),
            json!({ "country": "Please select a country" }),
        );
        assert!(form.is_invalid("country"));
        assert_eq!(form.error_message("country"), Some("Please select a country"));
    }

    #[test]
    fn test_untouched_error_is_valid() {
        let form = FormState::new(json!({}), json!({ "country": "Required" }));
        assert!(!form.is_invalid("country"));
        assert_eq!(form.error_message("country"), None);
    }

    #[test]
    fn test_touched_without_error_is_valid() {
        let form = FormState::new(json!({ "country": true }), json!({ "country": "" }));
        assert!(!form.is_invalid("country"));
    }

    #[test]
    fn test_nested_paths() {
        let form = FormState::new(
            json!({ "address": { "region": true }, "items": [{ "tag": true }] }),
            json!({ "address": { "region": "Required" }, "items": [{ "tag": "Too long" }] }),
        );
        assert!(form.is_invalid("address.region"));
        assert!(form.is_invalid("items[0].tag"));
        assert!(!form.is_invalid("items[1].tag"));
    }

    #[test]
    fn test_empty_field_name_is_valid() {
        let form = FormState::new(json!({ "country": true }), json!({ "country": "Required" }));
        assert!(!form.is_invalid(""));
        assert!(!form.is_invalid("."));
        assert_eq!(form.error_message(""), None);
        assert_eq!(get_path(&form.touched, "[]"), None);
    }

    #[test]
    fn test_literal_dotted_key() {
        let value = json!({ "a.b": 1, "a": { "b": 2 } });
        assert_eq!(get_path(&value, "a.b"), Some(&json!(1)));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1.5)));
    }
}
