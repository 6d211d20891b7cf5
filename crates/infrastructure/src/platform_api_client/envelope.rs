use coachdesk_core::{AppError, AppResult};
use serde_json::Value;

/// Unwraps `{"data": {...}}` into the inner record; other shapes pass through.
pub(super) fn unwrap_record(value: Value) -> Value {
    match value {
        Value::Object(mut object) if object.len() == 1 && object.contains_key("data") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        Value::Object(mut object)
            if object.get("success").is_some_and(Value::is_boolean)
                && object.get("data").is_some_and(Value::is_object) =>
        {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Accepts a bare array or an object whose `data` field is an array.
pub(super) fn unwrap_list(value: Value) -> AppResult<Value> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Null => Ok(Value::Array(Vec::new())),
        Value::Object(mut object) => match object.remove("data") {
            Some(data @ Value::Array(_)) => Ok(data),
            _ => Err(AppError::Upstream(
                "platform API list response has no data array".to_owned(),
            )),
        },
        _ => Err(AppError::Upstream(
            "platform API list response is neither an array nor an object".to_owned(),
        )),
    }
}
