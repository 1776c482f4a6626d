//! Response envelope normalization

use crate::error_codes::error_message;
use serde_json::Value;

/// Key under which the resolved error message is attached
pub const ERROR_MSG_KEY: &str = "errorMsg";

/// Attach `errorMsg` to a response body carrying a known `error` code
///
/// Any non-negative integer code (including `0`) that resolves in the code
/// table gets its message attached. Bodies without an integer `error`, with a
/// negative or unknown code, or that are not objects pass through unchanged.
/// A body that already has its own `errorMsg` keeps it.
pub fn transform(mut body: Value) -> Value {
    let Some(obj) = body.as_object_mut() else {
        return body;
    };

    let message = obj
        .get("error")
        .and_then(Value::as_i64)
        .filter(|code| *code > -1)
        .and_then(error_message);

    if let Some(message) = message {
        obj.entry(ERROR_MSG_KEY)
            .or_insert_with(|| Value::String(message.to_string()));
    }

    body
}
