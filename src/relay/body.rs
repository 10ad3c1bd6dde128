use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::{GatewayError, GatewayResult};

/// A backend reply: parsed JSON when the body parses, the raw text otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum RestBody {
    Json(Value),
    Text(String),
}

impl RestBody {
    /// Classify a response body. Never fails.
    pub fn parse(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => RestBody::Json(value),
            Err(err) => {
                debug!(error = %err, bytes = text.len(), "backend reply is not JSON, keeping raw text");
                RestBody::Text(text)
            }
        }
    }

    /// Project a JSON reply onto a typed graph shape. Unknown fields are dropped.
    pub fn decode<T: DeserializeOwned>(self, context: &str) -> GatewayResult<T> {
        match self {
            RestBody::Json(value) => serde_json::from_value(value)
                .map_err(|err| GatewayError::unexpected_shape(context, err)),
            RestBody::Text(text) => Err(GatewayError::unexpected_shape(
                context,
                format!("expected JSON, got text {:?}", preview(&text)),
            )),
        }
    }

    /// Collapse an AI backend reply into a single string.
    ///
    /// A string reply is used verbatim, an object with a `result` field yields
    /// that field, anything else is serialized whole.
    pub fn into_ai_text(self) -> String {
        match self {
            RestBody::Text(text) => text,
            RestBody::Json(Value::String(text)) => text,
            RestBody::Json(Value::Object(mut map)) if map.contains_key("result") => {
                match map.remove("result") {
                    Some(Value::String(text)) => text,
                    Some(other) => other.to_string(),
                    None => String::new(),
                }
            }
            RestBody::Json(other) => other.to_string(),
        }
    }

    /// Interpret a delete reply as a success flag.
    ///
    /// `{success: x}` uses the truthiness of `x`, a string reply succeeds when
    /// non-empty, and every other reply counts as success.
    pub fn delete_succeeded(&self) -> bool {
        match self {
            RestBody::Json(Value::Object(map)) => match map.get("success") {
                Some(flag) => is_truthy(flag),
                None => true,
            },
            RestBody::Json(Value::String(text)) | RestBody::Text(text) => !text.is_empty(),
            RestBody::Json(_) => true,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 120;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
