use serde_json::{Map, Value};

/// Builds a REST request body, leaving out fields the caller did not supply.
#[derive(Debug, Default)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
