use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value, ID};
use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

/// A client-supplied reference to another entity: either a bare id or an
/// embedded object carrying an `id`. Resolved to a numeric id once, where it
/// enters the gateway, so resolvers never inspect the raw shape again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Id(i64),
    Embedded(Option<i64>),
}

impl EntityRef {
    pub fn id(&self) -> Option<i64> {
        match self {
            EntityRef::Id(id) => Some(*id),
            EntityRef::Embedded(id) => *id,
        }
    }
}

/// Accepts `3`, `"3"` or `{id: 3}`
#[Scalar(name = "EntityRef")]
impl ScalarType for EntityRef {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .map(EntityRef::Id)
                .ok_or_else(|| InputValueError::custom("reference id must be an integer")),
            Value::String(raw) => parse_numeric_id(&raw)
                .map(EntityRef::Id)
                .ok_or_else(|| InputValueError::custom(format!("'{}' is not a numeric id", raw))),
            Value::Object(fields) => {
                let id = match fields.get("id") {
                    Some(Value::Number(number)) => number.as_i64(),
                    Some(Value::String(raw)) => parse_numeric_id(raw),
                    _ => None,
                };
                id.map(|id| EntityRef::Embedded(Some(id)))
                    .ok_or_else(|| InputValueError::custom("embedded reference needs a numeric `id`"))
            }
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        match self.id() {
            Some(id) => Value::Number(id.into()),
            None => Value::Null,
        }
    }
}

/// Reads a backend reference (`5`, `"CS101"` or `{id: ..}`) as the id to
/// search by. Shapes that carry no usable id read as `None` instead of
/// failing the surrounding record.
pub fn deserialize_reference<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(reference_id))
}

fn reference_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::String(raw) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        serde_json::Value::Object(fields) => match fields.get("id")? {
            serde_json::Value::Object(_) => None,
            id => reference_id(id),
        },
        _ => None,
    }
}

fn parse_numeric_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Backends send ids as numbers or strings; both become a GraphQL `ID`.
pub fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ID, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => Ok(ID(number.to_string())),
        serde_json::Value::String(raw) => Ok(ID(raw)),
        other => Err(D::Error::custom(format!("expected an id, got {}", other))),
    }
}

/// Like [`deserialize_id`], but a missing or `null` id reads as `None`.
pub fn deserialize_optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ID>, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::Number(number)) => Ok(Some(ID(number.to_string()))),
        Some(serde_json::Value::String(raw)) => Ok(Some(ID(raw))),
        Some(other) => Err(D::Error::custom(format!("expected an id, got {}", other))),
    }
}

/// Coerce a string id into a JSON number the way the backends expect.
///
/// Blank input means "not supplied" (`None`); anything non-numeric becomes
/// JSON `null`.
pub fn coerce_numeric_id(raw: &str) -> Option<serde_json::Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(serde_json::Value::from(int));
    }
    let number = trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null);
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_ids() {
        assert_eq!(EntityRef::parse(Value::from(7)).unwrap(), EntityRef::Id(7));
        assert_eq!(EntityRef::parse(Value::from("12")).unwrap(), EntityRef::Id(12));
    }

    #[test]
    fn parses_embedded_objects() {
        let value = Value::from_json(json!({"id": "4", "name": "Physics"})).unwrap();
        assert_eq!(EntityRef::parse(value).unwrap(), EntityRef::Embedded(Some(4)));
    }

    #[test]
    fn rejects_unusable_input() {
        assert!(EntityRef::parse(Value::from("abc")).is_err());
        assert!(EntityRef::parse(Value::Boolean(true)).is_err());
        let no_id = Value::from_json(json!({"name": "Physics"})).unwrap();
        assert!(EntityRef::parse(no_id).is_err());
    }

    #[derive(Deserialize)]
    struct Link {
        #[serde(default, deserialize_with = "deserialize_reference")]
        course: Option<String>,
    }

    fn link(value: serde_json::Value) -> Option<String> {
        serde_json::from_value::<Link>(value).unwrap().course
    }

    #[test]
    fn reads_backend_references() {
        assert_eq!(link(json!({"course": 3})), Some("3".to_string()));
        assert_eq!(link(json!({"course": " CS101 "})), Some("CS101".to_string()));
        assert_eq!(
            link(json!({"course": {"id": 9, "name": "Algebra"}})),
            Some("9".to_string())
        );
        assert_eq!(link(json!({"course": {"id": "CS101"}})), Some("CS101".to_string()));
    }

    #[test]
    fn unusable_references_read_as_none() {
        assert_eq!(link(json!({})), None);
        assert_eq!(link(json!({"course": null})), None);
        assert_eq!(link(json!({"course": true})), None);
        assert_eq!(link(json!({"course": ""})), None);
        assert_eq!(link(json!({"course": [1, 2]})), None);
        assert_eq!(link(json!({"course": {"name": "Algebra"}})), None);
        assert_eq!(link(json!({"course": {"id": {"id": 1}}})), None);
    }

    #[test]
    fn ids_deserialize_from_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "deserialize_id")]
            id: ID,
        }
        let numeric: Row = serde_json::from_value(json!({"id": 42})).unwrap();
        let textual: Row = serde_json::from_value(json!({"id": "abc-1"})).unwrap();
        assert_eq!(numeric.id, ID("42".to_string()));
        assert_eq!(textual.id, ID("abc-1".to_string()));
        assert!(serde_json::from_value::<Row>(json!({"id": null})).is_err());
    }

    #[test]
    fn optional_ids_tolerate_absence() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_optional_id")]
            id: Option<ID>,
        }
        let missing: Row = serde_json::from_value(json!({})).unwrap();
        let null: Row = serde_json::from_value(json!({"id": null})).unwrap();
        let numeric: Row = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(missing.id, None);
        assert_eq!(null.id, None);
        assert_eq!(numeric.id, Some(ID("3".to_string())));
        assert!(serde_json::from_value::<Row>(json!({"id": [3]})).is_err());
    }

    #[test]
    fn coerces_numeric_strings() {
        assert_eq!(coerce_numeric_id("3"), Some(json!(3)));
        assert_eq!(coerce_numeric_id(" 3 "), Some(json!(3)));
        assert_eq!(coerce_numeric_id("2.5"), Some(json!(2.5)));
        assert_eq!(coerce_numeric_id("abc"), Some(serde_json::Value::Null));
        assert_eq!(coerce_numeric_id(""), None);
    }
}
