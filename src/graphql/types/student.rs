use async_graphql::*;
use serde::Deserialize;

use super::payload::Payload;
use super::scalars::{coerce_numeric_id, deserialize_id, deserialize_optional_id};

/// Embedded in student payloads. Students created without a university come
/// back with `university: {}`, so the id is optional here.
#[derive(SimpleObject, Deserialize, Debug, Clone, PartialEq)]
pub struct University {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<ID>,
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(SimpleObject, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ID,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub university: Option<University>,
}

#[derive(InputObject, Debug, Default)]
pub struct AddStudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university_id: Option<ID>,
}

#[derive(InputObject, Debug, Default)]
pub struct UpdateStudentInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub university_id: Option<ID>,
}

impl AddStudentInput {
    pub fn to_body(&self) -> serde_json::Value {
        student_body(
            Some(&self.first_name),
            Some(&self.last_name),
            Some(&self.email),
            self.university_id.as_ref(),
        )
    }
}

impl UpdateStudentInput {
    pub fn to_body(&self) -> serde_json::Value {
        student_body(
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.email.as_ref(),
            self.university_id.as_ref(),
        )
    }
}

/// The student backend wants the university nested as `{id: <number>}`.
/// The object is always sent; its `id` is left out when none was supplied.
fn student_body(
    first_name: Option<&String>,
    last_name: Option<&String>,
    email: Option<&String>,
    university_id: Option<&ID>,
) -> serde_json::Value {
    let university = Payload::new()
        .field("id", university_id.and_then(|id| coerce_numeric_id(id)))
        .into_value();

    Payload::new()
        .field("firstName", first_name.cloned())
        .field("lastName", last_name.cloned())
        .field("email", email.cloned())
        .field("university", Some(university))
        .into_value()
}
