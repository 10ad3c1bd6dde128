use async_graphql::*;
use serde::Deserialize;

use super::payload::Payload;
use super::scalars::deserialize_id;

#[derive(SimpleObject, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ID,
    pub name: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
}

#[derive(InputObject, Debug, Default)]
pub struct AddCourseInput {
    pub name: String,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
}

#[derive(InputObject, Debug, Default)]
pub struct UpdateCourseInput {
    pub name: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
}

impl AddCourseInput {
    pub fn to_body(&self) -> serde_json::Value {
        Payload::new()
            .field("name", Some(self.name.clone()))
            .field("instructor", self.instructor.clone())
            .field("category", self.category.clone())
            .field("schedule", self.schedule.clone())
            .into_value()
    }
}

impl UpdateCourseInput {
    pub fn to_body(&self) -> serde_json::Value {
        Payload::new()
            .field("name", self.name.clone())
            .field("instructor", self.instructor.clone())
            .field("category", self.category.clone())
            .field("schedule", self.schedule.clone())
            .into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_body_passes_fields_through() {
        let input = AddCourseInput {
            name: "Algebra".to_string(),
            instructor: Some("Noether".to_string()),
            category: None,
            schedule: Some("Mon 9:00".to_string()),
        };
        assert_eq!(
            input.to_body(),
            json!({"name": "Algebra", "instructor": "Noether", "schedule": "Mon 9:00"})
        );
    }

    #[test]
    fn empty_update_sends_empty_object() {
        assert_eq!(UpdateCourseInput::default().to_body(), json!({}));
    }

    #[test]
    fn course_projection_ignores_backend_extras() {
        let course: Course = serde_json::from_value(json!({
            "id": 2,
            "name": "Algebra",
            "instructor": "Noether",
            "category": "math",
            "schedule": "Mon 9:00",
            "created_at": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(course.id, ID("2".to_string()));
        assert_eq!(course.category.as_deref(), Some("math"));
    }
}
