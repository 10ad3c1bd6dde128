use async_graphql::*;
use serde::Deserialize;

use super::course::Course;
use super::scalars::{deserialize_id, deserialize_reference, EntityRef};
use super::student::Student;
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::services::{CourseFilter, StudentFilter};

/// An enrollment. `student` and `course` are stitched in from the student and
/// course backends, one lookup per enrollment and field.
#[derive(SimpleObject, Deserialize, Debug, Clone, PartialEq)]
#[graphql(complex)]
#[serde(from = "StudentCourseRecord")]
pub struct StudentCourse {
    pub id: ID,
    #[graphql(skip)]
    pub student_id: Option<String>,
    #[graphql(skip)]
    pub course_id: Option<String>,
}

/// Enrollment as stored by the course backend. The student arrives either as
/// `student_id` or as an embedded `student`; the course is an id or an object.
/// A reference without a usable id nulls only its own field.
#[derive(Deserialize)]
struct StudentCourseRecord {
    #[serde(deserialize_with = "deserialize_id")]
    id: ID,
    #[serde(default, deserialize_with = "deserialize_reference")]
    student_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reference")]
    student: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reference")]
    course: Option<String>,
}

impl From<StudentCourseRecord> for StudentCourse {
    fn from(record: StudentCourseRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id.or(record.student),
            course_id: record.course,
        }
    }
}

#[ComplexObject]
impl StudentCourse {
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<Student>> {
        let Some(id) = self.student_id.as_deref() else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        let students: Vec<Student> = context
            .students
            .search(&StudentFilter::by_id(id))
            .await
            .and_then(|body| body.decode("student search"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(students.into_iter().next())
    }

    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        let Some(id) = self.course_id.as_deref() else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        let courses: Vec<Course> = context
            .courses
            .search(&CourseFilter::by_id(id))
            .await
            .and_then(|body| body.decode("course search"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(courses.into_iter().next())
    }
}

#[derive(InputObject, Debug)]
pub struct StudentCourseInput {
    #[graphql(name = "student_id")]
    pub student_id: EntityRef,
    pub course: EntityRef,
}

impl StudentCourseInput {
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "student_id": self.student_id.id(),
            "course": self.course.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_reference_prefers_scalar_field() {
        let enrollment: StudentCourse =
            serde_json::from_value(json!({"id": 1, "student_id": 5, "student": {"id": 6}, "course": 2}))
                .unwrap();
        assert_eq!(enrollment.student_id.as_deref(), Some("5"));
        assert_eq!(enrollment.course_id.as_deref(), Some("2"));
    }

    #[test]
    fn student_reference_falls_back_to_embedded_object() {
        let enrollment: StudentCourse =
            serde_json::from_value(json!({"id": 1, "student": {"id": "6", "firstName": "Ada"}}))
                .unwrap();
        assert_eq!(enrollment.student_id.as_deref(), Some("6"));
        assert_eq!(enrollment.course_id, None);
    }

    #[test]
    fn embedded_course_yields_its_id() {
        let enrollment: StudentCourse = serde_json::from_value(json!({
            "id": "e-1",
            "student_id": null,
            "course": {"id": 4, "name": "Physics"}
        }))
        .unwrap();
        assert_eq!(enrollment.id, ID("e-1".to_string()));
        assert_eq!(enrollment.student_id, None);
        assert_eq!(enrollment.course_id.as_deref(), Some("4"));
    }

    #[test]
    fn odd_reference_shapes_do_not_fail_the_record() {
        let rows: Vec<StudentCourse> = serde_json::from_value(json!([
            {"id": 1, "student_id": 5, "course": "CS101"},
            {"id": 2, "student_id": true, "student": {"id": 7}, "course": {"title": "Algebra"}},
            {"id": 3, "student_id": [5], "course": 2.5}
        ]))
        .unwrap();

        assert_eq!(rows[0].student_id.as_deref(), Some("5"));
        assert_eq!(rows[0].course_id.as_deref(), Some("CS101"));
        assert_eq!(rows[1].student_id.as_deref(), Some("7"));
        assert_eq!(rows[1].course_id, None);
        assert_eq!(rows[2].student_id, None);
        assert_eq!(rows[2].course_id.as_deref(), Some("2.5"));
    }

    #[test]
    fn input_body_normalizes_both_shapes() {
        let input = StudentCourseInput {
            student_id: EntityRef::Id(5),
            course: EntityRef::Embedded(Some(2)),
        };
        assert_eq!(input.to_body(), json!({"student_id": 5, "course": 2}));
    }
}
