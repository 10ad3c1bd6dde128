use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::{AiResult, Course, Student, StudentCourse};
use crate::services::{CourseFilter, EnrollmentFilter, StudentFilter};

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// List every student
    async fn get_all_students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let students = context
            .students
            .get_all()
            .await
            .and_then(|body| body.decode("student list"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(students)
    }

    /// Search students; only the supplied filters are sent to the backend
    async fn student_search(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        university: Option<String>,
        name: Option<String>,
    ) -> Result<Vec<Student>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filter = StudentFilter {
            id: id.map(|id| id.0),
            university,
            name,
        };
        let students = context
            .students
            .search(&filter)
            .await
            .and_then(|body| body.decode("student search"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(students)
    }

    /// List every course
    async fn get_all_courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let courses = context
            .courses
            .get_all()
            .await
            .and_then(|body| body.decode("course list"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(courses)
    }

    /// Search courses by name, instructor or category
    async fn courses_search(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        instructor: Option<String>,
        category: Option<String>,
    ) -> Result<Vec<Course>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filter = CourseFilter {
            id: None,
            name,
            instructor,
            category,
        };
        let courses = context
            .courses
            .search(&filter)
            .await
            .and_then(|body| body.decode("course search"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(courses)
    }

    /// List enrollments, optionally for one student or one course
    async fn student_courses(
        &self,
        ctx: &Context<'_>,
        student_id: Option<ID>,
        course_id: Option<ID>,
    ) -> Result<Vec<StudentCourse>> {
        let context = ctx.data::<GraphQLContext>()?;
        let filter = EnrollmentFilter {
            student_id: student_id.map(|id| id.0),
            course: course_id.map(|id| id.0),
        };
        let enrollments = context
            .courses
            .enrollments(&filter)
            .await
            .and_then(|body| body.decode("enrollment list"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(enrollments)
    }

    /// Summarize a piece of text with the AI backend
    async fn summarize(&self, ctx: &Context<'_>, text: String) -> Result<AiResult> {
        let context = ctx.data::<GraphQLContext>()?;
        let reply = context
            .ai
            .summarize(&text)
            .await
            .map_err(StructuredError::from_gateway_error)?;

        Ok(AiResult::from(reply))
    }

    /// Translate a piece of text into `targetLanguage`
    async fn translate(
        &self,
        ctx: &Context<'_>,
        text: String,
        target_language: String,
    ) -> Result<AiResult> {
        let context = ctx.data::<GraphQLContext>()?;
        let reply = context
            .ai
            .translate(&text, &target_language)
            .await
            .map_err(StructuredError::from_gateway_error)?;

        Ok(AiResult::from(reply))
    }
}
