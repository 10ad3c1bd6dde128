use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::student_course::{StudentCourse, StudentCourseInput};

#[derive(Default)]
pub struct StudentCourseMutation;

#[Object]
impl StudentCourseMutation {
    /// Enroll a student in a course
    async fn add_student_course(
        &self,
        ctx: &Context<'_>,
        input: StudentCourseInput,
    ) -> Result<StudentCourse> {
        let context = ctx.data::<GraphQLContext>()?;
        let enrollment = context
            .courses
            .enroll(&input.to_body())
            .await
            .and_then(|body| body.decode("enrollment create"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(enrollment)
    }
}
