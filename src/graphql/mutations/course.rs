use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::course::{AddCourseInput, Course, UpdateCourseInput};

#[derive(Default)]
pub struct CourseMutation;

#[Object]
impl CourseMutation {
    /// Create a course
    async fn add_course(&self, ctx: &Context<'_>, input: AddCourseInput) -> Result<Course> {
        let context = ctx.data::<GraphQLContext>()?;
        let course = context
            .courses
            .add(&input.to_body())
            .await
            .and_then(|body| body.decode("course create"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(course)
    }

    /// Update an existing course
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateCourseInput,
    ) -> Result<Course> {
        let context = ctx.data::<GraphQLContext>()?;
        let course = context
            .courses
            .update(&id, &input.to_body())
            .await
            .and_then(|body| body.decode("course update"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(course)
    }

    /// Delete a course
    async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        let reply = context
            .courses
            .delete(&id)
            .await
            .map_err(StructuredError::from_gateway_error)?;

        Ok(reply.delete_succeeded())
    }
}
