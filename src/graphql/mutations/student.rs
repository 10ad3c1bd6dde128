use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::StructuredError;
use crate::graphql::types::student::{AddStudentInput, Student, UpdateStudentInput};

#[derive(Default)]
pub struct StudentMutation;

#[Object]
impl StudentMutation {
    /// Create a student
    async fn add_student(&self, ctx: &Context<'_>, input: AddStudentInput) -> Result<Student> {
        let context = ctx.data::<GraphQLContext>()?;
        let student = context
            .students
            .add(&input.to_body())
            .await
            .and_then(|body| body.decode("student create"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(student)
    }

    /// Update an existing student
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateStudentInput,
    ) -> Result<Student> {
        let context = ctx.data::<GraphQLContext>()?;
        let student = context
            .students
            .update(&id, &input.to_body())
            .await
            .and_then(|body| body.decode("student update"))
            .map_err(StructuredError::from_gateway_error)?;

        Ok(student)
    }

    /// Delete a student
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        let reply = context
            .students
            .delete(&id)
            .await
            .map_err(StructuredError::from_gateway_error)?;

        Ok(reply.delete_succeeded())
    }
}
