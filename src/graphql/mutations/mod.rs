// Mutation module, one submodule per backend resource

mod course;
mod student;
mod student_course;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub student::StudentMutation,
    pub course::CourseMutation,
    pub student_course::StudentCourseMutation,
);
