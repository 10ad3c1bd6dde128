//! One client per REST backend. Each call maps to exactly one request and
//! returns the raw [`RestBody`](crate::relay::RestBody); projection onto
//! graph types happens in the resolvers.

pub mod ai_service;
pub mod course_service;
pub mod student_service;

pub use ai_service::*;
pub use course_service::*;
pub use student_service::*;
