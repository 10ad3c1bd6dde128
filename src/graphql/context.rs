use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::relay::RestClient;
use crate::services::{AiService, CourseService, StudentService};

/// Shared, immutable state handed to every resolver through the schema data
#[derive(Clone)]
pub struct GraphQLContext {
    pub students: Arc<StudentService>,
    pub courses: Arc<CourseService>,
    pub ai: Arc<AiService>,
}

impl GraphQLContext {
    pub fn new(config: GatewayConfig, client: RestClient) -> Self {
        let students = StudentService::new(client.clone(), config.student_service_url);
        let courses = CourseService::new(client.clone(), config.course_service_url);
        let ai = AiService::new(client, config.ai_service_url);

        Self {
            students: Arc::new(students),
            courses: Arc::new(courses),
            ai: Arc::new(ai),
        }
    }
}
