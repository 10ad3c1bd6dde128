use serde_json::Value;

use crate::errors::GatewayResult;
use crate::relay::{endpoint, entity_endpoint, QueryParams, RestBody, RestClient};

/// Filters accepted by `GET /courses/`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CourseFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
}

impl CourseFilter {
    pub fn by_id(id: impl ToString) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("id", &self.id)
            .with("name", &self.name)
            .with("instructor", &self.instructor)
            .with("category", &self.category)
    }
}

/// Filters accepted by `GET /student-courses/`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnrollmentFilter {
    pub student_id: Option<String>,
    pub course: Option<String>,
}

impl EnrollmentFilter {
    fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("student_id", &self.student_id)
            .with("course", &self.course)
    }
}

/// Client for the course records backend, including enrollments
#[derive(Clone, Debug)]
pub struct CourseService {
    client: RestClient,
    base_url: String,
}

impl CourseService {
    pub fn new(client: RestClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get_all(&self) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/courses/getall/", &QueryParams::new())?;
        self.client.get(url).await
    }

    pub async fn search(&self, filter: &CourseFilter) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/courses/", &filter.params())?;
        self.client.get(url).await
    }

    pub async fn add(&self, body: &Value) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/courses/", &QueryParams::new())?;
        self.client.post(url, body).await
    }

    pub async fn update(&self, id: &str, body: &Value) -> GatewayResult<RestBody> {
        let url = entity_endpoint(&self.base_url, "/courses", id, true)?;
        self.client.put(url, body).await
    }

    pub async fn delete(&self, id: &str) -> GatewayResult<RestBody> {
        let url = entity_endpoint(&self.base_url, "/courses/delete", id, true)?;
        self.client.delete(url).await
    }

    pub async fn enrollments(&self, filter: &EnrollmentFilter) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/student-courses/", &filter.params())?;
        self.client.get(url).await
    }

    pub async fn enroll(&self, body: &Value) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/student-courses/", &QueryParams::new())?;
        self.client.post(url, body).await
    }
}
