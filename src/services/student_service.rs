use serde_json::Value;

use crate::errors::GatewayResult;
use crate::relay::{endpoint, entity_endpoint, QueryParams, RestBody, RestClient};

/// Filters accepted by `GET /student/search`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StudentFilter {
    pub id: Option<String>,
    pub university: Option<String>,
    pub name: Option<String>,
}

impl StudentFilter {
    pub fn by_id(id: impl ToString) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("id", &self.id)
            .with("university", &self.university)
            .with("name", &self.name)
    }
}

/// Client for the student records backend
#[derive(Clone, Debug)]
pub struct StudentService {
    client: RestClient,
    base_url: String,
}

impl StudentService {
    pub fn new(client: RestClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get_all(&self) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/student/getAll", &QueryParams::new())?;
        self.client.get(url).await
    }

    pub async fn search(&self, filter: &StudentFilter) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/student/search", &filter.params())?;
        self.client.get(url).await
    }

    pub async fn add(&self, body: &Value) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/student/add", &QueryParams::new())?;
        self.client.post(url, body).await
    }

    pub async fn update(&self, id: &str, body: &Value) -> GatewayResult<RestBody> {
        let url = entity_endpoint(&self.base_url, "/student/update", id, false)?;
        self.client.put(url, body).await
    }

    pub async fn delete(&self, id: &str) -> GatewayResult<RestBody> {
        let url = entity_endpoint(&self.base_url, "/student/delete", id, false)?;
        self.client.delete(url).await
    }
}
