use serde_json::json;

use crate::errors::GatewayResult;
use crate::relay::{endpoint, QueryParams, RestBody, RestClient};

/// Client for the AI text backend
#[derive(Clone, Debug)]
pub struct AiService {
    client: RestClient,
    base_url: String,
}

impl AiService {
    pub fn new(client: RestClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn summarize(&self, text: &str) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/chatbot/summarize/", &QueryParams::new())?;
        self.client.post(url, &json!({ "text": text })).await
    }

    pub async fn translate(&self, text: &str, target_language: &str) -> GatewayResult<RestBody> {
        let url = endpoint(&self.base_url, "/chatbot/translate/", &QueryParams::new())?;
        let body = json!({
            "text": text,
            "target_language": target_language,
        });
        self.client.post(url, &body).await
    }
}
