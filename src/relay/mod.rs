//! HTTP relay to the REST backends.
//!
//! Every call succeeds structurally once the backend has answered: status
//! codes are not inspected and a body that is not JSON comes back as
//! [`RestBody::Text`]. Only transport failures are errors. No timeout or
//! retry is configured.

mod body;
mod params;

pub use body::RestBody;
pub use params::{QueryArg, QueryParams};

use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::{GatewayError, GatewayResult};

/// Thin wrapper over a shared `reqwest::Client`
#[derive(Clone, Debug, Default)]
pub struct RestClient {
    http: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform one call, sending `body` as JSON when present.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> GatewayResult<RestBody> {
        debug!(%method, %url, "relaying backend request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "backend responded");

        Ok(RestBody::parse(text))
    }

    pub async fn get(&self, url: Url) -> GatewayResult<RestBody> {
        self.send(Method::GET, url, None).await
    }

    pub async fn post(&self, url: Url, body: &Value) -> GatewayResult<RestBody> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn put(&self, url: Url, body: &Value) -> GatewayResult<RestBody> {
        self.send(Method::PUT, url, Some(body)).await
    }

    pub async fn delete(&self, url: Url) -> GatewayResult<RestBody> {
        self.send(Method::DELETE, url, None).await
    }
}

/// Join a backend base URL and an endpoint path, then append `params`.
pub fn endpoint(base_url: &str, path: &str, params: &QueryParams) -> GatewayResult<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw).map_err(|source| GatewayError::InvalidUrl { url: raw, source })?;
    params.apply_to(&mut url);
    Ok(url)
}

/// Join `base_url` and `path`, then append `id` as one percent-encoded path
/// segment so it cannot climb or split the path. `trailing_slash` adds the
/// empty final segment some backends route on.
pub fn entity_endpoint(
    base_url: &str,
    path: &str,
    id: &str,
    trailing_slash: bool,
) -> GatewayResult<Url> {
    let mut url = endpoint(base_url, path, &QueryParams::new())?;
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            GatewayError::Config(format!("base URL '{}' cannot carry path segments", base_url))
        })?;
        segments.pop_if_empty().push(id);
        if trailing_slash {
            segments.push("");
        }
    }
    Ok(url)
}
