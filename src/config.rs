use std::collections::HashMap;

use url::Url;

use crate::errors::GatewayError;

pub const STUDENT_SERVICE_URL: &str = "STUDENT_SERVICE_URL";
pub const COURSE_SERVICE_URL: &str = "COURSE_SERVICE_URL";
pub const AI_SERVICE_URL: &str = "AI_SERVICE_URL";
pub const PORT: &str = "PORT";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

/// Gateway configuration, built once at startup and handed to the resolver layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub student_service_url: String,
    pub course_service_url: String,
    pub ai_service_url: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            student_service_url: "http://localhost:8000".to_string(),
            course_service_url: "http://localhost:8001".to_string(),
            ai_service_url: "http://localhost:8002".to_string(),
            port: 4000,
            cors_origin: None,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        let values = Self::tracked_keys()
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect::<HashMap<_, _>>();
        Self::from_map(&values)
    }

    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, GatewayError> {
        fn present<'a>(values: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
            values
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        }

        fn base_url(
            values: &HashMap<String, String>,
            key: &str,
            default: String,
        ) -> Result<String, GatewayError> {
            let raw = present(values, key).map(str::to_string).unwrap_or(default);
            let trimmed = raw.trim_end_matches('/').to_string();
            Url::parse(&trimmed)
                .map_err(|err| GatewayError::Config(format!("{} '{}' is not a URL: {}", key, raw, err)))?;
            Ok(trimmed)
        }

        let defaults = Self::default();

        let port = match present(values, PORT) {
            Some(raw) => raw
                .parse()
                .map_err(|_| GatewayError::Config(format!("{} '{}' is not a valid port", PORT, raw)))?,
            None => defaults.port,
        };

        Ok(Self {
            student_service_url: base_url(values, STUDENT_SERVICE_URL, defaults.student_service_url)?,
            course_service_url: base_url(values, COURSE_SERVICE_URL, defaults.course_service_url)?,
            ai_service_url: base_url(values, AI_SERVICE_URL, defaults.ai_service_url)?,
            port,
            cors_origin: present(values, CORS_ORIGIN).map(str::to_string),
        })
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        if origin.is_some() {
            self.cors_origin = origin;
        }
        self
    }

    fn tracked_keys() -> Vec<&'static str> {
        vec![
            STUDENT_SERVICE_URL,
            COURSE_SERVICE_URL,
            AI_SERVICE_URL,
            PORT,
            CORS_ORIGIN,
        ]
    }
}
