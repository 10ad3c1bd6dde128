//! Error types for the gateway
//!
//! The gateway is a relay, so the taxonomy is deliberately small: transport
//! failures, bad URLs, backend payloads that cannot be projected onto a
//! graph type, and startup configuration problems. Conversion to GraphQL
//! errors lives in [`crate::graphql::errors`].

use thiserror::Error;

/// Errors raised while relaying a request to a backend
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP request could not be performed or its body not read
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A backend URL could not be built
    #[error("Invalid backend URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The backend answered, but not with the shape the graph type expects
    #[error("Unexpected response from {context}: {reason}")]
    UnexpectedShape { context: String, reason: String },

    /// Startup configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    pub fn unexpected_shape(context: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::UnexpectedShape {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    /// Error code surfaced in GraphQL error extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => "SERVICE_ERROR",
            GatewayError::UnexpectedShape { .. } => "SERVICE_ERROR",
            GatewayError::InvalidUrl { .. } => "BAD_REQUEST",
            GatewayError::Config(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for relay operations
pub type GatewayResult<T> = Result<T, GatewayError>;
