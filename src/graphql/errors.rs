use async_graphql::*;

use crate::errors::GatewayError;

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Convert a relay failure, tagging it with its error code
    pub fn from_gateway_error(error: GatewayError) -> Error {
        let code = error.error_code();
        let source = match &error {
            GatewayError::UnexpectedShape { context, .. } => Some(context.clone()),
            GatewayError::InvalidUrl { url, .. } => Some(url.clone()),
            _ => None,
        };

        Error::new(error.to_string()).extend_with(|_, e| {
            e.set("code", code);
            if let Some(source) = &source {
                e.set("source", source.as_str());
            }
        })
    }
}
