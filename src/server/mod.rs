pub mod app;
pub mod handlers;

use anyhow::Result;
use tracing::info;

use crate::config::GatewayConfig;
use crate::graphql::{build_schema, context::GraphQLContext};
use crate::relay::RestClient;

pub async fn start_server(config: GatewayConfig) -> Result<()> {
    let port = config.port;
    let cors_origin = config.cors_origin.clone();

    log_backends(&config);
    let schema = build_schema(GraphQLContext::new(config, RestClient::new()));
    let app = app::create_app(schema, cors_origin.as_deref())?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    log_routes(port);
    info!("Gateway ready at http://localhost:{}/graphql", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_backends(config: &GatewayConfig) {
    info!("Backends:");
    info!("  student  {}", config.student_service_url);
    info!("  course   {}", config.course_service_url);
    info!("  ai       {}", config.ai_service_url);
}

fn log_routes(port: u16) {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
    info!("  Playground: http://localhost:{}/graphql", port);
}
