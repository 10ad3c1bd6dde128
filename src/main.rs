use anyhow::Result;
use campus_gateway::config::GatewayConfig;
use campus_gateway::graphql::{build_schema, context::GraphQLContext};
use campus_gateway::relay::RestClient;
use campus_gateway::server;
use clap::Parser;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct ServerArgs {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Overrides PORT
    #[clap(short, long)]
    port: Option<u16>,
    /// Overrides CORS_ORIGIN
    #[clap(long)]
    cors_origin: Option<String>,
    /// Print the GraphQL SDL and exit
    #[clap(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    dotenvy::dotenv().ok();
    setup_logging(&args.log_level);

    let config = GatewayConfig::from_env()?
        .with_port(args.port)
        .with_cors_origin(args.cors_origin);

    if args.print_schema {
        let schema = build_schema(GraphQLContext::new(config, RestClient::new()));
        println!("{}", schema.sdl());
        return Ok(());
    }

    info!("Starting gateway on port {}", config.port);
    server::start_server(config).await?;

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("hyper=off,reqwest=off,{}", log_level)))
        .without_time()
        .init();
}
