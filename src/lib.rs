pub mod config;
pub mod errors;
pub mod graphql;
pub mod relay;
pub mod server;
pub mod services;
