//! Shared helpers for gateway integration tests
//!
//! `MockBackend` is an in-process axum server standing in for the REST
//! backends. It answers from a `(method, path)` table and records every
//! request it sees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use campus_gateway::config::GatewayConfig;
use campus_gateway::graphql::{build_schema, context::GraphQLContext, GatewaySchema};
use campus_gateway::relay::RestClient;
use serde_json::Value;

#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Text(String),
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn reply(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), reply);
        self
    }

    pub fn reply_json(&self, method: Method, path: &str, body: Value) -> &Self {
        self.reply(method, path, Reply::Json(body))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    /// A gateway schema with all three backends pointed at this mock
    pub fn schema(&self) -> GatewaySchema {
        let config = GatewayConfig {
            student_service_url: self.url(),
            course_service_url: self.url(),
            ai_service_url: self.url(),
            ..GatewayConfig::default()
        };
        build_schema(GraphQLContext::new(config, RestClient::new()))
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let parsed = if body.is_empty() {
        None
    } else {
        serde_json::from_str(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type,
        body: parsed,
    });

    let reply = state
        .routes
        .lock()
        .unwrap()
        .get(&(method, uri.path().to_string()))
        .cloned();

    match reply {
        Some(Reply::Json(value)) => Json(value).into_response(),
        Some(Reply::Text(text)) => text.into_response(),
        None => (StatusCode::NOT_FOUND, "no mock route").into_response(),
    }
}

/// Execute an operation and return its data, failing on any GraphQL error
pub async fn execute_ok(schema: &GatewaySchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().expect("data as JSON")
}

/// An address nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind closed port");
    let addr = listener.local_addr().expect("closed port address");
    drop(listener);
    format!("http://{}", addr)
}
