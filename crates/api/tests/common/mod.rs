#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use roster_api::config::{ServerConfig, UpstreamConfig};
use roster_api::router::build_app_router;
use roster_api::service::EmployeeService;
use roster_api::state::AppState;
use roster_upstream::EmployeeApi;

pub const ALICE_ID: &str = "4f1c2b1e-8a8e-4d2c-9c1a-0d6a5e2f9b01";
pub const BOB_ID: &str = "9a7d3c52-1b6f-4e0a-8f5d-2c4b7e9a1d02";
pub const CAROL_ID: &str = "c3e8f1a4-5d2b-4a7c-b6e9-7f0a1c3d5e03";

/// Build a test `ServerConfig` pointing at `base_url`.
pub fn test_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            cache_ttl: None,
        },
    }
}

/// Build the full application router against the upstream at `base_url`,
/// using the same middleware stack as `main.rs`.
pub fn build_test_app(base_url: &str) -> Router {
    build_test_app_with_config(test_config(base_url))
}

/// Like [`build_test_app`], but with a caller-tweaked configuration.
pub fn build_test_app_with_config(config: ServerConfig) -> Router {
    let upstream = EmployeeApi::new(&config.upstream.base_url);
    let service = EmployeeService::new(upstream, config.upstream.cache_ttl);

    let state = AppState {
        employees: Arc::new(service),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Stub upstream
// ---------------------------------------------------------------------------

/// In-memory employee store served with the upstream's envelope format.
#[derive(Clone, Default)]
pub struct StubUpstream {
    pub employees: Arc<Mutex<Vec<Value>>>,
    pub list_calls: Arc<Mutex<usize>>,
}

pub fn employee_json(id: &str, name: &str, salary: i64) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": "someone@company.com",
    })
}

impl StubUpstream {
    /// A store seeded with Alice (90000), Bob (120000) and Carol (70000).
    pub fn seeded() -> Self {
        let stub = Self::default();
        *stub.employees.lock().unwrap() = vec![
            employee_json(ALICE_ID, "Alice Smith", 90000),
            employee_json(BOB_ID, "Bob Jones", 120000),
            employee_json(CAROL_ID, "Carol Smithers", 70000),
        ];
        stub
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn names(&self) -> Vec<String> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .map(|e| e["employee_name"].as_str().unwrap().to_string())
            .collect()
    }

    /// Serve the store on an ephemeral port and return its base URL.
    pub async fn spawn(&self) -> String {
        let routes = Router::new()
            .route(
                "/employee",
                routing::get(stub_list)
                    .post(stub_create)
                    .delete(stub_delete),
            )
            .route("/employee/{id}", routing::get(stub_get))
            .with_state(self.clone());
        serve(routes).await
    }
}

/// An upstream whose every endpoint answers 503.
pub async fn spawn_unavailable_upstream() -> String {
    let routes = Router::new().fallback(|| async {
        (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response()
    });
    serve(routes).await
}

/// An upstream that answers every request only after `delay`.
pub async fn spawn_slow_upstream(delay: std::time::Duration) -> String {
    let routes = Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        Json(json!({ "status": "ok", "data": [] }))
    });
    serve(routes).await
}

async fn serve(routes: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().nest("/api/v1", routes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

async fn stub_list(State(stub): State<StubUpstream>) -> Json<Value> {
    *stub.list_calls.lock().unwrap() += 1;
    let data = stub.employees.lock().unwrap().clone();
    Json(json!({ "status": "Successfully processed request.", "data": data }))
}

async fn stub_get(State(stub): State<StubUpstream>, Path(id): Path<String>) -> Response {
    let found = stub
        .employees
        .lock()
        .unwrap()
        .iter()
        .find(|e| e["id"] == id.as_str())
        .cloned();
    match found {
        Some(employee) => Json(json!({ "status": "ok", "data": employee })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_create(State(stub): State<StubUpstream>, Json(body): Json<Value>) -> Json<Value> {
    let mut employee = employee_json(
        "0e5b8f2a-3c1d-4b6e-9a7f-1d2c3b4a5e04",
        body["name"].as_str().unwrap_or_default(),
        body["salary"].as_i64().unwrap_or_default(),
    );
    employee["employee_age"] = body["age"].clone();
    employee["employee_title"] = body["title"].clone();
    stub.employees.lock().unwrap().push(employee.clone());
    Json(json!({ "status": "ok", "data": employee }))
}

async fn stub_delete(State(stub): State<StubUpstream>, Json(body): Json<Value>) -> Json<Value> {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let mut employees = stub.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e["employee_name"] != name.as_str());
    Json(json!({ "status": "ok", "data": employees.len() < before }))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
