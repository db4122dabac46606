#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use auth_gateway::app::create_app;
use auth_gateway::backend::HttpAuthBackend;
use auth_gateway::middleware::protect;
use auth_gateway::session::CookieSettings;
use auth_gateway::state::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const LOGIN_PATH: &str = "/auth/login";

/// Auth backend stand-in served over real HTTP on a loopback port.
#[derive(Default)]
pub struct FakeAuthServer {
    valid_access: Mutex<HashSet<String>>,
    admins: Mutex<HashSet<String>>,
    grants: Mutex<HashMap<String, (String, Option<String>)>>,
    envelope_refresh: AtomicBool,
    reject_refreshed: AtomicBool,
    fail_logout: AtomicBool,
    pub logout_bodies: Mutex<Vec<Value>>,
    pub refresh_calls: AtomicUsize,
    pub verify_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub getme_calls: AtomicUsize,
}

impl FakeAuthServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn accept_access(&self, token: &str) {
        self.valid_access.lock().unwrap().insert(token.to_string());
    }

    /// Accept `token` and report its owner with the ADMIN role.
    pub fn accept_admin(&self, token: &str) {
        self.accept_access(token);
        self.admins.lock().unwrap().insert(token.to_string());
    }

    /// Issue access tokens on refresh that the other endpoints still refuse.
    pub fn reject_refreshed_access(&self) {
        self.reject_refreshed.store(true, Ordering::SeqCst);
    }

    pub fn grant(&self, refresh: &str, access: &str, rotated: Option<&str>) {
        self.grants.lock().unwrap().insert(
            refresh.to_string(),
            (access.to_string(), rotated.map(str::to_string)),
        );
    }

    pub fn wrap_refresh_in_envelope(&self) {
        self.envelope_refresh.store(true, Ordering::SeqCst);
    }

    pub fn fail_logout(&self) {
        self.fail_logout.store(true, Ordering::SeqCst);
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    /// Serve under `/api/v1` and return the base URL.
    pub async fn spawn(self: &Arc<Self>) -> String {
        let routes = Router::new()
            .route("/auth/refresh", post(refresh))
            .route("/auth/verify", post(verify))
            .route("/auth/logout", post(logout))
            .route("/user/getme", get(getme))
            .with_state(self.clone());
        let app = Router::new().nest("/api/v1", routes);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/api/v1")
    }
}

async fn refresh(State(server): State<Arc<FakeAuthServer>>, Json(body): Json<Value>) -> Response {
    server.refresh_calls.fetch_add(1, Ordering::SeqCst);

    let presented = body["refreshToken"].as_str().unwrap_or_default().to_string();
    let grant = server.grants.lock().unwrap().get(&presented).cloned();

    let Some((access, rotated)) = grant else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "ERROR", "message": "Refresh token fail"})),
        )
            .into_response();
    };

    if !server.reject_refreshed.load(Ordering::SeqCst) {
        server.accept_access(&access);
    }

    let mut tokens = json!({"accessToken": access});
    if let Some(rotated) = rotated {
        tokens["refreshToken"] = json!(rotated);
    }

    if server.envelope_refresh.load(Ordering::SeqCst) {
        Json(json!({"status": "SUCCESS", "message": "Refresh token successfully", "result": tokens}))
            .into_response()
    } else {
        Json(tokens).into_response()
    }
}

async fn verify(State(server): State<Arc<FakeAuthServer>>, Json(body): Json<Value>) -> Json<bool> {
    server.verify_calls.fetch_add(1, Ordering::SeqCst);

    let token = body["token"].as_str().unwrap_or_default();
    Json(server.valid_access.lock().unwrap().contains(token))
}

async fn logout(State(server): State<Arc<FakeAuthServer>>, Json(body): Json<Value>) -> StatusCode {
    server.logout_calls.fetch_add(1, Ordering::SeqCst);
    server.logout_bodies.lock().unwrap().push(body);

    if server.fail_logout.load(Ordering::SeqCst) {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn getme(State(server): State<Arc<FakeAuthServer>>, headers: HeaderMap) -> Response {
    server.getme_calls.fetch_add(1, Ordering::SeqCst);

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    if !server.valid_access.lock().unwrap().contains(token) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let role = if server.admins.lock().unwrap().contains(token) {
        "ADMIN"
    } else {
        "USER"
    };

    Json(json!({
        "status": "SUCCESS",
        "code": "200",
        "message": "ok",
        "result": {
            "id": "42",
            "email": "traveller@example.com",
            "displayName": "Traveller",
            "role": role
        }
    }))
    .into_response()
}

pub fn http_backend(base_url: &str) -> HttpAuthBackend {
    HttpAuthBackend::new(base_url, Duration::from_secs(5)).unwrap()
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1")
}

pub fn gateway(base_url: &str) -> Router {
    create_app(gateway_state(base_url), false)
}

fn gateway_state(base_url: &str) -> AppState {
    AppState::new(
        Arc::new(http_backend(base_url)),
        CookieSettings::default(),
        LOGIN_PATH,
    )
}

/// A few frontend pages behind the session guard, each answering with a short label.
pub fn guarded_pages(base_url: &str) -> Router {
    let pages = Router::new()
        .route("/", get(|| async { "home" }))
        .route("/pages/flights", get(|| async { "flights" }))
        .route("/pages/profile", get(|| async { "profile" }))
        .route("/admin/reports", get(|| async { "reports" }))
        .route(LOGIN_PATH, get(|| async { "login" }));
    protect(pages, gateway_state(base_url))
}
