//! Test harness for driving the assembled router in-process.
//!
//! [`TestClient`] sends requests through `tower::ServiceExt::oneshot` and
//! carries the session cookie between calls, so multi-request cart flows
//! behave like a single mobile client. [`spawn_stub_auth`] stands in for
//! the external login endpoint on a loopback port.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use axum::{
    Json, Router,
    body::Body,
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
    },
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shoplytix_server::catalog::CatalogStore;
use shoplytix_server::config::ServerConfig;
use shoplytix_server::state::AppState;
use tower::ServiceExt;
use url::Url;

/// Password the stub auth server accepts.
pub const STUB_PASSWORD: &str = "letmein";

/// Build a server configuration pointing at `auth_endpoint`.
#[must_use]
pub fn test_config(auth_endpoint: Url) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("loopback parses"),
        port: 0,
        auth_endpoint,
        owner_name: "Test Owner".to_string(),
    }
}

/// An endpoint nothing listens on; login attempts against it fail fast.
#[must_use]
pub fn unreachable_auth_endpoint() -> Url {
    "http://127.0.0.1:9/api/login.php"
        .parse()
        .expect("static url parses")
}

/// In-process client over the full router, with session cookie handling.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Client whose login endpoint is unreachable (fine for everything but
    /// successful-login tests).
    #[must_use]
    pub fn new() -> Self {
        Self::with_auth_endpoint(unreachable_auth_endpoint())
    }

    /// Client proxying login to `auth_endpoint`.
    #[must_use]
    pub fn with_auth_endpoint(auth_endpoint: Url) -> Self {
        let state = AppState::new(test_config(auth_endpoint), CatalogStore::demo());
        Self {
            app: shoplytix_server::app(state),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        let request = self.builder("GET", uri).body(Body::empty()).expect("request builds");
        self.send(request).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&mut self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = self
            .builder("POST", uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("body serializes")))
            .expect("request builds");
        self.send(request).await
    }

    fn builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails");

        let status = response.status();
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let raw = set_cookie.to_str().expect("cookie is ascii");
            let pair = raw.split(';').next().unwrap_or(raw);
            self.cookie = Some(pair.to_string());
        }

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, body)
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a stub for the external login endpoint.
///
/// Accepts [`STUB_PASSWORD`], rejects everything else with the upstream
/// message `"Invalid credentials"`.
pub async fn spawn_stub_auth() -> Url {
    let app = Router::new().route(
        "/api/login.php",
        post(|Json(body): Json<Value>| async move {
            let password = body
                .get("password")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if password == STUB_PASSWORD {
                Json(json!({ "success": true }))
            } else {
                Json(json!({ "success": false, "message": "Invalid credentials" }))
            }
        }),
    );
    serve_stub(app).await
}

/// Spawn a stub login endpoint that always answers 500.
pub async fn spawn_failing_auth() -> Url {
    let app = Router::new().route(
        "/api/login.php",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    serve_stub(app).await
}

async fn serve_stub(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind succeeds");
    let addr = listener.local_addr().expect("local addr available");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serves");
    });
    format!("http://{addr}/api/login.php")
        .parse()
        .expect("stub url parses")
}
