/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ISSUED_TOKEN: &str = "issued-token";
pub const REISSUED_TOKEN: &str = "reissued-token";
pub const GARBLED_TOKEN: &str = "garbled-token";
pub const PASSWORD: &str = "secret";
pub const GARBLED_EMAIL: &str = "garbled@example.com";
pub const TAKEN_EMAIL: &str = "taken@example.com";

#[derive(Default)]
pub struct MockBackend {
    hits: AtomicUsize,
    last_body: Mutex<Option<Value>>,
}

impl MockBackend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    fn record(&self, body: Option<&Value>) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = body.cloned();
    }
}

type Backend = State<Arc<MockBackend>>;

fn auth_reply(status: StatusCode, name: &str, email: &str, role: &str) -> Response {
    (
        status,
        Json(json!({
            "message": "ok",
            "token": ISSUED_TOKEN,
            "user": { "name": name, "email": email, "role": role },
        })),
    )
        .into_response()
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn bearer_is_valid(headers: &HeaderMap) -> bool {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ISSUED_TOKEN) || v == format!("Bearer {}", REISSUED_TOKEN))
        .unwrap_or(false)
}

async fn register(State(backend): Backend, Json(body): Json<Value>) -> Response {
    backend.record(Some(&body));

    let email = body["email"].as_str().unwrap_or_default();

    if email == TAKEN_EMAIL {
        return reject(StatusCode::CONFLICT, "Email already registered");
    }

    if email == GARBLED_EMAIL {
        return (StatusCode::CREATED, "<html>maintenance</html>").into_response();
    }

    auth_reply(
        StatusCode::CREATED,
        body["name"].as_str().unwrap_or_default(),
        email,
        body["role"].as_str().unwrap_or_default(),
    )
}

async fn login(State(backend): Backend, Json(body): Json<Value>) -> Response {
    backend.record(Some(&body));

    let email = body["email"].as_str().unwrap_or_default();

    if email == GARBLED_EMAIL {
        return (StatusCode::OK, "not json").into_response();
    }

    if body["password"].as_str() != Some(PASSWORD) {
        return reject(StatusCode::UNAUTHORIZED, "Invalid email or password");
    }

    auth_reply(StatusCode::OK, "Ana", email, "client")
}

async fn verify(State(backend): Backend, headers: HeaderMap) -> Response {
    backend.record(None);

    if headers.get("Authorization").and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {}", GARBLED_TOKEN).as_str())
    {
        return (StatusCode::OK, "not json").into_response();
    }

    if !bearer_is_valid(&headers) {
        return reject(StatusCode::UNAUTHORIZED, "Invalid token");
    }

    auth_reply(StatusCode::OK, "Ana", "ana@example.com", "worker")
}

async fn update(State(backend): Backend, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    backend.record(Some(&body));

    if !bearer_is_valid(&headers) {
        return reject(StatusCode::UNAUTHORIZED, "Invalid token");
    }

    if body.get("current_password").is_some() && body["current_password"].as_str() != Some(PASSWORD)
    {
        return reject(StatusCode::UNAUTHORIZED, "Current password is incorrect");
    }

    let name = body["name"].as_str().unwrap_or("Ana");
    let email = body["email"].as_str().unwrap_or("ana@example.com");

    (
        StatusCode::OK,
        Json(json!({
            "message": "User updated successfully",
            "token": REISSUED_TOKEN,
            "user": { "name": name, "email": email, "role": "client" },
        })),
    )
        .into_response()
}

async fn predict_time(State(backend): Backend, Json(body): Json<Value>) -> Response {
    backend.record(Some(&body));

    (StatusCode::OK, Json(json!({ "predicted_time": 72.35 }))).into_response()
}

/// Starts the mock backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> (String, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::default());

    let app = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", get(verify))
        .route("/api/auth/update", put(update))
        .route("/api/predict-time", post(predict_time))
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

/// URL of a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}
