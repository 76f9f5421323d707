/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod error;
pub mod estimate;
pub mod predict;
pub mod session;
pub mod user;

pub use error::ApiError;

use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Body the backend sends alongside a non-2xx status.
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

pub type RequestType = reqwest::Method;

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    token: Option<&str>,
) -> reqwest::RequestBuilder {
    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!("{}/api/{}", config.server_url, endpoint),
    );

    client = client
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

    if let Some(token) = token {
        client = client.header("Authorization", format!("Bearer {}", token));
    }

    client
}

async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    builder.send().await.map_err(|e| {
        tracing::debug!(error = %e, "request did not reach the server");
        ApiError::Network(e.to_string())
    })
}

/// Outcome of a request that reached the server: either the parsed success
/// body or the message of a rejection.
enum Reply<T> {
    Accepted(T),
    Rejected(String),
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<Reply<T>, ApiError> {
    let status = res.status();
    let bytes = res
        .bytes()
        .await
        .map_err(|e| ApiError::Network(format!("failed to read response body: {}", e)))?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(error_res) => error_res.message,
            Err(_) => format!("request failed with status {}", status),
        };

        tracing::warn!(%status, %message, "server rejected request");
        return Ok(Reply::Rejected(message));
    }

    serde_json::from_slice::<T>(&bytes)
        .map(Reply::Accepted)
        .map_err(|e| {
            tracing::debug!(len = bytes.len(), "unexpected response body");
            ApiError::Protocol(format!("unexpected response from server: {}", e))
        })
}

/// Sends a request and maps a rejection to [`ApiError::Validation`].
async fn request<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
    match parse_response(send(builder).await?).await? {
        Reply::Accepted(body) => Ok(body),
        Reply::Rejected(message) => Err(ApiError::Validation(message)),
    }
}
