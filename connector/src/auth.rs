/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::session::{SessionState, TokenStore};
use crate::user::{Role, User, UserUpdate};
use crate::*;
use serde::{Deserialize, Serialize};

pub const REGISTER_ENDPOINT: &str = "auth/register";
pub const LOGIN_ENDPOINT: &str = "auth/login";
pub const VERIFY_ENDPOINT: &str = "auth/verify";
pub const UPDATE_ENDPOINT: &str = "auth/update";

#[derive(Serialize, Debug)]
struct MakeUserRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[derive(Serialize, Debug)]
struct MakeLoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
struct PatchUserRequest<'a> {
    #[serde(flatten)]
    pub update: &'a UserUpdate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

/// Performs identity operations against the backend and owns the stored
/// bearer token. Every remote operation is a single request without retry.
#[derive(Debug)]
pub struct AuthClient<S: TokenStore> {
    config: RequestConfig,
    store: S,
}

impl<S: TokenStore> AuthClient<S> {
    pub fn new(config: RequestConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    fn store_token(&mut self, token: String) -> Result<(), ApiError> {
        self.store.set(token).map_err(|e| {
            tracing::warn!("failed to store token: {}", e);
            ApiError::Storage(e)
        })
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthResponse, ApiError> {
        tracing::debug!(email, %role, "registering user");

        let req = MakeUserRequest {
            name,
            email,
            password,
            role,
        };

        let res: AuthResponse = request(
            get_client(&self.config, REGISTER_ENDPOINT, RequestType::POST, None).json(&req),
        )
        .await?;

        self.store_token(res.token.clone())?;
        tracing::debug!(email, "registration successful, token stored");

        Ok(res)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        tracing::debug!(email, "logging in");

        let req = MakeLoginRequest { email, password };

        let res: AuthResponse = request(
            get_client(&self.config, LOGIN_ENDPOINT, RequestType::POST, None).json(&req),
        )
        .await?;

        self.store_token(res.token.clone())?;
        tracing::debug!(email, "login successful, token stored");

        Ok(res)
    }

    /// Checks the stored token with the backend. A rejected token is removed
    /// from the store; transport and parse failures leave it in place.
    pub async fn verify_token(&mut self) -> Result<User, ApiError> {
        let token = self.store.get().ok_or(ApiError::NotAuthenticated)?;

        let res = send(get_client(
            &self.config,
            VERIFY_ENDPOINT,
            RequestType::GET,
            Some(&token),
        ))
        .await?;

        match parse_response::<UserResponse>(res).await? {
            Reply::Accepted(body) => Ok(body.user),
            Reply::Rejected(message) => {
                tracing::warn!("token rejected, clearing session");
                self.store.clear();
                Err(ApiError::InvalidToken(message))
            }
        }
    }

    pub async fn session_state(&mut self) -> SessionState {
        match self.verify_token().await {
            Ok(user) => SessionState::Authenticated(user),
            Err(e) => {
                tracing::debug!(error = %e, "no valid session");
                SessionState::Unauthenticated
            }
        }
    }

    /// Updates the profile of the logged in user. Only fields that differ
    /// from `current` are sent. Email and password changes must carry the
    /// current password; this is checked before anything is sent.
    pub async fn update_user(
        &mut self,
        current: &User,
        update: UserUpdate,
        current_password: Option<&str>,
    ) -> Result<User, ApiError> {
        let update = update.changes_from(current);

        if update.is_empty() {
            return Err(ApiError::NoChanges);
        }

        let current_password = current_password.filter(|p| !p.is_empty());

        if update.changes_credentials() && current_password.is_none() {
            return Err(ApiError::MissingReauth);
        }

        let token = self.store.get().ok_or(ApiError::NotAuthenticated)?;

        let req = PatchUserRequest {
            update: &update,
            current_password,
        };

        let res: UserResponse = request(
            get_client(&self.config, UPDATE_ENDPOINT, RequestType::PUT, Some(&token)).json(&req),
        )
        .await?;

        if let Some(token) = res.token {
            tracing::debug!("server reissued token after profile update");
            self.store_token(token)?;
        }

        Ok(res.user)
    }

    pub fn logout(&mut self) {
        self.store.clear();
        tracing::debug!("logged out");
    }
}
