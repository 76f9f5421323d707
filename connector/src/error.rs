/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use thiserror::Error;

/// Every failure surfaced by the connector. Messages are meant to be shown
/// to the end user as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("{0}")]
    Protocol(String),
    #[error("not logged in. Use `salon login` first")]
    NotAuthenticated,
    #[error("session is no longer valid: {0}")]
    InvalidToken(String),
    #[error("changing email or password requires the current password")]
    MissingReauth,
    #[error("no changes to apply")]
    NoChanges,
    #[error("failed to store session: {0}")]
    Storage(String),
}
