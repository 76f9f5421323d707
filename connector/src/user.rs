/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Hash, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Client,
    Worker,
    Owner,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Profile fields to change. `None` and empty strings leave the field as is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Drops fields that carry no value.
    pub(crate) fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());

        Self {
            name: keep(self.name),
            email: keep(self.email),
            password: keep(self.password),
        }
    }

    /// Drops name and email when they equal the current values. A password
    /// cannot be compared and always counts as a change.
    pub fn changes_from(self, current: &User) -> Self {
        let normalized = self.normalized();

        Self {
            name: normalized.name.filter(|name| name != &current.name),
            email: normalized.email.filter(|email| email != &current.email),
            password: normalized.password,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn changes_credentials(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }
}
