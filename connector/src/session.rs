/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::user::{Role, User};

/// The single slot holding the bearer token. Absence means logged out.
///
/// Storing a token may fail and reports why; clearing must always succeed so
/// that logging out cannot fail.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, token: String) -> Result<(), String>;
    fn clear(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.clone()
    }

    fn set(&mut self, token: String) -> Result<(), String> {
        self.token = Some(token);
        Ok(())
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &mut T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&mut self, token: String) -> Result<(), String> {
        (**self).set(token)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites_and_clears() {
        let mut store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("first".to_string()).unwrap();
        store.set("second".to_string()).unwrap();
        assert_eq!(store.get().as_deref(), Some("second"));

        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_session_state_role() {
        assert_eq!(SessionState::default().role(), None);

        let state = SessionState::Authenticated(User {
            name: "Mira".to_string(),
            email: "mira@example.com".to_string(),
            role: Role::Owner,
        });

        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Owner));
    }
}
