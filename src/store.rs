/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::{ConfigFile, ConfigKey};
use connector::session::TokenStore;

/// Keeps the bearer token under the `authtoken` key of the config file.
/// A failed write of a new token is returned; a failed clear is only logged
/// so that logging out cannot fail.
#[derive(Debug, Clone)]
pub struct ConfigTokenStore {
    file: ConfigFile,
}

impl ConfigTokenStore {
    pub fn new(file: ConfigFile) -> Self {
        Self { file }
    }
}

impl TokenStore for ConfigTokenStore {
    fn get(&self) -> Option<String> {
        self.file.get(ConfigKey::AuthToken).unwrap_or_else(|e| {
            tracing::warn!(path = %self.file.path().display(), "failed to read token: {}", e);
            None
        })
    }

    fn set(&mut self, token: String) -> Result<(), String> {
        self.file.set(ConfigKey::AuthToken, Some(token))
    }

    fn clear(&mut self) {
        if let Err(e) = self.file.set(ConfigKey::AuthToken, None) {
            tracing::warn!(path = %self.file.path().display(), "failed to clear token: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = ConfigFile::new(dir.path().join("config.toml"));
        file.set(ConfigKey::Server, Some("http://salon.local".to_string()))
            .unwrap();

        let mut store = ConfigTokenStore::new(file.clone());
        assert_eq!(store.get(), None);

        store.set("abc".to_string()).unwrap();
        assert_eq!(ConfigTokenStore::new(file.clone()).get().as_deref(), Some("abc"));

        store.clear();
        assert_eq!(store.get(), None);
        assert_eq!(
            file.get(ConfigKey::Server).unwrap().as_deref(),
            Some("http://salon.local")
        );
    }

    #[test]
    fn test_unwritable_path_fails_set() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = ConfigTokenStore::new(ConfigFile::new(blocker.join("config.toml")));

        assert!(store.set("fresh-token".to_string()).is_err());
        assert_eq!(store.get(), None);

        store.clear();
    }

    #[test]
    fn test_unreadable_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let mut store = ConfigTokenStore::new(ConfigFile::new(path));
        assert_eq!(store.get(), None);

        store.clear();
    }
}
