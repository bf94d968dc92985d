//! The user registry: registered username/password pairs.
//!
//! Usernames are case-sensitive and unique. Records are never mutated or
//! deleted; they live as long as the registry. Uniqueness under concurrent
//! registration is guaranteed by checking and inserting under one write
//! lock.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Result, StoreError};

/// Registered users, keyed by username.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<HashMap<String, String>>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user with this exact username is registered.
    pub fn exists(&self, username: &str) -> bool {
        self.users.read().contains_key(username)
    }

    /// Register a new user.
    ///
    /// Fails with `UsernameTaken` if the name is already registered. The
    /// existence check and the insert happen under the same write lock, so
    /// two concurrent registrations of the same name cannot both succeed.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(StoreError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(StoreError::MissingField("password"));
        }

        let mut users = self.users.write();
        if users.contains_key(username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        users.insert(username.to_string(), password.to_string());
        Ok(())
    }

    /// Whether a record with exactly this username and password exists.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .read()
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    /// Check login credentials, preserving the three-way diagnostic:
    /// missing input, unknown user, or wrong password.
    ///
    /// Collapsing these would hide from the client whether it should
    /// register first or fix its password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(StoreError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(StoreError::MissingField("password"));
        }
        if !self.exists(username) {
            return Err(StoreError::UserNotFound(username.to_string()));
        }
        if !self.verify(username, password) {
            return Err(StoreError::InvalidCredentials);
        }
        Ok(())
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Whether no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_register_then_exists_and_verify() {
        let registry = UserRegistry::new();
        assert!(!registry.exists("alice"));

        registry.register("alice", "pw1").unwrap();
        assert!(registry.exists("alice"));
        assert!(registry.verify("alice", "pw1"));
        assert!(!registry.verify("alice", "wrong"));
        assert!(!registry.verify("bob", "pw1"));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let registry = UserRegistry::new();
        // Scenario: register("alice","pw1") ok, register("alice","pw2") fails.
        registry.register("alice", "pw1").unwrap();
        let err = registry.register("alice", "pw2").unwrap_err();
        assert_eq!(err, StoreError::UsernameTaken("alice".to_string()));

        // The original password still stands.
        assert!(registry.verify("alice", "pw1"));
        assert!(!registry.verify("alice", "pw2"));
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let registry = UserRegistry::new();
        registry.register("Alice", "pw").unwrap();
        assert!(!registry.exists("alice"));
        registry.register("alice", "pw").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let registry = UserRegistry::new();
        assert_eq!(
            registry.register("", "pw").unwrap_err(),
            StoreError::MissingField("username")
        );
        assert_eq!(
            registry.register("alice", "").unwrap_err(),
            StoreError::MissingField("password")
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let registry = UserRegistry::new();
        // Scenario: login("bob","x") with bob unregistered.
        assert_eq!(
            registry.authenticate("bob", "x").unwrap_err(),
            StoreError::UserNotFound("bob".to_string())
        );
    }

    #[test]
    fn test_authenticate_wrong_then_right_password() {
        let registry = UserRegistry::new();
        registry.register("carol", "pw").unwrap();
        assert_eq!(
            registry.authenticate("carol", "wrong").unwrap_err(),
            StoreError::InvalidCredentials
        );
        assert!(registry.authenticate("carol", "pw").is_ok());
    }

    #[test]
    fn test_authenticate_input_checked_before_existence() {
        let registry = UserRegistry::new();
        assert_eq!(
            registry.authenticate("", "pw").unwrap_err(),
            StoreError::MissingField("username")
        );
        assert_eq!(
            registry.authenticate("ghost", "").unwrap_err(),
            StoreError::MissingField("password")
        );
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        let registry = Arc::new(UserRegistry::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register("alice", &format!("pw{i}")))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(registry.len(), 1);
    }
}
