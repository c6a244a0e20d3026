//! Account service

use crate::storage::{MemoryStore, UserRecord};
use chirp_types::{CreateUser, User};
use std::sync::Arc;
use tracing::info;

pub struct AccountService {
    store: Arc<MemoryStore>,
}

impl AccountService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Plaintext comparison against the stored password. False for unknown
    /// usernames.
    pub fn verify_password(&self, username: &str, password: &str) -> bool {
        self.store
            .user(username)
            .map(|record| record.password == password)
            .unwrap_or(false)
    }

    pub fn is_username_available(&self, username: &str) -> bool {
        !self.store.contains_user(username)
    }

    /// Inserts a new user with zero posts. Uniqueness is the caller's
    /// pre-check; a duplicate insert would overwrite.
    pub fn create_user(&self, input: CreateUser) -> User {
        info!("Creating user: {}", input.username);
        let record = UserRecord {
            username: input.username,
            password: input.password,
            full_name: input.full_name,
        };
        let user = User {
            username: record.username.clone(),
            full_name: record.full_name.clone(),
            posts: 0,
        };
        self.store.insert_user(record);
        user
    }

    /// Exact-match lookup of the public view.
    pub fn find_user(&self, username: &str) -> Option<User> {
        self.store.user(username).map(|record| self.view(record))
    }

    /// Case-insensitive lookup, used where authorization already matched the
    /// requested username against an identity by case variant.
    pub fn resolve_user(&self, username: &str) -> Option<User> {
        self.store
            .resolve_user(username)
            .map(|record| self.view(record))
    }

    fn view(&self, record: UserRecord) -> User {
        let posts = self.store.post_count(&record.username);
        User {
            username: record.username,
            full_name: record.full_name,
            posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryStore::new()))
    }

    fn create(username: &str, password: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password: password.to_string(),
            full_name: None,
        }
    }

    #[test]
    fn test_verify_password() {
        let accounts = service();
        accounts.create_user(create("alice", "pw"));

        assert!(accounts.verify_password("alice", "pw"));
        assert!(!accounts.verify_password("alice", "wrong"));
        assert!(!accounts.verify_password("nobody", "pw"));
    }

    #[test]
    fn test_username_availability() {
        let accounts = service();
        assert!(accounts.is_username_available("alice"));
        accounts.create_user(create("alice", "pw"));
        assert!(!accounts.is_username_available("alice"));
        // Storage is case-sensitive; a case variant is a different username.
        assert!(accounts.is_username_available("ALICE"));
    }

    #[test]
    fn test_find_user() {
        let accounts = service();
        accounts.create_user(CreateUser {
            username: "alice".to_string(),
            password: "pw".to_string(),
            full_name: Some("Alice".to_string()),
        });

        let user = accounts.find_user("alice").unwrap();
        assert_eq!(user.full_name.as_deref(), Some("Alice"));
        assert_eq!(user.posts, 0);
        assert!(accounts.find_user("ALICE").is_none());
        assert_eq!(accounts.resolve_user("ALICE").unwrap().username, "alice");
    }
}
