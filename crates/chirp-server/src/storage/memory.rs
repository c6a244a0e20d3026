//! In-memory store using DashMap

use dashmap::DashMap;
use std::collections::HashSet;

/// Stored user account. The password is kept in plaintext; credential
/// checking is a placeholder, not a security control.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Stored post. Likes are a plain membership set of usernames.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: String,
    pub content: String,
    pub liked_by: HashSet<String>,
}

/// Process-wide store: users keyed by username, posts kept per author in
/// insertion order. Public views are assembled by the service layer.
pub struct MemoryStore {
    users: DashMap<String, UserRecord>,
    posts: DashMap<String, Vec<PostRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            posts: DashMap::new(),
        }
    }

    pub fn insert_user(&self, record: UserRecord) {
        self.posts.entry(record.username.clone()).or_default();
        self.users.insert(record.username.clone(), record);
    }

    /// Exact-match lookup.
    pub fn user(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).map(|r| r.clone())
    }

    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Exact match first, then a case-insensitive scan. Authorization checks
    /// compare usernames case-insensitively, so a path may name a user by a
    /// case variant.
    pub fn resolve_user(&self, username: &str) -> Option<UserRecord> {
        if let Some(record) = self.user(username) {
            return Some(record);
        }
        self.users
            .iter()
            .find(|entry| entry.key().eq_ignore_ascii_case(username))
            .map(|entry| entry.value().clone())
    }

    pub fn post_count(&self, username: &str) -> usize {
        self.posts.get(username).map(|p| p.len()).unwrap_or(0)
    }

    /// Posts authored by `username`, newest first.
    pub fn posts_by(&self, username: &str) -> Vec<PostRecord> {
        self.posts
            .get(username)
            .map(|p| p.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Appends a post for an existing author. Returns false if the author is
    /// unknown; every stored post must reference an existing user.
    pub fn push_post(&self, username: &str, record: PostRecord) -> bool {
        if !self.users.contains_key(username) {
            return false;
        }
        self.posts.entry(username.to_string()).or_default().push(record);
        true
    }

    pub fn find_post(&self, username: &str, post_id: &str) -> Option<PostRecord> {
        self.posts
            .get(username)?
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    /// Applies `f` to the matching post record in place. Returns false if no
    /// such post exists.
    pub fn update_post<F>(&self, username: &str, post_id: &str, f: F) -> bool
    where
        F: FnOnce(&mut PostRecord),
    {
        let Some(mut posts) = self.posts.get_mut(username) else {
            return false;
        };
        match posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                f(post);
                true
            }
            None => false,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
