//! Post types

use crate::user::User;
use serde::{Deserialize, Serialize};

/// Public view of a post, annotated relative to the requesting identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: User,
    pub content: String,
    /// Number of users who liked this post.
    pub likes: usize,
    /// Whether the requesting user has liked this post. Always false for
    /// anonymous requests.
    pub liked_by_me: bool,
}

/// Post creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub content: String,
}
