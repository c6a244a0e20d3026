//! Post service: creation, lookup, pagination, likes

use crate::storage::{MemoryStore, PostRecord};
use chirp_types::{CreatePost, Post, User, PAGE_SIZE};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

pub struct PostService {
    store: Arc<MemoryStore>,
}

impl PostService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Creates a post with a fresh id and no likes. Returns `None` if the
    /// author does not exist.
    pub fn create_post(&self, username: &str, input: CreatePost) -> Option<Post> {
        let id = uuid::Uuid::new_v4().to_string();
        info!("Creating post: author={}, id={}", username, id);

        let record = PostRecord {
            id,
            content: input.content,
            liked_by: HashSet::new(),
        };
        if !self.store.push_post(username, record.clone()) {
            return None;
        }
        self.view(username, record, Some(username))
    }

    /// The post with that id authored by that user, with `liked_by_me`
    /// computed against `current_username`.
    pub fn find_post(
        &self,
        username: &str,
        post_id: &str,
        current_username: Option<&str>,
    ) -> Option<Post> {
        let record = self.store.find_post(username, post_id)?;
        self.view(username, record, current_username)
    }

    /// One page of the user's posts, newest first. Pages are 1-indexed and
    /// hold `PAGE_SIZE` entries; pages past the end are empty.
    pub fn list_user_posts(
        &self,
        username: &str,
        current_username: Option<&str>,
        page: usize,
    ) -> Vec<Post> {
        let page = page.max(1);
        self.store
            .posts_by(username)
            .into_iter()
            .skip((page - 1).saturating_mul(PAGE_SIZE))
            .take(PAGE_SIZE)
            .filter_map(|record| self.view(username, record, current_username))
            .collect()
    }

    /// Idempotent set add. Returns false if no such post.
    pub fn add_like(&self, username: &str, post_id: &str, liker: &str) -> bool {
        debug!("Adding like: post={}/{}, liker={}", username, post_id, liker);
        self.store.update_post(username, post_id, |post| {
            post.liked_by.insert(liker.to_string());
        })
    }

    /// Idempotent set remove. Returns false if no such post.
    pub fn remove_like(&self, username: &str, post_id: &str, liker: &str) -> bool {
        debug!("Removing like: post={}/{}, liker={}", username, post_id, liker);
        self.store.update_post(username, post_id, |post| {
            post.liked_by.remove(liker);
        })
    }

    fn view(&self, author: &str, record: PostRecord, current_username: Option<&str>) -> Option<Post> {
        let user = self.store.user(author)?;
        Some(Post {
            id: record.id,
            author: User {
                posts: self.store.post_count(&user.username),
                username: user.username,
                full_name: user.full_name,
            },
            content: record.content,
            likes: record.liked_by.len(),
            liked_by_me: current_username
                .map(|current| record.liked_by.contains(current))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AccountService;
    use chirp_types::CreateUser;

    fn setup() -> (AccountService, PostService) {
        let store = Arc::new(MemoryStore::new());
        let accounts = AccountService::new(store.clone());
        let posts = PostService::new(store);
        for username in ["alice", "bob"] {
            accounts.create_user(CreateUser {
                username: username.to_string(),
                password: "pw".to_string(),
                full_name: None,
            });
        }
        (accounts, posts)
    }

    fn content(text: &str) -> CreatePost {
        CreatePost {
            content: text.to_string(),
        }
    }

    #[test]
    fn test_create_post() {
        let (accounts, posts) = setup();
        let post = posts.create_post("alice", content("hi")).unwrap();

        assert_eq!(post.content, "hi");
        assert_eq!(post.likes, 0);
        assert!(!post.liked_by_me);
        assert_eq!(post.author.username, "alice");
        assert_eq!(post.author.posts, 1);
        assert_eq!(accounts.find_user("alice").unwrap().posts, 1);
    }

    #[test]
    fn test_create_post_for_unknown_author() {
        let (_, posts) = setup();
        assert!(posts.create_post("ghost", content("hi")).is_none());
    }

    #[test]
    fn test_pagination() {
        let (_, posts) = setup();
        for i in 1..=25 {
            posts.create_post("alice", content(&format!("post {i}"))).unwrap();
        }

        let page_1 = posts.list_user_posts("alice", None, 1);
        let page_2 = posts.list_user_posts("alice", None, 2);
        let page_3 = posts.list_user_posts("alice", None, 3);
        let page_4 = posts.list_user_posts("alice", None, 4);

        assert_eq!(page_1.len(), 10);
        assert_eq!(page_2.len(), 10);
        assert_eq!(page_3.len(), 5);
        assert!(page_4.is_empty());

        // Newest first: page 1 starts with the most recent post.
        assert_eq!(page_1[0].content, "post 25");
        assert_eq!(page_3[4].content, "post 1");
    }

    #[test]
    fn test_page_far_out_of_range() {
        let (_, posts) = setup();
        posts.create_post("alice", content("hi")).unwrap();

        assert_eq!(posts.list_user_posts("alice", None, 0).len(), 1);
        assert!(posts.list_user_posts("alice", None, usize::MAX).is_empty());
    }

    #[test]
    fn test_likes_are_idempotent() {
        let (_, posts) = setup();
        let post = posts.create_post("alice", content("hi")).unwrap();

        assert!(posts.add_like("alice", &post.id, "bob"));
        assert!(posts.add_like("alice", &post.id, "bob"));
        assert_eq!(posts.find_post("alice", &post.id, None).unwrap().likes, 1);

        assert!(posts.remove_like("alice", &post.id, "bob"));
        assert!(posts.remove_like("alice", &post.id, "bob"));
        assert_eq!(posts.find_post("alice", &post.id, None).unwrap().likes, 0);
    }

    #[test]
    fn test_liked_by_me_annotation() {
        let (_, posts) = setup();
        let post = posts.create_post("alice", content("hi")).unwrap();
        posts.add_like("alice", &post.id, "bob");

        let as_bob = posts.find_post("alice", &post.id, Some("bob")).unwrap();
        let as_alice = posts.find_post("alice", &post.id, Some("alice")).unwrap();
        let anonymous = posts.find_post("alice", &post.id, None).unwrap();

        assert!(as_bob.liked_by_me);
        assert!(!as_alice.liked_by_me);
        assert!(!anonymous.liked_by_me);
        assert_eq!(as_bob.likes, 1);
    }

    #[test]
    fn test_find_post_scoped_to_author() {
        let (_, posts) = setup();
        let post = posts.create_post("alice", content("hi")).unwrap();

        assert!(posts.find_post("bob", &post.id, None).is_none());
        assert!(posts.find_post("alice", "missing", None).is_none());
    }
}
