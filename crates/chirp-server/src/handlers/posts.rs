//! Post handlers: listing, publishing, reading, like/unlike

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::links::{link_header, page_links, Link};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chirp_types::{CreatePost, Post};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

pub async fn list(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Path(username): Path<String>,
    Query(query): Query<PostsQuery>,
) -> Result<(HeaderMap, Json<Vec<Post>>), ApiError> {
    let user = state.accounts.find_user(&username).ok_or(ApiError::NotFound)?;

    // Pages are 1-indexed; clamp once so the listing and its navigation
    // links agree on what page this is.
    let page = query.page.max(1);
    let current_username = auth.as_ref().map(|a| a.username.as_str());
    let posts = state.posts.list_user_posts(&username, current_username, page);

    // Navigation links are only advertised to authenticated requesters.
    let headers = if auth.is_some() {
        link_header(&page_links(&user.username, page, user.posts))
    } else {
        HeaderMap::new()
    };
    Ok((headers, Json(posts)))
}

/// Publish a post as the authenticated user. The path username must match
/// the identity, compared case-insensitively.
pub async fn publish(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Path(username): Path<String>,
    Json(input): Json<CreatePost>,
) -> Result<(StatusCode, HeaderMap, Json<Post>), ApiError> {
    let auth = auth.ok_or_else(|| {
        ApiError::Forbidden("Publishing requires authentication".to_string())
    })?;
    if !auth.username.eq_ignore_ascii_case(&username) {
        return Err(ApiError::Forbidden(
            "You are not allowed to create posts for other users".to_string(),
        ));
    }

    // The path may name the author by a case variant; posts are stored under
    // the canonical username.
    let author = state
        .accounts
        .resolve_user(&username)
        .ok_or(ApiError::NotFound)?;
    let post = state
        .posts
        .create_post(&author.username, input)
        .ok_or(ApiError::NotFound)?;

    let headers = link_header(&[
        Link::new(format!("/api/users/{}/posts", post.author.username), "posts"),
        Link::new(
            format!("/api/users/{}/posts/{}", post.author.username, post.id),
            "self",
        ),
    ]);
    Ok((StatusCode::CREATED, headers, Json(post)))
}

pub async fn read(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<(HeaderMap, Json<Post>), ApiError> {
    let current_username = auth.as_ref().map(|a| a.username.as_str());
    let post = state
        .posts
        .find_post(&username, &post_id, current_username)
        .ok_or(ApiError::NotFound)?;

    let headers = link_header(&[
        Link::new(format!("/api/users/{}/posts", post.author.username), "posts"),
        Link::new(
            format!("/api/users/{}/posts/{}/like", post.author.username, post.id),
            "like",
        ),
    ]);
    Ok((headers, Json(post)))
}

pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    if !state.posts.add_like(&username, &post_id, &auth.username) {
        return Err(ApiError::NotFound);
    }

    let headers = post_link_header(&username, &post_id);
    Ok((StatusCode::CREATED, headers))
}

pub async fn unlike(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((username, post_id)): Path<(String, String)>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    if !state.posts.remove_like(&username, &post_id, &auth.username) {
        return Err(ApiError::NotFound);
    }

    let headers = post_link_header(&username, &post_id);
    Ok((StatusCode::NO_CONTENT, headers))
}

fn post_link_header(username: &str, post_id: &str) -> HeaderMap {
    link_header(&[
        Link::new(format!("/api/users/{username}/posts"), "posts"),
        Link::new(format!("/api/users/{username}/posts/{post_id}"), "self"),
    ])
}
