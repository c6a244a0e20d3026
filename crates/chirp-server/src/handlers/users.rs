//! User handlers

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::links::{link_header, Link};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chirp_types::User;

/// Returns the currently logged in user.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<(HeaderMap, Json<User>), ApiError> {
    // The extractor trusts the presented username; an identity with no
    // matching account is still not authenticated.
    let user = state
        .accounts
        .find_user(&auth.username)
        .ok_or(ApiError::Unauthorized)?;

    let headers = link_header(&[Link::new(
        format!("/api/users/{}/posts", user.username),
        "posts",
    )]);
    Ok((headers, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<(HeaderMap, Json<User>), ApiError> {
    let user = state.accounts.find_user(&username).ok_or(ApiError::NotFound)?;

    let headers = link_header(&[Link::new(
        format!("/api/users/{}/posts", user.username),
        "posts",
    )]);
    Ok((headers, Json(user)))
}
