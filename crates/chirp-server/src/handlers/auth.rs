//! Registration and login handlers

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::links::{link_header, Link};
use crate::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use chirp_types::{CreateUser, Login, User};
use tracing::info;

/// Register a new user. Forbidden for logged in users.
pub async fn register(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, HeaderMap, Json<User>), ApiError> {
    if auth.is_some() {
        return Err(ApiError::Forbidden(
            "Registration requires an anonymous request".to_string(),
        ));
    }
    if !state.accounts.is_username_available(&input.username) {
        return Err(ApiError::Conflict("Username already taken".to_string()));
    }

    info!("Registering user: {}", input.username);
    let user = state.accounts.create_user(input);

    let headers = link_header(&[
        Link::new("/login", "login"),
        Link::new(format!("/api/users/{}", user.username), "self"),
    ]);
    Ok((StatusCode::CREATED, headers, Json(user)))
}

/// Does not establish a session; only checks that the provided credentials
/// are valid.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<Login>,
) -> Result<StatusCode, ApiError> {
    info!("Login attempt for: {}", input.username);
    if !state.accounts.verify_password(&input.username, &input.password) {
        return Err(ApiError::Unauthorized);
    }
    Ok(StatusCode::NO_CONTENT)
}
