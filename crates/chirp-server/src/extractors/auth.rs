//! Auth extractor for protected routes
//!
//! Parses HTTP Basic credentials and yields the embedded username. The
//! password is NOT re-verified here; only the explicit `/login` check
//! compares it against the store. Handlers that allow anonymous access take
//! `Option<AuthUser>` instead.

use crate::error::ApiError;
use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Authenticated user info
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let encoded = auth_header
            .strip_prefix("Basic ")
            .ok_or(ApiError::Unauthorized)?;

        let decoded = STANDARD.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
        let credentials = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

        let (username, _password) = credentials.split_once(':').ok_or(ApiError::Unauthorized)?;
        if username.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        Ok(AuthUser {
            username: username.to_string(),
        })
    }
}
