//! HTTP handlers

pub mod auth;
pub mod posts;
pub mod users;

use axum::response::Html;

pub async fn health() -> &'static str {
    "OK"
}

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(
        "<html><head><title>Chirp</title></head>\
         <body><h1>Chirp</h1>\
         <p>A minimal micro-blogging API. Endpoints live under <code>/api</code>.</p>\
         </body></html>",
    )
}
