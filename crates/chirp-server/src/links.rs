//! RFC 5988 `Link` header construction

use axum::http::{header, HeaderMap, HeaderValue};
use chirp_types::page_count;

pub struct Link {
    pub url: String,
    pub rel: &'static str,
}

impl Link {
    pub fn new(url: impl Into<String>, rel: &'static str) -> Self {
        Self {
            url: url.into(),
            rel,
        }
    }
}

/// Formats links as `<url>; rel="name"`, comma-joined, under a single `Link`
/// header. Empty input produces no header at all.
pub fn link_header(links: &[Link]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if links.is_empty() {
        return headers;
    }
    let value = links
        .iter()
        .map(|link| format!("<{}>; rel=\"{}\"", link.url, link.rel))
        .collect::<Vec<_>>()
        .join(",");
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(header::LINK, value);
    }
    headers
}

/// Navigation links for a post listing: `first` and `last` whenever the user
/// has posts, `prev` below page 1, `next` while pages remain.
pub fn page_links(username: &str, page: usize, total: usize) -> Vec<Link> {
    let mut links = Vec::new();
    if total > 0 {
        links.push(Link::new(
            format!("/api/users/{username}/posts?page=1"),
            "first",
        ));
        links.push(Link::new(
            format!("/api/users/{username}/posts?page={}", page_count(total).max(1)),
            "last",
        ));
    }
    if page > 1 {
        links.push(Link::new(
            format!("/api/users/{username}/posts?page={}", page - 1),
            "prev",
        ));
    }
    if page < page_count(total) {
        links.push(Link::new(
            format!("/api/users/{username}/posts?page={}", page + 1),
            "next",
        ));
    }
    links
}
