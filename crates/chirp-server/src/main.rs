//! Chirp Server
//!
//! A minimal micro-blogging backend: registration, login, short text posts,
//! and likes, served over an in-memory store that is seeded at startup and
//! never persisted.

mod error;
mod extractors;
mod handlers;
mod links;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use chirp_types::{CreatePost, CreateUser};
use services::{AccountService, PostService};
use storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub posts: Arc<PostService>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Chirp Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();
    info!("Config loaded: bind={}", config.bind_address);

    let state = build_state();
    seed(&state).context("Failed to seed fixture data")?;

    let app = router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    AppState {
        accounts: Arc::new(AccountService::new(store.clone())),
        posts: Arc::new(PostService::new(store)),
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::users::me))
        .route("/users/:username", get(handlers::users::get_user))
        .route(
            "/users/:username/posts",
            get(handlers::posts::list).post(handlers::posts::publish),
        )
        .route(
            "/users/:username/posts/:post_id",
            get(handlers::posts::read)
                .put(handlers::posts::like)
                .delete(handlers::posts::unlike),
        )
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    Config { bind_address }
}

/// Fixture loaded before the server accepts connections: three users sharing
/// one password, five posts, six likes.
fn seed(state: &AppState) -> Result<()> {
    info!("Seeding fixture data");
    let password = "12345678";

    for (username, full_name) in [
        ("user_1", Some("User 1")),
        ("user_2", Some("User 2")),
        ("user_3", None),
    ] {
        state.accounts.create_user(CreateUser {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.map(str::to_string),
        });
    }

    let make_post = |username: &str, content: &str| {
        state
            .posts
            .create_post(
                username,
                CreatePost {
                    content: content.to_string(),
                },
            )
            .context("Seed post references a missing author")
    };

    let post_1_1 = make_post("user_1", "Hello world!")?;
    let post_1_2 = make_post("user_1", "Hello university!")?;
    let post_1_3 = make_post("user_1", "Hello Ukraine!")?;
    let post_2_1 = make_post("user_2", "Init bot user")?;
    let post_2_2 = make_post("user_2", "Initialization failed!")?;

    state.posts.add_like("user_1", &post_1_1.id, "user_2");
    state.posts.add_like("user_1", &post_1_3.id, "user_2");
    state.posts.add_like("user_1", &post_1_2.id, "user_1");
    state.posts.add_like("user_2", &post_2_1.id, "user_3");
    state.posts.add_like("user_2", &post_2_2.id, "user_3");
    state.posts.add_like("user_1", &post_1_1.id, "user_3");

    Ok(())
}
