//! HTTP layer for the card swipe service.
//!
//! Exposes an axum [`Router`] backed by any [`SwipeStore`]:
//!
//! | Route | Auth | Purpose |
//! |-------|------|---------|
//! | `GET /` | no | welcome text |
//! | `GET /card` | no | kiosk HTML page |
//! | `GET /send` | `pw` | record a swipe for `card` |
//! | `GET /data` | `pw` | pseudonymized swipes between `start` and `end` |

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod validation;

pub use config::ServerConfig;
pub use error::Error;

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use swipe_core::store::SwipeStore;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use auth::SharedSecret;
use handlers::{data, info, send};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: SwipeStore> {
  pub store:  Arc<S>,
  pub secret: Arc<SharedSecret>,
}

impl<S: SwipeStore> AppState<S> {
  pub fn new(store: S, secret: SharedSecret) -> Self {
    Self { store: Arc::new(store), secret: Arc::new(secret) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SwipeStore + Clone + Send + Sync + 'static,
{
  // The kiosk page may be served from another origin.
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
    .allow_headers(Any);

  Router::new()
    .route("/",     get(info::welcome))
    .route("/card", get(info::card_page))
    .route("/send", get(send::handler::<S>))
    .route("/data", get(data::handler::<S>))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
