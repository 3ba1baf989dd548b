//! HTTP front-end for [`han_pinyin`].
//!
//! Routes:
//! - `GET /pinyin?han=...`  every character's readings
//! - `GET /pinyin1?han=...` first reading of the first character
//!
//! Every response, including the `OPTIONS` preflight, carries permissive
//! CORS headers.

pub mod cors;
pub mod handlers;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use han_pinyin::{ConversionConfig, Transliterate};
use tower_http::trace::TraceLayer;

pub use handlers::ApiResponse;

/// Shared, read-only state handed to every request.
pub struct AppState<T> {
    pub engine: T,
    pub config: ConversionConfig,
}

pub fn build_router<T>(engine: T, config: ConversionConfig) -> Router
where
    T: Transliterate + 'static,
{
    let state = Arc::new(AppState { engine, config });

    Router::new()
        .route("/pinyin", get(handlers::full_conversion::<T>))
        .route("/pinyin1", get(handlers::first_syllable::<T>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // outermost, so preflights never reach routing
        .layer(middleware::from_fn(cors::allow_cors))
}
