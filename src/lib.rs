pub mod config;
pub mod db;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;
pub mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use quiz::{Picker, ThreadRngPicker};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub picker: Arc<dyn Picker>,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self::with_picker(db, Arc::new(ThreadRngPicker))
    }

    pub fn with_picker(db: db::Db, picker: Arc<dyn Picker>) -> Self {
        Self { db, picker }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(names::ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(names::ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(names::ALLOW_METHODS),
        ))
        .with_state(state)
}

/// Answers preflight requests. The `SetResponseHeaderLayer`s in [`router`]
/// stamp the same policy on every other response.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
