//! EventCraft: pick a template, fill in the details, and share a link to the
//! finished invitation. Records live in a device-local key-value store.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    routes::{api_router, pages::not_found, pages_router},
    state::AppState,
};

pub mod config;
pub mod consts;
pub mod errors;
pub mod flows;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pages_router(state.clone()))
        .nest("/api", api_router(state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
