use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    routes::{
        api::{create_invitation, list_templates, read_invitation},
        create::{new_invitation, submit_invitation},
        invitation::view_invitation,
        pages::{about, home},
        templates::browse_templates,
    },
    state::AppState,
};

pub mod api;
pub mod create;
pub mod invitation;
pub mod pages;
pub mod templates;

pub fn pages_router(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/templates", get(browse_templates))
        .route("/create", get(new_invitation).post(submit_invitation))
        .route("/invitation/{id}", get(view_invitation))
        .with_state(config)
}

pub fn api_router(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/invitations", post(create_invitation))
        .route("/invitations/{id}", get(read_invitation))
        .with_state(config)
}
