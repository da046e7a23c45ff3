use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    errors::{Error, Result},
    flows::creation::submit,
    models::{
        invitation::{InvitationDraft, InvitationRecord},
        template::{Template, filter_templates, list_templates as catalog},
    },
    routes::templates::TemplateQuery,
    state::AppState,
};

pub async fn list_templates(Query(query): Query<TemplateQuery>) -> Json<Vec<Template>> {
    let selected = query.selected_tags();
    let templates = filter_templates(catalog(), query.search.trim(), &selected)
        .into_iter()
        .copied()
        .collect();
    Json(templates)
}

pub async fn create_invitation(
    State(state): State<AppState>,
    input: core::result::Result<Json<InvitationDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<InvitationRecord>)> {
    let Json(draft) = input?;
    let record = submit(&state.store, draft).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn read_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvitationRecord>> {
    let record = state.store.load(&id).await?.ok_or(Error::NotFound)?;
    Ok(Json(record))
}
