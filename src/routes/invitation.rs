use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    errors::Result,
    flows::viewing::{ViewState, invitation_url},
    state::AppState,
    views,
};

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct ViewQuery {
    /// Present right after the invitation was created.
    pub created: Option<String>,
}

pub async fn view_invitation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Response> {
    let view = ViewState::resolve(&state.store, &id).await?;
    let status = match view {
        ViewState::NotFound => StatusCode::NOT_FOUND,
        ViewState::Loading | ViewState::Found(_) => StatusCode::OK,
    };
    let share_url = invitation_url(&state.public_url, &id);

    Ok((
        status,
        views::invitation::page(&view, &share_url, query.created.is_some())?,
    )
        .into_response())
}
