use axum::{
    extract::{Form, Query, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    errors::{Error, Result},
    flows::creation::{create_draft, submit},
    models::invitation::InvitationDraft,
    state::AppState,
    views::{
        self,
        create::{FieldMessages, field_messages},
    },
};

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct CreateQuery {
    pub template: Option<String>,
}

pub async fn new_invitation(Query(query): Query<CreateQuery>) -> Result<Html<String>> {
    let draft = create_draft(query.template.as_deref());
    views::create::form(&draft, &FieldMessages::new())
}

pub async fn submit_invitation(
    State(state): State<AppState>,
    input: core::result::Result<Form<InvitationDraft>, FormRejection>,
) -> Result<Response> {
    let Form(draft) = input?;

    match submit(&state.store, draft.clone()).await {
        Ok(record) => {
            Ok(Redirect::to(&format!("/invitation/{}?created=1", record.id)).into_response())
        }
        // ? keep what was typed and point at the missing fields
        Err(Error::ValidationError(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            views::create::form(&draft, &field_messages(&errors))?,
        )
            .into_response()),
        Err(error) => Err(error),
    }
}
