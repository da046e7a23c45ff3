use chrono::Utc;
use tracing::{info, warn};

use crate::{
    errors::Result,
    models::invitation::{InvitationDraft, InvitationRecord},
    storage::InvitationStore,
    utils::id::generate_invitation_id,
};

/// Fresh form state, seeded with the event type implied by `template_id`.
pub fn create_draft(template_id: Option<&str>) -> InvitationDraft {
    InvitationDraft::for_template(template_id)
}

/// Validates the draft and writes it as a new record. Nothing is stored when
/// a required field is missing.
pub async fn submit(store: &InvitationStore, draft: InvitationDraft) -> Result<InvitationRecord> {
    let event_type = draft.event_type;
    let record = draft
        .into_record(generate_invitation_id(), Utc::now())
        .inspect_err(|errors| {
            warn!(
                "Rejected {} invitation draft: {:?}",
                event_type.as_str(),
                errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>()
            )
        })?;

    store.save(&record).await?;
    info!(
        "Created {} invitation {}",
        record.event_type().as_str(),
        record.id
    );

    Ok(record)
}
