use serde::Serialize;
use tracing::info;

use crate::{
    errors::Result,
    models::invitation::{EventDetails, InvitationRecord},
    storage::InvitationStore,
};

/// Lifecycle of the invitation page for one id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    NotFound,
    Found(InvitationRecord),
}

impl ViewState {
    pub async fn resolve(store: &InvitationStore, id: &str) -> Result<Self> {
        let state = match store.load(id).await? {
            Some(record) => {
                info!("Viewing invitation {id}");
                ViewState::Found(record)
            }
            None => {
                info!("Invitation {id} not found");
                ViewState::NotFound
            }
        };
        Ok(state)
    }
}

/// Event-type specific block shown under the title.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventHighlight {
    pub headline: String,
    pub tagline: Option<String>,
    pub badge: Option<String>,
}

pub fn event_highlight(details: &EventDetails) -> Option<EventHighlight> {
    match details {
        EventDetails::Wedding {
            bride_name,
            groom_name,
        } => Some(EventHighlight {
            headline: format!("{bride_name} ♥ {groom_name}"),
            tagline: Some("are getting married!".to_string()),
            badge: None,
        }),
        EventDetails::BabyShower {
            parent_names,
            baby_gender,
        } => Some(EventHighlight {
            headline: parent_names.clone(),
            tagline: Some(format!(
                "are celebrating their upcoming {}",
                baby_gender.phrase()
            )),
            badge: None,
        }),
        EventDetails::Corporate {
            company_name,
            event_category,
        } => Some(EventHighlight {
            headline: company_name.clone(),
            tagline: None,
            badge: Some(event_category.clone()),
        }),
        EventDetails::Birthday | EventDetails::Anniversary | EventDetails::Graduation => None,
    }
}

/// Stable locator for an invitation under `base_url`.
pub fn invitation_url(base_url: &str, id: &str) -> String {
    format!(
        "{}/invitation/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// What the page hands to the platform share sheet or the clipboard.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_invitation(record: &InvitationRecord, url: String) -> Self {
        Self {
            title: record.event_title.clone(),
            text: format!("You're invited to {}!", record.event_title),
            url,
        }
    }
}
