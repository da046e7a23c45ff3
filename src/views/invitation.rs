use axum::response::Html;
use minijinja::context;

use super::render;
use crate::{
    errors::Result,
    flows::viewing::{SharePayload, ViewState, event_highlight},
    utils::time::{format_event_date, format_event_time},
};

pub const CREATED_NOTICE: &str = "Invitation Created! Your beautiful invitation is ready to share.";
pub const LINK_COPIED_NOTICE: &str = "Link Copied! Invitation link has been copied to your clipboard.";

/// Renders any state of the invitation page. `share_url` is the absolute
/// address of the page itself.
pub fn page(state: &ViewState, share_url: &str, just_created: bool) -> Result<Html<String>> {
    match state {
        ViewState::Loading => render(
            "invitation.html",
            context! { title => "Loading invitation", active => "", state => "loading" },
        ),
        ViewState::NotFound => render(
            "invitation.html",
            context! { title => "Invitation Not Found", active => "", state => "not_found" },
        ),
        ViewState::Found(record) => {
            let event_type = record.event_type();
            render(
                "invitation.html",
                context! {
                    title => &record.event_title,
                    active => "",
                    state => "found",
                    record => record,
                    badge => event_type.badge(),
                    accent => event_type.accent(),
                    highlight => event_highlight(&record.details),
                    date => format_event_date(record.date),
                    time => format_event_time(record.time),
                    share => SharePayload::for_invitation(record, share_url.to_string()),
                    created => just_created,
                    created_notice => CREATED_NOTICE,
                    copied_notice => LINK_COPIED_NOTICE,
                },
            )
        }
    }
}
