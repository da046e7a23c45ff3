use std::collections::HashMap;

use axum::response::Html;
use minijinja::context;
use validator::ValidationErrors;

use super::render;
use crate::{
    errors::Result,
    models::invitation::{BabyGender, CORPORATE_CATEGORIES, EventType, InvitationDraft},
};

/// First message per draft field, keyed by the snake_case field name.
pub type FieldMessages = HashMap<String, String>;

pub fn field_messages(errors: &ValidationErrors) -> FieldMessages {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            let message = errors.first()?.message.as_deref()?.to_string();
            Some((field.to_string(), message))
        })
        .collect()
}

const BABY_GENDERS: [(BabyGender, &str); 3] = [
    (BabyGender::Boy, "Boy"),
    (BabyGender::Girl, "Girl"),
    (BabyGender::Surprise, "Surprise"),
];

pub fn form(draft: &InvitationDraft, messages: &FieldMessages) -> Result<Html<String>> {
    let event_types: Vec<(&str, &str)> = EventType::ALL
        .iter()
        .map(|event_type| (event_type.as_str(), event_type.label()))
        .collect();
    let baby_genders: Vec<(&str, &str)> = BABY_GENDERS
        .iter()
        .map(|(gender, label)| (gender.as_str(), *label))
        .collect();

    render(
        "create.html",
        context! {
            title => "Create Invitation",
            active => "/create",
            draft => draft,
            template => draft.template(),
            errors => messages,
            event_types => event_types,
            baby_genders => baby_genders,
            corporate_categories => CORPORATE_CATEGORIES,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::creation::create_draft;

    #[test]
    fn seeded_event_type_is_selected() {
        let Html(page) = form(&create_draft(Some("3")), &FieldMessages::new()).unwrap();

        assert!(page.contains("<option value=\"baby-shower\" selected>Baby Shower</option>"));
        assert!(page.contains("name=\"templateId\" value=\"3\""));
        assert!(page.contains("<fieldset data-event-type=\"baby-shower\">"));
        assert!(page.contains("<fieldset data-event-type=\"wedding\" hidden>"));
        assert!(page.contains("Starting from the <strong>Baby Shower Bliss</strong> template"));
    }

    #[test]
    fn unknown_template_shows_no_seed_notice() {
        let Html(page) = form(&create_draft(Some("42")), &FieldMessages::new()).unwrap();
        assert!(!page.contains("Starting from the"));

        let Html(page) = form(&create_draft(None), &FieldMessages::new()).unwrap();
        assert!(page.contains("name=\"templateId\" value=\"\""));
    }

    #[test]
    fn only_the_visible_event_section_is_required() {
        let Html(page) = form(&create_draft(Some("1")), &FieldMessages::new()).unwrap();

        // six common inputs, the event type picker, bride and groom
        assert_eq!(page.matches(" required>").count(), 9);
        assert!(page.contains("id=\"hostName\" name=\"hostName\""));
        assert!(page.contains("placeholder=\"Enter host name\" value=\"\" required>"));
        assert!(page.contains("<select id=\"eventType\" name=\"eventType\" required>"));
        assert_eq!(page.matches(" data-required required>").count(), 2);
        assert_eq!(page.matches(" data-required>").count(), 4);
        assert!(page.contains("<select id=\"babyGender\" name=\"babyGender\" data-required>"));
        assert!(!page.contains("name=\"customMessage\" required"));
    }

    #[test]
    fn birthday_form_requires_common_fields_only() {
        let Html(page) = form(&create_draft(None), &FieldMessages::new()).unwrap();

        assert_eq!(page.matches(" required>").count(), 7);
        assert_eq!(page.matches(" data-required>").count(), 6);
    }

    #[test]
    fn draft_values_and_errors_are_rendered_escaped() {
        let mut draft = create_draft(None);
        draft.host_name = "<Meera>".into();
        let mut messages = FieldMessages::new();
        messages.insert("venue".into(), "This field is required".into());

        let Html(page) = form(&draft, &messages).unwrap();

        assert!(page.contains("value=\"&lt;Meera&gt;\""));
        assert!(page.contains("<p class=\"error\">This field is required</p>"));
    }
}
