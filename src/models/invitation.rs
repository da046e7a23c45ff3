use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{
    models::template::{Template, find_template},
    utils::validator::{invalid, non_blank, required},
};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Wedding,
    #[default]
    Birthday,
    Anniversary,
    BabyShower,
    Corporate,
    Graduation,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Birthday,
        EventType::Anniversary,
        EventType::BabyShower,
        EventType::Corporate,
        EventType::Graduation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::BabyShower => "baby-shower",
            EventType::Corporate => "corporate",
            EventType::Graduation => "graduation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Birthday => "Birthday",
            EventType::Anniversary => "Anniversary",
            EventType::BabyShower => "Baby Shower",
            EventType::Corporate => "Corporate Event",
            EventType::Graduation => "Graduation",
        }
    }

    /// Lowercase badge text, e.g. `baby shower`.
    pub fn badge(&self) -> String {
        self.as_str().replace('-', " ")
    }

    /// Event type implied by a catalog template id.
    pub fn for_template(template_id: Option<&str>) -> EventType {
        match template_id.map(str::trim) {
            Some("1") => EventType::Wedding,
            Some("3") => EventType::BabyShower,
            Some("4") => EventType::Corporate,
            Some("5") => EventType::Anniversary,
            Some("6") => EventType::Graduation,
            // "2" and everything unrecognised
            _ => EventType::Birthday,
        }
    }

    /// Gradient pair framing the invitation card.
    pub fn accent(&self) -> (&'static str, &'static str) {
        match self {
            EventType::Wedding => ("#ec4899", "#f43f5e"),
            EventType::Anniversary => ("#ef4444", "#ec4899"),
            EventType::BabyShower => ("#60a5fa", "#f472b6"),
            EventType::Corporate => ("#2563eb", "#4f46e5"),
            EventType::Graduation => ("#eab308", "#f97316"),
            EventType::Birthday => Self::DEFAULT_ACCENT,
        }
    }

    const DEFAULT_ACCENT: (&'static str, &'static str) = ("#a855f7", "#ec4899");

    /// Draft fields that must be filled for this event type.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            EventType::Wedding => &["bride_name", "groom_name"],
            EventType::BabyShower => &["parent_names", "baby_gender"],
            EventType::Corporate => &["company_name", "event_category"],
            EventType::Birthday | EventType::Anniversary | EventType::Graduation => &[],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BabyGender {
    Boy,
    Girl,
    Surprise,
}

impl BabyGender {
    pub fn parse(value: &str) -> Option<BabyGender> {
        match value.trim() {
            "boy" => Some(BabyGender::Boy),
            "girl" => Some(BabyGender::Girl),
            "surprise" => Some(BabyGender::Surprise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BabyGender::Boy => "boy",
            BabyGender::Girl => "girl",
            BabyGender::Surprise => "surprise",
        }
    }

    /// How the viewer refers to the baby, e.g. `baby girl` or `little one`.
    pub fn phrase(&self) -> Cow<'static, str> {
        match self {
            BabyGender::Surprise => Cow::Borrowed("little one"),
            other => Cow::Owned(format!("baby {}", other.as_str())),
        }
    }
}

pub const CORPORATE_CATEGORIES: [(&str, &str); 4] = [
    ("conference", "Conference"),
    ("meeting", "Meeting"),
    ("launch", "Product Launch"),
    ("networking", "Networking"),
];

/// Event type together with the fields only that type carries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "eventType", rename_all = "kebab-case")]
pub enum EventDetails {
    #[serde(rename_all = "camelCase")]
    Wedding {
        bride_name: String,
        groom_name: String,
    },
    Birthday,
    Anniversary,
    #[serde(rename_all = "camelCase")]
    BabyShower {
        parent_names: String,
        baby_gender: BabyGender,
    },
    #[serde(rename_all = "camelCase")]
    Corporate {
        company_name: String,
        event_category: String,
    },
    Graduation,
}

impl EventDetails {
    pub fn event_type(&self) -> EventType {
        match self {
            EventDetails::Wedding { .. } => EventType::Wedding,
            EventDetails::Birthday => EventType::Birthday,
            EventDetails::Anniversary => EventType::Anniversary,
            EventDetails::BabyShower { .. } => EventType::BabyShower,
            EventDetails::Corporate { .. } => EventType::Corporate,
            EventDetails::Graduation => EventType::Graduation,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    pub id: String,
    #[serde(flatten)]
    pub details: EventDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u32>,

    // ? Common details
    pub host_name: String,
    pub event_title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub rsvp_contact: String, // ! phone or email, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl InvitationRecord {
    pub fn event_type(&self) -> EventType {
        self.details.event_type()
    }
}

/// Form state while an invitation is being written. Fields belonging to
/// other event types are kept but ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct InvitationDraft {
    pub event_type: EventType,
    #[serde(deserialize_with = "template_ref")]
    pub template_id: Option<String>,

    #[validate(custom(function = "non_blank"))]
    pub host_name: String,
    #[validate(custom(function = "non_blank"))]
    pub event_title: String,
    #[validate(custom(function = "non_blank"))]
    pub date: String,
    #[validate(custom(function = "non_blank"))]
    pub time: String,
    #[validate(custom(function = "non_blank"))]
    pub venue: String,
    #[validate(custom(function = "non_blank"))]
    pub rsvp_contact: String,
    pub custom_message: String,

    // ? Wedding
    pub bride_name: String,
    pub groom_name: String,

    // ? Baby shower
    pub parent_names: String,
    pub baby_gender: String,

    // ? Corporate
    pub company_name: String,
    pub event_category: String,
}

impl InvitationDraft {
    pub fn for_template(template_id: Option<&str>) -> Self {
        Self {
            event_type: EventType::for_template(template_id),
            template_id: template_id.map(str::to_string),
            ..Default::default()
        }
    }

    /// Positive numeric template id, whether or not the catalog knows it.
    pub fn template_id(&self) -> Option<u32> {
        self.template_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|id| *id > 0)
    }

    /// Catalog template the draft was started from.
    pub fn template(&self) -> Option<&'static Template> {
        self.template_id().and_then(find_template)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "host_name" => &self.host_name,
            "event_title" => &self.event_title,
            "date" => &self.date,
            "time" => &self.time,
            "venue" => &self.venue,
            "rsvp_contact" => &self.rsvp_contact,
            "custom_message" => &self.custom_message,
            "bride_name" => &self.bride_name,
            "groom_name" => &self.groom_name,
            "parent_names" => &self.parent_names,
            "baby_gender" => &self.baby_gender,
            "company_name" => &self.company_name,
            "event_category" => &self.event_category,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Checks every required field for the selected event type and builds
    /// the immutable record. Nothing is built unless every check passes.
    pub fn into_record(
        self,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<InvitationRecord, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        for &name in self.event_type.required_fields() {
            if self.field(name).is_some_and(|value| value.trim().is_empty()) {
                errors.add(name, required());
            }
        }

        let date = parse_field(&mut errors, "date", &self.date, parse_date);
        let time = parse_field(&mut errors, "time", &self.time, parse_time);
        let baby_gender = match self.event_type {
            EventType::BabyShower => {
                parse_field(&mut errors, "baby_gender", &self.baby_gender, BabyGender::parse)
            }
            _ => None,
        };

        if !errors.errors().is_empty() {
            return Err(errors);
        }
        let (Some(date), Some(time)) = (date, time) else {
            return Err(errors);
        };

        let template_id = self.template_id();
        let details = match self.event_type {
            EventType::Wedding => EventDetails::Wedding {
                bride_name: clean(self.bride_name),
                groom_name: clean(self.groom_name),
            },
            EventType::BabyShower => {
                let Some(baby_gender) = baby_gender else {
                    return Err(errors);
                };
                EventDetails::BabyShower {
                    parent_names: clean(self.parent_names),
                    baby_gender,
                }
            }
            EventType::Corporate => EventDetails::Corporate {
                company_name: clean(self.company_name),
                event_category: clean(self.event_category),
            },
            EventType::Birthday => EventDetails::Birthday,
            EventType::Anniversary => EventDetails::Anniversary,
            EventType::Graduation => EventDetails::Graduation,
        };

        let custom_message = Some(clean(self.custom_message)).filter(|m| !m.is_empty());

        Ok(InvitationRecord {
            id,
            details,
            template_id,
            host_name: clean(self.host_name),
            event_title: clean(self.event_title),
            date,
            time,
            venue: clean(self.venue),
            rsvp_contact: clean(self.rsvp_contact),
            custom_message,
            created_at,
        })
    }
}

/// Form posts carry the template id as text, JSON clients may send the
/// number the API hands back.
#[derive(Deserialize)]
#[serde(untagged)]
enum TemplateRef {
    Number(u64),
    Text(String),
}

fn template_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let template = Option::<TemplateRef>::deserialize(deserializer)?;
    Ok(template.map(|template| match template {
        TemplateRef::Number(id) => id.to_string(),
        TemplateRef::Text(raw) => raw,
    }))
}

fn clean(value: String) -> String {
    value.trim().to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Parses a non-blank field, recording an `invalid` error on failure.
/// Blank fields are already reported by the presence checks.
fn parse_field<T>(
    errors: &mut ValidationErrors,
    name: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    if value.trim().is_empty() {
        return None;
    }
    let parsed = parse(value);
    if parsed.is_none() {
        errors.add(name, invalid());
    }
    parsed
}
