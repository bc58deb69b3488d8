use serde::{Deserialize, Serialize};
use super::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Past,
    #[default]
    Unknown,
}

impl EventStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("active") | Some("upcoming") => EventStatus::Active,
            Some("past") | Some("completed") => EventStatus::Past,
            _ => EventStatus::Unknown,
        }
    }
}

/// The "current" event shown on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub id: ItemId,
    pub title: String,
    pub date: Option<String>,
    pub display_date: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub host: String,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    pub thumbnail_url: Option<String>,
    pub gallery: Vec<String>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEvent {
    pub id: ItemId,
    pub title: String,
    pub date: Option<String>,
    pub display_date: String,
    #[serde(default)]
    pub host: String,
    pub thumbnail_url: Option<String>,
    /// Past events reuse their meeting link as the recording link.
    pub recording_link: Option<String>,
}
