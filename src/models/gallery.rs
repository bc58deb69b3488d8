use serde::{Deserialize, Serialize};
use super::ItemId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCard {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub images: Vec<String>,
    // Not stored by the backend yet
    pub location: Option<String>,
    pub meeting_link: Option<String>,
}

impl GalleryCard {
    /// Image shown on the card: the first gallery image, if any.
    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
