use serde::{Deserialize, Serialize};
use super::ItemId;

pub const DEFAULT_BLOG_AUTHOR: &str = "BlueLife Financial Solutions LLC Team";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogCard {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub image: Option<String>,
    pub created_at: Option<String>,
    pub display_date: String,
    pub read_time: String,
    pub is_published: bool,
    pub cover_image_id: Option<ItemId>,
    pub images_count: u64,
    pub author: String,
}
