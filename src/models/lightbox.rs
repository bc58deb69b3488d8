use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightboxState {
    pub is_open: bool,
    pub images: Vec<String>,
    /// Only meaningful while `images` is non-empty.
    pub current_index: usize,
    pub title: String,
}

impl LightboxState {
    pub fn current_image(&self) -> Option<&str> {
        if !self.is_open {
            return None;
        }
        self.images.get(self.current_index).map(String::as_str)
    }
}
