use serde::Serialize;
use super::{EventView, RelatedEvent};

/// Number of related events the detail page shows by default.
pub const RELATED_DISPLAY_COUNT: usize = 3;

/// Where a loader currently stands. `Empty` is a successful load that
/// returned no rows and renders as an invitation, not as a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Error,
    Empty,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    pub state: LoadState,
    pub error: Option<String>,
    pub items: Vec<T>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            error: None,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub state: LoadState,
    pub error: Option<String>,
    pub event: Option<EventView>,
    /// Full related list; use [`DetailView::related_preview`] for display.
    pub related: Vec<RelatedEvent>,
}

impl DetailView {
    pub fn related_preview(&self, limit: usize) -> &[RelatedEvent] {
        &self.related[..self.related.len().min(limit)]
    }
}
