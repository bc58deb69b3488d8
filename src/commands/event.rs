use super::SiteState;
use crate::models::{DetailView, ItemId, LightboxState, RelatedEvent};
use crate::services::api_client::Backend;
use crate::services::parallax;

/// Load the event page. Blank ids fall back to the latest active event.
pub async fn get_event_detail<B: Backend>(state: &SiteState<B>, id: Option<String>) -> DetailView {
    let explicit_id = id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(ItemId::new);
    state.event.load(&state.api, explicit_id).await
}

/// Previous events capped to the display count.
pub fn get_related_events<B: Backend>(state: &SiteState<B>) -> Vec<RelatedEvent> {
    state
        .event
        .view()
        .related_preview(state.related_display_count)
        .to_vec()
}

pub fn open_event_gallery<B: Backend>(
    state: &SiteState<B>,
    index: usize,
) -> Result<LightboxState, String> {
    let event = state
        .event
        .view()
        .event
        .ok_or("No event loaded")?;

    let mut lightbox = state.lightbox();
    lightbox.open_at(event.gallery, index, event.title);
    Ok(lightbox.state().clone())
}

pub fn hero_offset(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    parallax::parallax_offset(viewport_height, rect_top, rect_height)
}
