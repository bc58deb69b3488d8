use super::SiteState;
use crate::models::{GalleryCard, ItemId, LightboxState, ListView};
use crate::services::api_client::Backend;
use crate::services::gallery_service;

pub async fn list_galleries<B: Backend>(state: &SiteState<B>) -> ListView<GalleryCard> {
    gallery_service::load_galleries(&state.api, &state.galleries).await
}

/// Open the lightbox on one image of a loaded gallery. A gallery without
/// images leaves the lightbox closed.
pub fn open_gallery<B: Backend>(
    state: &SiteState<B>,
    gallery_id: String,
    index: usize,
) -> Result<LightboxState, String> {
    let id = ItemId::new(gallery_id);
    let card = state
        .galleries
        .view()
        .items
        .into_iter()
        .find(|card| card.id == id)
        .ok_or_else(|| format!("Gallery {} is not loaded", id))?;

    let mut lightbox = state.lightbox();
    lightbox.open_at(card.images, index, card.title);
    Ok(lightbox.state().clone())
}
