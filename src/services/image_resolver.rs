use tracing::warn;

use super::api_client::{Api, Backend};
use crate::models::{Family, ListRow};

/// Pick the display image for a list row. Never fails: a row whose image
/// cannot be found renders a placeholder instead.
///
/// 1. An explicit cover reference wins and costs no request.
/// 2. Otherwise, if the row reports images, the detail record is fetched
///    and its first image used.
/// 3. Otherwise there is no image.
pub async fn resolve<B: Backend>(api: &Api<B>, family: Family, row: &ListRow) -> Option<String> {
    if let Some(cover) = &row.cover_image_id {
        return Some(api.image_url(family, cover));
    }

    if row.images_count == 0 {
        return None;
    }

    match api.detail(family, &row.id).await {
        Ok(detail) => detail
            .images
            .first()
            .map(|image| api.image_url(family, image)),
        Err(e) => {
            warn!(family = %family, id = %row.id, error = %e, "failed to load images");
            None
        }
    }
}
