use tracing::warn;

use super::api_client::{Api, Backend};
use super::format::gallery_date_label;
use super::list_loader::ListLoader;
use crate::models::{Family, GalleryCard, ListRow, ListView};

/// Galleries always need their detail record since the card shows every
/// image. A failed detail fetch leaves the card without images.
pub async fn gallery_card<B: Backend>(api: &Api<B>, row: ListRow) -> GalleryCard {
    let images = match api.detail(Family::Galleries, &row.id).await {
        Ok(detail) => detail
            .images
            .iter()
            .map(|image| api.image_url(Family::Galleries, image))
            .collect(),
        Err(e) => {
            warn!(id = %row.id, error = %e, "error fetching gallery details");
            Vec::new()
        }
    };

    GalleryCard {
        title: row.title(),
        description: row.description.unwrap_or_default(),
        date: gallery_date_label(row.created_at.as_deref()),
        id: row.id,
        images,
        location: None,
        meeting_link: None,
    }
}

pub async fn load_galleries<B: Backend>(
    api: &Api<B>,
    loader: &ListLoader<GalleryCard>,
) -> ListView<GalleryCard> {
    loader.load(api, |row| gallery_card(api, row)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoadState;
    use crate::test_helpers::MockBackend;
    use serde_json::json;

    #[tokio::test]
    async fn every_gallery_image_becomes_a_url() {
        let api = Api::new(
            MockBackend::new()
                .with_json(
                    "/galleries",
                    json!({ "data": [
                        { "id": 1, "title": "Summit", "created_at": "2025-01-20 10:00:00" },
                        { "id": 2, "title": "Workshop" }
                    ]}),
                )
                .with_json("/galleries/1", json!({ "images": [{ "id": 5 }, { "id": 6 }] }))
                .with_status("/galleries/2", 500),
        );
        let loader = ListLoader::new(Family::Galleries, 4);

        let view = load_galleries(&api, &loader).await;

        assert_eq!(view.state, LoadState::Ready);
        let summit = &view.items[0];
        assert_eq!(
            summit.images,
            [
                "http://api.test/galleries/image/5/blob",
                "http://api.test/galleries/image/6/blob"
            ]
        );
        assert_eq!(summit.hero_image(), Some("http://api.test/galleries/image/5/blob"));
        assert_eq!(summit.date, "20 Jan 2025");

        let workshop = &view.items[1];
        assert!(workshop.images.is_empty());
        assert_eq!(workshop.hero_image(), None);
        assert_eq!(workshop.date, "Date TBA");
    }

    #[tokio::test]
    async fn list_failure_names_galleries_route() {
        let api = Api::new(MockBackend::new().with_transport_error("/galleries"));
        let loader = ListLoader::new(Family::Galleries, 4);

        let view = load_galleries(&api, &loader).await;

        assert_eq!(view.state, LoadState::Error);
        assert!(view.error.unwrap().contains("/galleries"));
    }
}
