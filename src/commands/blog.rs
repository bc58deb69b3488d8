use super::SiteState;
use crate::models::{BlogCard, ListView};
use crate::services::api_client::Backend;
use crate::services::blog_service;

pub async fn list_blogs<B: Backend>(state: &SiteState<B>) -> ListView<BlogCard> {
    blog_service::load_blogs(&state.api, &state.blogs).await
}
