use super::SiteState;
use crate::models::FaqEntry;
use crate::services::api_client::Backend;
use crate::services::faq_service;

pub fn get_faq() -> Vec<FaqEntry> {
    faq_service::list_faq()
}

/// Returns the index left open afterwards.
pub fn toggle_faq<B: Backend>(state: &SiteState<B>, index: usize) -> Option<usize> {
    state.faq().toggle(index)
}
