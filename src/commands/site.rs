use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{BlogCard, Family, GalleryCard};
use crate::services::api_client::{Api, Backend, HttpBackend};
use crate::services::config_service::{self, EffectiveConfig};
use crate::services::detail_loader::DetailLoader;
use crate::services::faq_service::Accordion;
use crate::services::lightbox::{Lightbox, PageScroll};
use crate::services::list_loader::ListLoader;

/// Everything one open site page holds: the API, a loader per section and
/// the interactive widgets. Commands take it by reference.
pub struct SiteState<B = HttpBackend> {
    pub api: Api<B>,
    pub blogs: ListLoader<BlogCard>,
    pub galleries: ListLoader<GalleryCard>,
    pub event: DetailLoader,
    pub related_display_count: usize,
    pub page_scroll: PageScroll,
    lightbox: Mutex<Lightbox<PageScroll>>,
    faq: Mutex<Accordion>,
}

impl SiteState<HttpBackend> {
    pub fn from_config() -> Result<Self, String> {
        let config = config_service::get_effective_config()?;
        let backend = HttpBackend::new(&config.api_base, config.request_timeout)?;
        Ok(Self::new(Api::new(backend), &config))
    }
}

impl<B: Backend> SiteState<B> {
    pub fn new(api: Api<B>, config: &EffectiveConfig) -> Self {
        let page_scroll = PageScroll::new();
        Self {
            api,
            blogs: ListLoader::new(Family::Blogs, config.fan_out),
            galleries: ListLoader::new(Family::Galleries, config.fan_out),
            event: DetailLoader::new(config.fan_out),
            related_display_count: config.related_display_count,
            lightbox: Mutex::new(Lightbox::new(page_scroll.clone())),
            page_scroll,
            faq: Mutex::new(Accordion::for_faq()),
        }
    }

    pub fn lightbox(&self) -> MutexGuard<'_, Lightbox<PageScroll>> {
        self.lightbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn faq(&self) -> MutexGuard<'_, Accordion> {
        self.faq.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
