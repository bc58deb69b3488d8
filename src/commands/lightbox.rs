use super::SiteState;
use crate::models::LightboxState;
use crate::services::api_client::Backend;
use crate::services::lightbox::{ClickTarget, Key};

pub fn get_lightbox<B: Backend>(state: &SiteState<B>) -> LightboxState {
    state.lightbox().state().clone()
}

pub fn lightbox_key<B: Backend>(state: &SiteState<B>, key: String) -> LightboxState {
    let mut lightbox = state.lightbox();
    lightbox.handle_key(Key::from_name(&key));
    lightbox.state().clone()
}

pub fn lightbox_next<B: Backend>(state: &SiteState<B>) -> LightboxState {
    let mut lightbox = state.lightbox();
    lightbox.next();
    lightbox.state().clone()
}

pub fn lightbox_prev<B: Backend>(state: &SiteState<B>) -> LightboxState {
    let mut lightbox = state.lightbox();
    lightbox.prev();
    lightbox.state().clone()
}

pub fn lightbox_close<B: Backend>(state: &SiteState<B>) -> LightboxState {
    let mut lightbox = state.lightbox();
    lightbox.close();
    lightbox.state().clone()
}

pub fn lightbox_click<B: Backend>(state: &SiteState<B>, on_backdrop: bool) -> LightboxState {
    let target = if on_backdrop {
        ClickTarget::Backdrop
    } else {
        ClickTarget::Content
    };
    let mut lightbox = state.lightbox();
    lightbox.click(target);
    lightbox.state().clone()
}
