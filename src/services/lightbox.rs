use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::models::LightboxState;

/// Capability for suspending background page scrolling while a modal is
/// up. Provided by the hosting view layer.
pub trait ScrollLock {
    fn suspend(&self);
    fn restore(&self);
}

/// Page-wide scroll suspension shared by every modal on a page. Counts
/// holders, so the page scrolls again only once all of them released.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    holders: Arc<AtomicUsize>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suspended(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

impl ScrollLock for PageScroll {
    fn suspend(&self) {
        self.holders.fetch_add(1, Ordering::SeqCst);
    }

    fn restore(&self) {
        let _ = self
            .holders
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// Modal image viewer. Closed until opened with a non-empty image set;
/// navigation wraps around in both directions.
pub struct Lightbox<L: ScrollLock> {
    scroll: L,
    state: LightboxState,
}

impl<L: ScrollLock> Lightbox<L> {
    pub fn new(scroll: L) -> Self {
        Self {
            scroll,
            state: LightboxState::default(),
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn current_image(&self) -> Option<&str> {
        self.state.current_image()
    }

    /// No-op for an empty image set. Re-opening while open replaces the
    /// images and index without taking the scroll lock twice.
    pub fn open_at(&mut self, images: Vec<String>, index: usize, title: impl Into<String>) {
        if images.is_empty() {
            debug!("ignoring lightbox open with no images");
            return;
        }
        if !self.state.is_open {
            self.scroll.suspend();
        }
        let index = index.min(images.len() - 1);
        self.state = LightboxState {
            is_open: true,
            images,
            current_index: index,
            title: title.into(),
        };
    }

    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        self.state.is_open = false;
        self.scroll.restore();
    }

    pub fn next(&mut self) {
        if let Some(len) = self.navigable_len() {
            self.state.current_index = (self.state.current_index + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        if let Some(len) = self.navigable_len() {
            self.state.current_index = (self.state.current_index + len - 1) % len;
        }
    }

    /// Returns whether the key was consumed. Keys do nothing while closed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.state.is_open {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => return false,
        }
        true
    }

    /// Backdrop clicks close; clicks on the image itself stay inside.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    fn navigable_len(&self) -> Option<usize> {
        let len = self.state.images.len();
        (self.state.is_open && len > 0).then_some(len)
    }
}

impl<L: ScrollLock> Drop for Lightbox<L> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{}", i)).collect()
    }

    fn open_lightbox(n: usize, index: usize) -> (Lightbox<PageScroll>, PageScroll) {
        let scroll = PageScroll::new();
        let mut lightbox = Lightbox::new(scroll.clone());
        lightbox.open_at(images(n), index, "Summit");
        (lightbox, scroll)
    }

    #[test]
    fn opening_with_no_images_stays_closed() {
        let scroll = PageScroll::new();
        let mut lightbox = Lightbox::new(scroll.clone());
        lightbox.open_at(Vec::new(), 0, "Empty");
        assert!(!lightbox.is_open());
        assert!(!scroll.is_suspended());
    }

    #[test]
    fn open_and_close_toggle_scroll_lock() {
        let (mut lightbox, scroll) = open_lightbox(3, 1);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_image(), Some("img-1"));
        assert_eq!(lightbox.state().title, "Summit");
        assert!(scroll.is_suspended());

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(!scroll.is_suspended());
    }

    #[test]
    fn reopening_while_open_resets_without_double_lock() {
        let (mut lightbox, scroll) = open_lightbox(3, 2);
        lightbox.open_at(images(5), 4, "Other");
        assert_eq!(lightbox.state().current_index, 4);
        assert_eq!(lightbox.state().title, "Other");

        lightbox.close();
        assert!(!scroll.is_suspended());
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let (mut lightbox, _scroll) = open_lightbox(3, 2);
        lightbox.next();
        assert_eq!(lightbox.state().current_index, 0);
        lightbox.prev();
        assert_eq!(lightbox.state().current_index, 2);
    }

    #[test]
    fn next_and_prev_pairs_cancel_out() {
        for len in 1..=6 {
            for start in 0..len {
                let (mut lightbox, _scroll) = open_lightbox(len, start);
                for steps in 0..(2 * len + 1) {
                    for _ in 0..steps {
                        lightbox.next();
                    }
                    for _ in 0..steps {
                        lightbox.prev();
                    }
                    assert_eq!(lightbox.state().current_index, start);
                }
            }
        }
    }

    #[test]
    fn len_steps_forward_returns_to_start() {
        for len in 1..=6 {
            let (mut lightbox, _scroll) = open_lightbox(len, len / 2);
            for _ in 0..len {
                lightbox.next();
            }
            assert_eq!(lightbox.state().current_index, len / 2);
        }
    }

    #[test]
    fn keys_only_act_while_open() {
        let (mut lightbox, scroll) = open_lightbox(4, 0);
        assert!(lightbox.handle_key(Key::from_name("ArrowRight")));
        assert_eq!(lightbox.state().current_index, 1);
        assert!(lightbox.handle_key(Key::ArrowLeft));
        assert!(lightbox.handle_key(Key::ArrowLeft));
        assert_eq!(lightbox.state().current_index, 3);
        assert!(!lightbox.handle_key(Key::from_name("Enter")));

        assert!(lightbox.handle_key(Key::Escape));
        assert!(!lightbox.is_open());
        assert!(!scroll.is_suspended());

        assert!(!lightbox.handle_key(Key::ArrowRight));
        assert_eq!(lightbox.state().current_index, 3);
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let (mut lightbox, _scroll) = open_lightbox(2, 0);
        lightbox.click(ClickTarget::Content);
        assert!(lightbox.is_open());
        lightbox.click(ClickTarget::Backdrop);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn dropping_an_open_lightbox_releases_scroll() {
        let (lightbox, scroll) = open_lightbox(2, 0);
        assert!(scroll.is_suspended());
        drop(lightbox);
        assert!(!scroll.is_suspended());
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let (lightbox, _scroll) = open_lightbox(3, 10);
        assert_eq!(lightbox.state().current_index, 2);
    }
}
