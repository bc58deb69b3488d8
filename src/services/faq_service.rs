use crate::models::{faq_entries, FaqEntry};

/// Single-open accordion: opening one entry closes whichever was open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn for_faq() -> Self {
        Self::new(faq_entries().len())
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.open = if self.is_open(index) { None } else { Some(index) };
        }
        self.open
    }
}

pub fn list_faq() -> Vec<FaqEntry> {
    faq_entries().to_vec()
}
