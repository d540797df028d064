//! Main page — the primary surface the application shell registers
//!
//! This is the page a single-surface host activates at startup and hands
//! to the renderer for content attachment.

use crate::impl_page_factory;
use crate::pages::{ContentSlot, Page, PageId};

/// The primary page of a hosting application.
///
/// Construction is atomic: the instance carries its identity and an empty
/// content slot from the moment it exists, and performs no rendering or
/// I/O of its own.
pub struct MainPage {
    id: PageId,
    slot: ContentSlot,
}

impl MainPage {
    pub fn new() -> Self {
        Self {
            id: PageId::new(),
            slot: ContentSlot::new(),
        }
    }
}

impl Default for MainPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MainPage {
    fn type_name(&self) -> &str {
        "main_page"
    }

    fn id(&self) -> PageId {
        self.id
    }

    fn content_slot(&self) -> &ContentSlot {
        &self.slot
    }
}

impl_page_factory!(MainPageFactory, MainPage, "main_page", "Main Page");
