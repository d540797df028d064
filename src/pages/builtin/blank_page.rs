//! Blank page

use crate::impl_page_factory;
use crate::pages::{ContentSlot, Page, PageId};

/// Trivial attachment target for hosts that only need a mount point.
pub struct BlankPage {
    id: PageId,
    slot: ContentSlot,
}

impl BlankPage {
    pub fn new() -> Self {
        Self {
            id: PageId::new(),
            slot: ContentSlot::new(),
        }
    }
}

impl Default for BlankPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for BlankPage {
    fn type_name(&self) -> &str {
        "blank"
    }

    fn id(&self) -> PageId {
        self.id
    }

    fn content_slot(&self) -> &ContentSlot {
        &self.slot
    }
}

impl_page_factory!(BlankPageFactory, BlankPage, "blank", "Blank Page");
