//! Page system and built-in pages
//!
//! A page is an addressable UI surface: the hosting runtime activates it by
//! type name through the registry and hands it to the shell, which keeps it
//! mounted until the external renderer attaches content.

pub mod base;
pub mod builtin;
pub mod registry;

pub use base::{ContentSlot, ContentTree, Page, PageDescriptor, PageHandle, PageId};
pub use registry::{PageFactory, PageRegistry};
