//! Base page trait and structures

use crate::error::HostError;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Stable identity of a single page instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Create a fresh instance id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared-ownership handle to an activated page.
///
/// The page lives as long as its longest holder; pages never hold a
/// reference back to their factory, so no cycles arise.
pub type PageHandle = Arc<dyn Page>;

/// Trait for all pages.
///
/// This is the capability set the hosting runtime requires of an
/// addressable UI surface: a type name, a stable per-instance identity,
/// and a slot the renderer can attach a content tree to. Conformance is
/// checked at compile time; a constructed page satisfies the whole set
/// before any caller sees it.
pub trait Page: Send + Sync {
    /// Type name this page was registered under
    fn type_name(&self) -> &str;

    /// Stable identity of this instance
    fn id(&self) -> PageId;

    /// The slot the external renderer attaches its content tree to
    fn content_slot(&self) -> &ContentSlot;
}

impl fmt::Debug for dyn Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("type_name", &self.type_name())
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}

/// Opaque content tree supplied by the external rendering subsystem.
///
/// The library never inspects the payload; it only carries it to the page.
pub struct ContentTree(Box<dyn Any + Send + Sync>);

impl ContentTree {
    /// Wrap a renderer-supplied payload
    pub fn new(content: impl Any + Send + Sync) -> Self {
        Self(Box::new(content))
    }

    /// Borrow the payload back as its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for ContentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTree").finish_non_exhaustive()
    }
}

/// Attach-once cell holding the renderer's content tree.
///
/// Attachment is driven externally; the page itself never renders. A page
/// has no lifecycle states beyond constructed and destroyed, so the slot is
/// the only interior mutability a page carries.
#[derive(Debug, Default)]
pub struct ContentSlot {
    content: OnceLock<ContentTree>,
}

impl ContentSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            content: OnceLock::new(),
        }
    }

    /// Attach a content tree. Fails if one is already attached.
    pub fn attach(&self, tree: ContentTree) -> std::result::Result<(), HostError> {
        self.content
            .set(tree)
            .map_err(|_| HostError::ContentAlreadyAttached)
    }

    /// Whether a content tree has been attached
    pub fn is_attached(&self) -> bool {
        self.content.get().is_some()
    }

    /// Get the attached content tree, if any
    pub fn attached(&self) -> Option<&ContentTree> {
        self.content.get()
    }
}

/// Registration metadata for a page type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Type name the factory registers under
    pub type_name: String,
    /// Human-readable title for this page type
    pub title: String,
    /// Optional description of what this page displays
    pub description: Option<String>,
    /// Additional metadata for the page type
    pub metadata: HashMap<String, String>,
}

impl PageDescriptor {
    /// Create a new descriptor with the given type name and title
    pub fn new(type_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            title: title.into(),
            description: None,
            metadata: HashMap::new(),
        }
    }

    /// Set the description for this page type
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add metadata to this page type
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_uniqueness() {
        let a = PageId::new();
        let b = PageId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_content_slot_attaches_once() {
        let slot = ContentSlot::new();
        assert!(!slot.is_attached());

        slot.attach(ContentTree::new("first tree"))
            .expect("First attach should succeed");
        assert!(slot.is_attached());

        let err = slot
            .attach(ContentTree::new("second tree"))
            .expect_err("Second attach should fail");
        assert!(matches!(err, HostError::ContentAlreadyAttached));

        // The original attachment is untouched
        let tree = slot.attached().expect("Slot should hold a tree");
        assert_eq!(tree.downcast_ref::<&str>(), Some(&"first tree"));
    }

    #[test]
    fn test_content_tree_downcast() {
        let tree = ContentTree::new(vec![1u32, 2, 3]);
        assert_eq!(tree.downcast_ref::<Vec<u32>>(), Some(&vec![1u32, 2, 3]));
        assert!(tree.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = PageDescriptor::new("main_page", "Main Page")
            .with_description("Primary application surface")
            .with_metadata("shell", "native");

        assert_eq!(descriptor.type_name, "main_page");
        assert_eq!(descriptor.title, "Main Page");
        assert_eq!(
            descriptor.description.as_deref(),
            Some("Primary application surface")
        );
        assert_eq!(descriptor.metadata.get("shell").map(String::as_str), Some("native"));
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let descriptor =
            PageDescriptor::new("blank", "Blank Page").with_metadata("kind", "placeholder");

        let json = serde_json::to_string(&descriptor).expect("Descriptor should serialize");
        let parsed: PageDescriptor =
            serde_json::from_str(&json).expect("Descriptor should deserialize");

        assert_eq!(parsed.type_name, descriptor.type_name);
        assert_eq!(parsed.title, descriptor.title);
        assert_eq!(parsed.metadata, descriptor.metadata);
    }
}
