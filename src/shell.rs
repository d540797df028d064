//! Host shell that owns activated pages
//!
//! The shell sits on the owner side of the activation boundary: it resolves
//! page type names through the registry, keeps the returned handles mounted,
//! and carries renderer-supplied content trees to the pages it holds.

use crate::error::{HostError, Result};
use crate::pages::{ContentTree, PageHandle, PageId, PageRegistry};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Summary of one mounted surface
#[derive(Debug, Clone)]
pub struct MountedPage {
    /// Instance id of the mounted page
    pub id: PageId,
    /// Type name the page was activated under
    pub type_name: String,
    /// Whether the renderer has attached a content tree yet
    pub content_attached: bool,
}

/// Host shell owning the registry and the currently mounted pages.
///
/// Pages stay mounted until explicitly unmounted; the shell's reference is
/// one holder among possibly several, so unmounting releases the shell's
/// share without tearing down handles other callers still hold.
pub struct HostShell {
    registry: PageRegistry,
    mounted: HashMap<PageId, PageHandle>,
}

impl HostShell {
    /// Create a shell over the given registry
    pub fn new(registry: PageRegistry) -> Self {
        Self {
            registry,
            mounted: HashMap::new(),
        }
    }

    /// Get the shell's registry
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Activate a page by type name and mount it.
    ///
    /// The returned handle is the caller's own reference; the shell keeps
    /// another until [`unmount`](Self::unmount).
    pub fn activate(&mut self, name: &str) -> Result<PageHandle> {
        let page = self.registry.activate(name)?;
        self.mount(Arc::clone(&page))?;
        Ok(page)
    }

    /// Mount an already-activated page
    pub fn mount(&mut self, page: PageHandle) -> Result<()> {
        let id = page.id();
        if self.mounted.contains_key(&id) {
            return Err(HostError::AlreadyMounted { id: id.to_string() }.into());
        }

        tracing::info!("Mounted page '{}' (id: {})", page.type_name(), id);
        self.mounted.insert(id, page);
        Ok(())
    }

    /// Unmount a page, releasing the shell's reference to it
    pub fn unmount(&mut self, id: PageId) -> Result<PageHandle> {
        let page = self
            .mounted
            .remove(&id)
            .ok_or_else(|| HostError::NotMounted { id: id.to_string() })?;

        tracing::info!("Unmounted page '{}' (id: {})", page.type_name(), id);
        Ok(page)
    }

    /// Attach a renderer-supplied content tree to a mounted page
    pub fn attach_content(&self, id: PageId, tree: ContentTree) -> Result<()> {
        let page = self
            .mounted
            .get(&id)
            .ok_or_else(|| HostError::NotMounted { id: id.to_string() })?;

        page.content_slot().attach(tree)?;
        tracing::debug!("Content attached to page '{}' (id: {})", page.type_name(), id);
        Ok(())
    }

    /// Get a mounted page by instance id
    pub fn get(&self, id: PageId) -> Option<PageHandle> {
        self.mounted.get(&id).cloned()
    }

    /// List the currently mounted surfaces
    pub fn mounted(&self) -> Vec<MountedPage> {
        self.mounted
            .values()
            .map(|page| MountedPage {
                id: page.id(),
                type_name: page.type_name().to_string(),
                content_attached: page.content_slot().is_attached(),
            })
            .collect()
    }
}

/// A shareable handle to control the shell from several call sites
#[derive(Clone)]
pub struct ShellHandle(Arc<Mutex<HostShell>>);

impl ShellHandle {
    /// Create a new shell handle
    pub fn new(shell: HostShell) -> Self {
        Self(Arc::new(Mutex::new(shell)))
    }

    /// Activate a page by type name and mount it
    pub fn activate(&self, name: &str) -> Result<PageHandle> {
        let mut guard = self.0.lock().unwrap();
        guard.activate(name)
    }

    /// Unmount a page by instance id
    pub fn unmount(&self, id: PageId) -> Result<PageHandle> {
        let mut guard = self.0.lock().unwrap();
        guard.unmount(id)
    }

    /// Attach a content tree to a mounted page
    pub fn attach_content(&self, id: PageId, tree: ContentTree) -> Result<()> {
        let guard = self.0.lock().unwrap();
        guard.attach_content(id, tree)
    }

    /// List the currently mounted surfaces
    pub fn mounted(&self) -> Vec<MountedPage> {
        let guard = self.0.lock().unwrap();
        guard.mounted()
    }
}
