//! Page registry for name-based activation
//!
//! The registry is the activation boundary: it maps page type names to
//! factories, is populated when the hosting process starts, and is
//! read-only afterwards, so concurrent lookups need no extra locking.

use crate::error::ActivationError;
use crate::pages::{PageDescriptor, PageHandle};
use std::collections::HashMap;

/// Factory trait for creating pages
pub trait PageFactory: Send + Sync {
    /// Create a new, fully-formed instance of the page.
    ///
    /// Every call yields an independent instance; factories share no
    /// mutable state between the instances they produce. On failure the
    /// error is propagated unchanged, never a partial instance.
    fn create(&self) -> Result<PageHandle, ActivationError>;

    /// Get the type name this factory registers under
    fn page_type(&self) -> &str;

    /// Get the registration metadata for the page type
    fn descriptor(&self) -> PageDescriptor;
}

/// Registry mapping page type names to factories
pub struct PageRegistry {
    factories: HashMap<String, Box<dyn PageFactory>>,
}

impl PageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a page factory.
    ///
    /// A later registration under the same type name replaces the earlier
    /// one.
    pub fn register_factory(&mut self, factory: Box<dyn PageFactory>) {
        tracing::debug!("Registering page factory for '{}'", factory.page_type());
        self.factories
            .insert(factory.page_type().to_string(), factory);
    }

    /// Activate a page by type name.
    ///
    /// Resolves the factory registered under `name` and asks it for a new
    /// instance. Unknown names fail with [`ActivationError::NotRegistered`];
    /// construction failures are passed through from the factory.
    pub fn activate(&self, name: &str) -> Result<PageHandle, ActivationError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ActivationError::NotRegistered {
                name: name.to_string(),
            })?;

        let page = factory.create()?;
        tracing::debug!("Activated page '{}' (id: {})", name, page.id());
        Ok(page)
    }

    /// Check whether a page type is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// List all registered page type names
    pub fn list_pages(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }

    /// Get registration metadata for a page type
    pub fn page_info(&self, name: &str) -> Option<PageDescriptor> {
        self.factories.get(name).map(|factory| factory.descriptor())
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // Register built-in pages
        registry.register_factory(Box::new(crate::pages::builtin::MainPageFactory));
        registry.register_factory(Box::new(crate::pages::builtin::BlankPageFactory));

        registry
    }
}

/// Macro to help implement page factories for pages with an infallible
/// no-argument constructor
#[macro_export]
macro_rules! impl_page_factory {
    ($factory:ident, $page:ident, $name:expr, $title:expr) => {
        pub struct $factory;

        impl $crate::pages::PageFactory for $factory {
            fn create(
                &self,
            ) -> std::result::Result<$crate::pages::PageHandle, $crate::error::ActivationError>
            {
                Ok(std::sync::Arc::new($page::new()))
            }

            fn page_type(&self) -> &str {
                $name
            }

            fn descriptor(&self) -> $crate::pages::PageDescriptor {
                $crate::pages::PageDescriptor::new($name, $title)
            }
        }
    };
}
