//! # pageshell
//!
//! Name-based page activation and hosting for native application shells.
//!
//! A hosting runtime resolves a registered type name to a [`PageFactory`],
//! the factory constructs a fully-formed [`Page`], and a [`HostShell`] keeps
//! the instance mounted so an external rendering subsystem can attach a
//! content tree to it. The library owns the activation boundary only:
//! rendering, input handling and application startup live elsewhere.

// Core modules
pub mod error;
pub mod pages;
pub mod shell;

// Re-export commonly used types
pub use error::{ActivationError, Error, HostError, Result};
pub use pages::{
    ContentSlot, ContentTree, Page, PageDescriptor, PageFactory, PageHandle, PageId, PageRegistry,
};
pub use shell::{HostShell, MountedPage, ShellHandle};

/// Current version of the pageshell library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
