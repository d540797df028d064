//! Example demonstrating page activation and hosting with pageshell
//!
//! This example walks through the full flow a hosting runtime performs:
//! 1. Inspect the registry's page catalog
//! 2. Activate and mount a page through the shell
//! 3. Attach a renderer-supplied content tree
//! 4. Unmount the page

use pageshell::{ContentTree, HostShell, PageRegistry, ShellHandle};

fn main() -> anyhow::Result<()> {
    pageshell::init_tracing_with_debug(true);

    println!("=== pageshell {} demo ===\n", pageshell::VERSION);

    // 1. The registry comes pre-populated with the built-in pages
    let registry = PageRegistry::default();
    println!("1. Registered page types:");
    for name in registry.list_pages() {
        let info = registry.page_info(name).expect("registered page has info");
        println!("   - {} ({})", name, info.title);
    }

    // 2. Activate the main page through a shared shell handle
    let shell = ShellHandle::new(HostShell::new(registry));
    let page = shell.activate("main_page")?;
    println!("\n2. Activated '{}' with id {}", page.type_name(), page.id());

    // 3. The external renderer attaches its content tree
    shell.attach_content(page.id(), ContentTree::new("rendered visual tree"))?;
    for mounted in shell.mounted() {
        println!(
            "\n3. Mounted: {} (content attached: {})",
            mounted.type_name, mounted.content_attached
        );
    }

    // 4. Unmount; our handle keeps the page alive until it goes out of scope
    shell.unmount(page.id())?;
    println!("\n4. Unmounted; {} surfaces remain", shell.mounted().len());

    Ok(())
}
