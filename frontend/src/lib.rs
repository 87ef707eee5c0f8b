//! CineSeek - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the CineSeek movie-discovery site. This crate
//! owns the page footer; routes and pages belong to the hosting app and are
//! only stubbed here so the footer has a layout to sit in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  <main> page slot (routes: / /movies /contact /privacy)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  ├── brand mark                                              │
//! │  ├── navigation (always rendered)                            │
//! │  ├── social icons (client-only, after mount)                 │
//! │  └── copyright                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Brand, copyright year and the footer link table
//! - [`types`] - Common types (LinkEntry, MountPhase, AppError, etc.)
//! - [`components`] - UI components (Footer)
//!
//! # Features
//!
//! - `csr` - client-side rendering via trunk (needed by the binary)
//! - `hydrate` - client half of server rendering; exports [`hydrate`]
//! - `ssr` - server rendering; the footer's mount effect never runs there
//!
//! None is on by default: enable exactly one per build.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Links
    LinkEntry, LinkKind,
    // Brand
    BrandMark,
    // Mount
    MountPhase,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Points
// =============================================================================

/// Panic hook, console logging and a sanity check of the link table.
///
/// Shared by the trunk binary and [`hydrate`].
pub fn init_client() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🎬 CineSeek - Starting Leptos App");

    // A bad row is a content bug, not a reason to blank the page.
    if let Err(e) = validate_links(FOOTER_LINKS) {
        log::error!("❌ Footer link table is invalid: {}", e);
    }
}

/// WASM entry point for server-rendered pages.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_client();
    mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <Page title="Home"/> }/>
                    <Route path="/movies" view=|| view! { <Page title="Movies"/> }/>
                    <Route path="/contact" view=|| view! { <Page title="Contact"/> }/>
                    <Route path="/privacy" view=|| view! { <Page title="Privacy Policy"/> }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Placeholder for pages owned by the hosting app.
#[component]
fn Page(title: &'static str) -> impl IntoView {
    view! {
        <div class="container">
            <h1>{title}</h1>
        </div>
    }
}
