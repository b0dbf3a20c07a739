//! Ad Display Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading ad images, assigning display
//! schedules and managing the images already held by the remote store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (Upload / Manage navigation)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Route "/"        UploadPage                                 │
//! │  ├── Hero                                                    │
//! │  ├── Upload zone + pending list                              │
//! │  ├── SchedulePicker + divide-equally controls                │
//! │  └── Submit (sequential fail-fast batch)                     │
//! │  Route "/manage"  ManagePage                                 │
//! │  └── Gallery table (select, delete, bulk delete)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time configuration
//! - [`types`] - Common types (StatusMessage, etc.)
//! - [`components`] - UI components (Header, Upload, Manage, etc.)
//! - [`services`] - Remote API communication and file intake

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{StatusKind, StatusMessage};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Ad Display Portal - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/manage" view=ManagePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
