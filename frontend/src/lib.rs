//! Lab Report Simplifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a lab report and reading the
//! plain-language summary returned by the summarizing service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, tagline)                                  │
//! │  ├── UploadSection (selector / summary / error)             │
//! │  └── Disclaimer                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`components`] - UI components
//! - [`services`] - Upload to the summarizing service
//! - [`config`] - Endpoint and picker filter

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
            <Disclaimer/>
        </div>

        <Footer/>
    }
}
