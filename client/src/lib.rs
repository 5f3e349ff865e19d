//! # Labsimplify - lab report upload flow
//!
//! Lets a user pick a lab report (PDF or image), posts it to the
//! summarizing service and presents the plain-text summary it returns.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ FileSelector │────▶│  UploadFlow  │────▶│  presenter   │
//! │ (media type) │     │ (controller) │     │   (View)     │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │ Transport
//!                             ▼
//!                    POST /api/simplify (multipart "file")
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use labsimplify::{present, FileCandidate, HttpTransport, UploadFlow, DEFAULT_API_URL};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut flow = UploadFlow::new();
//!     let bytes = std::fs::read("report.pdf").unwrap();
//!     flow.pick_file(FileCandidate::new("report.pdf", "application/pdf", bytes)).unwrap();
//!
//!     let state = flow.submit(&HttpTransport::new(DEFAULT_API_URL)).await;
//!     println!("{:?}", present(state));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Files, upload state, service response
//! - [`selector`] - Media type filtering for drops and picks
//! - [`controller`] - Upload lifecycle
//! - [`transport`] - Network seam (`reqwest` on native builds)
//! - [`presenter`] - State to view mapping
//! - [`config`] - Endpoint and user-facing constants

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Flow
pub mod controller;
pub mod presenter;
pub mod selector;
pub mod transport;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ConfigError, RejectedFile, SelectResult, TransportError, UploadError, UploadResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    is_allowed_media_type,
    FileCandidate,
    SelectedFile,
    SimplifyResponse,
    UploadEvent,
    UploadState,
    ALLOWED_MEDIA_TYPES,
};

// =============================================================================
// Re-exports - Flow
// =============================================================================

pub use controller::{interpret, perform, UploadFlow, UploadTicket};
pub use presenter::{present, render_plain, submit_control, SubmitControl, View};
pub use selector::{media_type_for_path, try_select, FileSelector};
pub use transport::{HttpReply, Transport};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{DEFAULT_API_URL, FILE_FIELD, PICKER_ACCEPT};

#[cfg(feature = "native")]
pub use config::ClientConfig;

#[cfg(feature = "native")]
pub use transport::HttpTransport;
