//! UI Components for the lab report simplifier.
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//! - [`Disclaimer`] - Medical disclaimer banner
//!
//! # Feature Components
//! - [`UploadSection`] - Report selection (drag & drop or picker), upload and result

mod disclaimer;
mod footer;
mod hero;
mod upload;

pub use disclaimer::*;
pub use footer::*;
pub use hero::*;
pub use upload::*;
