//! Application configuration.
//!
//! The page talks to the summarizing service at a fixed address.

pub use labsimplify::{DEFAULT_API_URL as API_URL, PICKER_ACCEPT};

/// Application name, used in console logs.
pub const APP_NAME: &str = "Lab Report Simplifier";
