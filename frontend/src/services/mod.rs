//! External communication.
//!
//! - [`upload`] - report upload to the summarizing service

pub mod upload;

pub use upload::*;
