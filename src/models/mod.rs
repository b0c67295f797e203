//! Data models for the Belvo API.
//!
//! Responses are returned as `serde_json::Value`; the models here cover the
//! request side:
//!
//! - [`environment`] - Named environments and their host URLs
//! - [`enums`] - Enumerations sent in request bodies
//! - [`options`] - Per-operation optional fields

pub mod environment;
pub mod enums;
pub mod options;

// Re-export commonly used types
pub use environment::*;
pub use enums::*;
pub use options::*;
