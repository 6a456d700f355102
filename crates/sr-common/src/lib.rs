//! sortreplay common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the sortreplay crates:
//! - The unified error type and its stable error codes
//! - Session identifiers for playback controllers
//! - Output format selection for the CLI
//! - Export schema versioning

pub mod error;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use id::SessionId;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
