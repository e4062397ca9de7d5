//! # Tribes IO
//!
//! Persistence layer for simulation sessions.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Validated JSON serialization helpers
//! - A directory-backed store of saved sessions

/// Error types and result aliases for I/O operations
pub mod error;
/// Validated serialization helpers for JSON
pub mod serialization;
/// Saved sessions on disk, one JSON file per session
pub mod session_store;

pub use error::{IoError, Result};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
pub use session_store::{read_record, write_record, SessionRecord, SessionStore, SessionSummary};
