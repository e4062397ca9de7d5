//! # Tribes Data
//!
//! Plain, serializable data shared by the engine, persistence and UI layers.
//! Nothing in here knows how a generation is computed; see `tribes_core`.

pub mod data;

pub use data::*;
