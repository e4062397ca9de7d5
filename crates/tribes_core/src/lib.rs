//! # Tribes Core
//!
//! The simulation engine for a multi-tribe variant of Conway's Game of Life
//! on a bounded grid.
//!
//! This crate contains:
//! - Spatial seeding of the initial population (sampling + k-means)
//! - The per-cell birth/survival rule with probabilistic tie-breaking
//! - A double-buffered board that computes the next generation in the
//!   background while the current one is displayed
//! - Board hashing, cycle detection and terminal-state classification
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use tribes_core::board::Board;
//! use tribes_core::config::BoardConfig;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let config = BoardConfig {
//!     rows: 10,
//!     cols: 20,
//!     delay_ms: 0,
//!     seed: Some(42),
//!     ..BoardConfig::default()
//! };
//! let mut board = Board::create(config).unwrap();
//! let state = board.next_state(|grid, _generation| print!("{grid}")).await.unwrap();
//! println!("{state:?}");
//! # });
//! ```

/// Double-buffered board and generation driver
pub mod board;
/// Cycle memo and terminal-state classification
pub mod classify;
/// Candidate sampling and k-means clustering for the initial population
pub mod clustering;
/// Configuration management for simulation parameters
pub mod config;
/// Engine error types
pub mod error;
/// Rolling board hash used for cycle detection
pub mod hashing;
/// Generation metrics and logging setup
pub mod metrics;
/// The multi-tribe transition rule
pub mod rules;
/// Serializable board state
pub mod snapshot;

pub use board::Board;
pub use classify::CycleMemo;
pub use config::{AppConfig, BoardConfig};
pub use error::{EngineError, Result};
pub use hashing::TribeHash;
pub use metrics::{init_logging, Metrics};
pub use snapshot::BoardSnapshot;
