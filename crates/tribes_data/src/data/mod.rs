//! Core data structures for the tribes simulation.

pub mod geometry;
pub mod grid;
pub mod state;
pub mod tribe;

pub use geometry::{Pair, Point};
pub use grid::Grid;
pub use state::SimulationState;
pub use tribe::Tribe;
