//! Terminal front end for the multi-tribe Game of Life.
//!
//! The engine lives in `tribes_core`; this crate adds the game loop,
//! keyboard control, sessions and rendering.

pub mod app;
pub mod model;
pub mod ui;
