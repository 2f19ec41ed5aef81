//! Demo scene managers used by the example binary and integration tests.
//!
//! - [`backdrop`] – clears the surface before actors draw
//! - [`player`] – input-driven sprite with depth sorting and contact logging
//! - [`wall`] – grid tiles picking image and z-order from their position

pub mod backdrop;
pub mod player;
pub mod wall;
