//! Per-actor data types.
//!
//! - [`actor`] – actor fields and the slot arena that owns every actor
//! - [`hitbox`] – local-space collision geometry with channel masks

pub mod actor;
pub mod hitbox;
