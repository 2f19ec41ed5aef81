//! Stagecore library.
//!
//! A minimal actor/manager runtime for frame-based 2D simulation: pluggable
//! engines around one shared mutable [`Stage`](stage::Stage), a phase-ordered
//! update scheduler, brute-force masked AABB collision detection, and a
//! painter's-algorithm renderer over an opaque paint target.
//!
//! - [`app`] – app root, the [`Engine`](app::Engine) contract, frame driver
//! - [`components`] – actor data, the slot arena, hitboxes
//! - [`engines`] – factory, update scheduler, collision detector, renderer
//! - [`managers`] – demo scene managers (player, walls, backdrop)
//! - [`resources`] – image store/loader, input mapping, INI configuration
//! - [`geom`] – rectangle math
//! - [`error`] – crate-wide error type

pub mod app;
pub mod components;
pub mod engines;
pub mod error;
pub mod geom;
pub mod managers;
pub mod resources;
pub mod stage;
