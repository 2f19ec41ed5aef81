//! The pluggable engines wired together by the app root.
//!
//! - [`factory`] – actor/manager registry and lifecycle dispatch
//! - [`update`] – phase-ordered per-frame scheduler
//! - [`collision`] – pairwise masked AABB detection into a pooled record list
//! - [`render`] – z-ordered draw pipeline over an opaque paint target

pub mod collision;
pub mod factory;
pub mod render;
pub mod update;
