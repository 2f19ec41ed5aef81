//! Long-lived shared resources owned by the stage.
//!
//! Overview
//! - `imagestore` – loaded image handles keyed by name, plus the loader trait
//! - `input` – boolean direction flags mapped to a normalized 8-way vector
//! - `stageconfig` – screen size, pool capacity, and asset paths from INI

pub mod imagestore;
pub mod input;
pub mod stageconfig;
