//! Crate-wide error type.
//!
//! Keep this small and stable: configuration mistakes (unknown actor kinds,
//! duplicate registrations) are unrecoverable and surface immediately, while
//! per-frame failures carry the phase they happened in so the host can tell
//! which subsystem aborted the frame.

use std::path::PathBuf;

use thiserror::Error;

use crate::components::actor::{ActorId, ActorKind};
use crate::engines::update::Phase;

pub type StageResult<T> = Result<T, StageError>;

#[derive(Debug, Error)]
pub enum StageError {
    /// An actor referenced a kind no manager was registered for.
    #[error("no manager registered for actor kind {0}")]
    UnknownKind(ActorKind),

    /// A manager was registered twice for the same kind.
    #[error("manager for actor kind {0} is already registered")]
    DuplicateManager(ActorKind),

    /// Two engines in the app list share an id.
    #[error("engine '{0}' is already registered")]
    DuplicateEngine(&'static str),

    /// An operation referenced an actor slot that was never created.
    #[error("actor {0} does not exist")]
    MissingActor(ActorId),

    /// The per-frame collision record pool ran out of slots. The frame is
    /// aborted; records written so far stay valid.
    #[error("collision pool exhausted (capacity {capacity})")]
    CollisionPoolExhausted { capacity: usize },

    /// An image name was not present in the asset manifest.
    #[error("image '{0}' not found in the asset manifest")]
    ImageMissing(String),

    #[error("failed to read asset manifest {path:?}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse asset manifest {path:?}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An updater failed mid-frame; the remaining phases were skipped.
    #[error("updater failed in phase {phase:?}")]
    PhaseFailed {
        phase: Phase,
        #[source]
        source: Box<StageError>,
    },
}
