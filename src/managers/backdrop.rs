//! Backdrop manager: wipes the surface before the actor draw pass.

use crate::components::actor::ActorKind;
use crate::engines::factory::Manager;
use crate::engines::render::Surface;
use crate::error::StageResult;
use crate::stage::Stage;

/// Actor-less manager whose only job is clearing the paint target each
/// frame in the before-actors hook.
pub struct BackdropManager {
    kind: ActorKind,
}

impl BackdropManager {
    pub fn new(kind: ActorKind) -> Self {
        Self { kind }
    }
}

impl Manager for BackdropManager {
    fn id(&self) -> ActorKind {
        self.kind
    }

    fn before_actors(&mut self, stage: &mut Stage) -> StageResult<()> {
        if let Some(surface) = stage.surface.as_mut() {
            surface.clear();
        }
        Ok(())
    }
}
