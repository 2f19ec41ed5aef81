//! Input-driven player manager.

use crate::components::actor::{ActorId, ActorKind};
use crate::engines::factory::Manager;
use crate::error::StageResult;
use crate::resources::imagestore::ImageHandle;
use crate::stage::Stage;

const PLAYER_IMAGE: &str = "dirge-0001";

/// Manager for the player kind: one shared sprite, movement from the input
/// direction, and depth sorting by feet position.
pub struct PlayerManager {
    kind: ActorKind,
    image: Option<ImageHandle>,
}

impl PlayerManager {
    pub fn new(kind: ActorKind) -> Self {
        Self { kind, image: None }
    }
}

impl Manager for PlayerManager {
    fn id(&self) -> ActorKind {
        self.kind
    }

    fn register(&mut self, stage: &mut Stage) -> StageResult<()> {
        self.image = Some(stage.images.load(PLAYER_IMAGE)?);
        Ok(())
    }

    fn create_actor(&mut self, stage: &mut Stage, id: ActorId) -> StageResult<()> {
        if let Some(actor) = stage.actors.get_mut(id) {
            actor.image = self.image.clone();
        }
        Ok(())
    }

    fn update_actor(&mut self, stage: &mut Stage, id: ActorId) -> StageResult<()> {
        let step = stage.input.direction();
        let Some(actor) = stage.actors.get_mut(id) else {
            return Ok(());
        };
        // Sprite is two tiles tall; anchor it on the feet.
        actor.image_offset.y = -16.0;
        actor.pos += step;
        actor.z_index = -(actor.pos.y as i32);

        for &index in &actor.contacts {
            if let Some(record) = stage.collisions.get(index) {
                log::debug!(
                    "player overlap on channels {:#b} at {:?}",
                    record.channels,
                    record.overlap
                );
            }
        }
        Ok(())
    }
}
