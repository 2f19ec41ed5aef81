//! The shared simulation state.
//!
//! Every callback in the runtime — engine hooks, manager hooks, phase
//! updaters — receives one `&mut Stage`. There are no module-level
//! singletons: several independent stages can coexist in one process, and
//! the fixed phase ordering of [`Schedule::tick`] is the only coordination
//! between the parties mutating it.
//!
//! [`Schedule::tick`]: crate::engines::update::Schedule::tick

use crate::components::actor::{ActorArena, ActorId, ActorKind};
use crate::engines::collision::CollisionPool;
use crate::engines::factory::{Manager, ManagerTable};
use crate::engines::render::Surface;
use crate::error::{StageError, StageResult};
use crate::resources::imagestore::{ImageLoader, ImageStore, ManifestImageLoader};
use crate::resources::input::InputDirections;
use crate::resources::stageconfig::StageConfig;

pub struct Stage {
    pub config: StageConfig,
    /// Frame counter; incremented at the top of every tick.
    pub frame: u64,
    pub actors: ActorArena,
    pub managers: ManagerTable,
    pub collisions: CollisionPool,
    pub images: ImageStore,
    pub input: InputDirections,
    /// Paint target installed by the render engine. `None` means actors are
    /// simulated but nothing is drawn.
    pub surface: Option<Box<dyn Surface>>,
}

impl Stage {
    /// Stage with the default manifest-backed image loader.
    pub fn new(config: StageConfig) -> Self {
        let loader = ManifestImageLoader::new(config.assets_dir.clone());
        Self::with_loader(config, Box::new(loader))
    }

    /// Stage with a host-supplied image loader.
    pub fn with_loader(config: StageConfig, loader: Box<dyn ImageLoader>) -> Self {
        Self {
            collisions: CollisionPool::with_capacity(config.collision_capacity),
            config,
            frame: 0,
            actors: ActorArena::new(),
            managers: ManagerTable::new(),
            images: ImageStore::new(loader),
            input: InputDirections::default(),
            surface: None,
        }
    }

    /// First free actor id; see [`ActorArena::allocate_id`].
    pub fn allocate_actor_id(&mut self) -> ActorId {
        self.actors.allocate_id()
    }

    /// Run `f` with the manager registered for `kind`.
    ///
    /// The manager is moved out of its slot for the duration of the call so
    /// the hook can mutate both itself and the stage; the slot is restored
    /// before this returns, on the error path too.
    pub fn with_manager<F>(&mut self, kind: ActorKind, f: F) -> StageResult<()>
    where
        F: FnOnce(&mut dyn Manager, &mut Stage) -> StageResult<()>,
    {
        let Some(mut manager) = self.managers.take(kind) else {
            return Err(StageError::UnknownKind(kind));
        };
        let result = f(manager.as_mut(), self);
        self.managers.restore(kind, manager);
        result
    }

    /// Default per-actor draw: paint the actor's image at its position plus
    /// image offset, truncated toward zero to pixel coordinates. An actor
    /// without an image, or a stage without a surface, paints nothing.
    pub fn draw_actor_image(&mut self, id: ActorId) {
        let Some(actor) = self.actors.get(id) else {
            return;
        };
        let Some(image) = actor.image.as_ref() else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let at = actor.pos + actor.image_offset;
        surface.draw_image(image, at.x as i32, at.y as i32);
    }
}
