//! Actor/manager registry and lifecycle dispatch.
//!
//! A [`Manager`] is the singleton for one actor kind: it owns the kind's
//! shared resources (loaded images, side tables) and implements whichever
//! lifecycle and phase hooks the kind needs. Hooks default to no-ops, so a
//! manager only writes the ones it cares about — there are no presence
//! checks anywhere in the dispatch paths.
//!
//! The invariant the rest of the runtime leans on: a kind's manager is
//! registered before the first actor of that kind is created.
//! [`create_actor`] enforces it and fails fast instead of leaving a
//! half-initialized actor behind.

use crate::components::actor::{ActorData, ActorId, ActorKind};
use crate::error::{StageError, StageResult};
use crate::stage::Stage;

use crate::app::Engine;
use crate::engines::update::Schedule;

/// Per-kind singleton with optional lifecycle and render hooks.
///
/// `&mut self` in every hook is the manager's own data record; per-actor
/// state the core does not model belongs in side tables keyed by [`ActorId`].
pub trait Manager {
    /// The actor kind this manager serves; its slot in the manager table.
    fn id(&self) -> ActorKind;

    /// One-shot resource acquisition, run during [`register_manager`].
    /// Acquisition is blocking and fallible; hooks run strictly in
    /// registration order.
    fn register(&mut self, _stage: &mut Stage) -> StageResult<()> {
        Ok(())
    }

    /// Invoked once by the factory engine's start pass.
    fn start(&mut self, _stage: &mut Stage) -> StageResult<()> {
        Ok(())
    }

    /// Invoked by [`App::shutdown`](crate::app::App::shutdown).
    fn destroy(&mut self, _stage: &mut Stage) {}

    /// Invoked right after an actor of this kind is placed in the arena.
    fn create_actor(&mut self, _stage: &mut Stage, _id: ActorId) -> StageResult<()> {
        Ok(())
    }

    /// Invoked for every active actor by the factory engine's start pass.
    fn start_actor(&mut self, _stage: &mut Stage, _id: ActorId) -> StageResult<()> {
        Ok(())
    }

    /// Invoked for every active actor during the actor-update phase.
    fn update_actor(&mut self, _stage: &mut Stage, _id: ActorId) -> StageResult<()> {
        Ok(())
    }

    /// Invoked when an actor of this kind is destroyed.
    fn destroy_actor(&mut self, _stage: &mut Stage, _id: ActorId) {}

    /// Render hook before the per-actor draw pass (backgrounds).
    fn before_actors(&mut self, _stage: &mut Stage) -> StageResult<()> {
        Ok(())
    }

    /// Per-actor draw. The default paints the actor's image at
    /// `pos + image_offset`; override for custom painting.
    fn draw_actor(&mut self, stage: &mut Stage, id: ActorId) -> StageResult<()> {
        stage.draw_actor_image(id);
        Ok(())
    }

    /// Render hook after the per-actor draw pass (overlays).
    fn after_actors(&mut self, _stage: &mut Stage) -> StageResult<()> {
        Ok(())
    }
}

/// Kind-indexed manager storage.
#[derive(Default)]
pub struct ManagerTable {
    slots: Vec<Option<Box<dyn Manager>>>,
}

impl ManagerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: ActorKind) -> bool {
        self.slots.get(kind).is_some_and(|slot| slot.is_some())
    }

    /// Registered kinds in ascending order.
    pub fn kinds(&self) -> Vec<ActorKind> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(kind, slot)| slot.as_ref().map(|_| kind))
            .collect()
    }

    fn insert(&mut self, kind: ActorKind, manager: Box<dyn Manager>) -> StageResult<()> {
        if kind >= self.slots.len() {
            self.slots.resize_with(kind + 1, || None);
        }
        if self.slots[kind].is_some() {
            return Err(StageError::DuplicateManager(kind));
        }
        self.slots[kind] = Some(manager);
        Ok(())
    }

    /// Move the manager out of its slot for dispatch; pair with [`restore`].
    ///
    /// [`restore`]: ManagerTable::restore
    pub fn take(&mut self, kind: ActorKind) -> Option<Box<dyn Manager>> {
        self.slots.get_mut(kind)?.take()
    }

    pub fn restore(&mut self, kind: ActorKind, manager: Box<dyn Manager>) {
        if kind >= self.slots.len() {
            self.slots.resize_with(kind + 1, || None);
        }
        self.slots[kind] = Some(manager);
    }
}

/// Store `manager` in the table at its kind, then run its register hook.
///
/// Must be called for every kind before any actor of that kind exists.
pub fn register_manager(stage: &mut Stage, manager: Box<dyn Manager>) -> StageResult<()> {
    let kind = manager.id();
    stage.managers.insert(kind, manager)?;
    log::debug!("manager registered for kind {kind}");
    stage.with_manager(kind, |manager, stage| manager.register(stage))
}

/// Activate `actor`, place it in the arena at its id, and run the manager's
/// create hook.
///
/// Fails with [`StageError::UnknownKind`] — without touching the arena — if
/// no manager is registered for the actor's kind.
pub fn create_actor(stage: &mut Stage, mut actor: ActorData) -> StageResult<ActorId> {
    let kind = actor.kind;
    if !stage.managers.contains(kind) {
        return Err(StageError::UnknownKind(kind));
    }
    actor.active = true;
    let id = actor.id;
    stage.actors.insert(actor);
    stage.with_manager(kind, |manager, stage| manager.create_actor(stage, id))?;
    Ok(id)
}

/// Deactivate the actor and run the manager's destroy hook.
///
/// The slot is not removed: it stays as a logically-dead entry until a new
/// actor is created at the same id.
pub fn destroy_actor(stage: &mut Stage, id: ActorId) -> StageResult<()> {
    let Some(actor) = stage.actors.get_mut(id) else {
        return Err(StageError::MissingActor(id));
    };
    actor.active = false;
    let kind = actor.kind;
    stage.with_manager(kind, |manager, stage| {
        manager.destroy_actor(stage, id);
        Ok(())
    })
}

/// Engine wiring the factory's start pass into the app lifecycle.
#[derive(Default)]
pub struct FactoryEngine;

impl FactoryEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for FactoryEngine {
    fn id(&self) -> &'static str {
        "factory"
    }

    fn register(&mut self, _stage: &mut Stage, _schedule: &mut Schedule) -> StageResult<()> {
        // Arena and manager table are part of the stage itself.
        Ok(())
    }

    /// Start pass: every manager's start hook once, ascending kind order,
    /// then every active actor's start hook once, ascending id order.
    fn start(&mut self, stage: &mut Stage) -> StageResult<()> {
        for kind in stage.managers.kinds() {
            stage.with_manager(kind, |manager, stage| manager.start(stage))?;
        }
        for id in 0..stage.actors.slot_count() {
            let Some(actor) = stage.actors.get(id) else {
                continue;
            };
            if !actor.active {
                continue;
            }
            let kind = actor.kind;
            stage.with_manager(kind, |manager, stage| manager.start_actor(stage, id))?;
        }
        Ok(())
    }
}
