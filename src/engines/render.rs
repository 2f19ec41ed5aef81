//! Z-ordered draw pipeline.
//!
//! Three updaters registered back-to-back in [`Phase::Render`]:
//! before-actors (manager backgrounds), the per-actor draw pass, and
//! after-actors (manager overlays). The draw pass sorts a scratch copy of
//! the actor slots descending by z-index and paints in that order — a
//! painter's algorithm where the *lowest* z-index actor is painted last and
//! ends up visually on top. The sort is the standard library's stable sort,
//! so actors with equal z-index paint in ascending slot order, every frame.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::Engine;
use crate::components::actor::ActorId;
use crate::error::StageResult;
use crate::resources::imagestore::ImageHandle;
use crate::stage::Stage;

use super::update::{Phase, Schedule};

/// Opaque 2D paint target, acquired once by the host at setup.
pub trait Surface {
    /// Erase the whole target.
    fn clear(&mut self);
    /// Blit `image` with its top-left corner at pixel `(x, y)`.
    fn draw_image(&mut self, image: &ImageHandle, x: i32, y: i32);
}

/// Surface that discards everything; for headless simulation.
#[derive(Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn draw_image(&mut self, _image: &ImageHandle, _x: i32, _y: i32) {}
}

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Image { name: String, x: i32, y: i32 },
}

/// Surface that records every paint call; the ops list is shared so a test
/// can keep reading it after the surface moves into the stage.
#[derive(Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded ops.
    pub fn ops(&self) -> Rc<RefCell<Vec<DrawOp>>> {
        Rc::clone(&self.ops)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn draw_image(&mut self, image: &ImageHandle, x: i32, y: i32) {
        self.ops.borrow_mut().push(DrawOp::Image {
            name: image.name.clone(),
            x,
            y,
        });
    }
}

/// Run every manager's before-actors hook, ascending kind order.
pub fn render_before_actors(stage: &mut Stage) -> StageResult<()> {
    for kind in stage.managers.kinds() {
        stage.with_manager(kind, |manager, stage| manager.before_actors(stage))?;
    }
    Ok(())
}

/// Run every manager's after-actors hook, ascending kind order.
pub fn render_after_actors(stage: &mut Stage) -> StageResult<()> {
    for kind in stage.managers.kinds() {
        stage.with_manager(kind, |manager, stage| manager.after_actors(stage))?;
    }
    Ok(())
}

/// The per-actor draw pass.
///
/// Copies every occupied slot (inactive ones included) into `scratch`, sorts
/// descending by z-index, then paints each actor through its manager's draw
/// hook. Inactive and manager-less actors are skipped at paint time, not
/// during the sort.
pub fn draw_actors(stage: &mut Stage, scratch: &mut Vec<(i32, ActorId)>) -> StageResult<()> {
    scratch.clear();
    for actor in stage.actors.iter() {
        scratch.push((actor.z_index, actor.id));
    }
    // Stable: equal z keeps ascending-id order.
    scratch.sort_by(|a, b| b.0.cmp(&a.0));

    for &(_z, id) in scratch.iter() {
        let Some(actor) = stage.actors.get(id) else {
            continue;
        };
        if !actor.active {
            continue;
        }
        let kind = actor.kind;
        if !stage.managers.contains(kind) {
            continue;
        }
        stage.with_manager(kind, |manager, stage| manager.draw_actor(stage, id))?;
    }
    Ok(())
}

/// Engine installing the paint target and the three render updaters.
pub struct RenderEngine {
    surface: Option<Box<dyn Surface>>,
}

impl RenderEngine {
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Render engine without a paint target; actors are sorted and
    /// dispatched but the default draw hook paints nothing.
    pub fn headless() -> Self {
        Self { surface: None }
    }
}

impl Engine for RenderEngine {
    fn id(&self) -> &'static str {
        "render"
    }

    fn register(&mut self, stage: &mut Stage, schedule: &mut Schedule) -> StageResult<()> {
        if let Some(surface) = self.surface.take() {
            stage.surface = Some(surface);
        }
        schedule.register_updater(Phase::Render, render_before_actors);
        let mut scratch: Vec<(i32, ActorId)> = Vec::new();
        schedule.register_updater(Phase::Render, move |stage| draw_actors(stage, &mut scratch));
        schedule.register_updater(Phase::Render, render_after_actors);
        Ok(())
    }
}
