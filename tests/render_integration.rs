//! Integration tests for the z-ordered draw pipeline.

use std::cell::RefCell;
use std::rc::Rc;

use stagecore::app::App;
use stagecore::components::actor::{ActorData, ActorId, ActorKind};
use stagecore::engines::factory::{
    create_actor, destroy_actor, register_manager, FactoryEngine, Manager,
};
use stagecore::engines::render::{
    draw_actors, DrawOp, RecordingSurface, RenderEngine, Surface,
};
use stagecore::error::StageResult;
use stagecore::resources::imagestore::{ImageHandle, ImageLoader};
use stagecore::resources::stageconfig::StageConfig;
use stagecore::stage::Stage;

struct StubLoader;

impl ImageLoader for StubLoader {
    fn load_image(&mut self, name: &str) -> StageResult<ImageHandle> {
        Ok(ImageHandle {
            name: name.to_string(),
            width: 16,
            height: 16,
        })
    }
}

fn make_stage() -> Stage {
    Stage::with_loader(StageConfig::new(), Box::new(StubLoader))
}

fn handle(name: &str) -> ImageHandle {
    ImageHandle {
        name: name.to_string(),
        width: 16,
        height: 16,
    }
}

/// Manager with default hooks only; actors paint through the default draw.
struct SceneManager {
    kind: ActorKind,
}

impl Manager for SceneManager {
    fn id(&self) -> ActorKind {
        self.kind
    }
}

/// Spawn an active actor with an image named after its id.
fn spawn_sprite(stage: &mut Stage, id: ActorId, z_index: i32) {
    create_actor(stage, ActorData::new(id, 0).with_z_index(z_index)).unwrap();
    let actor = stage.actors.get_mut(id).unwrap();
    actor.image = Some(handle(&format!("sprite-{id}")));
}

fn painted_names(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Image { name, .. } => Some(name.clone()),
            DrawOp::Clear => None,
        })
        .collect()
}

fn install_recording_surface(stage: &mut Stage) -> Rc<RefCell<Vec<DrawOp>>> {
    let surface = RecordingSurface::new();
    let ops = surface.ops();
    stage.surface = Some(Box::new(surface));
    ops
}

#[test]
fn paint_order_is_descending_z_with_stable_ties() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);
    register_manager(&mut stage, Box::new(SceneManager { kind: 0 })).unwrap();

    // z values [5, 1, 5, -3]: descending paint order is 5, 5, 1, -3 and the
    // two fives keep ascending-id order.
    spawn_sprite(&mut stage, 0, 5);
    spawn_sprite(&mut stage, 1, 1);
    spawn_sprite(&mut stage, 2, 5);
    spawn_sprite(&mut stage, 3, -3);

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert_eq!(
        painted_names(&ops.borrow()),
        vec!["sprite-0", "sprite-2", "sprite-1", "sprite-3"]
    );
}

#[test]
fn inactive_actors_are_sorted_but_not_painted() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);
    register_manager(&mut stage, Box::new(SceneManager { kind: 0 })).unwrap();

    spawn_sprite(&mut stage, 0, 10);
    spawn_sprite(&mut stage, 1, 5);
    destroy_actor(&mut stage, 0).unwrap();

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert_eq!(painted_names(&ops.borrow()), vec!["sprite-1"]);
}

#[test]
fn actor_without_image_paints_nothing() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);
    register_manager(&mut stage, Box::new(SceneManager { kind: 0 })).unwrap();

    create_actor(&mut stage, ActorData::new(0, 0)).unwrap();

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert!(ops.borrow().is_empty());
}

#[test]
fn manager_less_actors_are_skipped_at_paint_time() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);

    // Inserted directly: kind 9 has no manager, which the draw pass must
    // tolerate (unlike creation, which would refuse).
    let mut orphan = ActorData::new(0, 9);
    orphan.active = true;
    orphan.image = Some(handle("orphan"));
    stage.actors.insert(orphan);

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert!(ops.borrow().is_empty());
}

#[test]
fn default_draw_truncates_position_toward_zero() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);
    register_manager(&mut stage, Box::new(SceneManager { kind: 0 })).unwrap();

    create_actor(&mut stage, ActorData::new(0, 0).with_pos(3.7, -2.3)).unwrap();
    stage.actors.get_mut(0).unwrap().image = Some(handle("sprite"));

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert_eq!(
        *ops.borrow(),
        vec![DrawOp::Image {
            name: "sprite".to_string(),
            x: 3,
            y: -2,
        }]
    );
}

#[test]
fn default_draw_applies_image_offset() {
    let mut stage = make_stage();
    let ops = install_recording_surface(&mut stage);
    register_manager(&mut stage, Box::new(SceneManager { kind: 0 })).unwrap();

    create_actor(&mut stage, ActorData::new(0, 0).with_pos(10.0, 10.0)).unwrap();
    let actor = stage.actors.get_mut(0).unwrap();
    actor.image = Some(handle("sprite"));
    actor.image_offset.y = -16.0;

    let mut scratch = Vec::new();
    draw_actors(&mut stage, &mut scratch).unwrap();

    assert_eq!(
        *ops.borrow(),
        vec![DrawOp::Image {
            name: "sprite".to_string(),
            x: 10,
            y: -6,
        }]
    );
}

/// Manager exercising the before/draw/after bracket.
struct BracketManager {
    kind: ActorKind,
}

impl Manager for BracketManager {
    fn id(&self) -> ActorKind {
        self.kind
    }

    fn before_actors(&mut self, stage: &mut Stage) -> StageResult<()> {
        if let Some(surface) = stage.surface.as_mut() {
            surface.clear();
        }
        Ok(())
    }

    fn after_actors(&mut self, stage: &mut Stage) -> StageResult<()> {
        if let Some(surface) = stage.surface.as_mut() {
            surface.draw_image(&handle("overlay"), 0, 0);
        }
        Ok(())
    }
}

#[test]
fn render_phase_brackets_the_draw_pass() {
    let surface = RecordingSurface::new();
    let ops = surface.ops();

    let mut app = App::create_with_stage(
        vec![
            Box::new(FactoryEngine::new()),
            Box::new(RenderEngine::new(Box::new(surface))),
        ],
        make_stage(),
    )
    .unwrap();

    let stage = app.stage_mut();
    register_manager(stage, Box::new(BracketManager { kind: 0 })).unwrap();
    spawn_sprite(stage, 0, 0);

    app.start().unwrap();
    app.tick().unwrap();

    assert_eq!(
        *ops.borrow(),
        vec![
            DrawOp::Clear,
            DrawOp::Image {
                name: "sprite-0".to_string(),
                x: 0,
                y: 0,
            },
            DrawOp::Image {
                name: "overlay".to_string(),
                x: 0,
                y: 0,
            },
        ]
    );
}
