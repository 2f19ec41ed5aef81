//! Phase-ordered frame scheduler.
//!
//! A [`Schedule`] is a fixed table of five phases, each holding updaters in
//! registration order. [`Schedule::tick`] runs one frame: phase 0's updaters
//! first, then phase 1's, and so on. This ordering is the only coordination
//! primitive in the runtime — there is no dependency graph; subsystems agree
//! on who runs when by picking their phase. Collision detection registers
//! into [`Phase::Collision`], per-actor updates run in [`Phase::Actors`],
//! and the render engine's three updaters land back-to-back in
//! [`Phase::Render`].
//!
//! The host owns the frame driver: it calls `tick` once per display refresh
//! (or as fast as a test wants). Ticks can never overlap or recurse — an
//! updater only ever receives `&mut Stage`, never the schedule itself.

use crate::app::Engine;
use crate::error::{StageError, StageResult};
use crate::stage::Stage;

pub const PHASE_COUNT: usize = 5;

/// Fixed per-frame phases, executed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Reserved for host bookkeeping ahead of everything else.
    Early,
    Collision,
    /// Per-actor manager updates; collision lists are complete here.
    Actors,
    Render,
    /// Reserved for host bookkeeping after rendering.
    Late,
}

impl Phase {
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::Early,
        Phase::Collision,
        Phase::Actors,
        Phase::Render,
        Phase::Late,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One per-frame callback slot.
pub type Updater = Box<dyn FnMut(&mut Stage) -> StageResult<()>>;

pub struct Schedule {
    phases: [Vec<Updater>; PHASE_COUNT],
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            phases: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append `updater` to `phase`. Within a phase, updaters run in
    /// registration order. Registration happens during setup and updaters
    /// are never removed.
    pub fn register_updater<F>(&mut self, phase: Phase, updater: F)
    where
        F: FnMut(&mut Stage) -> StageResult<()> + 'static,
    {
        self.phases[phase.index()].push(Box::new(updater));
    }

    pub fn updater_count(&self, phase: Phase) -> usize {
        self.phases[phase.index()].len()
    }

    /// Run one frame: all phases ascending, registration order within each.
    ///
    /// A failing updater aborts the remaining phases of this frame and
    /// surfaces as [`StageError::PhaseFailed`]; persistent state is left as
    /// the updaters before it wrote it, ready for the next tick.
    pub fn tick(&mut self, stage: &mut Stage) -> StageResult<()> {
        stage.frame += 1;
        for phase in Phase::ALL {
            for updater in &mut self.phases[phase.index()] {
                updater(stage).map_err(|source| StageError::PhaseFailed {
                    phase,
                    source: Box::new(source),
                })?;
            }
        }
        Ok(())
    }
}

/// Generic per-actor update dispatch, registered in [`Phase::Actors`].
///
/// For every active actor, in ascending id order, invoke its manager's
/// update hook. A missing manager is a configuration error.
pub fn update_actors(stage: &mut Stage) -> StageResult<()> {
    for id in 0..stage.actors.slot_count() {
        let Some(actor) = stage.actors.get(id) else {
            continue;
        };
        if !actor.active {
            continue;
        }
        let kind = actor.kind;
        stage.with_manager(kind, |manager, stage| manager.update_actor(stage, id))?;
    }
    Ok(())
}

/// Engine registering the per-actor update dispatch.
#[derive(Default)]
pub struct UpdateEngine;

impl UpdateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for UpdateEngine {
    fn id(&self) -> &'static str {
        "update"
    }

    fn register(&mut self, _stage: &mut Stage, schedule: &mut Schedule) -> StageResult<()> {
        schedule.register_updater(Phase::Actors, update_actors);
        Ok(())
    }
}
