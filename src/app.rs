//! App root: an ordered list of engines around one stage and one schedule.
//!
//! [`App::create`] runs every engine's register hook in list order, each
//! completing before the next begins, so later engines may rely on state
//! installed by earlier ones. [`App::start`] walks the same list in the same
//! order. After that the host drives frames with [`App::tick`] — the core
//! has no timing dependency of its own, which is what makes a stage fully
//! deterministic under test.

use crate::engines::update::Schedule;
use crate::error::{StageError, StageResult};
use crate::resources::stageconfig::StageConfig;
use crate::stage::Stage;

/// One top-level engine. Both hooks default to no-ops.
pub trait Engine {
    /// Unique engine name; registering two engines with one id fails.
    fn id(&self) -> &'static str;

    /// Setup hook: install state, load resources, register updaters.
    /// Runs once, in engine list order, before the frame loop starts.
    fn register(&mut self, _stage: &mut Stage, _schedule: &mut Schedule) -> StageResult<()> {
        Ok(())
    }

    /// Start hook: runs once after every engine has registered.
    fn start(&mut self, _stage: &mut Stage) -> StageResult<()> {
        Ok(())
    }
}

pub struct App {
    engines: Vec<Box<dyn Engine>>,
    stage: Stage,
    schedule: Schedule,
    started: bool,
}

impl App {
    /// Build the stage and run every engine's register hook in order.
    pub fn create(engines: Vec<Box<dyn Engine>>, config: StageConfig) -> StageResult<App> {
        Self::create_with_stage(engines, Stage::new(config))
    }

    /// Same as [`create`], over a caller-built stage (custom image loader,
    /// preinstalled surface).
    ///
    /// [`create`]: App::create
    pub fn create_with_stage(engines: Vec<Box<dyn Engine>>, stage: Stage) -> StageResult<App> {
        let mut app = App {
            engines: Vec::with_capacity(engines.len()),
            stage,
            schedule: Schedule::new(),
            started: false,
        };
        for mut engine in engines {
            let id = engine.id();
            if app.engines.iter().any(|existing| existing.id() == id) {
                return Err(StageError::DuplicateEngine(id));
            }
            engine.register(&mut app.stage, &mut app.schedule)?;
            log::debug!("engine '{id}' registered");
            app.engines.push(engine);
        }
        Ok(app)
    }

    /// Run every engine's start hook in registration order.
    pub fn start(&mut self) -> StageResult<()> {
        if self.started {
            log::warn!("App::start called twice; ignoring");
            return Ok(());
        }
        for engine in &mut self.engines {
            engine.start(&mut self.stage)?;
        }
        self.started = true;
        Ok(())
    }

    /// Run one frame. The host owns the cadence; calls never overlap.
    pub fn tick(&mut self) -> StageResult<()> {
        self.schedule.tick(&mut self.stage)
    }

    /// Run every manager's destroy hook, ascending kind order.
    pub fn shutdown(&mut self) -> StageResult<()> {
        for kind in self.stage.managers.kinds() {
            self.stage.with_manager(kind, |manager, stage| {
                manager.destroy(stage);
                Ok(())
            })?;
        }
        Ok(())
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable stage access for bootstrap work between create and start
    /// (registering managers, creating the initial actors).
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn started(&self) -> bool {
        self.started
    }
}
