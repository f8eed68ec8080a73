#![allow(dead_code)]
//! Engine: data ownership and public API.
//!
//! Methods:
//! - new, add_carousel, update (apply commands -> tick animators -> emit
//!   per-carousel offset changes and events)

use crate::animator::Animator;
use crate::config::Config;
use crate::data::CarouselData;
use crate::error::CarouselError;
use crate::ids::{CarouselId, Generation, IdAllocator};
use crate::inputs::{CarouselCommand, Direction, Inputs};
use crate::outputs::{Change, Outputs};

/// Engine owning every carousel animator plus the per-tick outputs.
///
/// All mutation happens on the caller's thread: the host calls `update`
/// once per frame (or per test step) with the elapsed delta and the
/// commands its UI handlers produced since the last tick.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    animators: Vec<Animator>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            animators: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Load a carousel definition, returning its CarouselId.
    /// The definition is validated; an autostarting carousel still waits
    /// for its first layout measurement before stepping.
    pub fn add_carousel(&mut self, mut data: CarouselData) -> Result<CarouselId, CarouselError> {
        data.validate_basic()?;
        let id = self.ids.alloc_carousel();
        data.id = Some(id);
        self.animators.push(Animator::new(id, data));
        Ok(id)
    }

    fn animator(&self, id: CarouselId) -> Option<&Animator> {
        self.animators.iter().find(|a| a.id() == id)
    }

    /// Look up a carousel's definition, e.g. for a host rendering its slide
    /// assets and chrome.
    pub fn carousel_data(&self, id: CarouselId) -> Result<&CarouselData, CarouselError> {
        self.animator(id)
            .map(|a| a.data())
            .ok_or(CarouselError::CarouselNotFound { id: id.0 })
    }

    /// Apply per-carousel commands. Commands naming an unknown carousel are
    /// dropped (the host may race removal against its own event handlers).
    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                CarouselCommand::Start { carousel } => {
                    if let Some(a) = self.animators.iter_mut().find(|a| a.id() == carousel) {
                        log::debug!("carousel {carousel:?}: start");
                        a.start(&mut self.outputs.events);
                    }
                }
                CarouselCommand::Stop { carousel } => {
                    if let Some(a) = self.animators.iter_mut().find(|a| a.id() == carousel) {
                        log::debug!("carousel {carousel:?}: stop");
                        a.stop(&mut self.outputs.events);
                    }
                }
                CarouselCommand::SetDirection {
                    carousel,
                    direction,
                } => {
                    if let Some(a) = self.animators.iter_mut().find(|a| a.id() == carousel) {
                        log::debug!("carousel {carousel:?}: direction {}", direction.name());
                        a.set_direction(direction);
                    }
                }
                CarouselCommand::SetLayout {
                    carousel,
                    slide_width,
                } => {
                    if let Some(a) = self.animators.iter_mut().find(|a| a.id() == carousel) {
                        a.set_layout(slide_width, &mut self.outputs.events);
                    }
                }
            }
        }
    }

    /// Step the simulation by dt seconds with given inputs, producing
    /// outputs. Commands apply before time advances, so a Stop issued this
    /// tick is observed by any continuation due this tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Apply carousel commands
        self.apply_inputs(inputs);

        // 2) Advance every animator's phase
        for a in &mut self.animators {
            a.tick(dt, &mut self.outputs.events);
        }

        // 3) Emit per-carousel offset changes (measured carousels only; a
        //    carousel mounted before its layout pass renders nothing yet)
        for a in &self.animators {
            if a.is_measured() {
                self.outputs.push_change(Change {
                    carousel: a.id(),
                    key: a.data().name.clone(),
                    offset: a.offset(),
                });
            }
        }

        // Backpressure: keep at most max_events_per_tick events
        if self.outputs.events.len() > self.cfg.max_events_per_tick {
            self.outputs.events.truncate(self.cfg.max_events_per_tick);
        }

        &self.outputs
    }

    /// Current discrete slide index (may be a transient wrap sentinel while
    /// a step is in flight).
    pub fn carousel_index(&self, id: CarouselId) -> Option<i32> {
        self.animator(id).map(|a| a.current_index())
    }

    /// Current horizontal content offset in pixels.
    pub fn carousel_offset(&self, id: CarouselId) -> Option<f32> {
        self.animator(id).map(|a| a.offset())
    }

    pub fn carousel_direction(&self, id: CarouselId) -> Option<Direction> {
        self.animator(id).map(|a| a.direction())
    }

    pub fn carousel_running(&self, id: CarouselId) -> Option<bool> {
        self.animator(id).map(|a| a.is_running())
    }

    /// The carousel's live cancellation token; strictly increases across
    /// every stop and restart.
    pub fn carousel_generation(&self, id: CarouselId) -> Option<Generation> {
        self.animator(id).map(|a| a.generation())
    }
}
