//! Per-carousel step-cycle state machine.
//!
//! The loop is a self-scheduling delayed continuation: advance the slide
//! index, animate the offset over the step duration, dwell for the pause
//! duration, snap across the ends of the slide set, recurse. Here that
//! continuation is reified as the animator's current `Phase`; the host's
//! tick is the timer.
//!
//! Cancellation is two layers deep: `stop()` halts the loop synchronously
//! and bumps the live [`Generation`], and every Transition/Dwell phase
//! carries the generation captured when it was scheduled. A phase whose
//! token no longer matches is discarded by
//! `tick()` without mutating index or offset, so a continuation that was
//! already in flight when the stop landed can never advance a stopped
//! carousel or resurrect state into a restarted run.

use crate::data::CarouselData;
use crate::easing::{ease_in_out, lerp_f32};
use crate::ids::{CarouselId, Generation};
use crate::inputs::Direction;
use crate::outputs::CarouselEvent;

/// The reified step-loop continuation.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Constructed (or re-mounted) before the host's layout pass has
    /// supplied a slide width; the loop must not schedule anything yet.
    AwaitingLayout,
    /// No transition in flight and nothing scheduled.
    Settled,
    /// Offset is animating from `from` to `to`; `direction` was sampled at
    /// step start and is used for this step's wrap check.
    Transition {
        generation: Generation,
        direction: Direction,
        from: f32,
        to: f32,
        elapsed: f32,
    },
    /// Dwelling at a position; when `remaining` runs out the continuation
    /// fires. `after_step` distinguishes the dwell that follows a completed
    /// step (which wrap-checks) from the dwell a freshly started loop
    /// enters (which must not, since the index has not moved yet).
    Dwell {
        generation: Generation,
        direction: Direction,
        remaining: f32,
        after_step: bool,
    },
}

/// One carousel's animator: discrete slide index, continuous pixel offset,
/// direction and running flags, and the generation token.
#[derive(Debug)]
pub struct Animator {
    id: CarouselId,
    data: CarouselData,
    slide_width: Option<f32>,
    /// Discrete slide index. Settled values are always in [0, N-1]; N and
    /// -1 occur only transiently as wrap sentinels mid-cycle.
    current_index: i32,
    /// Horizontal content offset in pixels; at settled instants this equals
    /// `-slide_width * current_index`.
    offset: f32,
    direction: Direction,
    running: bool,
    generation: Generation,
    phase: Phase,
}

impl Animator {
    pub fn new(id: CarouselId, data: CarouselData) -> Self {
        let direction = data.initial_direction;
        let running = data.autostart;
        Self {
            id,
            data,
            slide_width: None,
            current_index: 0,
            offset: 0.0,
            direction,
            running,
            generation: Generation::default(),
            phase: Phase::AwaitingLayout,
        }
    }

    #[inline]
    pub fn id(&self) -> CarouselId {
        self.id
    }

    #[inline]
    pub fn data(&self) -> &CarouselData {
        &self.data
    }

    #[inline]
    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.slide_width.is_some()
    }

    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Begin (or resume) the step loop from the current position.
    /// A fresh generation is minted so nothing scheduled by a previous run
    /// can fire into this one. If the slide width is not yet measured the
    /// loop start is deferred until `set_layout`.
    pub fn start(&mut self, events: &mut Vec<CarouselEvent>) {
        if self.running {
            return;
        }
        self.running = true;
        self.generation.bump();
        events.push(CarouselEvent::Started { carousel: self.id });
        if self.slide_width.is_some() {
            self.schedule_dwell();
        } else {
            self.phase = Phase::AwaitingLayout;
        }
    }

    /// Halt the step loop. The live generation is bumped so the scheduled
    /// continuation becomes a no-op when it fires; an in-flight offset
    /// transition finishes instantly so `offset == -width * index` holds
    /// while stopped. No further index advancement occurs.
    pub fn stop(&mut self, events: &mut Vec<CarouselEvent>) {
        if !self.running {
            return;
        }
        self.running = false;
        self.generation.bump();
        if let Phase::Transition { to, .. } = self.phase {
            self.offset = to;
        }
        events.push(CarouselEvent::Stopped { carousel: self.id });
    }

    /// Record a new travel direction. The in-flight step completes with the
    /// direction it sampled at step start; the new value applies from the
    /// next step. The index is deliberately not renormalized, so one slide
    /// may repeat or be skipped right after a flip.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Supply (or replace) the measured slide width from the host's layout
    /// pass. Settled offsets are re-derived from the current index; a loop
    /// waiting on its first measurement starts now. A step already in
    /// flight keeps its captured geometry and picks up the new width on the
    /// next step.
    pub fn set_layout(&mut self, slide_width: f32, events: &mut Vec<CarouselEvent>) {
        if !slide_width.is_finite() || slide_width <= 0.0 {
            log::debug!(
                "carousel {:?}: ignoring degenerate layout width {slide_width}",
                self.id
            );
            return;
        }
        self.slide_width = Some(slide_width);
        events.push(CarouselEvent::LayoutMeasured {
            carousel: self.id,
            slide_width,
        });
        match self.phase {
            Phase::AwaitingLayout => {
                self.offset = -slide_width * self.current_index as f32;
                if self.running {
                    self.schedule_dwell();
                } else {
                    self.phase = Phase::Settled;
                }
            }
            Phase::Settled => {
                self.offset = -slide_width * self.current_index as f32;
            }
            Phase::Transition { .. } | Phase::Dwell { .. } => {}
        }
    }

    /// Advance the phase by `dt` seconds. All state mutation happens here
    /// and in the command methods above, on the caller's thread.
    pub fn tick(&mut self, dt: f32, events: &mut Vec<CarouselEvent>) {
        match self.phase {
            Phase::AwaitingLayout | Phase::Settled => {}
            Phase::Transition {
                generation,
                direction,
                from,
                to,
                elapsed,
            } => {
                if generation != self.generation {
                    // Scheduled before a stop/restart; must not mutate.
                    self.phase = Phase::Settled;
                    return;
                }
                let step = self.data.step_duration();
                let elapsed = elapsed + dt;
                if elapsed >= step {
                    self.offset = to;
                    let remaining = self.data.pause_duration() - (elapsed - step);
                    if remaining > 0.0 {
                        self.phase = Phase::Dwell {
                            generation,
                            direction,
                            remaining,
                            after_step: true,
                        };
                    } else {
                        self.finish_dwell(generation, direction, true, events);
                    }
                } else {
                    self.offset = lerp_f32(from, to, ease_in_out(elapsed / step));
                    self.phase = Phase::Transition {
                        generation,
                        direction,
                        from,
                        to,
                        elapsed,
                    };
                }
            }
            Phase::Dwell {
                generation,
                direction,
                remaining,
                after_step,
            } => {
                if generation != self.generation {
                    self.phase = Phase::Settled;
                    return;
                }
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = Phase::Dwell {
                        generation,
                        direction,
                        remaining,
                        after_step,
                    };
                } else {
                    self.finish_dwell(generation, direction, after_step, events);
                }
            }
        }
    }

    /// Enter the dwell that precedes the next index advance. Starting the
    /// cycle at its wait point keeps `start()` cancellable before any index
    /// mutation.
    fn schedule_dwell(&mut self) {
        // A stop that landed mid-wrap can leave the index at a sentinel;
        // bring it back in range before the loop re-enters.
        let n = self.data.slide_count() as i32;
        if let Some(width) = self.slide_width {
            if self.current_index >= n {
                self.current_index = 0;
                self.offset = 0.0;
            } else if self.current_index < 0 {
                self.current_index = (n - 1).max(0);
                self.offset = -width * self.current_index as f32;
            }
        }
        self.phase = Phase::Dwell {
            generation: self.generation,
            direction: self.direction,
            remaining: self.data.pause_duration(),
            after_step: false,
        };
    }

    /// The delayed continuation at the end of a step cycle: snap across the
    /// ends of the slide set if the completed step ran out of range, report
    /// the settled slide, and begin the next step.
    fn finish_dwell(
        &mut self,
        generation: Generation,
        step_direction: Direction,
        after_step: bool,
        events: &mut Vec<CarouselEvent>,
    ) {
        if generation != self.generation || !self.running {
            self.phase = Phase::Settled;
            return;
        }
        let width = match self.slide_width {
            Some(w) => w,
            None => {
                self.phase = Phase::AwaitingLayout;
                return;
            }
        };
        if after_step {
            let n = self.data.slide_count() as i32;
            match step_direction {
                Direction::Forward if self.current_index >= n => {
                    log::trace!(
                        "carousel {:?}: forward wrap {} -> 0",
                        self.id,
                        self.current_index
                    );
                    events.push(CarouselEvent::Wrapped {
                        carousel: self.id,
                        from_index: self.current_index,
                        to_index: 0,
                    });
                    self.current_index = 0;
                    self.offset = 0.0;
                }
                Direction::Reverse if self.current_index <= 0 => {
                    log::trace!(
                        "carousel {:?}: reverse wrap {} -> {}",
                        self.id,
                        self.current_index,
                        n - 1
                    );
                    events.push(CarouselEvent::Wrapped {
                        carousel: self.id,
                        from_index: self.current_index,
                        to_index: n - 1,
                    });
                    self.current_index = n - 1;
                    self.offset = -width * self.current_index as f32;
                }
                _ => {}
            }
        }
        events.push(CarouselEvent::Settled {
            carousel: self.id,
            index: self.current_index,
        });
        self.begin_step(width, events);
    }

    /// Advance the index one slide in the direction sampled now, and start
    /// the eased offset transition toward it.
    fn begin_step(&mut self, width: f32, events: &mut Vec<CarouselEvent>) {
        let direction = self.direction;
        let from_index = self.current_index;
        self.current_index += direction.delta();
        let to = -width * self.current_index as f32;
        events.push(CarouselEvent::StepStarted {
            carousel: self.id,
            from_index,
            to_index: self.current_index,
            direction,
        });
        self.phase = Phase::Transition {
            generation: self.generation,
            direction,
            from: self.offset,
            to,
            elapsed: 0.0,
        };
    }
}
