#![allow(dead_code)]
//! Input contracts for the core engine.
//!
//! Per-carousel commands built by the host each tick and passed into
//! Engine::update(). The host owns the running/direction toggles (UI event
//! handlers flip them); the core only ever reads them through these commands.

use serde::{Deserialize, Serialize};

use crate::ids::CarouselId;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Carousel-level commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<CarouselCommand>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CarouselCommand {
    /// Begin (or resume) the step loop. Position is preserved across
    /// stop/start; starting never rewinds to slide zero.
    Start { carousel: CarouselId },
    /// Halt the step loop. Any scheduled continuation is invalidated.
    Stop { carousel: CarouselId },
    /// Record a new travel direction, sampled at the next step start.
    SetDirection {
        carousel: CarouselId,
        direction: Direction,
    },
    /// Supply the measured slide width from the host's layout pass.
    /// The step loop cannot start before the first measurement arrives.
    SetLayout {
        carousel: CarouselId,
        slide_width: f32,
    },
}

/// Travel direction of the carousel content.
/// Forward means content appears to move right-to-left (index increases).
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Forward
    }
}

impl Direction {
    /// Signed index increment of one step in this direction.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}
