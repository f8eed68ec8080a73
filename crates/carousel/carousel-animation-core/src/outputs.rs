#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Outputs carry the per-tick offset changes keyed by carousel name, and a
//! separate list of semantic events. Adapters apply changes to the host view
//! tree and may use events to mask wrap snaps or drive indicators.

use serde::{Deserialize, Serialize};

use crate::ids::CarouselId;
use crate::inputs::Direction;

/// One carousel's horizontal content offset for this tick, in pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Change {
    pub carousel: CarouselId,
    /// Stable string key (the carousel's name).
    pub key: String,
    pub offset: f32,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum CarouselEvent {
    Started {
        carousel: CarouselId,
    },
    Stopped {
        carousel: CarouselId,
    },
    /// The host's layout pass supplied (or replaced) the slide width.
    LayoutMeasured {
        carousel: CarouselId,
        slide_width: f32,
    },
    /// A slide-to-slide transition began; `to_index` may be a transient
    /// wrap sentinel (N going forward, -1 going reverse).
    StepStarted {
        carousel: CarouselId,
        from_index: i32,
        to_index: i32,
        direction: Direction,
    },
    /// The index snapped across the ends of the slide set without an
    /// animated transition. Hosts that want seamless wrap react here.
    Wrapped {
        carousel: CarouselId,
        from_index: i32,
        to_index: i32,
    },
    /// A step cycle completed; the visible index is settled and in range.
    Settled {
        carousel: CarouselId,
        index: i32,
    },
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
