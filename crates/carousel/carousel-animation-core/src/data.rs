#![allow(dead_code)]
//! Canonical carousel data model (StoredCarousel).

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::CarouselError;
use crate::ids::CarouselId;
use crate::inputs::Direction;

/// Canonical StoredCarousel format (standard, single supported schema).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CarouselData {
    /// Optional internal id assigned when loaded into the engine.
    #[serde(skip)]
    pub id: Option<CarouselId>,
    pub name: String,
    /// Ordered slide asset names, count >= 1. Immutable for the lifetime of
    /// one animator instance.
    pub slides: Vec<String>,
    /// Square slide edge length in pixels (a layout hint; the measured
    /// slide width from the host is authoritative for offsets).
    #[serde(rename = "slideSize")]
    pub slide_size: f32,
    /// Slide-to-slide transition duration in milliseconds (authored in ms).
    #[serde(rename = "stepDuration")]
    pub step_duration_ms: u32,
    /// Dwell time at each settled position in milliseconds.
    #[serde(rename = "pauseDuration", default)]
    pub pause_duration_ms: u32,
    /// Inter-slide padding in pixels (cosmetic hint, unused by core logic).
    #[serde(rename = "slidePadding", default)]
    pub slide_padding: f32,
    #[serde(rename = "initialDirection", default)]
    pub initial_direction: Direction,
    /// Begin the loop as soon as the first layout measurement arrives.
    #[serde(default)]
    pub autostart: bool,
    /// Arbitrary cosmetic styling (corner radius, fills, shadows) preserved
    /// for hosts but never interpreted by core logic.
    #[serde(default)]
    pub chrome: serde_json::Value,
}

impl CarouselData {
    /// Build a definition for the given slides with engine defaults for
    /// sizing and timing.
    pub fn with_defaults(name: &str, slides: Vec<String>, cfg: &Config) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            slides,
            slide_size: cfg.default_slide_size,
            step_duration_ms: cfg.default_step_duration_ms,
            pause_duration_ms: cfg.default_pause_duration_ms,
            slide_padding: 0.0,
            initial_direction: Direction::default(),
            autostart: false,
            chrome: serde_json::Value::Null,
        }
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Step duration in seconds.
    #[inline]
    pub fn step_duration(&self) -> f32 {
        self.step_duration_ms as f32 / 1000.0
    }

    /// Pause duration in seconds.
    #[inline]
    pub fn pause_duration(&self) -> f32 {
        self.pause_duration_ms as f32 / 1000.0
    }

    /// Validate basic invariants (non-empty slide set, positive sizing and
    /// step timing).
    pub fn validate_basic(&self) -> Result<(), CarouselError> {
        if self.slides.is_empty() {
            return Err(CarouselError::EmptySlideSet {
                name: self.name.clone(),
            });
        }
        if !self.slide_size.is_finite() || self.slide_size <= 0.0 {
            return Err(CarouselError::InvalidSlideSize {
                value: self.slide_size as f64,
            });
        }
        if self.step_duration_ms == 0 {
            return Err(CarouselError::InvalidDuration {
                field: "stepDuration".to_string(),
                value: self.step_duration_ms as f64,
            });
        }
        Ok(())
    }
}
