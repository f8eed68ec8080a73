#![allow(dead_code)]
//! Core configuration for carousel-animation-core.

use serde::{Deserialize, Serialize};

/// Engine-wide defaults and limits.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Default square slide edge length in pixels, used when a carousel
    /// definition does not specify one.
    pub default_slide_size: f32,
    /// Default slide-to-slide transition duration in milliseconds.
    pub default_step_duration_ms: u32,
    /// Default dwell time at each settled position in milliseconds.
    pub default_pause_duration_ms: u32,

    /// Maximum events to retain per tick before backpressure policy applies.
    pub max_events_per_tick: usize,

    /// Feature flags (placeholder; future: seamless wrap, crossfade).
    pub features: Features,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Features {
    /// Reserved for future toggles.
    pub reserved0: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_slide_size: 120.0,
            default_step_duration_ms: 750,
            default_pause_duration_ms: 1500,
            max_events_per_tick: 1024,
            features: Features::default(),
        }
    }
}
