#![allow(dead_code)]
//! Carousel Animation Core (engine-agnostic)
//!
//! A looping, directional image-carousel animator with no host dependencies:
//! the embedding shell (GUI toolkit, WASM page, test harness) calls
//! Engine::update() with an elapsed-time delta and a batch of commands, and
//! reads back per-carousel offset changes plus semantic events. The core owns
//! the step-cycle state machine (index advance, eased offset transition,
//! dwell, wraparound snap) and the generation-token cancellation that makes
//! stop/restart race-free; it never spawns threads or timers of its own.

pub mod animator;
pub mod config;
pub mod data;
pub mod easing;
pub mod engine;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod stored_carousel;

// Re-exports for consumers (adapters)
pub use animator::Animator;
pub use config::{Config, Features};
pub use data::CarouselData;
pub use easing::{ease_in_out, lerp_f32};
pub use engine::Engine;
pub use error::CarouselError;
pub use ids::{CarouselId, Generation, IdAllocator};
pub use inputs::{CarouselCommand, Direction, Inputs};
pub use outputs::{CarouselEvent, Change, Outputs};
pub use stored_carousel::parse_stored_carousel_json;
