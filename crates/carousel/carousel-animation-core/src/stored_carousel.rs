use serde::Deserialize;

use crate::data::CarouselData;
use crate::error::CarouselError;
use crate::ids::CarouselId;
use crate::inputs::Direction;

/// Public API: parse StoredCarousel-style JSON (see fixtures/carousels/)
/// into the canonical CarouselData (data.rs).
///
/// Notes:
/// - Durations are provided in milliseconds in the JSON and kept as
///   milliseconds (step_duration_ms / pause_duration_ms).
/// - `chrome` is preserved verbatim for hosts; core logic never reads it.
/// - Schema-level range checks run before the lossy f64 -> u32 narrowing so
///   a negative authored duration is reported as authored.
pub fn parse_stored_carousel_json(s: &str) -> Result<CarouselData, CarouselError> {
    let sc: StoredCarousel = serde_json::from_str(s)?;

    if !sc.step_duration.is_finite() || sc.step_duration <= 0.0 {
        return Err(CarouselError::InvalidDuration {
            field: "stepDuration".to_string(),
            value: sc.step_duration,
        });
    }
    if !sc.pause_duration.is_finite() || sc.pause_duration < 0.0 {
        return Err(CarouselError::InvalidDuration {
            field: "pauseDuration".to_string(),
            value: sc.pause_duration,
        });
    }
    if !sc.slide_size.is_finite() || sc.slide_size <= 0.0 {
        return Err(CarouselError::InvalidSlideSize {
            value: sc.slide_size,
        });
    }

    let data = CarouselData {
        id: None::<CarouselId>,
        name: sc.name,
        slides: sc.slides,
        slide_size: sc.slide_size as f32,
        step_duration_ms: sc.step_duration as u32,
        pause_duration_ms: sc.pause_duration as u32,
        slide_padding: sc.slide_padding as f32,
        initial_direction: sc.initial_direction,
        autostart: sc.autostart,
        chrome: sc.chrome,
    };
    data.validate_basic()?;
    Ok(data)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredCarousel {
    name: String,
    slides: Vec<String>,
    #[serde(rename = "slideSize")]
    slide_size: f64,
    /// Milliseconds.
    #[serde(rename = "stepDuration")]
    step_duration: f64,
    /// Milliseconds; zero means no dwell between steps.
    #[serde(rename = "pauseDuration", default)]
    pause_duration: f64,
    #[serde(rename = "slidePadding", default)]
    slide_padding: f64,
    #[serde(rename = "initialDirection", default)]
    initial_direction: Direction,
    #[serde(default)]
    autostart: bool,
    #[serde(default)]
    chrome: serde_json::Value,
}
