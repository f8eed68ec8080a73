//! Error types for the carousel core.

use serde::{Deserialize, Serialize};

/// Error type for carousel data and engine operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CarouselError {
    /// Carousel not found in the engine
    #[error("Carousel not found: {id}")]
    CarouselNotFound { id: u32 },

    /// A carousel definition with no slides
    #[error("Carousel '{name}' has an empty slide set")]
    EmptySlideSet { name: String },

    /// Non-positive or non-finite duration
    #[error("Invalid {field}: {value} ms (must be positive and finite)")]
    InvalidDuration { field: String, value: f64 },

    /// Non-positive or non-finite slide edge size
    #[error("Invalid slide size: {value}")]
    InvalidSlideSize { value: f64 },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CarouselError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::CarouselNotFound { .. } => "data",
            Self::EmptySlideSet { .. }
            | Self::InvalidDuration { .. }
            | Self::InvalidSlideSize { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
