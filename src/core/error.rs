//! Error types for brushwork

use glam::Vec3;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Degenerate brush: size {size} must exceed {epsilon} on every axis")]
    DegenerateBrush { size: Vec3, epsilon: f32 },

    #[error("No brush at index {index} (level has {len})")]
    NoSuchBrush { index: usize, len: usize },

    #[error("Brush {index} is not a subtractive brush")]
    NotSubtractive { index: usize },

    #[error("Level has no subtractive brush")]
    NoSubtractiveBrush,

    #[error("Generation error: {0}")]
    Generation(String),
}
