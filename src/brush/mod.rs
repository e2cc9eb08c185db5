//! Box brushes and CSG subtraction
//!
//! A level is a flat list of axis-aligned box brushes. Solid (`Add`) brushes
//! are carved by a subtractive tool brush into non-overlapping fragments.

pub mod face;
pub mod volume;
pub mod subtract;

// Re-exports
pub use face::{Face, FaceTextures};
pub use volume::{Brush, BrushOp, EPSILON};
pub use subtract::{subtract, subtract_par, subtract_with_stats, carve, SubtractConfig, SubtractStats};
