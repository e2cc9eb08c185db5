//! Axis-aligned geometry helpers

pub mod aabb;
pub mod axis;

pub use aabb::Aabb;
pub use axis::Axis;
