//! Brushwork - axis-aligned brush carving and level tooling

pub mod core;
pub mod math;
pub mod brush;
pub mod level;
pub mod generation;
