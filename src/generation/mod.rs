//! Procedural level generation built on brush subtraction

pub mod config;
pub mod dungeon;

pub use config::DungeonConfig;
pub use dungeon::{generate, Dungeon};
