//! Level scene: the ordered brush list and its JSON file format.
//!
//! Files are `{"brushes": [...]}`; a bare array of brushes is also accepted
//! on load. Brushes are addressed by index in the list.

pub mod history;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brush::{self, Brush, SubtractConfig, SubtractStats};
use crate::core::{Error, Result};
use crate::math::Aabb;

pub use history::{History, HistoryConfig};

/// An editable level: brushes in draw/file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub brushes: Vec<Brush>,
}

/// Shapes accepted when reading a level file
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelFile {
    Full(Level),
    Bare(Vec<Brush>),
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_brushes(brushes: Vec<Brush>) -> Self {
        Self { brushes }
    }

    /// Parse level JSON, dropping degenerate brushes
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut level = match serde_json::from_str(json)? {
            LevelFile::Full(level) => level,
            LevelFile::Bare(brushes) => Level { brushes },
        };
        let dropped = level.prune_degenerate(brush::EPSILON);
        if dropped > 0 {
            log::warn!("Dropped {} degenerate brushes while loading level", dropped);
        }
        Ok(level)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&json)?;
        log::info!("Loaded {} brushes from {}", level.len(), path.display());
        Ok(level)
    }

    /// Save to file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        log::info!("Saved {} brushes to {}", self.len(), path.display());
        Ok(())
    }

    pub fn brushes(&self) -> &[Brush] {
        &self.brushes
    }

    pub fn get(&self, index: usize) -> Option<&Brush> {
        self.brushes.get(index)
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Append a brush, returning its index
    pub fn push(&mut self, brush: Brush) -> usize {
        self.brushes.push(brush);
        self.brushes.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Result<Brush> {
        self.check_index(index)?;
        Ok(self.brushes.remove(index))
    }

    /// Index of the last subtractive brush, if any
    pub fn last_subtractive(&self) -> Option<usize> {
        self.brushes.iter().rposition(Brush::is_subtractive)
    }

    /// Bounds of every brush in the level
    pub fn bounds(&self) -> Option<Aabb> {
        self.brushes
            .iter()
            .map(Brush::aabb)
            .reduce(|acc, b| acc.merged(&b))
    }

    /// Carve solid brushes with the subtractive brush at `index`.
    ///
    /// The tool moves to the end of the list.
    pub fn subtract_at(&mut self, index: usize, config: &SubtractConfig) -> Result<SubtractStats> {
        self.check_index(index)?;
        if !self.brushes[index].is_subtractive() {
            return Err(Error::NotSubtractive { index });
        }

        let mut brushes = std::mem::take(&mut self.brushes);
        let tool = brushes.remove(index);
        let (carved, stats) = brush::subtract_with_stats(brushes, tool, config);
        self.brushes = carved;

        log::info!(
            "Subtracted brush {}: {} carved into {} fragments, {} brushes in level",
            index, stats.carved, stats.fragments, self.len()
        );
        Ok(stats)
    }

    /// `subtract_at` with the last subtractive brush in the list
    pub fn subtract_last(&mut self, config: &SubtractConfig) -> Result<SubtractStats> {
        let index = self.last_subtractive().ok_or(Error::NoSubtractiveBrush)?;
        self.subtract_at(index, config)
    }

    /// Remove brushes with any extent at or below `epsilon`. Returns how many went.
    pub fn prune_degenerate(&mut self, epsilon: f32) -> usize {
        let before = self.brushes.len();
        self.brushes.retain(|b| b.is_valid(epsilon));
        before - self.brushes.len()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.brushes.len() {
            return Err(Error::NoSuchBrush { index, len: self.brushes.len() });
        }
        Ok(())
    }
}
