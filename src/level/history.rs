//! Undo/redo by whole-level JSON snapshots

use std::collections::VecDeque;

use crate::core::Result;
use super::Level;

/// History limits
#[derive(Clone, Copy, Debug)]
pub struct HistoryConfig {
    /// Oldest undo snapshots are discarded beyond this
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_snapshots: 100 }
    }
}

/// Snapshot-based undo/redo stacks
#[derive(Debug, Default)]
pub struct History {
    config: HistoryConfig,
    undo: VecDeque<String>,
    redo: Vec<String>,
}

impl History {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }

    /// Snapshot `level` before it is modified. Clears redo.
    pub fn record(&mut self, level: &Level) -> Result<()> {
        self.undo.push_back(serde_json::to_string(level)?);
        while self.undo.len() > self.config.max_snapshots {
            self.undo.pop_front();
        }
        self.redo.clear();
        Ok(())
    }

    /// Restore the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self, level: &mut Level) -> Result<bool> {
        let Some(snapshot) = self.undo.pop_back() else {
            return Ok(false);
        };
        let previous: Level = serde_json::from_str(&snapshot)?;
        self.redo.push(serde_json::to_string(level)?);
        *level = previous;
        log::debug!("undo: {} left, {} redoable", self.undo.len(), self.redo.len());
        Ok(true)
    }

    /// Re-apply the last undone change. Returns false if there is none.
    pub fn redo(&mut self, level: &mut Level) -> Result<bool> {
        let Some(snapshot) = self.redo.pop() else {
            return Ok(false);
        };
        let next: Level = serde_json::from_str(&snapshot)?;
        self.undo.push_back(serde_json::to_string(level)?);
        *level = next;
        log::debug!("redo: {} undoable, {} left", self.undo.len(), self.redo.len());
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Brush, BrushOp, SubtractConfig};
    use crate::core::Vec3;

    fn carved_level() -> Level {
        let solid = Brush::new(Vec3::ZERO, Vec3::splat(10.0), BrushOp::Add).unwrap();
        let tool = Brush::new(Vec3::ZERO, Vec3::splat(4.0), BrushOp::Subtract).unwrap();
        Level::from_brushes(vec![solid, tool])
    }

    #[test]
    fn test_undo_redo_subtraction() {
        let mut level = carved_level();
        let original = level.clone();
        let mut history = History::default();

        history.record(&level).unwrap();
        level.subtract_at(1, &SubtractConfig::default()).unwrap();
        let carved = level.clone();
        assert_eq!(carved.len(), 7);

        assert!(history.undo(&mut level).unwrap());
        assert_eq!(level, original);
        assert!(history.can_redo());

        assert!(history.redo(&mut level).unwrap());
        assert_eq!(level, carved);
        assert!(!history.redo(&mut level).unwrap());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut level = carved_level();
        let mut history = History::default();

        history.record(&level).unwrap();
        level.push(Brush::new(Vec3::splat(20.0), Vec3::ONE, BrushOp::Add).unwrap());
        history.undo(&mut level).unwrap();
        assert!(history.can_redo());

        history.record(&level).unwrap();
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshot_limit() {
        let mut level = Level::new();
        let mut history = History::new(HistoryConfig { max_snapshots: 2 });

        for i in 0..4 {
            history.record(&level).unwrap();
            level.push(Brush::new(Vec3::new(i as f32 * 2.0, 0.0, 0.0), Vec3::ONE, BrushOp::Add).unwrap());
        }

        assert!(history.undo(&mut level).unwrap());
        assert!(history.undo(&mut level).unwrap());
        assert!(!history.undo(&mut level).unwrap());
        assert_eq!(level.len(), 2);
    }

    #[test]
    fn test_empty_history() {
        let mut level = carved_level();
        let mut history = History::default();
        assert!(!history.can_undo());
        assert!(!history.undo(&mut level).unwrap());
        assert_eq!(level, carved_level());
    }
}
