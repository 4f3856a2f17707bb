//! Bounded undo/redo history.
//!
//! A fixed-capacity stack of immutable snapshots with a cursor. Committing
//! after an undo discards the redo branch; committing past capacity evicts
//! the oldest snapshot.

use std::collections::{BTreeMap, VecDeque};

use kitstudio_core::{
    Area, GradientConfig, HexColor, LogoDecoration, PatternConfig, TextDecoration,
};
use kitstudio_settings::MAX_HISTORY_DEPTH;
use serde::{Deserialize, Serialize};

/// Deep copy of the undoable values.
///
/// Fill types and links are not part of a snapshot, so undo/redo never
/// changes how an area is painted or linked, only the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub colors: BTreeMap<Area, HexColor>,
    pub patterns: BTreeMap<Area, Option<PatternConfig>>,
    pub gradients: BTreeMap<Area, Option<GradientConfig>>,
    pub texts: Vec<TextDecoration>,
    pub logos: Vec<LogoDecoration>,
}

/// Snapshot stack with a cursor
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryManager {
    entries: VecDeque<HistorySnapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

impl HistoryManager {
    /// Creates an empty history holding at most `capacity` snapshots (clamped to 1..=50).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_DEPTH);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Appends `snapshot` after the cursor and moves the cursor onto it.
    ///
    /// Snapshots after the cursor are dropped first. Returns the new cursor.
    pub fn commit(&mut self, snapshot: HistorySnapshot) -> usize {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        let index = self.entries.len() - 1;
        self.cursor = Some(index);
        tracing::trace!("History commit -> {}/{}", index, self.entries.len());
        index
    }

    /// Moves the cursor back one step and returns the snapshot there.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                tracing::trace!("History undo -> {}", i - 1);
                self.entries.get(i - 1)
            }
            _ => None,
        }
    }

    /// Moves the cursor forward one step and returns the snapshot there.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                tracing::trace!("History redo -> {}", i + 1);
                self.entries.get(i + 1)
            }
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.entries.len())
    }

    /// Cursor position; `None` while the history is empty.
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&HistorySnapshot> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(MAX_HISTORY_DEPTH)
    }
}
