//! Color links between areas.
//!
//! A link maps one source area to a set of target areas. Setting the
//! source's color copies it to the targets; links are directed and one
//! level deep.

use std::collections::{BTreeMap, BTreeSet};

use kitstudio_core::Area;
use serde::Serialize;

static NO_TARGETS: BTreeSet<Area> = BTreeSet::new();

/// Directed one-to-many mapping from source area to target areas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkGraph {
    links: BTreeMap<Area, BTreeSet<Area>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions `targets` into the target set of `source` and returns the full set.
    ///
    /// The source itself is never stored as its own target, and no entry is
    /// created when no other target is given. Existing colors are not
    /// copied; propagation happens on the next color write.
    pub fn link<I>(&mut self, source: Area, targets: I) -> &BTreeSet<Area>
    where
        I: IntoIterator<Item = Area>,
    {
        let targets: BTreeSet<Area> = targets.into_iter().filter(|t| *t != source).collect();
        if targets.is_empty() {
            return self.targets_of(source.as_str());
        }
        let entry = self.links.entry(source).or_default();
        entry.extend(targets);
        entry
    }

    /// Removes `source` as a source key. Returns whether it was linked.
    ///
    /// Entries of other sources that list `source` as a target are kept.
    pub fn unlink(&mut self, source: &str) -> bool {
        self.links.remove(source).is_some()
    }

    /// Direct targets of `source`; empty when unlinked.
    pub fn targets_of(&self, source: &str) -> &BTreeSet<Area> {
        self.links.get(source).unwrap_or(&NO_TARGETS)
    }

    /// Whether `source` has a link entry.
    pub fn is_linked(&self, source: &str) -> bool {
        self.links.contains_key(source)
    }

    /// Iterates over `(source, targets)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Area, &BTreeSet<Area>)> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
