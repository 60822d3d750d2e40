use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// How `ascending_visit` holds the map lock while the visitor runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitMode {
    /// Copy every `(key, value)` pair under a shared lock, release it, then
    /// sort and visit the copy. The visitor sees the map as of the start of
    /// the call and may call back into the map. Costs one extra stored value
    /// per entry for the duration of the traversal.
    #[default]
    Snapshot,
    /// Hold the shared lock for the whole traversal and copy only the keys.
    /// Writers block until the visitor finishes. The visitor must not call
    /// back into the same map.
    HoldLock,
}

/// Configuration for a [`CompactMap`](crate::CompactMap).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactMapConfig {
    /// Entries to reserve up front. Loaders that know the index log length
    /// should set this to avoid rehashing during replay.
    pub initial_capacity: usize,
    /// Lock policy for ascending traversals.
    pub visit_mode: VisitMode,
}

impl CompactMapConfig {
    /// Parse a config from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> MapResult<Self> {
        toml::from_str(s).map_err(|e| MapError::Config(e.to_string()))
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_visit_mode(mut self, visit_mode: VisitMode) -> Self {
        self.visit_mode = visit_mode;
        self
    }
}
