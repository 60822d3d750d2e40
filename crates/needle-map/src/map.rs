//! The compact needle map.
//!
//! [`CompactMap`] keeps a `HashMap<NeedleId, CompactNeedleValue>` behind a
//! single `RwLock`. Lookups and key snapshots take the lock shared; `set` and
//! `delete` take it exclusive.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use tracing::debug;

use needle_types::{NeedleId, Offset, Size};

use crate::compact::CompactNeedleValue;
use crate::config::{CompactMapConfig, VisitMode};
use crate::error::MapResult;
use crate::stats::MapStats;
use crate::traits::NeedleIndex;
use crate::value::NeedleValue;

/// In-memory index from needle id to the latest record's offset and size.
///
/// One instance belongs to one volume. Tombstones stay in the map as
/// negative sizes until the whole index is rebuilt.
pub struct CompactMap {
    config: CompactMapConfig,
    values: RwLock<HashMap<NeedleId, CompactNeedleValue>>,
}

impl CompactMap {
    /// Create an empty map with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CompactMapConfig::default())
    }

    /// Create an empty map pre-sized and configured by `config`.
    pub fn with_config(config: CompactMapConfig) -> Self {
        debug!(
            initial_capacity = config.initial_capacity,
            visit_mode = ?config.visit_mode,
            "compact map created"
        );
        Self {
            values: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &CompactMapConfig {
        &self.config
    }

    /// Like [`NeedleIndex::set`], but takes the record's byte position in
    /// the volume file and checks it against the offset codec.
    pub fn set_actual(
        &self,
        key: NeedleId,
        actual_offset: u64,
        size: Size,
    ) -> MapResult<(Offset, Size)> {
        let offset = Offset::from_actual_offset(actual_offset)?;
        Ok(self.set(key, offset, size))
    }

    /// Live and tombstone accounting in a single pass under a shared lock.
    pub fn stats(&self) -> MapStats {
        let map = self.values.read().expect("lock poisoned");
        let mut stats = MapStats::default();
        for (key, value) in map.iter() {
            stats.record(*key, value.size);
        }
        stats
    }

    /// Copy all entries, release the lock, then visit the sorted copy.
    fn visit_snapshot<E, F>(&self, mut visit: F) -> Result<usize, E>
    where
        F: FnMut(NeedleValue) -> Result<(), E>,
    {
        let mut entries: Vec<(NeedleId, CompactNeedleValue)> = {
            let map = self.values.read().expect("lock poisoned");
            map.iter().map(|(key, value)| (*key, *value)).collect()
        };
        entries.sort_unstable_by_key(|(key, _)| *key);

        let total = entries.len();
        for (visited, (key, value)) in entries.into_iter().enumerate() {
            if let Err(e) = visit(value.to_needle_value(key)) {
                debug!(visited = visited + 1, total, "ascending visit aborted by visitor");
                return Err(e);
            }
        }
        Ok(total)
    }

    /// Sort the keys and visit while still holding the shared lock.
    fn visit_locked<E, F>(&self, mut visit: F) -> Result<usize, E>
    where
        F: FnMut(NeedleValue) -> Result<(), E>,
    {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<NeedleId> = map.keys().copied().collect();
        keys.sort_unstable();

        let total = keys.len();
        for (visited, key) in keys.into_iter().enumerate() {
            // The lock is held, so every snapshot key is still present.
            let Some(value) = map.get(&key) else {
                continue;
            };
            if let Err(e) = visit(value.to_needle_value(key)) {
                debug!(visited = visited + 1, total, "ascending visit aborted by visitor");
                return Err(e);
            }
        }
        Ok(total)
    }
}

impl Default for CompactMap {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedleIndex for CompactMap {
    fn set(&self, key: NeedleId, offset: Offset, size: Size) -> (Offset, Size) {
        let value = CompactNeedleValue::new(offset, size);
        let mut map = self.values.write().expect("lock poisoned");
        match map.insert(key, value) {
            Some(previous) => (previous.offset(), previous.size),
            None => (Offset::zero(), Size(0)),
        }
    }

    fn get(&self, key: NeedleId) -> Option<NeedleValue> {
        let map = self.values.read().expect("lock poisoned");
        map.get(&key).map(|value| value.to_needle_value(key))
    }

    fn delete(&self, key: NeedleId) -> Size {
        let mut map = self.values.write().expect("lock poisoned");
        match map.get_mut(&key) {
            Some(value) if value.size.is_valid() => {
                let previous = value.size;
                value.size = previous.negate();
                previous
            }
            _ => Size(0),
        }
    }

    fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    fn ascending_visit<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(NeedleValue) -> Result<(), E>,
        Self: Sized,
    {
        let mode = self.config.visit_mode;
        let visited = match mode {
            VisitMode::Snapshot => self.visit_snapshot(visit)?,
            VisitMode::HoldLock => self.visit_locked(visit)?,
        };
        debug!(visited, ?mode, "ascending visit complete");
        Ok(())
    }
}

impl fmt::Display for CompactMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elements", self.len())
    }
}

impl fmt::Debug for CompactMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactMap")
            .field("config", &self.config)
            .field("entry_count", &self.len())
            .finish()
    }
}
