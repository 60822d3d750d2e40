use serde::{Deserialize, Serialize};

use needle_types::{NeedleId, Size};

/// Live and tombstone accounting for one needle map.
///
/// Compaction schedulers compare [`MapStats::garbage_ratio`] against their
/// threshold to decide when a volume is worth rewriting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    /// Entries with a non-negative size.
    pub file_count: u64,
    /// Tombstoned entries.
    pub deleted_count: u64,
    /// Sum of live sizes.
    pub content_bytes: u64,
    /// Sum of the original sizes of tombstoned entries.
    pub deleted_bytes: u64,
    /// Highest key present, live or tombstoned.
    pub max_key: NeedleId,
}

impl MapStats {
    pub(crate) fn record(&mut self, key: NeedleId, size: Size) {
        if size.is_deleted() {
            self.deleted_count += 1;
            self.deleted_bytes += u64::from(size.unsigned_abs());
        } else {
            self.file_count += 1;
            self.content_bytes += u64::from(size.unsigned_abs());
        }
        self.max_key = self.max_key.max(key);
    }

    /// Fraction of indexed bytes that belong to tombstones, in `0.0..=1.0`.
    pub fn garbage_ratio(&self) -> f64 {
        let total = self.content_bytes + self.deleted_bytes;
        if total == 0 {
            return 0.0;
        }
        self.deleted_bytes as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_no_garbage() {
        let stats = MapStats::default();
        assert_eq!(stats.garbage_ratio(), 0.0);
        assert_eq!(stats.max_key, NeedleId::new(0));
    }

    #[test]
    fn record_tracks_max_key_and_bytes() {
        let mut stats = MapStats::default();
        stats.record(NeedleId::new(5), Size(300));
        stats.record(NeedleId::new(2), Size(-100));
        assert_eq!(stats.file_count, 1);
        assert_eq!(stats.deleted_count, 1);
        assert_eq!(stats.max_key, NeedleId::new(5));
        assert_eq!(stats.garbage_ratio(), 0.25);
    }
}
