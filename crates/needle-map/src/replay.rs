//! Rebuilding a needle map from index log records.
//!
//! A volume's index log is an append-only sequence of `(key, offset, size)`
//! records. Reading the file is the loader's job; this module applies the
//! decoded records in order.

use tracing::debug;

use crate::traits::NeedleIndex;
use crate::value::NeedleValue;

/// Counts from one [`replay`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Records applied as `set`.
    pub sets: u64,
    /// Records applied as `delete`.
    pub deletes: u64,
    /// Deletes that tombstoned a live entry.
    pub tombstoned: u64,
}

/// Apply index log records to `index` in order.
///
/// A record with a non-zero offset and a valid size is a write and becomes a
/// `set`. Anything else is a delete marker and becomes a `delete`; deleting a
/// key that is absent or already tombstoned is a no-op.
pub fn replay<I, R>(index: &I, records: R) -> ReplayStats
where
    I: NeedleIndex + ?Sized,
    R: IntoIterator<Item = NeedleValue>,
{
    let mut stats = ReplayStats::default();
    for record in records {
        if !record.offset.is_zero() && record.size.is_valid() {
            index.set(record.key, record.offset, record.size);
            stats.sets += 1;
        } else {
            stats.deletes += 1;
            if index.delete(record.key).raw() > 0 {
                stats.tombstoned += 1;
            }
        }
    }
    debug!(
        sets = stats.sets,
        deletes = stats.deletes,
        tombstoned = stats.tombstoned,
        entries = index.len(),
        "index log replayed"
    );
    stats
}
