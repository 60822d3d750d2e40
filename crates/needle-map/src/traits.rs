use needle_types::{NeedleId, Offset, Size};

use crate::value::NeedleValue;

/// Operation surface of a volume's needle index.
///
/// Index loaders replay a log through `set`/`delete`, the volume read and
/// write paths call `get`/`set`, and compaction drives `ascending_visit`.
/// All implementations must satisfy these invariants:
/// - A key has at most one value; `set` is an unconditional overwrite.
/// - `delete` tombstones by negating the size and never removes the slot.
/// - `len` counts live and tombstoned slots.
/// - `ascending_visit` yields keys in strictly increasing numeric order.
pub trait NeedleIndex: Send + Sync {
    /// Insert or overwrite the entry for `key`.
    ///
    /// Returns the previous offset and size, live or tombstoned, or
    /// `(Offset::zero(), Size(0))` if the key was absent. There is no version
    /// check; callers resolve conflicts before calling.
    fn set(&self, key: NeedleId, offset: Offset, size: Size) -> (Offset, Size);

    /// Look up the entry for `key`.
    ///
    /// Tombstoned entries are returned as-is; check the size sign.
    fn get(&self, key: NeedleId) -> Option<NeedleValue>;

    /// Tombstone the entry for `key` and return its previous size.
    ///
    /// Returns `Size(0)` without changing anything when the key is absent or
    /// already tombstoned, so callers can tell whether free-space accounting
    /// should change.
    fn delete(&self, key: NeedleId) -> Size;

    /// Number of slots, live and tombstoned.
    fn len(&self) -> usize;

    /// Returns `true` if the index holds no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `visit` once per entry in ascending key order.
    ///
    /// The first error returned by `visit` stops the traversal and is
    /// returned unchanged.
    fn ascending_visit<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(NeedleValue) -> Result<(), E>,
        Self: Sized;
}
