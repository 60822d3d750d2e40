use std::fmt;

use serde::{Deserialize, Serialize};

use needle_types::{NeedleId, Offset, Size};

/// A needle's index entry as handed to callers.
///
/// Built on demand from a stored [`CompactNeedleValue`](crate::CompactNeedleValue)
/// and its key; the map never stores this type. A negative `size` means the
/// entry is a tombstone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedleValue {
    pub key: NeedleId,
    pub offset: Offset,
    pub size: Size,
}

impl NeedleValue {
    pub fn new(key: NeedleId, offset: Offset, size: Size) -> Self {
        Self { key, offset, size }
    }

    pub fn is_deleted(&self) -> bool {
        self.size.is_deleted()
    }
}

impl fmt::Display for NeedleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} size {}", self.key, self.offset, self.size)
    }
}
