use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker size written for a needle whose delete was recorded without a
/// known original length.
pub const TOMBSTONE_FILE_SIZE: Size = Size(-1);

/// Byte length of a needle's data record, with the tombstone folded into the
/// sign.
///
/// - `size >= 0` — live entry of that length
/// - `size < 0` — tombstone; `-size` is the length the entry had when it was
///   deleted
///
/// Call sites that only care about live data must check [`Size::is_deleted`]
/// before using the value as a length.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Size(pub i32);

impl Size {
    pub const fn raw(&self) -> i32 {
        self.0
    }

    pub fn is_deleted(&self) -> bool {
        self.0 < 0
    }

    /// `true` for a positive size that is not the tombstone marker.
    pub fn is_valid(&self) -> bool {
        self.0 > 0 && *self != TOMBSTONE_FILE_SIZE
    }

    /// Flip between the live and tombstoned encodings of the same length.
    pub fn negate(&self) -> Self {
        Self(-self.0)
    }

    /// Length of the record regardless of tombstone state.
    pub fn unsigned_abs(&self) -> u32 {
        self.0.unsigned_abs()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Size {
    fn from(size: i32) -> Self {
        Self(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_live_and_valid() {
        let size = Size(100);
        assert!(!size.is_deleted());
        assert!(size.is_valid());
    }

    #[test]
    fn negative_size_is_tombstone() {
        let size = Size(100).negate();
        assert_eq!(size, Size(-100));
        assert!(size.is_deleted());
        assert!(!size.is_valid());
        assert_eq!(size.unsigned_abs(), 100);
    }

    #[test]
    fn zero_is_neither_deleted_nor_valid() {
        assert!(!Size(0).is_deleted());
        assert!(!Size(0).is_valid());
    }

    #[test]
    fn tombstone_marker_is_not_valid() {
        assert!(TOMBSTONE_FILE_SIZE.is_deleted());
        assert!(!TOMBSTONE_FILE_SIZE.is_valid());
    }
}
