use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_POSSIBLE_VOLUME_SIZE, NEEDLE_PADDING_SIZE, OFFSET_SIZE};
use crate::error::TypeError;

/// Position of a needle record inside its volume file.
///
/// Offsets count [`NEEDLE_PADDING_SIZE`] units, not bytes. The value is kept
/// as two parts so the encoded form can be wider than 32 bits without
/// growing to a full `u64`:
///
/// - `lower` — the low 32 bits
/// - `higher` — bits 32..40, only meaningful with the `five-byte-offset`
///   feature; must stay zero otherwise
///
/// Ordering and equality follow the joined numeric value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub lower: u32,
    pub higher: u8,
}

impl Offset {
    /// The zero offset. Also what `set` reports for a key that was absent.
    pub const fn zero() -> Self {
        Self {
            lower: 0,
            higher: 0,
        }
    }

    pub const fn from_u32(units: u32) -> Self {
        Self {
            lower: units,
            higher: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.lower == 0 && self.higher == 0
    }

    /// Join both parts into a single padded-unit count.
    pub fn to_u64(&self) -> u64 {
        (u64::from(self.higher) << 32) | u64::from(self.lower)
    }

    /// Split a padded-unit count into lower and higher parts.
    ///
    /// # Panics
    ///
    /// If `units` does not fit in [`OFFSET_SIZE`] bytes.
    pub fn from_u64(units: u64) -> Self {
        assert!(
            units >> (OFFSET_SIZE * 8) == 0,
            "offset {units} does not fit in {OFFSET_SIZE} bytes"
        );
        Self {
            lower: units as u32,
            higher: (units >> 32) as u8,
        }
    }

    /// Byte position in the volume file.
    pub fn to_actual_offset(&self) -> u64 {
        self.to_u64() * NEEDLE_PADDING_SIZE
    }

    /// Convert a byte position into an offset, checking padding and range.
    pub fn from_actual_offset(actual: u64) -> Result<Self, TypeError> {
        if actual % NEEDLE_PADDING_SIZE != 0 {
            return Err(TypeError::MisalignedOffset(actual));
        }
        if actual >= MAX_POSSIBLE_VOLUME_SIZE {
            return Err(TypeError::OffsetOutOfRange {
                offset: actual,
                max: MAX_POSSIBLE_VOLUME_SIZE,
            });
        }
        Ok(Self::from_u64(actual / NEEDLE_PADDING_SIZE))
    }

    /// Encode into the first [`OFFSET_SIZE`] bytes of `buf`.
    ///
    /// Layout: `lower` big-endian in bytes 0..4, then `higher` in byte 4 when
    /// the offset is five bytes wide.
    ///
    /// # Panics
    ///
    /// If `buf` is shorter than [`OFFSET_SIZE`], or if `higher` is non-zero
    /// while the codec is four bytes wide. Either means the caller and the
    /// codec disagree on the configured width.
    pub fn write_bytes(&self, buf: &mut [u8]) {
        assert!(
            buf.len() >= OFFSET_SIZE,
            "offset buffer holds {} bytes, need {OFFSET_SIZE}",
            buf.len()
        );
        #[cfg(not(feature = "five-byte-offset"))]
        assert!(
            self.higher == 0,
            "offset higher part {} set with a 4-byte offset codec",
            self.higher
        );

        buf[..4].copy_from_slice(&self.lower.to_be_bytes());
        #[cfg(feature = "five-byte-offset")]
        {
            buf[4] = self.higher;
        }
    }

    /// Decode from the first [`OFFSET_SIZE`] bytes of `buf`.
    ///
    /// # Panics
    ///
    /// If `buf` is shorter than [`OFFSET_SIZE`].
    pub fn read_bytes(buf: &[u8]) -> Self {
        assert!(
            buf.len() >= OFFSET_SIZE,
            "offset buffer holds {} bytes, need {OFFSET_SIZE}",
            buf.len()
        );
        let lower = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
        #[cfg(feature = "five-byte-offset")]
        let higher = buf[4];
        #[cfg(not(feature = "five-byte-offset"))]
        let higher = 0;
        Self { lower, higher }
    }
}

impl PartialOrd for Offset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Offset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u64().cmp(&other.to_u64())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_actual_offset())
    }
}

impl From<u32> for Offset {
    fn from(units: u32) -> Self {
        Self::from_u32(units)
    }
}
