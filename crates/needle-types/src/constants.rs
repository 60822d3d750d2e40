//! Width constants shared by every component that reads or writes needle
//! index values.

/// Encoded width of a [`NeedleId`](crate::NeedleId) in bytes.
pub const NEEDLE_ID_SIZE: usize = 8;

/// Encoded width of a [`Size`](crate::Size) in bytes.
pub const SIZE_SIZE: usize = 4;

/// Needle records start on multiples of this many bytes. Stored offsets are
/// expressed in these units, not in bytes.
pub const NEEDLE_PADDING_SIZE: u64 = 8;

/// Encoded width of an [`Offset`](crate::Offset) in bytes.
#[cfg(not(feature = "five-byte-offset"))]
pub const OFFSET_SIZE: usize = 4;

/// Encoded width of an [`Offset`](crate::Offset) in bytes.
#[cfg(feature = "five-byte-offset")]
pub const OFFSET_SIZE: usize = 5;

/// Largest volume, in bytes, that an offset of [`OFFSET_SIZE`] can address.
pub const MAX_POSSIBLE_VOLUME_SIZE: u64 = (1u64 << (OFFSET_SIZE * 8)) * NEEDLE_PADDING_SIZE;
