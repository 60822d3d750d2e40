//! Foundation types for the needle map.
//!
//! A volume is an append-only file holding many needles. This crate defines
//! the fixed-width values used to address a needle inside its volume. Every
//! other crate in the workspace depends on `needle-types`.
//!
//! # Key Types
//!
//! - [`NeedleId`] — Unique 64-bit key of a needle within one volume
//! - [`Offset`] — Padded position of a needle record, split into lower/higher parts
//! - [`Size`] — Record length; negative values mark tombstones
//!
//! # Offset Width
//!
//! The byte width of an encoded [`Offset`] is the build-time constant
//! [`OFFSET_SIZE`]. It is 4 by default and 5 with the `five-byte-offset`
//! feature, which raises the largest addressable volume from 32 GiB to 8 TiB.

pub mod constants;
pub mod error;
pub mod needle_id;
pub mod offset;
pub mod size;

pub use constants::{
    MAX_POSSIBLE_VOLUME_SIZE, NEEDLE_ID_SIZE, NEEDLE_PADDING_SIZE, OFFSET_SIZE, SIZE_SIZE,
};
pub use error::TypeError;
pub use needle_id::NeedleId;
pub use offset::Offset;
pub use size::{Size, TOMBSTONE_FILE_SIZE};
