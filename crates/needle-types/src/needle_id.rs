use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NEEDLE_ID_SIZE;
use crate::error::TypeError;

/// Unique key of a needle within one volume.
///
/// Ordering is plain numeric ordering of the underlying `u64`, which is the
/// order ascending traversals and compaction rely on.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeedleId(u64);

impl NeedleId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Big-endian byte encoding.
    pub fn to_bytes(&self) -> [u8; NEEDLE_ID_SIZE] {
        self.0.to_be_bytes()
    }

    /// Decode from exactly [`NEEDLE_ID_SIZE`] big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; NEEDLE_ID_SIZE] =
            bytes.try_into().map_err(|_| TypeError::InvalidLength {
                expected: NEEDLE_ID_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(u64::from_be_bytes(arr)))
    }

    /// Lowercase hex without leading zeros (`0` for the zero id).
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }

    /// Parse from a hex string of at most 16 digits. Leading zeros are allowed.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Err(TypeError::InvalidHex("empty string".into()));
        }
        if s.len() > NEEDLE_ID_SIZE * 2 {
            return Err(TypeError::InvalidLength {
                expected: NEEDLE_ID_SIZE * 2,
                actual: s.len(),
            });
        }
        let padded = format!("{s:0>width$}", width = NEEDLE_ID_SIZE * 2);
        let mut arr = [0u8; NEEDLE_ID_SIZE];
        hex::decode_to_slice(&padded, &mut arr)
            .map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Ok(Self(u64::from_be_bytes(arr)))
    }
}

impl fmt::Debug for NeedleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NeedleId({:x})", self.0)
    }
}

impl fmt::Display for NeedleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl From<u64> for NeedleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<NeedleId> for u64 {
    fn from(id: NeedleId) -> Self {
        id.0
    }
}
