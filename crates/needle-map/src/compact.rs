//! The per-key stored form of an index entry.

use needle_types::{NeedleId, Offset, Size, OFFSET_SIZE};

use crate::value::NeedleValue;

/// An [`Offset`] packed into exactly [`OFFSET_SIZE`] bytes.
///
/// Kept as a plain array so a map value never owns heap memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompactOffset([u8; OFFSET_SIZE]);

impl CompactOffset {
    pub fn from_offset(offset: Offset) -> Self {
        let mut bytes = [0u8; OFFSET_SIZE];
        offset.write_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn offset(&self) -> Offset {
        Offset::read_bytes(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; OFFSET_SIZE] {
        &self.0
    }
}

impl From<Offset> for CompactOffset {
    fn from(offset: Offset) -> Self {
        Self::from_offset(offset)
    }
}

/// The only thing the map stores per needle id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactNeedleValue {
    pub(crate) offset: CompactOffset,
    pub(crate) size: Size,
}

impl CompactNeedleValue {
    pub fn new(offset: Offset, size: Size) -> Self {
        Self {
            offset: CompactOffset::from_offset(offset),
            size,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset.offset()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn to_needle_value(self, key: NeedleId) -> NeedleValue {
        NeedleValue {
            key,
            offset: self.offset(),
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_offset_roundtrip() {
        let offset = Offset::from_u32(0xdead_beef);
        assert_eq!(CompactOffset::from_offset(offset).offset(), offset);
    }

    #[test]
    fn zero_offset_encodes_to_zero_bytes() {
        let compact = CompactOffset::from(Offset::zero());
        assert_eq!(compact, CompactOffset::default());
        assert!(compact.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn stored_value_stays_small() {
        let expected = if OFFSET_SIZE == 4 { 8 } else { 12 };
        assert_eq!(std::mem::size_of::<CompactNeedleValue>(), expected);
    }

    #[test]
    fn materializes_with_key() {
        let compact = CompactNeedleValue::new(Offset::from_u32(10), Size(20));
        let value = compact.to_needle_value(NeedleId::new(5));
        assert_eq!(value.key, NeedleId::new(5));
        assert_eq!(value.offset, Offset::from_u32(10));
        assert_eq!(value.size, Size(20));
    }
}
