//! Changed-position set backed by a roaring bitmap.
//!
//! Serialization uses the roaring portable format, so encoded sets are
//! readable by any other roaring implementation.

use crate::error::{PatchError, Result};
use roaring::RoaringBitmap;
use std::io::{Cursor, Write};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSet(RoaringBitmap);

impl PositionSet {
    pub fn new() -> Self {
        PositionSet(RoaringBitmap::new())
    }

    /// Appends `position`, which must be greater than every member already present.
    /// Returns `false` and leaves the set unchanged otherwise.
    pub fn push(&mut self, position: u32) -> bool {
        self.0.push(position)
    }

    pub fn contains(&self, position: u32) -> bool {
        self.0.contains(position)
    }

    pub fn len(&self) -> u64 {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter()
    }

    /// Size in bytes of the serialized form.
    pub fn serialized_len(&self) -> usize {
        self.0.serialized_size()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.0.serialize_into(writer)?;
        Ok(())
    }

    /// Decodes a set from the front of `bytes`, returning it together with the
    /// number of bytes the encoding actually occupied.
    pub fn read_from(bytes: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = Cursor::new(bytes);
        let bitmap = RoaringBitmap::deserialize_from(&mut cursor).map_err(PatchError::InvalidBitmap)?;
        Ok((PositionSet(bitmap), cursor.position() as usize))
    }
}

impl FromIterator<u32> for PositionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        PositionSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_ascending_only() {
        let mut set = PositionSet::new();
        assert!(set.push(3));
        assert!(set.push(7));
        assert!(!set.push(5));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7]);
        assert!(set.contains(7));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_empty_encoding() {
        let set = PositionSet::new();
        let mut bytes = Vec::new();
        set.write_to(&mut bytes).unwrap();
        assert_eq!(bytes, vec![0x3a, 0x30, 0, 0, 0, 0, 0, 0]);
        assert_eq!(set.serialized_len(), bytes.len());
    }

    #[test]
    fn test_read_reports_consumed() {
        let set: PositionSet = [2u32, 40, 70_000].into_iter().collect();
        let mut bytes = Vec::new();
        set.write_to(&mut bytes).unwrap();
        let encoded_len = bytes.len();
        bytes.extend_from_slice(b"tail");

        let (decoded, used) = PositionSet::read_from(&bytes).unwrap();
        assert_eq!(decoded, set);
        assert_eq!(used, encoded_len);
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(matches!(PositionSet::read_from(&[1, 2, 3]), Err(PatchError::InvalidBitmap(_))));
        assert!(matches!(PositionSet::read_from(&[]), Err(PatchError::InvalidBitmap(_))));
    }
}
