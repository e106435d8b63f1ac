use crate::bitmap::PositionSet;
use crate::varint::varint_len;

/// A positional delta: the length of the buffer it rebuilds, the offsets
/// whose bytes must be overridden, and the override values in ascending
/// offset order.
///
/// Patches are built once, by [`crate::compute_delta`] or by parsing, and
/// are never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    pub(crate) target_length: i64,
    pub(crate) positions: PositionSet,
    pub(crate) replacement: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchStats {
    pub target_length: i64,
    pub changed: u64,
    pub encoded_size: usize,
}

impl Patch {
    /// Assembles a patch from raw parts without validating them.
    ///
    /// `apply` relies on `replacement` holding exactly one byte per member of
    /// `positions`; a patch that breaks this yields unspecified trailing bytes.
    pub fn from_parts(target_length: i64, positions: PositionSet, replacement: Vec<u8>) -> Self {
        Self { target_length, positions, replacement }
    }

    pub fn target_length(&self) -> i64 {
        self.target_length
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }

    /// True when applying the patch returns the (possibly truncated) source unchanged.
    pub fn is_identity(&self) -> bool {
        self.positions.is_empty() && self.replacement.is_empty()
    }

    /// Exact length of the serialized form.
    pub fn encoded_len(&self) -> usize {
        let bitmap_len = self.positions.serialized_len();
        varint_len(self.target_length) + varint_len(bitmap_len as i64) + bitmap_len + self.replacement.len()
    }

    pub fn stats(&self) -> PatchStats {
        PatchStats {
            target_length: self.target_length,
            changed: self.positions.len(),
            encoded_size: self.encoded_len(),
        }
    }
}
