//! Binary patch container.
//!
//! Layout, with no padding and no magic number:
//!
//! ```text
//! [varint target_length][varint bitmap_len][bitmap bytes][replacement bytes...]
//! ```
//!
//! The replacement bytes run to the end of the buffer.

use crate::bitmap::PositionSet;
use crate::error::{PatchError, Result};
use crate::patch::Patch;
use crate::varint::{read_varint, write_varint};
use std::io::{Read, Write};

pub fn serialize(patch: &Patch) -> Vec<u8> {
	let mut out = Vec::with_capacity(patch.encoded_len());
	encode_into(&mut out, patch);
	out
}

fn encode_into(out: &mut Vec<u8>, patch: &Patch) {
	let bitmap_len = patch.positions.serialized_len();
	write_varint(out, patch.target_length);
	write_varint(out, bitmap_len as i64);
	// Writing into a Vec cannot fail.
	let _ = patch.positions.write_to(out);
	out.extend_from_slice(&patch.replacement);
	log::trace!(
		"serialized patch: target_length={} bitmap_len={} replacement={}",
		patch.target_length,
		bitmap_len,
		patch.replacement.len()
	);
}

/// Writes the serialized patch and returns the number of bytes written.
pub fn write_patch<W: Write>(writer: &mut W, patch: &Patch) -> Result<u64> {
	let bytes = serialize(patch);
	writer.write_all(&bytes)?;
	Ok(bytes.len() as u64)
}

pub fn deserialize(bytes: &[u8]) -> Result<Patch> {
	let (target_length, n1) = read_varint(bytes)?;
	if target_length < 0 {
		return Err(PatchError::InvalidLength(target_length));
	}
	let (declared_len, n2) = read_varint(&bytes[n1..])?;
	if declared_len < 0 {
		return Err(PatchError::InvalidLength(declared_len));
	}

	let start = n1 + n2;
	let available = bytes.len() - start;
	let declared = usize::try_from(declared_len).map_err(|_| PatchError::InvalidLength(declared_len))?;
	if declared > available {
		return Err(PatchError::Truncated { needed: declared, available });
	}

	let (positions, consumed) = PositionSet::read_from(&bytes[start..start + declared])?;
	if consumed != declared {
		log::debug!("bitmap declared {} bytes but occupied {}", declared, consumed);
	}
	let replacement = bytes[start + consumed..].to_vec();

	log::trace!(
		"parsed patch: target_length={} changed={} replacement={}",
		target_length,
		positions.len(),
		replacement.len()
	);
	Ok(Patch::from_parts(target_length, positions, replacement))
}

/// Reads `reader` to the end and parses the bytes as one patch.
pub fn read_patch<R: Read>(reader: &mut R) -> Result<Patch> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	deserialize(&buffer)
}

impl Patch {
	pub fn to_bytes(&self) -> Vec<u8> {
		serialize(self)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		deserialize(bytes)
	}
}
