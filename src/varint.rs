//! Signed variable-length integers.
//!
//! Values are zig-zag folded so small magnitudes of either sign stay short,
//! then written as little-endian groups of 7 bits with the high bit set on
//! every byte except the last.

use crate::error::{PatchError, Result};

/// Longest encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

fn zigzag_decode(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

/// Appends the encoding of `value` to `out` and returns the number of bytes written.
pub fn write_varint(out: &mut Vec<u8>, value: i64) -> usize {
    let mut n = zigzag_encode(value);
    let start = out.len();
    loop {
        let low7 = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(low7);
            return out.len() - start;
        }
        out.push(low7 | 0x80);
    }
}

/// Number of bytes `write_varint` would emit for `value`.
pub fn varint_len(value: i64) -> usize {
    let mut n = zigzag_encode(value);
    let mut len = 1;
    while n >= 0x80 {
        n >>= 7;
        len += 1;
    }
    len
}

/// Decodes a varint from the front of `buf`, returning the value and the
/// number of bytes consumed.
pub fn read_varint(buf: &[u8]) -> Result<(i64, usize)> {
    let mut result: u64 = 0;
    let mut shift = 0u32;
    for (i, &b) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return Err(PatchError::MalformedVarint);
        }
        if b < 0x80 {
            // The tenth byte may only carry the single remaining bit.
            if i == MAX_VARINT_LEN - 1 && b > 1 {
                return Err(PatchError::MalformedVarint);
            }
            result |= (b as u64) << shift;
            return Ok((zigzag_decode(result), i + 1));
        }
        result |= ((b & 0x7f) as u64) << shift;
        shift += 7;
    }
    Err(PatchError::Truncated {
        needed: buf.len() + 1,
        available: buf.len(),
    })
}
