//! # Bitpatch
//!
//! A positional delta codec for byte buffers that stay largely aligned
//! between versions, such as successive snapshots of a fixed-layout blob.
//!
//! A [`Patch`] records the length of the new buffer, the set of offsets whose
//! byte changed (kept in a roaring bitmap) and the new bytes at those offsets.
//! There is no alignment search: an insertion near the front of a buffer
//! marks every following byte as changed.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitpatch::{apply, compute_delta, deserialize, serialize};
//!
//! let old = b"hello world";
//! let new = b"hello warld!";
//!
//! let patch = compute_delta(old, new);
//! let bytes = serialize(&patch);
//!
//! let parsed = deserialize(&bytes).unwrap();
//! assert_eq!(apply(&parsed, old), new.to_vec());
//! ```
//!
//! ### Empty sources
//!
//! By default a patch computed against an empty source keeps a target length
//! of zero, matching patches produced by earlier tooling, and applies to an
//! empty buffer. Use [`EmptySourceMode::Reconstruct`] to record the real
//! length instead:
//!
//! ```rust
//! use bitpatch::{compute_delta, compute_delta_with, DeltaConfig, EmptySourceMode};
//!
//! assert!(compute_delta(b"", b"abc").apply(b"").is_empty());
//!
//! let config = DeltaConfig::default().with_empty_source(EmptySourceMode::Reconstruct);
//! let patch = compute_delta_with(b"", b"abc", &config);
//! assert_eq!(patch.apply(b""), b"abc".to_vec());
//! ```

pub mod apply;
pub mod batch;
pub mod bitmap;
pub mod config;
pub mod container;
pub mod delta;
pub mod error;
pub mod patch;
pub mod varint;

// Re-export commonly used types for convenience
pub use apply::apply;
pub use bitmap::PositionSet;
pub use config::{DeltaConfig, EmptySourceMode};
pub use container::{deserialize, read_patch, serialize, write_patch};
pub use delta::{compute_delta, compute_delta_with};
pub use error::{PatchError, Result};
pub use patch::{Patch, PatchStats};

/// Computes a patch and returns it already serialized.
///
/// # Example
///
/// ```rust
/// use bitpatch::{diff_bytes, patch_bytes};
///
/// let old = [1u8, 2, 3];
/// let new = [1u8, 2, 4];
/// let delta = diff_bytes(&old, &new);
/// assert_eq!(patch_bytes(&delta, &old).unwrap(), new.to_vec());
/// ```
pub fn diff_bytes(source: &[u8], target: &[u8]) -> Vec<u8> {
    serialize(&compute_delta(source, target))
}

/// Parses a serialized patch and applies it to `source`.
pub fn patch_bytes(patch: &[u8], source: &[u8]) -> Result<Vec<u8>> {
    let patch = deserialize(patch)?;
    Ok(apply(&patch, source))
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
