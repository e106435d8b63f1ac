//! Positional delta computation.
//!
//! Bytes are compared offset by offset over the overlap of the two buffers;
//! there is no alignment search. Target bytes past the end of the source are
//! always recorded as changed.

use crate::bitmap::PositionSet;
use crate::config::{DeltaConfig, EmptySourceMode};
use crate::patch::Patch;

/// Computes the patch turning `source` into `target` with default settings.
pub fn compute_delta(source: &[u8], target: &[u8]) -> Patch {
    compute_delta_with(source, target, &DeltaConfig::default())
}

/// Computes the patch turning `source` into `target`.
///
/// Offsets are stored as `u32`, so buffers are limited to 4 GiB.
pub fn compute_delta_with(source: &[u8], target: &[u8], config: &DeltaConfig) -> Patch {
    if source.is_empty() {
        // Every target byte is new; there is nothing to mark.
        let target_length = match config.empty_source {
            EmptySourceMode::Compatible => 0,
            EmptySourceMode::Reconstruct => target.len() as i64,
        };
        log::debug!(
            "empty source: storing {} target bytes verbatim (target_length {})",
            target.len(),
            target_length
        );
        return Patch::from_parts(target_length, PositionSet::new(), target.to_vec());
    }
    if target.is_empty() {
        return Patch::default();
    }

    debug_assert!(target.len() - 1 <= u32::MAX as usize, "offsets must fit in u32");

    let mut positions = PositionSet::new();
    let mut replacement = Vec::new();

    for (i, (&old, &new)) in source.iter().zip(target).enumerate() {
        if old != new {
            positions.push(i as u32);
            replacement.push(new);
        }
    }

    for (i, &new) in target.iter().enumerate().skip(source.len()) {
        positions.push(i as u32);
        replacement.push(new);
    }

    log::debug!(
        "computed delta: {} of {} target bytes changed (source {} bytes)",
        replacement.len(),
        target.len(),
        source.len()
    );

    Patch::from_parts(target.len() as i64, positions, replacement)
}
