use crate::patch::Patch;

/// Rebuilds the target buffer from `source` and `patch`.
///
/// A patch with a non-positive target length always yields an empty buffer,
/// whatever the source holds. Source bytes past the target length are ignored.
pub fn apply(patch: &Patch, source: &[u8]) -> Vec<u8> {
    if patch.target_length <= 0 {
        return Vec::new();
    }
    let size = patch.target_length as usize;
    let mut out = vec![0u8; size];

    let source = if source.len() >= size { &source[..size] } else { source };
    let mut replacement = patch.replacement.iter();
    let mut missing = 0usize;

    for (i, (slot, &byte)) in out.iter_mut().zip(source).enumerate() {
        if patch.positions.contains(i as u32) {
            match replacement.next() {
                Some(&new) => *slot = new,
                None => missing += 1,
            }
        } else {
            *slot = byte;
        }
    }

    // Whatever is left belongs to offsets past the end of the source.
    let tail = replacement.as_slice();
    let room = size - source.len();
    let copied = tail.len().min(room);
    out[source.len()..source.len() + copied].copy_from_slice(&tail[..copied]);

    if missing > 0 || copied < tail.len() {
        log::warn!(
            "malformed patch: {} changed positions without replacement, {} replacement bytes dropped",
            missing,
            tail.len() - copied
        );
    }
    log::debug!(
        "applied patch: {} source bytes -> {} target bytes ({} appended)",
        source.len(),
        size,
        copied
    );
    out
}

impl Patch {
    pub fn apply(&self, source: &[u8]) -> Vec<u8> {
        apply(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PositionSet;
    use crate::delta::compute_delta;

    #[test]
    fn test_apply_overrides_and_copies() {
        let positions: PositionSet = [1u32, 3].into_iter().collect();
        let patch = Patch::from_parts(4, positions, vec![20, 40]);
        assert_eq!(apply(&patch, &[1, 2, 3, 4]), vec![1, 20, 3, 40]);
    }

    #[test]
    fn test_apply_appends_tail() {
        let patch = compute_delta(&[1, 2, 3], &[1, 2, 3, 4, 5]);
        assert_eq!(patch.apply(&[1, 2, 3]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_apply_truncates_source() {
        let patch = compute_delta(&[1, 5, 3, 4], &[1, 2, 3]);
        assert_eq!(patch.apply(&[1, 5, 3, 4, 9, 9]), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_length_ignores_source() {
        let patch = Patch::from_parts(0, PositionSet::new(), vec![1, 2, 3]);
        assert!(apply(&patch, b"source").is_empty());
        let negative = Patch::from_parts(-5, PositionSet::new(), Vec::new());
        assert!(apply(&negative, b"source").is_empty());
    }

    #[test]
    fn test_short_source_leaves_zeroes() {
        let patch = compute_delta(&[1, 2, 3, 4], &[1, 2, 3, 4]);
        assert_eq!(patch.apply(&[1, 2]), vec![1, 2, 0, 0]);
    }

    #[test]
    fn test_malformed_patch_does_not_panic() {
        let positions: PositionSet = [0u32, 1, 2].into_iter().collect();
        let short = Patch::from_parts(3, positions, vec![7]);
        let out = apply(&short, &[1, 2, 3]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], 7);

        let long = Patch::from_parts(2, PositionSet::new(), vec![7, 8, 9]);
        assert_eq!(apply(&long, &[]), vec![7, 8]);
    }
}
