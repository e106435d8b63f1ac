//! Parallel helpers for many independent buffers.
//!
//! Each pair is handled on its own; results come back in input order.

use crate::apply::apply;
use crate::config::DeltaConfig;
use crate::delta::compute_delta_with;
use crate::error::Result;
use crate::patch::Patch;
use rayon::prelude::*;

fn build_pool(config: &DeltaConfig) -> Result<rayon::ThreadPool> {
	let pool = rayon::ThreadPoolBuilder::new()
		.num_threads(config.threads.max(1))
		.build()?;
	Ok(pool)
}

/// Computes one patch per `(source, target)` pair.
pub fn diff_all(pairs: &[(&[u8], &[u8])], config: &DeltaConfig) -> Result<Vec<Patch>> {
	let pool = build_pool(config)?;
	let patches: Vec<Patch> = pool.install(|| {
		pairs
			.par_iter()
			.map(|&(source, target)| compute_delta_with(source, target, config))
			.collect()
	});
	log::debug!("computed {} patches on {} threads", patches.len(), config.threads);
	Ok(patches)
}

/// Applies each patch to its source buffer.
pub fn apply_all(items: &[(&Patch, &[u8])], config: &DeltaConfig) -> Result<Vec<Vec<u8>>> {
	let pool = build_pool(config)?;
	let outputs: Vec<Vec<u8>> = pool.install(|| {
		items
			.par_iter()
			.map(|&(patch, source)| apply(patch, source))
			.collect()
	});
	log::debug!("applied {} patches on {} threads", outputs.len(), config.threads);
	Ok(outputs)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_batch_preserves_order() {
		let sources: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i; 32]).collect();
		let targets: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i.wrapping_mul(3); 40]).collect();
		let pairs: Vec<(&[u8], &[u8])> = sources
			.iter()
			.zip(&targets)
			.map(|(s, t)| (s.as_slice(), t.as_slice()))
			.collect();

		let config = DeltaConfig::default().with_threads(4);
		let patches = diff_all(&pairs, &config).unwrap();
		assert_eq!(patches.len(), pairs.len());

		let items: Vec<(&Patch, &[u8])> = patches.iter().zip(&sources).map(|(p, s)| (p, s.as_slice())).collect();
		let outputs = apply_all(&items, &config).unwrap();
		assert_eq!(outputs, targets);
	}

	#[test]
	fn test_empty_batch() {
		let config = DeltaConfig::default().with_threads(1);
		assert!(diff_all(&[], &config).unwrap().is_empty());
		assert!(apply_all(&[], &config).unwrap().is_empty());
	}
}
