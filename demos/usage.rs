use bitpatch::{apply, compute_delta, deserialize, serialize};

fn main() {
	env_logger::init();

	let old = b"version=1;flags=0000;name=alpha".to_vec();
	let new = b"version=2;flags=0010;name=alpha".to_vec();

	let patch = compute_delta(&old, &new);
	let stats = patch.stats();
	let bytes = serialize(&patch);
	println!(
		"{} bytes -> patch of {} bytes ({} positions changed)",
		new.len(),
		stats.encoded_size,
		stats.changed
	);

	let parsed = deserialize(&bytes).unwrap();
	let restored = apply(&parsed, &old);
	assert_eq!(restored, new);
	println!("restored {} bytes", restored.len());
}
