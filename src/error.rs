use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Truncated patch: needed {needed} bytes, {available} available")]
	Truncated { needed: usize, available: usize },

	#[error("Malformed varint in patch header")]
	MalformedVarint,

	#[error("Invalid length in patch header: {0}")]
	InvalidLength(i64),

	#[error("Invalid changed-position bitmap: {0}")]
	InvalidBitmap(#[source] std::io::Error),

	#[error("Thread pool error: {0}")]
	ThreadPool(#[from] rayon::ThreadPoolBuildError),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

impl PatchError {
	/// True for the errors `deserialize` reports on bad input bytes.
	pub fn is_parse_error(&self) -> bool {
		matches!(
			self,
			PatchError::Truncated { .. }
				| PatchError::MalformedVarint
				| PatchError::InvalidLength(_)
				| PatchError::InvalidBitmap(_)
		)
	}
}

pub type Result<T> = std::result::Result<T, PatchError>;
