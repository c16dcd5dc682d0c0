use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors produced by the harness commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Codec failure.
	#[error("bser: {0}")]
	Bser(#[from] bser::BserError),
	/// JSON parse or print failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Benchmark fixtures decoded to different values.
	#[error("decoded values differ: {detail}")]
	ValueMismatch {
		/// First diverging path and values.
		detail: String,
	},
}
