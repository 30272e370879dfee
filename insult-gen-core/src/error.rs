use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InsultError>;

#[derive(Debug, Error)]
pub enum InsultError {
	#[error("File: {} cannot be accessed: {source}", .path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Not a legal number of insults: {requested} (expected 1 to {max})")]
	InvalidCount { requested: i64, max: usize },

	#[error("Cannot generate {requested} unique insults, the phrase source only has {available} combinations")]
	CapacityExceeded { requested: usize, available: u64 },

	#[error("Generator not initialized: no phrase source loaded")]
	NotInitialized,
}

impl InsultError {
	pub(crate) fn invalid_count(requested: impl TryInto<i64>, max: usize) -> Self {
		Self::InvalidCount { requested: requested.try_into().unwrap_or(i64::MAX), max }
	}

	pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::FileAccess { path: path.into(), source }
	}
}
