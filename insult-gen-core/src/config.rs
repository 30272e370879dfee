use std::path::{Path, PathBuf};

use crate::error::{InsultError, Result};

/// Default phrase source, resolved relative to the working directory.
pub const SOURCE_FILE: &str = "InsultsSource.txt";

/// Upper bound on the number of insults a single request may ask for.
pub const MAX_INSULTS: usize = 10_000;

/// Configuration used to build an `InsultGenerator`.
///
/// # Fields
/// - `source`: phrase source file read by `initialize`
/// - `max_insults`: per-request count limit, never above `MAX_INSULTS`
/// - `seed`: fixed RNG seed; `None` draws the seed from OS entropy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	source: PathBuf,
	max_insults: usize,
	seed: Option<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			source: PathBuf::from(SOURCE_FILE),
			max_insults: MAX_INSULTS,
			seed: None,
		}
	}
}

impl GeneratorConfig {
	pub fn with_source<P: AsRef<Path>>(mut self, source: P) -> Self {
		self.source = source.as_ref().to_path_buf();
		self
	}

	pub fn with_seed(mut self, seed: Option<u64>) -> Self {
		self.seed = seed;
		self
	}

	/// Lowers the per-request count limit.
	///
	/// # Errors
	/// Returns `InvalidCount` if `max_insults` is 0 or above `MAX_INSULTS`.
	pub fn with_max_insults(mut self, max_insults: usize) -> Result<Self> {
		if max_insults == 0 || max_insults > MAX_INSULTS {
			return Err(InsultError::invalid_count(max_insults, MAX_INSULTS));
		}
		self.max_insults = max_insults;
		Ok(self)
	}

	pub fn source(&self) -> &Path {
		&self.source
	}

	pub fn max_insults(&self) -> usize {
		self.max_insults
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}
}
