use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::io::read_tokens;

/// The three word columns an insult is assembled from.
///
/// Row `i` of the source file contributes `part1[i]`, `part2[i]` and
/// `part3[i]`, but generation draws an index per column independently,
/// so any word of a column may be combined with any word of the others.
///
/// # Invariants
/// - The three columns always have the same length (`size`)
/// - The structure is immutable once built
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseSource {
	part1: Vec<String>,
	part2: Vec<String>,
	part3: Vec<String>,
}

impl PhraseSource {
	/// Loads a phrase source from a whitespace-separated text file.
	///
	/// # Errors
	/// Returns `FileAccess` if the file cannot be opened or read.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let tokens = read_tokens(&filepath)?;
		let source = Self::from_tokens(tokens);
		info!("Loaded {} phrase rows from {}", source.size(), filepath.as_ref().display());
		Ok(source)
	}

	/// Builds a phrase source from tokens taken three at a time.
	///
	/// A trailing group of fewer than three tokens is discarded rather
	/// than padded.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut source = Self::default();
		let mut tokens = tokens.into_iter().map(Into::into);

		loop {
			let Some(first) = tokens.next() else { break };
			let Some(second) = tokens.next() else {
				warn!("Discarding incomplete trailing row: {first}");
				break;
			};
			let Some(third) = tokens.next() else {
				warn!("Discarding incomplete trailing row: {first} {second}");
				break;
			};
			source.part1.push(first);
			source.part2.push(second);
			source.part3.push(third);
		}

		source
	}

	/// Number of rows, i.e. the length of each column.
	pub fn size(&self) -> usize {
		self.part1.len()
	}

	pub fn is_empty(&self) -> bool {
		self.part1.is_empty()
	}

	/// Number of distinct triples (`size³`), saturating at `u64::MAX`.
	pub fn capacity(&self) -> u64 {
		let size = self.size() as u64;
		size.saturating_mul(size).saturating_mul(size)
	}

	/// Returns the word at `index` in `column` (0, 1 or 2).
	pub fn word(&self, column: usize, index: usize) -> Option<&str> {
		let part = match column {
			0 => &self.part1,
			1 => &self.part2,
			2 => &self.part3,
			_ => return None,
		};
		part.get(index).map(String::as_str)
	}
}
