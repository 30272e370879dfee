use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::phrase_source::PhraseSource;

/// One index per column, identifying one possible insult.
///
/// The derived ordering is lexicographic over `(i1, i2, i3)`, which is the
/// enumeration order used for generated output.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple(pub usize, pub usize, pub usize);

impl Triple {
	/// Renders `Thou <w1> <w2> <w3>!` from the given source.
	///
	/// Indices must be in range for `source`; the generator only draws
	/// from `[0, size)`.
	pub(crate) fn render(&self, source: &PhraseSource) -> String {
		let word = |column, index| source.word(column, index).expect("triple index out of range");
		format!("Thou {} {} {}!", word(0, self.0), word(1, self.1), word(2, self.2))
	}
}

/// A generated insult together with the triple it was built from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Insult {
	pub triple: Triple,
	pub text: String,
}

impl fmt::Display for Insult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

impl From<Insult> for String {
	fn from(insult: Insult) -> Self {
		insult.text
	}
}

/// Triples marked as used during one generation request.
///
/// Iteration yields triples in enumeration order regardless of the
/// order in which they were marked.
#[derive(Debug, Default)]
pub struct TripleSet {
	marked: BTreeSet<Triple>,
}

impl TripleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks `triple`; returns `false` if it was already marked.
	pub fn insert(&mut self, triple: Triple) -> bool {
		self.marked.insert(triple)
	}

	pub fn contains(&self, triple: &Triple) -> bool {
		self.marked.contains(triple)
	}

	pub fn len(&self) -> usize {
		self.marked.len()
	}

	pub fn is_empty(&self) -> bool {
		self.marked.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Triple> {
		self.marked.iter()
	}
}

impl IntoIterator for TripleSet {
	type Item = Triple;
	type IntoIter = std::collections::btree_set::IntoIter<Triple>;

	fn into_iter(self) -> Self::IntoIter {
		self.marked.into_iter()
	}
}
