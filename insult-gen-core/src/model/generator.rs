use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::error::{InsultError, Result};
use crate::io;
use crate::model::phrase_source::PhraseSource;
use crate::model::triple::{Insult, Triple, TripleSet};

/// High-level generator assembling insults from a phrase source.
///
/// # Responsibilities
/// - Load the phrase source named by its `GeneratorConfig`
/// - Produce single random insults
/// - Produce bounded sets of unique insults in enumeration order
/// - Save such sets to a file, one insult per line
///
/// The RNG is seeded once at construction and advanced by every draw.
#[derive(Debug)]
pub struct InsultGenerator {
	config: GeneratorConfig,
	source: Option<PhraseSource>,
	rng: StdRng,
}

impl InsultGenerator {
	/// Creates an uninitialized generator.
	///
	/// Uses the configured seed if any, otherwise seeds from OS entropy.
	pub fn new(config: GeneratorConfig) -> Self {
		let rng = match config.seed() {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self { config, source: None, rng }
	}

	/// Returns the loaded phrase source, if any.
	pub fn source(&self) -> Option<&PhraseSource> {
		self.source.as_ref()
	}

	/// Loads the configured phrase source, replacing any previous one.
	///
	/// # Errors
	/// Returns `FileAccess` if the source cannot be read. The previously
	/// loaded source, if any, is kept in that case.
	pub fn initialize(&mut self) -> Result<()> {
		let source = PhraseSource::load(self.config.source())?;
		self.source = Some(source);
		Ok(())
	}

	/// Installs an already built phrase source.
	pub fn initialize_from(&mut self, source: PhraseSource) {
		self.source = Some(source);
	}

	/// Returns one insult from three independently drawn indices.
	///
	/// # Errors
	/// Returns `NotInitialized` if no non-empty source is loaded.
	pub fn talk_to_me(&mut self) -> Result<String> {
		let size = self.loaded()?.size();
		let triple = self.random_triple(size);
		Ok(triple.render(self.loaded()?))
	}

	/// Returns `num_insults` unique insults in enumeration order.
	///
	/// # Errors
	/// See `generate_insults`.
	pub fn generate(&mut self, num_insults: usize) -> Result<Vec<String>> {
		Ok(self.generate_insults(num_insults)?.into_iter().map(String::from).collect())
	}

	/// Returns `num_insults` unique insults along with their triples.
	///
	/// # Behavior
	/// - Draws random triples, marking each new one, until `num_insults`
	///   distinct triples are marked.
	/// - Emits the marked triples in ascending `(i1, i2, i3)` order, which
	///   is alphabetical when the columns are pre-sorted.
	///
	/// # Errors
	/// - `InvalidCount` if `num_insults` is 0 or above the configured limit
	/// - `NotInitialized` if no non-empty source is loaded
	/// - `CapacityExceeded` if the source has fewer than `num_insults` triples
	pub fn generate_insults(&mut self, num_insults: usize) -> Result<Vec<Insult>> {
		self.validate_count(num_insults)?;
		let source = self.loaded()?;
		let size = source.size();
		let available = source.capacity();
		if num_insults as u64 > available {
			return Err(InsultError::CapacityExceeded { requested: num_insults, available });
		}

		let mut used = TripleSet::new();
		let mut draws: usize = 0;
		while used.len() < num_insults {
			used.insert(self.random_triple(size));
			draws += 1;
		}
		debug!("Marked {} unique triples in {} draws", num_insults, draws);

		let source = self.loaded()?;
		Ok(used
			.into_iter()
			.map(|triple| Insult { text: triple.render(source), triple })
			.collect())
	}

	/// Generates `num_insults` unique insults and writes them to `filename`.
	///
	/// Existing content is overwritten. Nothing is written if generation fails.
	///
	/// # Errors
	/// Same as `generate`, plus `FileAccess` if the destination cannot be written.
	pub fn generate_and_save<P: AsRef<Path>>(&mut self, filename: P, num_insults: usize) -> Result<()> {
		let insults = self.generate(num_insults)?;
		io::write_lines(&filename, &insults)?;
		info!("Saved {} insults to {}", insults.len(), filename.as_ref().display());
		Ok(())
	}

	/// Validates a signed count from user input.
	///
	/// # Errors
	/// Returns `InvalidCount` if `requested` is below 1 or above the configured limit.
	pub fn check_count(&self, requested: i64) -> Result<usize> {
		let count = usize::try_from(requested)
			.map_err(|_| InsultError::invalid_count(requested, self.config.max_insults()))?;
		self.validate_count(count)?;
		Ok(count)
	}

	fn validate_count(&self, num_insults: usize) -> Result<()> {
		let max = self.config.max_insults();
		if num_insults < 1 || num_insults > max {
			return Err(InsultError::invalid_count(num_insults, max));
		}
		Ok(())
	}

	/// Returns the source, treating an empty one as not loaded.
	fn loaded(&self) -> Result<&PhraseSource> {
		self.source
			.as_ref()
			.filter(|source| !source.is_empty())
			.ok_or(InsultError::NotInitialized)
	}

	fn random_triple(&mut self, size: usize) -> Triple {
		Triple(self.rand_int(size), self.rand_int(size), self.rand_int(size))
	}

	/// Uniform integer in `[0, upper_limit)`.
	///
	/// `upper_limit` must be positive.
	fn rand_int(&mut self, upper_limit: usize) -> usize {
		self.rng.random_range(0..upper_limit)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::MAX_INSULTS;
	use std::fs;

	fn sample() -> PhraseSource {
		PhraseSource::from_tokens([
			"odious", "errant", "apple",
			"vile", "beslubbering", "barnacle",
			"rank", "fobbing", "canker-blossom",
		])
	}

	fn sorted_source() -> PhraseSource {
		PhraseSource::from_tokens([
			"artless", "base-court", "apple-john",
			"bawdy", "bat-fowling", "baggage",
			"beslubbering", "beef-witted", "barnacle",
			"bootless", "beetle-headed", "bladder",
			"churlish", "boil-brained", "boar-pig",
		])
	}

	fn seeded(seed: u64, source: PhraseSource) -> InsultGenerator {
		let mut generator = InsultGenerator::new(GeneratorConfig::default().with_seed(Some(seed)));
		generator.initialize_from(source);
		generator
	}

	fn words(insult: &str) -> Vec<String> {
		insult
			.strip_prefix("Thou ")
			.and_then(|rest| rest.strip_suffix('!'))
			.expect("insult shape")
			.split(' ')
			.map(str::to_owned)
			.collect()
	}

	#[test]
	fn operations_require_a_loaded_source() {
		let mut generator = InsultGenerator::new(GeneratorConfig::default().with_seed(Some(1)));
		assert!(matches!(generator.talk_to_me(), Err(InsultError::NotInitialized)));
		assert!(matches!(generator.generate(1), Err(InsultError::NotInitialized)));

		generator.initialize_from(PhraseSource::default());
		assert!(matches!(generator.talk_to_me(), Err(InsultError::NotInitialized)));
	}

	#[test]
	fn talk_to_me_picks_each_word_from_its_column() {
		let source = sample();
		let mut generator = seeded(3, source.clone());
		for _ in 0..200 {
			let insult = generator.talk_to_me().unwrap();
			let words = words(&insult);
			assert_eq!(words.len(), 3);
			for (column, word) in words.iter().enumerate() {
				assert!((0..source.size()).any(|i| source.word(column, i) == Some(word.as_str())));
			}
		}
	}

	#[test]
	fn talk_to_me_is_roughly_uniform() {
		let source = sample();
		let mut generator = seeded(11, source.clone());
		let draws = 30_000;
		let mut counts = [[0usize; 3]; 3];
		for _ in 0..draws {
			let insult = generator.talk_to_me().unwrap();
			for (column, word) in words(&insult).iter().enumerate() {
				let index = (0..3).position(|i| source.word(column, i) == Some(word.as_str())).unwrap();
				counts[column][index] += 1;
			}
		}
		let expected = draws / 3;
		for column in counts {
			for count in column {
				assert!(count.abs_diff(expected) < expected / 20, "count {count} too far from {expected}");
			}
		}
	}

	#[test]
	fn generate_returns_unique_sorted_triples() {
		let mut generator = seeded(5, sample());
		for count in [1, 3, 10, 26] {
			let insults = generator.generate_insults(count).unwrap();
			assert_eq!(insults.len(), count);
			assert!(insults.windows(2).all(|pair| pair[0].triple < pair[1].triple));
			assert!(insults.iter().all(|insult| insult.triple.0 < 3 && insult.triple.1 < 3 && insult.triple.2 < 3));
		}
	}

	#[test]
	fn generate_full_capacity_enumerates_everything() {
		let mut generator = seeded(9, sample());
		let insults = generator.generate_insults(27).unwrap();
		let triples: Vec<Triple> = insults.iter().map(|insult| insult.triple).collect();
		let mut expected = Vec::new();
		for i1 in 0..3 {
			for i2 in 0..3 {
				for i3 in 0..3 {
					expected.push(Triple(i1, i2, i3));
				}
			}
		}
		assert_eq!(triples, expected);
		assert_eq!(insults[0].text, "Thou odious errant apple!");
		assert_eq!(insults[26].text, "Thou rank fobbing canker-blossom!");
	}

	#[test]
	fn sorted_source_gives_alphabetical_output() {
		let mut generator = seeded(21, sorted_source());
		let insults = generator.generate(100).unwrap();
		assert_eq!(insults.len(), 100);
		assert!(insults.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn generate_rejects_out_of_range_counts() {
		let mut generator = seeded(1, sample());
		assert!(matches!(generator.generate(0), Err(InsultError::InvalidCount { requested: 0, .. })));
		assert!(matches!(
			generator.generate(MAX_INSULTS + 1),
			Err(InsultError::InvalidCount { requested: 10_001, .. })
		));
		assert!(matches!(generator.check_count(-1), Err(InsultError::InvalidCount { requested: -1, .. })));
		assert!(matches!(generator.check_count(0), Err(InsultError::InvalidCount { .. })));
		assert!(matches!(generator.check_count(10_001), Err(InsultError::InvalidCount { .. })));
		assert_eq!(generator.check_count(10_000).unwrap(), 10_000);
	}

	#[test]
	fn invalid_count_is_reported_before_missing_source() {
		let mut generator = InsultGenerator::new(GeneratorConfig::default().with_seed(Some(1)));
		assert!(matches!(generator.generate(0), Err(InsultError::InvalidCount { .. })));
	}

	#[test]
	fn generate_beyond_capacity_fails_instead_of_looping() {
		let mut generator = seeded(1, sample());
		let err = generator.generate(28).unwrap_err();
		assert!(matches!(err, InsultError::CapacityExceeded { requested: 28, available: 27 }));
	}

	#[test]
	fn configured_limit_is_enforced() {
		let config = GeneratorConfig::default().with_seed(Some(2)).with_max_insults(5).unwrap();
		let mut generator = InsultGenerator::new(config);
		generator.initialize_from(sample());
		assert_eq!(generator.generate(5).unwrap().len(), 5);
		assert!(matches!(generator.generate(6), Err(InsultError::InvalidCount { requested: 6, max: 5 })));
	}

	#[test]
	fn same_seed_same_output() {
		let mut first = seeded(42, sorted_source());
		let mut second = seeded(42, sorted_source());
		assert_eq!(first.generate(40).unwrap(), second.generate(40).unwrap());
		assert_eq!(first.talk_to_me().unwrap(), second.talk_to_me().unwrap());
	}

	#[test]
	fn initialize_reads_configured_source_and_replaces_previous() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("InsultsSource.txt");
		fs::write(&path, "odious errant apple\nvile beslubbering barnacle\n").unwrap();

		let config = GeneratorConfig::default().with_source(&path).with_seed(Some(4));
		let mut generator = InsultGenerator::new(config);
		generator.initialize_from(sorted_source());
		generator.initialize().unwrap();
		assert_eq!(generator.source().map(PhraseSource::size), Some(2));

		generator.initialize().unwrap();
		assert_eq!(generator.source().map(PhraseSource::size), Some(2));
	}

	#[test]
	fn initialize_missing_source_fails() {
		let dir = tempfile::tempdir().unwrap();
		let config = GeneratorConfig::default().with_source(dir.path().join("missing.txt"));
		let mut generator = InsultGenerator::new(config);
		assert!(matches!(generator.initialize(), Err(InsultError::FileAccess { .. })));
		assert!(generator.source().is_none());
	}

	#[test]
	fn generate_and_save_writes_one_line_per_insult() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("insults.txt");
		fs::write(&path, "previous content\n").unwrap();

		let mut saver = seeded(8, sorted_source());
		saver.generate_and_save(&path, 50).unwrap();
		let expected = seeded(8, sorted_source()).generate(50).unwrap();

		let contents = fs::read_to_string(&path).unwrap();
		assert!(contents.ends_with('\n'));
		let lines: Vec<&str> = contents.lines().collect();
		assert_eq!(lines, expected);
	}

	#[test]
	fn generate_and_save_validates_before_touching_the_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("insults.txt");
		let mut generator = seeded(8, sample());

		assert!(matches!(generator.generate_and_save(&path, 0), Err(InsultError::InvalidCount { .. })));
		assert!(matches!(generator.generate_and_save(&path, 100), Err(InsultError::CapacityExceeded { .. })));
		assert!(!path.exists());
	}

	#[test]
	fn generate_and_save_reports_unwritable_destination() {
		let dir = tempfile::tempdir().unwrap();
		let mut generator = seeded(8, sample());
		let err = generator.generate_and_save(dir.path().join("no/such/dir/out.txt"), 3).unwrap_err();
		assert!(matches!(err, InsultError::FileAccess { .. }));
	}
}
