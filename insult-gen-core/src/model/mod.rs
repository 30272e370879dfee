//! Top-level module for the insult generation system.
//!
//! This crate provides a three-column phrase generator, including:
//! - The loaded word columns (`PhraseSource`)
//! - Index triples and their rendered insults (`Triple`, `Insult`)
//! - A scoped set of marked triples (`TripleSet`)
//! - A high-level generation interface (`InsultGenerator`)

/// High-level interface for loading a phrase source and generating insults.
///
/// Exposes single random insults, bounded unique sets, and file output,
/// all driven by a generator-owned, once-seeded RNG.
pub mod generator;

/// Three parallel word columns loaded from a whitespace-separated file.
///
/// Handles tokenizing into rows and the capacity of distinct triples.
pub mod phrase_source;

/// Index triples across the three columns.
///
/// Provides lexicographic ordering, rendering, and the per-request set
/// used to guarantee uniqueness.
pub mod triple;
