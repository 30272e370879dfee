//! Randomized insult generation library.
//!
//! This crate assembles phrases of the form `Thou <w1> <w2> <w3>!` from a
//! three-column phrase source, including:
//! - Loading the phrase source from a whitespace-separated text file
//! - Single random insults
//! - Bounded sets of unique insults in enumeration order
//! - Saving unique insults to a flat file
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Phrase source, triples and the high-level generator.
pub mod model;

/// Generator configuration (source path, count limit, seeding).
pub mod config;

/// Error type shared by every operation.
pub mod error;

/// I/O utilities (token loading, line output).
///
/// Not exposed
pub(crate) mod io;

pub use config::GeneratorConfig;
pub use error::{InsultError, Result};
pub use model::generator::InsultGenerator;
