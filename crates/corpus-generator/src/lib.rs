//! Seeded corpus generator for the search index harness.
//!
//! Produces a reproducible sequence of [`Person`] records from a fixed seed.
//! A single `StdRng` is seeded once per corpus and every record consumes a
//! fixed sequence of draws from it, so the same seed and vocabulary always
//! give byte-identical records in the same order.
//!
//! # Architecture
//!
//! ```text
//! Vocabulary (static tables) + CorpusParams { seed, count, max_id }
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ CorpusGenerator  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Person { id, name, age, city, like, comment }
//! ```
//!
//! # Example
//!
//! ```rust
//! use corpus_generator::{CorpusGenerator, CorpusParams, Vocabulary};
//!
//! let params = CorpusParams::new(123, 100, 500);
//! let mut generator = CorpusGenerator::new(Vocabulary::builtin(), params).unwrap();
//! let first = generator.next_person().unwrap();
//! assert_eq!(first.id, 0);
//! ```

pub mod draws;
pub mod error;
pub mod generator;
pub mod person;
pub mod vocabulary;

pub use error::GeneratorError;
pub use generator::{generate_corpus, CorpusGenerator, CorpusParams, People};
pub use person::{Name, Person};
pub use vocabulary::Vocabulary;
