//! Seeded corpus generator.

use crate::draws::{draw_age, draw_comments, draw_likes, pick};
use crate::error::GeneratorError;
use crate::person::{Name, Person};
use crate::vocabulary::Vocabulary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Inputs that, together with the vocabulary, fully determine a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusParams {
    /// Seed for the single random stream.
    pub seed: u64,
    /// Number of records to generate.
    pub count: u64,
    /// Exclusive upper bound for liked ids.
    pub max_id: u64,
}

impl CorpusParams {
    pub fn new(seed: u64, count: u64, max_id: u64) -> Self {
        Self {
            seed,
            count,
            max_id,
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::InvalidParams(
                "count must be greater than zero".to_string(),
            ));
        }
        if self.max_id == 0 {
            return Err(GeneratorError::InvalidParams(
                "max_id must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CorpusParams {
    fn default() -> Self {
        Self::new(123, 5000, 500)
    }
}

/// Generator producing [`Person`] records from one seeded stream.
///
/// The stream is seeded once in [`CorpusGenerator::new`] and never re-seeded,
/// so record `k` depends on every draw made for records `0..k`. There is no
/// way to start in the middle of a corpus: to get record `k`, generate the
/// `k` records before it.
pub struct CorpusGenerator<'v> {
    vocabulary: Vocabulary<'v>,
    params: CorpusParams,
    rng: StdRng,
    index: u64,
}

impl<'v> CorpusGenerator<'v> {
    /// Validate the inputs and seed the stream.
    pub fn new(vocabulary: Vocabulary<'v>, params: CorpusParams) -> Result<Self, GeneratorError> {
        vocabulary.validate()?;
        params.validate()?;
        Ok(Self {
            vocabulary,
            params,
            rng: StdRng::seed_from_u64(params.seed),
            index: 0,
        })
    }

    /// Index of the next record to be generated.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Records still to be generated.
    pub fn remaining(&self) -> u64 {
        self.params.count - self.index
    }

    /// Generate the next record, or `None` once `count` records were produced.
    pub fn next_person(&mut self) -> Option<Person> {
        if self.index >= self.params.count {
            return None;
        }
        let person = self.draw_person();
        self.index += 1;
        Some(person)
    }

    /// Borrowing iterator over the records not yet generated.
    pub fn people(&mut self) -> People<'_, 'v> {
        People { generator: self }
    }

    // The only place the stream is read. Draw order: first name, last name,
    // city, age, fan-out count + liked ids, comment count + (name, city)
    // pairs. Changing it changes every later record.
    fn draw_person(&mut self) -> Person {
        let rng = &mut self.rng;
        let vocabulary = &self.vocabulary;

        let first = pick(rng, vocabulary.first_names);
        let last = pick(rng, vocabulary.last_names);
        let city = pick(rng, vocabulary.cities);
        let age = draw_age(rng);
        let like = draw_likes(rng, self.params.max_id);
        let comment = draw_comments(rng, vocabulary.first_names, vocabulary.cities);

        Person {
            id: self.index,
            name: Name {
                first: first.to_string(),
                last: last.to_string(),
            },
            age,
            city: city.to_string(),
            like,
            comment,
        }
    }
}

impl Iterator for CorpusGenerator<'_> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_person()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CorpusGenerator<'_> {}

/// Iterator returned by [`CorpusGenerator::people`].
pub struct People<'g, 'v> {
    generator: &'g mut CorpusGenerator<'v>,
}

impl Iterator for People<'_, '_> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_person()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.generator.size_hint()
    }
}

impl ExactSizeIterator for People<'_, '_> {}

/// Generate a whole corpus into memory.
pub fn generate_corpus(
    vocabulary: Vocabulary<'_>,
    params: CorpusParams,
) -> Result<Vec<Person>, GeneratorError> {
    Ok(CorpusGenerator::new(vocabulary, params)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> CorpusParams {
        CorpusParams::new(42, 20, 10)
    }

    #[test]
    fn test_generates_exact_count_in_order() {
        let people = generate_corpus(Vocabulary::builtin(), small_params()).unwrap();

        assert_eq!(people.len(), 20);
        for (i, person) in people.iter().enumerate() {
            assert_eq!(person.id, i as u64);
        }
    }

    #[test]
    fn test_fields_drawn_from_vocabulary() {
        let vocabulary = Vocabulary::builtin();
        for person in generate_corpus(vocabulary, small_params()).unwrap() {
            assert!(vocabulary.first_names.contains(&person.name.first.as_str()));
            assert!(vocabulary.last_names.contains(&person.name.last.as_str()));
            assert!(vocabulary.cities.contains(&person.city.as_str()));
            assert!(person.age < 103);
            assert!((1..=3).contains(&person.like.len()));
            assert!(person.like.iter().all(|id| *id < 10));
        }
    }

    #[test]
    fn test_current_index() {
        let mut generator = CorpusGenerator::new(Vocabulary::builtin(), small_params()).unwrap();

        assert_eq!(generator.current_index(), 0);
        generator.next_person().unwrap();
        assert_eq!(generator.current_index(), 1);
        assert_eq!(generator.remaining(), 19);
        assert_eq!(generator.len(), 19);
    }

    #[test]
    fn test_people_continues_the_stream() {
        let mut generator = CorpusGenerator::new(Vocabulary::builtin(), small_params()).unwrap();
        let first = generator.next_person().unwrap();

        let rest: Vec<Person> = generator.people().take(3).collect();
        assert_eq!(rest.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(generator.people().len(), 16);

        let all = generate_corpus(Vocabulary::builtin(), small_params()).unwrap();
        assert_eq!(all[0], first);
        assert_eq!(all[1..4], rest[..]);
    }

    #[test]
    fn test_stops_after_count() {
        let mut generator =
            CorpusGenerator::new(Vocabulary::builtin(), CorpusParams::new(1, 2, 5)).unwrap();

        assert!(generator.next_person().is_some());
        assert!(generator.next_person().is_some());
        assert!(generator.next_person().is_none());
        assert!(generator.next_person().is_none());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_corpus(Vocabulary::builtin(), CorpusParams::new(1, 10, 100)).unwrap();
        let b = generate_corpus(Vocabulary::builtin(), CorpusParams::new(2, 10, 100)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_params() {
        let zero_count = CorpusGenerator::new(Vocabulary::builtin(), CorpusParams::new(1, 0, 5));
        assert!(matches!(zero_count, Err(GeneratorError::InvalidParams(_))));

        let zero_max_id = CorpusGenerator::new(Vocabulary::builtin(), CorpusParams::new(1, 5, 0));
        assert!(matches!(zero_max_id, Err(GeneratorError::InvalidParams(_))));
    }

    #[test]
    fn test_empty_vocabulary_fails_fast() {
        let vocabulary = Vocabulary::new(&[], &["Smith"], &["Reno"]);
        let result = CorpusGenerator::new(vocabulary, small_params());
        assert!(matches!(
            result,
            Err(GeneratorError::EmptyVocabulary("first_names"))
        ));
    }
}
