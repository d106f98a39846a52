//! Individual draws from the random stream.
//!
//! Each function consumes a fixed number of values from `rng` for a given
//! input, which is what keeps the per-record draw sequence stable.

use rand::Rng;
use std::collections::BTreeMap;

/// Exclusive upper bound for generated ages.
pub const AGE_BOUND: u32 = 103;

/// Inclusive bounds for the number of liked ids per record.
pub const MIN_LIKES: usize = 1;
pub const MAX_LIKES: usize = 3;

/// Inclusive bounds for the number of comment draws per record.
pub const MIN_COMMENT_DRAWS: usize = 350;
pub const MAX_COMMENT_DRAWS: usize = 355;

/// Pick one entry of a non-empty table.
pub fn pick<'v, R: Rng>(rng: &mut R, table: &[&'v str]) -> &'v str {
    table[rng.gen_range(0..table.len())]
}

/// Draw an age in `[0, AGE_BOUND)`.
pub fn draw_age<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..AGE_BOUND)
}

/// Draw the fan-out count, then that many ids in `[0, max_id)`.
pub fn draw_likes<R: Rng>(rng: &mut R, max_id: u64) -> Vec<u64> {
    let count = rng.gen_range(MIN_LIKES..=MAX_LIKES);
    (0..count).map(|_| rng.gen_range(0..max_id)).collect()
}

/// Draw the comment count, then that many (name, city) pairs.
///
/// A repeated name overwrites the earlier city, so the map can end up with
/// fewer entries than draws.
pub fn draw_comments<R: Rng>(
    rng: &mut R,
    names: &[&str],
    cities: &[&str],
) -> BTreeMap<String, String> {
    let draws = rng.gen_range(MIN_COMMENT_DRAWS..=MAX_COMMENT_DRAWS);
    let mut comment = BTreeMap::new();
    for _ in 0..draws {
        let name = pick(rng, names);
        let city = pick(rng, cities);
        comment.insert(name.to_string(), city.to_string());
    }
    comment
}
