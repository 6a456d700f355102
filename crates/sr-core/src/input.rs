//! Input arrays: random generation and parsing.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sr_common::{Error, Result};
use sr_config::{InputSize, VALUE_MAX, VALUE_MIN};

/// `size` values drawn uniformly from `VALUE_MIN..=VALUE_MAX`.
pub fn random_input<R: Rng + ?Sized>(size: InputSize, rng: &mut R) -> Vec<i32> {
    random_input_in(size, VALUE_MIN..=VALUE_MAX, rng)
}

/// `size` values drawn uniformly from `range`.
///
/// An empty range yields `range.start()` for every value.
pub fn random_input_in<R: Rng + ?Sized>(
    size: InputSize,
    range: RangeInclusive<i32>,
    rng: &mut R,
) -> Vec<i32> {
    if range.is_empty() {
        return vec![*range.start(); size.get()];
    }
    (0..size.get()).map(|_| rng.random_range(range.clone())).collect()
}

/// Deterministic generator when `seed` is given, OS-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Parse `"5,3,1"` (commas and/or whitespace). An empty string is an empty array.
pub fn parse_input(raw: &str) -> Result<Vec<i32>> {
    let values = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i32>()
                .map_err(|_| Error::InvalidInput(format!("'{tok}' is not an integer")))
        })
        .collect::<Result<Vec<_>>>()?;
    InputSize::new(values.len()).map_err(|e| Error::InvalidInput(e.to_string()))?;
    Ok(values)
}
