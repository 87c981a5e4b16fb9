//! Standard single-elimination seed placement.

use super::errors::{BracketError, BracketResult};

/// Produce the standard seed placement order for a bracket of
/// `bracket_size` positions.
///
/// Consecutive pairs are first-round matches: seed 1 plays the weakest
/// seed, seed 2 the second weakest, and seeds 1 and 2 can only meet in
/// the final. The order is a pure function of `bracket_size`, recomputed
/// on demand and never persisted.
///
/// # Errors
///
/// [`BracketError::InvalidBracketSize`] if `bracket_size` is not a power
/// of two.
///
/// # Examples
///
/// ```
/// use bracket_engine::standard_seed_order;
///
/// assert_eq!(standard_seed_order(8).unwrap(), vec![1, 8, 4, 5, 2, 7, 3, 6]);
/// ```
pub fn standard_seed_order(bracket_size: usize) -> BracketResult<Vec<u32>> {
    if bracket_size == 0 || !bracket_size.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(bracket_size));
    }
    Ok(seed_recursively(bracket_size as u32))
}

/// Mirror recursion: the order for N interleaves the order for N/2 with
/// each seed's complement `N + 1 - s`.
fn seed_recursively(bracket_size: u32) -> Vec<u32> {
    if bracket_size == 1 {
        return vec![1];
    }

    let halved = seed_recursively(bracket_size / 2);
    let mut combined = Vec::with_capacity(bracket_size as usize);
    for seed in halved {
        combined.push(seed);
        combined.push(bracket_size + 1 - seed);
    }
    combined
}
