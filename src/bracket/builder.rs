//! Bracket construction: round layout, elo seeding, and bye resolution.

use log::{debug, error, info};

use super::errors::{BracketError, BracketResult};
use super::models::{Bracket, ClubSeed, Round, TournamentId};
use super::seeding::standard_seed_order;
use crate::club::ClubId;

/// Build a single-elimination bracket for the given clubs.
///
/// Clubs are ranked by elo, strongest first (ties keep their input
/// order), and placed into the first round with the standard seed order.
/// Seed ranks beyond the club count become byes, which are resolved into
/// the second round before the bracket is returned.
///
/// A single club wins by walkover: the bracket comes back with no rounds
/// and the winner already set.
///
/// # Errors
///
/// - [`BracketError::NoClubs`] if `clubs` is empty.
/// - [`BracketError::InsufficientMatchCapacity`] if the first round cannot
///   hold every seed position (internal inconsistency).
pub fn build_bracket(tournament_id: TournamentId, clubs: &[ClubSeed]) -> BracketResult<Bracket> {
    let number_of_clubs = clubs.len();
    if number_of_clubs == 0 {
        return Err(BracketError::NoClubs);
    }

    // ceil(log2(1)) rounds is no rounds at all; the sole entrant wins.
    if number_of_clubs == 1 {
        let mut bracket = Bracket::new(tournament_id, Vec::new());
        bracket.close(clubs[0].club_id);
        info!("bracket for tournament {tournament_id} is a one-club walkover");
        return Ok(bracket);
    }

    let number_of_rounds = ceil_log2(number_of_clubs);
    let rounds = (1..=number_of_rounds)
        .rev()
        .map(|round_number| Round::new(round_number, 1 << (round_number - 1)))
        .collect();
    let mut bracket = Bracket::new(tournament_id, rounds);

    let mut seeded = clubs.to_vec();
    seeded.sort_by(|a, b| b.elo.total_cmp(&a.elo));

    let bracket_size = 1usize << number_of_rounds;
    let byes = bracket_size - number_of_clubs;

    seed_clubs(&mut bracket.rounds[0], &seeded, bracket_size)?;
    resolve_byes(&mut bracket, number_of_rounds)?;

    info!(
        "built bracket for tournament {tournament_id}: {number_of_clubs} clubs, \
         {number_of_rounds} rounds, {byes} byes"
    );
    Ok(bracket)
}

/// `ceil(log2(n))` for n >= 1.
fn ceil_log2(n: usize) -> u32 {
    usize::BITS - (n - 1).leading_zeros()
}

/// Fill the first round's slots from the standard seed order. Seed ranks
/// beyond the club count leave their slot empty, which is a bye.
fn seed_clubs(first_round: &mut Round, seeded: &[ClubSeed], bracket_size: usize) -> BracketResult<()> {
    let seed_positions = standard_seed_order(bracket_size)?;

    let slots = first_round.matches.len() * 2;
    if slots < seed_positions.len() {
        error!(
            "first round of {} matches cannot hold {} seed positions",
            first_round.matches.len(),
            seed_positions.len()
        );
        return Err(BracketError::InsufficientMatchCapacity {
            slots,
            seeds: seed_positions.len(),
        });
    }

    for (position, seed) in seed_positions.iter().enumerate() {
        let club_id = club_for_seed(*seed, seeded);
        let slotted = &mut first_round.matches[position / 2];
        if position % 2 == 0 {
            slotted.club1_id = club_id;
        } else {
            slotted.club2_id = club_id;
        }
    }
    Ok(())
}

fn club_for_seed(seed: u32, seeded: &[ClubSeed]) -> Option<ClubId> {
    (seed as usize <= seeded.len()).then(|| seeded[seed as usize - 1].club_id)
}

/// Auto-advance every bye in round `round_number`.
///
/// The sole club of each bye wins immediately and is promoted into the
/// next round, or crowns the bracket if the round was the final. Standard
/// seeding puts at least one club in every first-round match, so a single
/// pass over the first round resolves every bye the bracket will ever
/// have; later-round empty slots are promotions still in flight, never
/// byes.
///
/// # Errors
///
/// - [`BracketError::RoundNotFound`] if `round_number` does not exist.
/// - [`BracketError::NextRoundNotFound`] if a winner has nowhere to go
///   (internal inconsistency).
pub fn resolve_byes(bracket: &mut Bracket, round_number: u32) -> BracketResult<()> {
    let round = bracket
        .round_mut(round_number)
        .ok_or(BracketError::RoundNotFound(round_number))?;

    let mut promotions = Vec::new();
    for slotted in &mut round.matches {
        if slotted.over || !slotted.is_bye() {
            continue;
        }
        let Some(winner) = slotted.club1_id.or(slotted.club2_id) else {
            continue;
        };
        slotted.over = true;
        slotted.winning_club_id = Some(winner);
        promotions.push((slotted.match_number, winner));
        debug!(
            "round {round_number} match {} is a bye, club {winner} advances",
            slotted.match_number
        );
    }

    if round_number == 1 {
        // A bye in the final is a walkover for the whole bracket.
        if let Some((_, winner)) = promotions.first() {
            bracket.close(*winner);
        }
        return Ok(());
    }

    for (match_number, winner) in promotions {
        promote_winner(bracket, round_number, match_number, winner)?;
    }
    Ok(())
}

/// Write `winner` into its slot in the next round: match index
/// `ceil(match_number / 2) - 1`, slot 1 if `match_number` is odd, slot 2
/// if even.
pub(crate) fn promote_winner(
    bracket: &mut Bracket,
    round_number: u32,
    match_number: u32,
    winner: ClubId,
) -> BracketResult<()> {
    let next_round_number = round_number - 1;
    let next_round = bracket.round_mut(next_round_number).ok_or_else(|| {
        error!("round {next_round_number} missing while promoting from round {round_number}");
        BracketError::NextRoundNotFound(next_round_number)
    })?;

    let next_index = (match_number as usize).div_ceil(2) - 1;
    let next_match =
        next_round
            .matches
            .get_mut(next_index)
            .ok_or(BracketError::MatchNotFound {
                round_number: next_round_number,
                match_number: next_index as u32 + 1,
            })?;

    if match_number % 2 == 1 {
        next_match.club1_id = Some(winner);
    } else {
        next_match.club2_id = Some(winner);
    }
    debug!(
        "club {winner} promoted to round {next_round_number} match {}",
        next_index + 1
    );
    Ok(())
}
