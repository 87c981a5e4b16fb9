//! Match-result progression.
//!
//! A match is a two-state machine: pending, then closed. Closing is the
//! only transition and it is terminal. Closing the final (round 1) crowns
//! the bracket winner and marks the tournament over; closing any other
//! match promotes the winner into the next round.

use log::{debug, info, warn};

use super::builder::promote_winner;
use super::errors::{BracketError, BracketResult};
use super::models::{Match, MatchUpdate, Tournament};
use crate::club::ClubRatingStore;
use crate::rating::update_match_ratings;

/// Apply a reported result to the match at (`round_number`,
/// `match_number`) in the tournament's bracket.
///
/// Validation happens before any state changes, so a rejected result
/// leaves the match untouched. Once the result is applied, both clubs'
/// ratings are recomputed and written back through `store`, the winner is
/// promoted (or the bracket closed), and the updated match is returned.
///
/// Results with `over == false` are ignored: nothing is recorded until
/// the score is final.
///
/// # Errors
///
/// - [`BracketError::BracketNotFound`] / [`BracketError::MatchNotFound`]
///   if the target match does not exist.
/// - [`BracketError::MatchAlreadyOver`] if the match is already closed.
/// - [`BracketError::NoClubsInMatch`] if the result names no clubs at all.
/// - [`BracketError::InvalidWinningClub`] if the winner is not one of the
///   participants.
/// - [`BracketError::ClubProfileNotFound`] if either club is unknown to
///   the rating store.
/// - [`BracketError::NextRoundNotFound`] if the winner has no round to be
///   promoted into (internal inconsistency).
/// - [`BracketError::RatingUpdate`] if a rating write fails; the match is
///   already closed at that point and the caller owns reconciliation.
pub fn report_result<S: ClubRatingStore>(
    tournament: &mut Tournament,
    round_number: u32,
    match_number: u32,
    update: &MatchUpdate,
    store: &mut S,
) -> BracketResult<Match> {
    let tournament_id = tournament.id;
    let bracket = tournament
        .bracket
        .as_mut()
        .ok_or(BracketError::BracketNotFound(tournament_id))?;

    let current = bracket
        .match_at(round_number, match_number)
        .ok_or(BracketError::MatchNotFound {
            round_number,
            match_number,
        })?;

    if !update.over {
        debug!("ignoring non-final result for round {round_number} match {match_number}");
        return Ok(current.clone());
    }
    if current.over {
        return Err(BracketError::MatchAlreadyOver {
            round_number,
            match_number,
        });
    }

    // Seeding guarantees every playable match holds at least one club;
    // a result naming none is an upstream bug.
    if update.club1_id.is_none() && update.club2_id.is_none() {
        return Err(BracketError::NoClubsInMatch {
            round_number,
            match_number,
        });
    }

    let winner = match update.winning_club_id {
        Some(winner) if update.club1_id == Some(winner) || update.club2_id == Some(winner) => {
            winner
        }
        _ => {
            return Err(BracketError::InvalidWinningClub {
                winner: update.winning_club_id,
                club1: update.club1_id,
                club2: update.club2_id,
            });
        }
    };

    // Both profiles must resolve before the match mutates.
    let ratings = match (update.club1_id, update.club2_id) {
        (Some(club1_id), Some(club2_id)) => {
            let club1 = store
                .club_rating(club1_id)
                .ok_or(BracketError::ClubProfileNotFound(club1_id))?;
            let club2 = store
                .club_rating(club2_id)
                .ok_or(BracketError::ClubProfileNotFound(club2_id))?;
            Some((club1, club2))
        }
        // A walkover closed through result reporting has no opponent to
        // rate.
        _ => None,
    };

    let closed = {
        let slotted = bracket
            .match_mut(round_number, match_number)
            .ok_or(BracketError::MatchNotFound {
                round_number,
                match_number,
            })?;
        slotted.club1_id = update.club1_id;
        slotted.club2_id = update.club2_id;
        slotted.club1_score = update.club1_score;
        slotted.club2_score = update.club2_score;
        slotted.over = true;
        slotted.winning_club_id = Some(winner);
        slotted.clone()
    };

    match ratings {
        Some((club1, club2)) => {
            let (new1, new2) = update_match_ratings(
                &club1,
                &club2,
                update.club1_score,
                update.club2_score,
                club1.club_id == winner,
            );
            // A failure here leaves a closed match with stale ratings; the
            // result itself is already the score of record.
            store.set_club_rating(club1.club_id, new1.elo, new1.rating_deviation)?;
            store.set_club_rating(club2.club_id, new2.elo, new2.rating_deviation)?;
        }
        None => {
            warn!(
                "round {round_number} match {match_number} closed with a single club, \
                 no ratings to update"
            );
        }
    }

    if round_number == 1 {
        bracket.close(winner);
        tournament.over = true;
        info!("tournament {tournament_id} over, club {winner} wins the bracket");
    } else {
        promote_winner(bracket, round_number, match_number, winner)?;
    }

    Ok(closed)
}
