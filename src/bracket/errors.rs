//! Bracket error types.
//!
//! Every failure is synchronous and non-retried. User-correctable input
//! problems (no clubs, bad winner, unknown club) are surfaced as-is;
//! structural variants (`InsufficientMatchCapacity`, `NextRoundNotFound`)
//! indicate the seeding math and the round layout disagree, which is a bug
//! rather than something to recover from.

use thiserror::Error;

use super::models::TournamentId;
use crate::club::{ClubId, RatingUpdateError};

/// Bracket engine errors
#[derive(Debug, Error)]
pub enum BracketError {
    /// Seed orders exist only for power-of-two bracket sizes.
    #[error("bracket size must be a power of two, got {0}")]
    InvalidBracketSize(usize),

    /// A bracket cannot be built for a tournament with no clubs.
    #[error("tournament has no clubs")]
    NoClubs,

    /// The first round cannot hold every seed position.
    #[error("first round holds {slots} slots but seeding requires {seeds}")]
    InsufficientMatchCapacity { slots: usize, seeds: usize },

    /// No round with the expected number exists to promote the winner into.
    #[error("no round numbered {0} to promote the winner into")]
    NextRoundNotFound(u32),

    /// No round with the given number exists in the bracket.
    #[error("no round numbered {0} in the bracket")]
    RoundNotFound(u32),

    /// No match with the given number exists in the round.
    #[error("no match {match_number} in round {round_number}")]
    MatchNotFound {
        round_number: u32,
        match_number: u32,
    },

    /// The tournament has no bracket yet.
    #[error("tournament {0} has no bracket")]
    BracketNotFound(TournamentId),

    /// A referenced club is unknown to the rating store.
    #[error("club profile not found: {0}")]
    ClubProfileNotFound(ClubId),

    /// The reported winner is not one of the match participants.
    #[error("winning club {winner:?} is not a participant ({club1:?} vs {club2:?})")]
    InvalidWinningClub {
        winner: Option<ClubId>,
        club1: Option<ClubId>,
        club2: Option<ClubId>,
    },

    /// A match cannot close with both slots empty.
    #[error("match {match_number} in round {round_number} has no clubs")]
    NoClubsInMatch {
        round_number: u32,
        match_number: u32,
    },

    /// Closed matches are terminal; results are score-of-record events.
    #[error("match {match_number} in round {round_number} is already over")]
    MatchAlreadyOver {
        round_number: u32,
        match_number: u32,
    },

    /// Writing a rating back to the club store failed.
    #[error(transparent)]
    RatingUpdate(#[from] RatingUpdateError),
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
