//! Bracket, round, and match data models.
//!
//! The bracket is a plain tree of values with no parent/child
//! back-pointers: `Bracket` owns its rounds (earliest round first), each
//! `Round` owns its matches, and "the next round's match" is always the
//! index computation `ceil(match_number / 2) - 1`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::club::ClubId;

/// Tournament ID type
pub type TournamentId = i64;

/// A club entering the bracket. Elo decides seed rank (1 = strongest);
/// ties keep their input order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubSeed {
    pub club_id: ClubId,
    pub elo: f64,
}

/// One match in the bracket.
///
/// A slot of `None` is either a bye (first round) or a slot awaiting a
/// promoted winner (later rounds). `winning_club_id` is set only once the
/// match is over, and always equals one of the slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based and stable within the round.
    pub match_number: u32,
    pub club1_id: Option<ClubId>,
    pub club2_id: Option<ClubId>,
    pub club1_score: u32,
    pub club2_score: u32,
    pub over: bool,
    pub winning_club_id: Option<ClubId>,
}

impl Match {
    pub(crate) fn new(match_number: u32) -> Self {
        Self {
            match_number,
            club1_id: None,
            club2_id: None,
            club1_score: 0,
            club2_score: 0,
            over: false,
            winning_club_id: None,
        }
    }

    /// A bye has exactly one filled slot. Both-empty is an unfilled future
    /// slot, not a bye.
    pub fn is_bye(&self) -> bool {
        self.club1_id.is_some() != self.club2_id.is_some()
    }
}

/// One layer of the bracket. Round numbers count down: the final is
/// round 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    pub matches: Vec<Match>,
}

impl Round {
    pub(crate) fn new(round_number: u32, number_of_matches: usize) -> Self {
        let matches = (1..=number_of_matches as u32).map(Match::new).collect();
        Self {
            round_number,
            matches,
        }
    }
}

/// The full elimination tree for one tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub tournament_id: TournamentId,
    /// Ordered earliest round first, i.e. highest round number first.
    pub rounds: Vec<Round>,
    /// Set once, when the final closes; the bracket is immutable after.
    pub winning_club_id: Option<ClubId>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Bracket {
    pub(crate) fn new(tournament_id: TournamentId, rounds: Vec<Round>) -> Self {
        Self {
            tournament_id,
            rounds,
            winning_club_id: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// The bracket is complete once its winner is decided.
    pub fn is_complete(&self) -> bool {
        self.winning_club_id.is_some()
    }

    /// Find a round by its round number.
    pub fn round(&self, round_number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.round_number == round_number)
    }

    pub(crate) fn round_mut(&mut self, round_number: u32) -> Option<&mut Round> {
        self.rounds
            .iter_mut()
            .find(|r| r.round_number == round_number)
    }

    /// Find a match by round number and 1-based match number.
    pub fn match_at(&self, round_number: u32, match_number: u32) -> Option<&Match> {
        let round = self.round(round_number)?;
        round.matches.get(match_number.checked_sub(1)? as usize)
    }

    pub(crate) fn match_mut(&mut self, round_number: u32, match_number: u32) -> Option<&mut Match> {
        let round = self.round_mut(round_number)?;
        round.matches.get_mut(match_number.checked_sub(1)? as usize)
    }

    pub(crate) fn close(&mut self, winning_club_id: ClubId) {
        self.winning_club_id = Some(winning_club_id);
        self.finished_at = Some(Utc::now());
    }
}

/// A reported match result, as delivered by the service layer.
///
/// Results with `over == false` carry no authority; nothing is recorded
/// until the score is final.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchUpdate {
    pub over: bool,
    pub club1_id: Option<ClubId>,
    pub club2_id: Option<ClubId>,
    pub club1_score: u32,
    pub club2_score: u32,
    pub winning_club_id: Option<ClubId>,
}

/// The owning tournament, reduced to the fields the engine mutates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub over: bool,
    pub bracket: Option<Bracket>,
}

impl Tournament {
    pub fn new(id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            over: false,
            bracket: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bye_means_exactly_one_filled_slot() {
        let mut m = Match::new(1);
        assert!(!m.is_bye());

        m.club1_id = Some(5);
        assert!(m.is_bye());

        m.club2_id = Some(6);
        assert!(!m.is_bye());
    }

    #[test]
    fn match_lookup_is_one_based() {
        let bracket = Bracket::new(1, vec![Round::new(2, 2), Round::new(1, 1)]);

        assert_eq!(bracket.match_at(2, 1).unwrap().match_number, 1);
        assert_eq!(bracket.match_at(2, 2).unwrap().match_number, 2);
        assert!(bracket.match_at(2, 0).is_none());
        assert!(bracket.match_at(2, 3).is_none());
        assert!(bracket.match_at(3, 1).is_none());
    }

    #[test]
    fn closing_stamps_the_winner_and_finish_time() {
        let mut bracket = Bracket::new(1, vec![Round::new(1, 1)]);
        assert!(!bracket.is_complete());

        bracket.close(42);
        assert!(bracket.is_complete());
        assert_eq!(bracket.winning_club_id, Some(42));
        assert!(bracket.finished_at.is_some());
    }
}
