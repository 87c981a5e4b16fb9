//! Club rating collaborator interface.
//!
//! The bracket engine never owns club data. Ratings are read and written
//! through [`ClubRatingStore`], which the surrounding service implements on
//! top of whatever club storage it uses. [`MemoryClubStore`] is a simple
//! in-process implementation for tests and embedded callers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Club ID type
pub type ClubId = i64;

/// A club's current skill estimate: an elo rating and its uncertainty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubRating {
    pub club_id: ClubId,
    pub elo: f64,
    pub rating_deviation: f64,
}

/// Failure writing a rating back to the club store.
#[derive(Debug, Error)]
#[error("rating update failed for club {club_id}: {reason}")]
pub struct RatingUpdateError {
    pub club_id: ClubId,
    pub reason: String,
}

/// Read/write seam to the external club rating source.
///
/// The two calls are not atomic with bracket mutation: a crash between a
/// match closing and the rating write leaves a closed match with stale
/// ratings, which the caller reconciles out of band.
pub trait ClubRatingStore {
    /// Look up a club's current rating, `None` if the club is unknown.
    fn club_rating(&self, club_id: ClubId) -> Option<ClubRating>;

    /// Persist a club's new rating.
    fn set_club_rating(
        &mut self,
        club_id: ClubId,
        elo: f64,
        rating_deviation: f64,
    ) -> Result<(), RatingUpdateError>;
}

/// In-memory rating store.
#[derive(Clone, Debug, Default)]
pub struct MemoryClubStore {
    ratings: HashMap<ClubId, ClubRating>,
}

impl MemoryClubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a club's rating.
    pub fn insert(&mut self, club_id: ClubId, elo: f64, rating_deviation: f64) {
        self.ratings.insert(
            club_id,
            ClubRating {
                club_id,
                elo,
                rating_deviation,
            },
        );
    }
}

impl ClubRatingStore for MemoryClubStore {
    fn club_rating(&self, club_id: ClubId) -> Option<ClubRating> {
        self.ratings.get(&club_id).copied()
    }

    fn set_club_rating(
        &mut self,
        club_id: ClubId,
        elo: f64,
        rating_deviation: f64,
    ) -> Result<(), RatingUpdateError> {
        match self.ratings.get_mut(&club_id) {
            Some(rating) => {
                rating.elo = elo;
                rating.rating_deviation = rating_deviation;
                Ok(())
            }
            None => Err(RatingUpdateError {
                club_id,
                reason: "club not found".to_string(),
            }),
        }
    }
}
