//! Pure rating math.
//!
//! A Glicko-inspired update: each side's new (elo, rating deviation) pair
//! is computed from both sides' current values and the final score, then
//! clamped so that winning always nets at least +1.0 elo, losing at least
//! -1.0, and rating deviation shrinks by at least 0.5 before being floored
//! at 30.0. The clamps keep ratings moving even in heavily lopsided
//! pairings where the raw formula barely reacts.

use crate::club::ClubRating;

/// Base sensitivity to elo change.
const K_BASE: f64 = 30.0;

/// Shifts the sigmoid over the goal margin; 0 leaves it centred.
const SCORE_SENSITIVITY: i64 = 0;

/// Reference rating deviation for scaling the K-factor.
const RD_BASE: f64 = 50.0;

/// Glicko q constant, `ln(10) / 400`.
const Q_SCALING_FACTOR: f64 = std::f64::consts::LN_10 / 400.0;

/// Rating deviation never drops below this.
pub const RATING_DEVIATION_FLOOR: f64 = 30.0;

/// A win moves elo by at least this much; a loss by at least the negative.
const MIN_ELO_SHIFT: f64 = 1.0;

/// Rating deviation shrinks by at least this much per rated match.
const MIN_RD_SHRINK: f64 = 0.5;

/// One club's rating after a match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingUpdate {
    pub elo: f64,
    pub rating_deviation: f64,
}

/// `g(RD)` dampens an opponent's influence by their rating uncertainty.
fn g(rating_deviation: f64) -> f64 {
    let spread = (Q_SCALING_FACTOR * rating_deviation).powi(2);
    1.0 / (1.0 + 3.0 * spread / std::f64::consts::PI.powi(2)).sqrt()
}

/// Sigmoid over the goal margin, squashing blowouts into (0, 1).
fn adjusted_score(score_difference: i64, score_sensitivity: i64) -> f64 {
    1.0 / (1.0 + (-((score_difference - score_sensitivity) as f64)).exp())
}

/// New rating for one side of a match.
fn rate_side(
    club: &ClubRating,
    opponent: &ClubRating,
    club_score: u32,
    opponent_score: u32,
    club_won: bool,
) -> RatingUpdate {
    let g_opponent = g(opponent.rating_deviation);
    let expected = 1.0 / (1.0 + 10f64.powf(g_opponent * (opponent.elo - club.elo) / 400.0));

    // Draws with a declared winner (penalty shootouts) still move ratings.
    let mut margin = i64::from(club_score) - i64::from(opponent_score);
    if margin == 0 {
        margin = if club_won { 1 } else { -1 };
    }
    let actual = adjusted_score(margin, SCORE_SENSITIVITY);

    let k = K_BASE * (club.rating_deviation / RD_BASE);
    let mut elo = club.elo + k * g_opponent * (actual - expected);

    let d_squared =
        1.0 / (Q_SCALING_FACTOR.powi(2) * g_opponent.powi(2) * expected * (1.0 - expected));
    let mut rating_deviation =
        (1.0 / (1.0 / club.rating_deviation.powi(2) + 1.0 / d_squared)).sqrt();

    // Minimum-change guarantees, applied per club: the winner always gains
    // at least MIN_ELO_SHIFT even when heavily favoured, and the loser
    // always drops at least as much.
    if club_won && elo - club.elo < MIN_ELO_SHIFT {
        elo = club.elo + MIN_ELO_SHIFT;
    } else if !club_won && club.elo - elo < MIN_ELO_SHIFT {
        elo = club.elo - MIN_ELO_SHIFT;
    }

    if club.rating_deviation - rating_deviation < MIN_RD_SHRINK {
        rating_deviation = club.rating_deviation - MIN_RD_SHRINK;
    }
    rating_deviation = rating_deviation.max(RATING_DEVIATION_FLOOR);

    RatingUpdate {
        elo,
        rating_deviation,
    }
}

/// Compute both sides' post-match ratings.
///
/// `club1_won` reflects the reported winner, which also decides the sign
/// of a drawn scoreline. The computation is symmetric: club 2's update is
/// club 1's with the sides swapped.
pub fn update_match_ratings(
    club1: &ClubRating,
    club2: &ClubRating,
    club1_score: u32,
    club2_score: u32,
    club1_won: bool,
) -> (RatingUpdate, RatingUpdate) {
    (
        rate_side(club1, club2, club1_score, club2_score, club1_won),
        rate_side(club2, club1, club2_score, club1_score, !club1_won),
    )
}
