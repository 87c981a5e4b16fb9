//! Glicko-style rating updates applied after every bracket match.
//!
//! The math lives in [`engine`] as stateless pure functions so it can be
//! unit- and property-tested without any bracket or store in sight.

pub mod engine;

pub use engine::{RATING_DEVIATION_FLOOR, RatingUpdate, update_match_ratings};
