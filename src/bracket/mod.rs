//! Single-elimination bracket construction and progression.
//!
//! This module provides the bracket lifecycle:
//! - [`seeding`]: the standard seed placement order for a bracket size
//! - [`builder`]: round layout, elo seeding, and first-round bye resolution
//! - [`progression`]: the match-result state machine that closes matches,
//!   updates ratings, and promotes winners
//! - [`models`]: the bracket, round, and match data the above operate on

pub mod builder;
pub mod errors;
pub mod models;
pub mod progression;
pub mod seeding;

pub use builder::{build_bracket, resolve_byes};
pub use errors::{BracketError, BracketResult};
pub use models::{Bracket, ClubSeed, Match, MatchUpdate, Round, Tournament, TournamentId};
pub use progression::report_result;
pub use seeding::standard_seed_order;
