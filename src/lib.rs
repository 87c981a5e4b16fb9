//! # Bracket Engine
//!
//! A single-elimination tournament bracket engine for club competitions,
//! with Glicko-style skill ratings updated after every match.
//!
//! The engine is a library-level component: persistence, transport, and
//! club roster management belong to the surrounding service. Club ratings
//! are read and written through the narrow [`ClubRatingStore`] seam, and
//! bracket state is plain data the caller can store however it likes.
//!
//! ## Architecture
//!
//! A bracket moves through three phases:
//!
//! - **Build**: clubs are ranked by elo into seed ranks and placed with the
//!   standard seed order ([`bracket::seeding`]), which keeps the top seeds
//!   apart until the late rounds. Club counts below the next power of two
//!   leave byes in the first round ([`bracket::builder`]).
//! - **Bye resolution**: matches with a single club resolve immediately and
//!   their winners are promoted into the second round.
//! - **Progression**: each reported result closes one match, updates both
//!   clubs' ratings ([`rating`]), and promotes the winner until the final
//!   (round 1) crowns the bracket ([`bracket::progression`]).
//!
//! Round numbers count downwards: the earliest round has the highest
//! number and the final is always round 1.
//!
//! ## Example
//!
//! ```
//! use bracket_engine::{ClubSeed, MatchUpdate, MemoryClubStore, Tournament};
//!
//! let mut store = MemoryClubStore::new();
//! store.insert(10, 1500.0, 50.0);
//! store.insert(20, 1400.0, 50.0);
//!
//! let clubs = vec![
//!     ClubSeed { club_id: 10, elo: 1500.0 },
//!     ClubSeed { club_id: 20, elo: 1400.0 },
//! ];
//!
//! let mut tournament = Tournament::new(1, "Sunday Cup");
//! tournament.bracket = Some(bracket_engine::build_bracket(1, &clubs)?);
//!
//! let result = MatchUpdate {
//!     over: true,
//!     club1_id: Some(10),
//!     club2_id: Some(20),
//!     club1_score: 2,
//!     club2_score: 1,
//!     winning_club_id: Some(10),
//! };
//! bracket_engine::report_result(&mut tournament, 1, 1, &result, &mut store)?;
//!
//! assert!(tournament.over);
//! # Ok::<(), bracket_engine::BracketError>(())
//! ```

/// Bracket construction, bye resolution, and match progression.
pub mod bracket;
pub use bracket::{
    Bracket, BracketError, BracketResult, ClubSeed, Match, MatchUpdate, Round, Tournament,
    TournamentId, build_bracket, report_result, resolve_byes, standard_seed_order,
};

/// Club rating collaborator seam.
pub mod club;
pub use club::{ClubId, ClubRating, ClubRatingStore, MemoryClubStore, RatingUpdateError};

/// Glicko-style rating updates.
pub mod rating;
pub use rating::{RatingUpdate, update_match_ratings};
