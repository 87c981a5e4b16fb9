//! Integration tests for the full bracket lifecycle
//!
//! These drive a tournament from seeding through every reported result to
//! a champion, the way the surrounding service would.

use bracket_engine::{
    BracketError, ClubId, ClubRatingStore, ClubSeed, MatchUpdate, MemoryClubStore, Tournament,
    build_bracket, report_result,
};

fn result(
    club1_id: ClubId,
    club2_id: ClubId,
    club1_score: u32,
    club2_score: u32,
    winning_club_id: ClubId,
) -> MatchUpdate {
    MatchUpdate {
        over: true,
        club1_id: Some(club1_id),
        club2_id: Some(club2_id),
        club1_score,
        club2_score,
        winning_club_id: Some(winning_club_id),
    }
}

#[test]
fn five_club_tournament_runs_to_a_champion() {
    let clubs: Vec<ClubSeed> = [2000.0, 1800.0, 1600.0, 1400.0, 1200.0]
        .iter()
        .enumerate()
        .map(|(i, &elo)| ClubSeed {
            club_id: i as ClubId + 1,
            elo,
        })
        .collect();

    let mut store = MemoryClubStore::new();
    for club in &clubs {
        store.insert(club.club_id, club.elo, 50.0);
    }

    let mut tournament = Tournament::new(42, "Kickoff Cup");
    tournament.bracket = Some(build_bracket(42, &clubs).unwrap());

    {
        let bracket = tournament.bracket.as_ref().unwrap();
        assert_eq!(bracket.rounds.len(), 3);
        // Three byes: only 1400 vs 1200 is actually played in round 3.
        let byes = bracket.round(3).unwrap();
        assert_eq!(byes.matches.iter().filter(|m| m.over).count(), 3);
    }

    // Quarterfinal: club 4 beats club 5.
    report_result(&mut tournament, 3, 2, &result(4, 5, 2, 1, 4), &mut store).unwrap();

    // Semifinals: the top seed beats club 4, club 2 beats club 3.
    report_result(&mut tournament, 2, 1, &result(1, 4, 3, 0, 1), &mut store).unwrap();
    report_result(&mut tournament, 2, 2, &result(2, 3, 2, 2, 2), &mut store).unwrap();

    // Final: club 1 takes the trophy.
    report_result(&mut tournament, 1, 1, &result(1, 2, 1, 0, 1), &mut store).unwrap();

    let bracket = tournament.bracket.as_ref().unwrap();
    assert!(bracket.is_complete());
    assert_eq!(bracket.winning_club_id, Some(1));
    assert!(tournament.over);

    // The champion won two rated matches and the bottom club lost one.
    assert!(store.club_rating(1).unwrap().elo >= 2002.0);
    assert!(store.club_rating(5).unwrap().elo <= 1199.0);
    // Everyone who played had their deviation tightened.
    for club_id in [1, 2, 3, 4, 5] {
        assert!(store.club_rating(club_id).unwrap().rating_deviation <= 49.5);
    }
}

#[test]
fn semifinal_losers_do_not_reach_the_final() {
    let clubs: Vec<ClubSeed> = (0..4)
        .map(|i| ClubSeed {
            club_id: i as ClubId + 1,
            elo: 1600.0 - i as f64 * 100.0,
        })
        .collect();

    let mut store = MemoryClubStore::new();
    for club in &clubs {
        store.insert(club.club_id, club.elo, 50.0);
    }

    let mut tournament = Tournament::new(7, "Round of Four");
    tournament.bracket = Some(build_bracket(7, &clubs).unwrap());

    // Seed order [1, 4, 2, 3]: both semifinals are fully seeded, no byes.
    report_result(&mut tournament, 2, 1, &result(1, 4, 2, 0, 1), &mut store).unwrap();
    report_result(&mut tournament, 2, 2, &result(2, 3, 0, 1, 3), &mut store).unwrap();

    let final_match = tournament
        .bracket
        .as_ref()
        .unwrap()
        .match_at(1, 1)
        .unwrap()
        .clone();
    assert_eq!(final_match.club1_id, Some(1));
    assert_eq!(final_match.club2_id, Some(3));
    assert!(!final_match.over);
}

#[test]
fn match_update_payload_parses_from_service_json() {
    let payload = r#"{
        "over": true,
        "club1_id": 11,
        "club2_id": 22,
        "club1_score": 3,
        "club2_score": 3,
        "winning_club_id": 22
    }"#;

    let update: MatchUpdate = serde_json::from_str(payload).unwrap();
    assert!(update.over);
    assert_eq!(update.club1_id, Some(11));
    assert_eq!(update.club2_id, Some(22));
    assert_eq!(update.winning_club_id, Some(22));
}

#[test]
fn rating_write_failures_surface_after_the_match_closes() {
    /// Store that knows the clubs but refuses every write, standing in for
    /// a club service outage between close and rating update.
    struct ReadOnlyStore(MemoryClubStore);

    impl ClubRatingStore for ReadOnlyStore {
        fn club_rating(&self, club_id: ClubId) -> Option<bracket_engine::ClubRating> {
            self.0.club_rating(club_id)
        }

        fn set_club_rating(
            &mut self,
            club_id: ClubId,
            _elo: f64,
            _rating_deviation: f64,
        ) -> Result<(), bracket_engine::RatingUpdateError> {
            Err(bracket_engine::RatingUpdateError {
                club_id,
                reason: "club service unavailable".to_string(),
            })
        }
    }

    let clubs = vec![
        ClubSeed {
            club_id: 1,
            elo: 1500.0,
        },
        ClubSeed {
            club_id: 2,
            elo: 1400.0,
        },
    ];
    let mut inner = MemoryClubStore::new();
    inner.insert(1, 1500.0, 50.0);
    inner.insert(2, 1400.0, 50.0);
    let mut store = ReadOnlyStore(inner);

    let mut tournament = Tournament::new(9, "Outage Derby");
    tournament.bracket = Some(build_bracket(9, &clubs).unwrap());

    let err = report_result(&mut tournament, 1, 1, &result(1, 2, 1, 0, 1), &mut store)
        .unwrap_err();
    assert!(matches!(err, BracketError::RatingUpdate(_)));

    // The accepted inconsistency window: the match closed, ratings did not.
    let closed = tournament.bracket.as_ref().unwrap().match_at(1, 1).unwrap();
    assert!(closed.over);
    assert_eq!(store.club_rating(1).unwrap().elo, 1500.0);
}
