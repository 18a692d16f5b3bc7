//! Concurrent access to a shared scoreboard
//!
//! Writers start, score and finish their own matches while readers keep
//! taking summaries. Every summary a reader sees must be ranked correctly
//! and consistent with lookups.

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use scoreboard::{Scoreboard, ScoreboardConfig};
use types::fixture::MatchView;

const WRITERS: usize = 4;
const ROUNDS: u32 = 200;

fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 11, 20, 0, 0).unwrap()
}

fn assert_ranked(summary: &[MatchView]) {
    for pair in summary.windows(2) {
        let total_a = pair[0].home_score + pair[0].away_score;
        let total_b = pair[1].home_score + pair[1].away_score;
        assert!(
            total_a > total_b || (total_a == total_b && pair[0].started_at >= pair[1].started_at),
            "summary out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_concurrent_writers_and_readers() {
    init_tracing();
    let board = Arc::new(Scoreboard::new(ScoreboardConfig::permissive()));

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let board = Arc::clone(&board);
            scope.spawn(move || {
                let home = format!("Home-{writer}");
                let away = format!("Away-{writer}");
                for round in 0..ROUNDS {
                    let started_at = kickoff()
                        + Duration::milliseconds(i64::from(round) * 10 + writer as i64);
                    board.start_match(started_at, &home, &away).unwrap();
                    for goals in 0..3 {
                        board.update_score(&away, goals, round % 5).unwrap();
                    }
                    if round + 1 < ROUNDS {
                        board.finish_match(&home).unwrap();
                    }
                }
            });
        }

        for _ in 0..2 {
            let board = Arc::clone(&board);
            scope.spawn(move || {
                for _ in 0..500 {
                    let summary = board.summary();
                    assert!(summary.len() <= WRITERS);
                    assert_ranked(&summary);
                }
            });
        }
    });

    let summary = board.summary();
    assert_eq!(summary.len(), WRITERS);
    assert_ranked(&summary);
    for view in &summary {
        let looked_up = board.get(&view.away).unwrap();
        assert_eq!(looked_up.id, view.id);
        assert_eq!((looked_up.home_score, looked_up.away_score), (2, (ROUNDS - 1) % 5));
    }
}

#[test]
fn test_racing_starts_admit_one_match_per_team() {
    init_tracing();
    let board = Arc::new(Scoreboard::new(ScoreboardConfig::permissive()));

    let winners: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let board = Arc::clone(&board);
                scope.spawn(move || {
                    let opponent = format!("Rival-{i}");
                    board
                        .start_match(kickoff() + Duration::milliseconds(i), "Brazil", &opponent)
                        .is_ok()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count()
    });

    assert_eq!(winners, 1);
    assert_eq!(board.active_matches(), 1);
    assert!(board.get("Brazil").is_some());
}
