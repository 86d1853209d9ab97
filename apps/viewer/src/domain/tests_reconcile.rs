use std::collections::BTreeMap;

use crate::domain::reconcile::reconcile;
use crate::domain::rules::ROSTER;
use crate::domain::scoreboard::{empty_round, GameSnapshot, RoundEntry, RoundScores, Scoreboard};

fn round(entries: &[(&str, Option<u8>, Option<i16>)]) -> RoundScores {
    let mut out = empty_round();
    for (player, guess, score) in entries {
        out.insert(
            (*player).to_string(),
            RoundEntry {
                guess: *guess,
                score: *score,
            },
        );
    }
    out
}

fn guesses(pairs: &[(&str, u8)]) -> BTreeMap<String, Option<u8>> {
    pairs
        .iter()
        .map(|(player, guess)| ((*player).to_string(), Some(*guess)))
        .collect()
}

fn guess_snapshot(round_num: i64, pairs: &[(&str, u8)]) -> GameSnapshot {
    GameSnapshot {
        round_num,
        guesses: Some(guesses(pairs)),
        ..GameSnapshot::default()
    }
}

#[test]
fn full_replace_wins_over_cache() {
    let cached: Scoreboard = vec![round(&[("Campbell", Some(3), Some(13))])];
    let incoming: Scoreboard = vec![
        round(&[("Campbell", Some(3), Some(13))]),
        round(&[("Russell", Some(2), Some(2))]),
        round(&[("Nathan", Some(1), Some(11))]),
    ];

    let merged = reconcile(
        &cached,
        &GameSnapshot {
            scores_by_round: Some(incoming.clone()),
            ..GameSnapshot::default()
        },
    );

    assert_eq!(merged.display, incoming);
    assert_eq!(merged.cache, incoming);
}

#[test]
fn full_replace_with_settled_target_round_is_exact() {
    // Guess overlay must not touch the incoming board when the target
    // round is already settled.
    let settled = round(&[
        ("Campbell", Some(3), Some(13)),
        ("Russell", Some(2), Some(2)),
        ("Nathan", Some(0), Some(10)),
        ("Dave", Some(1), Some(1)),
    ]);
    let incoming: Scoreboard = vec![settled];

    let mut snapshot = guess_snapshot(0, &[("Campbell", 7), ("Dave", 5)]);
    snapshot.scores_by_round = Some(incoming.clone());

    let merged = reconcile(&Vec::new(), &snapshot);
    assert_eq!(merged.display, incoming);
}

#[test]
fn empty_scores_by_round_is_treated_as_absent() {
    let cached: Scoreboard = vec![round(&[("Campbell", Some(3), Some(13))])];

    let merged = reconcile(
        &cached,
        &GameSnapshot {
            scores_by_round: Some(Vec::new()),
            ..GameSnapshot::default()
        },
    );

    assert_eq!(merged.display, cached);
    assert_eq!(merged.cache, cached);
}

#[test]
fn pads_empty_cache_up_to_the_snapshot_round() {
    let merged = reconcile(&Vec::new(), &guess_snapshot(3, &[("Campbell", 5)]));

    assert_eq!(merged.display.len(), 4);
    for earlier in &merged.display[..3] {
        for player in ROSTER {
            assert_eq!(earlier[player], RoundEntry::default());
        }
    }
    assert_eq!(merged.display[3]["Campbell"].guess, Some(5));
    for player in ["Russell", "Nathan", "Dave"] {
        assert_eq!(merged.display[3][player].guess, None);
        assert_eq!(merged.display[3][player].score, None);
    }
}

#[test]
fn settled_entries_ignore_new_guesses() {
    let cached: Scoreboard = vec![round(&[
        ("Campbell", Some(2), Some(12)),
        ("Russell", None, None),
    ])];

    let merged = reconcile(&cached, &guess_snapshot(0, &[("Campbell", 7), ("Russell", 3)]));

    assert_eq!(merged.display[0]["Campbell"].guess, Some(2));
    assert_eq!(merged.display[0]["Campbell"].score, Some(12));
    assert_eq!(merged.display[0]["Russell"].guess, Some(3));
}

#[test]
fn unsettled_guess_is_overwritten_even_when_absent_upstream() {
    // A player missing from the guesses map degrades to "no guess",
    // matching the source-of-truth semantics for unsettled rounds.
    let cached: Scoreboard = vec![round(&[("Russell", Some(4), None)])];

    let merged = reconcile(&cached, &guess_snapshot(0, &[("Campbell", 1)]));

    assert_eq!(merged.display[0]["Campbell"].guess, Some(1));
    assert_eq!(merged.display[0]["Russell"].guess, None);
}

#[test]
fn overlay_is_display_only() {
    let cached: Scoreboard = vec![round(&[("Campbell", None, None)])];

    let merged = reconcile(&cached, &guess_snapshot(0, &[("Campbell", 6)]));

    assert_eq!(merged.display[0]["Campbell"].guess, Some(6));
    // The cache keeps only what the source provided.
    assert_eq!(merged.cache, cached);
}

#[test]
fn full_replace_overlays_display_but_caches_the_replacement() {
    let incoming: Scoreboard = vec![round(&[("Campbell", None, None)])];

    let mut snapshot = guess_snapshot(0, &[("Campbell", 4)]);
    snapshot.scores_by_round = Some(incoming.clone());

    let merged = reconcile(&Vec::new(), &snapshot);

    assert_eq!(merged.display[0]["Campbell"].guess, Some(4));
    assert_eq!(merged.cache, incoming);
}

#[test]
fn negative_round_num_skips_the_overlay() {
    let cached: Scoreboard = vec![round(&[("Campbell", None, None)])];

    let merged = reconcile(&cached, &guess_snapshot(-1, &[("Campbell", 6)]));

    assert_eq!(merged.display, cached);
}

#[test]
fn snapshot_without_guesses_leaves_the_cache_copy_untouched() {
    let cached: Scoreboard = vec![
        round(&[("Campbell", Some(2), Some(12))]),
        round(&[("Dave", Some(1), None)]),
    ];

    let merged = reconcile(
        &cached,
        &GameSnapshot {
            round_num: 5,
            ..GameSnapshot::default()
        },
    );

    assert_eq!(merged.display, cached);
    assert_eq!(merged.cache, cached);
}

#[test]
fn round_count_never_shrinks_across_a_session() {
    let snapshots = [
        guess_snapshot(2, &[("Campbell", 3)]),
        // Stale snapshot pointing back at round 0.
        guess_snapshot(0, &[("Dave", 1)]),
        GameSnapshot::default(),
        guess_snapshot(5, &[("Russell", 2)]),
    ];

    let mut cache: Scoreboard = Vec::new();
    let mut last_len = 0;
    for snapshot in &snapshots {
        let merged = reconcile(&cache, snapshot);
        assert!(merged.display.len() >= last_len);
        last_len = merged.display.len();
        cache = merged.cache;
    }
}
