use crate::domain::scoreboard::{empty_round, GameSnapshot, RoundEntry, RoundScores, Scoreboard};
use crate::domain::view::{derive_view, should_show_guesses};

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

fn settled(scores: [i16; 4]) -> RoundScores {
    round(&[
        ("Campbell", Some(0), Some(scores[0])),
        ("Russell", Some(0), Some(scores[1])),
        ("Nathan", Some(0), Some(scores[2])),
        ("Dave", Some(0), Some(scores[3])),
    ])
}

fn snapshot(round_num: i64, dealer: &str) -> GameSnapshot {
    GameSnapshot {
        round_num,
        dealer: dealer.to_string(),
        ..GameSnapshot::default()
    }
}

#[test]
fn table_rows_follow_the_schedule_and_roster() {
    let board: Scoreboard = vec![
        settled([12, 1, 0, 10]),
        round(&[("Campbell", Some(3), None)]),
    ];

    let view = derive_view(&board, &snapshot(1, "Russell"));

    assert_eq!(view.table.players, ["Campbell", "Russell", "Nathan", "Dave"]);
    assert_eq!(view.table.rows.len(), 2);
    assert_eq!(view.table.rows[0].label, "7 Hearts ♥️");
    assert_eq!(view.table.rows[1].label, "6 Clubs ♣️");
    assert_eq!(view.table.rows[0].cells[0].score, Some(12));
    assert_eq!(view.table.rows[1].cells[0].guess, Some(3));
    assert_eq!(view.table.rows[1].cells[3].guess, None);
}

#[test]
fn totals_treat_absent_scores_as_zero() {
    let board: Scoreboard = vec![settled([12, 1, 0, 10]), round(&[("Campbell", Some(3), None)])];

    let view = derive_view(&board, &snapshot(1, ""));

    assert_eq!(view.table.totals, [12, 1, 0, 10]);
}

#[test]
fn rows_past_the_schedule_get_a_placeholder_label() {
    let board: Scoreboard = (0..14).map(|_| empty_round()).collect();

    let view = derive_view(&board, &snapshot(13, ""));

    assert_eq!(view.table.rows[13].label, "—");
    assert!(view.banner.game_over);
}

#[test]
fn gate_opens_on_any_guess_and_no_scores() {
    let pending = round(&[("Campbell", Some(3), None)]);
    assert!(should_show_guesses(&pending));

    let untouched = empty_round();
    assert!(!should_show_guesses(&untouched));

    let scoring_started = round(&[("Campbell", Some(3), None), ("Dave", Some(1), Some(11))]);
    assert!(!should_show_guesses(&scoring_started));
}

#[test]
fn pending_panel_lists_only_players_with_bids() {
    let board: Scoreboard = vec![round(&[("Campbell", Some(3), None), ("Nathan", Some(0), None)])];

    let view = derive_view(&board, &snapshot(0, "Nathan"));

    let panel = view.pending_guesses.expect("panel should be visible");
    let names: Vec<&str> = panel.iter().map(|p| p.player.as_str()).collect();
    assert_eq!(names, ["Campbell", "Nathan"]);
    assert_eq!(panel[0].guess, 3);
    assert_eq!(panel[1].guess, 0);
}

#[test]
fn pending_panel_suppressed_once_scoring_begins() {
    let board: Scoreboard = vec![round(&[
        ("Campbell", Some(3), Some(13)),
        ("Nathan", Some(0), None),
    ])];

    let view = derive_view(&board, &snapshot(0, ""));

    assert_eq!(view.pending_guesses, None);
}

#[test]
fn pending_panel_absent_when_the_round_is_not_on_the_board() {
    let board: Scoreboard = vec![round(&[("Campbell", Some(3), None)])];

    let view = derive_view(&board, &snapshot(5, ""));

    assert_eq!(view.pending_guesses, None);
}

#[test]
fn no_outcome_mid_game() {
    let board: Scoreboard = vec![settled([1, 2, 3, 4]); 12];

    let view = derive_view(&board, &snapshot(12, ""));

    assert_eq!(view.outcome, None);
}

#[test]
fn outcome_appears_once_all_rounds_are_on_the_board() {
    // Thirteen settled rounds; Dave takes it on totals.
    let mut board: Scoreboard = vec![settled([1, 2, 3, 4]); 13];
    board[12] = settled([10, 0, 0, 10]);

    let view = derive_view(&board, &snapshot(13, "Dave"));

    let outcome = view.outcome.expect("game is over");
    assert_eq!(outcome.winner, "Dave");
    assert_eq!(outcome.winner_score, 58);
    assert_eq!(outcome.standings[0].rank, 1);
    assert_eq!(outcome.standings.len(), 4);
    // Badge is gone once no rounds remain.
    assert_eq!(view.dealer, None);
}

#[test]
fn winner_tie_break_prefers_roster_order() {
    // Campbell and Dave finish level; Campbell is earlier in the roster.
    let board: Scoreboard = vec![settled([4, 1, 1, 4]); 13];

    let view = derive_view(&board, &snapshot(13, ""));

    let outcome = view.outcome.expect("game is over");
    assert_eq!(outcome.winner, "Campbell");
    assert_eq!(outcome.standings[0].rank, 1);
    assert_eq!(outcome.standings[1].rank, 1);
    assert_eq!(outcome.standings[1].player, "Dave");
    assert_eq!(outcome.standings[2].rank, 3);
}

#[test]
fn dealer_badge_flows_through_the_view() {
    let board: Scoreboard = vec![empty_round(); 3];

    // Round index 2 is Diamonds.
    let view = derive_view(&board, &snapshot(2, "Dave"));

    assert_eq!(view.dealer.as_deref(), Some("It's...♦️Diamond♦️ Dave!"));
    assert_eq!(view.banner.round_no, 3);
}

#[test]
fn negative_round_num_falls_back_to_the_first_round() {
    let board: Scoreboard = vec![round(&[("Campbell", Some(2), None)])];

    let view = derive_view(&board, &snapshot(-3, "Nathan"));

    assert_eq!(view.banner.round_no, 1);
    assert!(view.pending_guesses.is_some());
}
