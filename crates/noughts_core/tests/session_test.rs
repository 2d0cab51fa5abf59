//! Tests for the round state machine across whole sessions.

use noughts_core::rules::{LINES, evaluate_winner, is_full};
use noughts_core::{Cell, Mark, MoveError, Outcome, PlayerNames, Position, Session};

fn play(session: &mut Session, indices: &[usize]) {
    for &i in indices {
        assert!(session.click(i), "move at {i} should be accepted");
    }
}

/// Nine moves that fill the board without a line:
/// X O X / X O O / O X X
const DRAW_GAME: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

#[test]
fn test_top_row_win() {
    let mut session = Session::default();
    play(&mut session, &[0, 4, 1, 5, 2]);

    match session.outcome() {
        Outcome::Won { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_eq!(session.scores().wins(Mark::X), 1);

    for i in [3, 6, 7, 8] {
        assert!(!session.click(i));
    }
    assert_eq!(session.board().get(Position::BottomRight), Cell::Empty);
    assert_eq!(session.scores().total(), 1);
}

#[test]
fn test_draw_game() {
    let mut session = Session::default();
    play(&mut session, &DRAW_GAME);

    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(*session.scores().draws(), 1);
    assert_eq!(session.scores().total(), 1);
    assert_eq!(session.status_text(), "It's a draw.");
    assert_eq!(session.place_index(0), Err(MoveError::RoundOver));
}

#[test]
fn test_double_click_flips_turn_once() {
    let mut session = Session::default();
    assert!(session.click(0));
    assert!(!session.click(0));
    assert_eq!(session.to_move(), Mark::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_turn_alternates_on_every_accepted_move() {
    let mut session = Session::default();
    let mut expected = Mark::X;
    for i in [4, 4, 0, 0, 8, 2, 2, 6] {
        let before = session.to_move();
        let accepted = session.click(i);
        if accepted {
            assert_eq!(before, expected);
            expected = expected.opponent();
        }
        if !session.outcome().is_over() {
            assert_eq!(session.to_move(), expected);
        }
    }
}

#[test]
fn test_scoreboard_counts_completed_rounds() {
    let mut session = Session::default();

    // Round 1: X opens and wins the top row.
    play(&mut session, &[0, 4, 1, 5, 2]);
    session.new_round();

    // Round 2: O opens and wins the left column.
    assert_eq!(session.to_move(), Mark::O);
    play(&mut session, &[0, 1, 3, 2, 6]);
    assert_eq!(session.outcome().winner(), Some(Mark::O));
    session.new_round();

    // Round 3: X opens, draw.
    assert_eq!(session.to_move(), Mark::X);
    play(&mut session, &DRAW_GAME);
    session.new_round();

    // Round 4 abandoned.
    play(&mut session, &[4]);
    session.new_round();

    let scores = session.scores();
    assert_eq!(scores.wins(Mark::X), 1);
    assert_eq!(scores.wins(Mark::O), 1);
    assert_eq!(*scores.draws(), 1);
    assert_eq!(scores.total(), 3);
    assert_eq!(session.round(), 5);
}

#[test]
fn test_new_round_keeps_names_and_scores() {
    let mut session = Session::new(PlayerNames::new("Ann", "Bo"));
    play(&mut session, &[0, 4, 1, 5, 2]);
    let scores = *session.scores();

    session.new_round();

    assert_eq!(*session.scores(), scores);
    assert_eq!(session.names().get(Mark::X), "Ann");
    assert_eq!(session.names().get(Mark::O), "Bo");
    assert!(session.board().cells().iter().all(|c| c.is_empty()));
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.winning_line(), None);
    assert_eq!(session.status_text(), "Turn: Bo (O)");
}

#[test]
fn test_full_reset_from_mid_round() {
    let mut session = Session::new(PlayerNames::new("Ann", "Bo"));
    play(&mut session, &[0, 4, 1, 5, 2]);
    session.new_round();
    play(&mut session, &[8]);

    session.full_reset();

    assert_eq!(session.round(), 1);
    assert_eq!(session.scores().total(), 0);
    assert_eq!(session.to_move(), Mark::X);
    assert!(session.history().is_empty());
    assert_eq!(session.names().get(Mark::O), "Bo");
}

#[test]
fn test_winner_iff_uniform_line() {
    // Every board over {empty, X, O}: 3^9 of them.
    for code in 0..3usize.pow(9) {
        let mut session = Session::default();
        let mut n = code;
        let mut picture = [Cell::Empty; 9];
        for cell in picture.iter_mut() {
            *cell = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Marked(Mark::X),
                _ => Cell::Marked(Mark::O),
            };
            n /= 3;
        }
        let uniform = LINES.iter().any(|line| {
            let [a, b, c] = line.indices();
            !picture[a].is_empty() && picture[a] == picture[b] && picture[b] == picture[c]
        });

        // Boards are only reachable through play, so build this one by
        // alternating until every pictured cell is placed for its mark.
        let board = build_board(&mut session, &picture);
        if let Some(board) = board {
            assert_eq!(evaluate_winner(board).is_some(), uniform, "board {code}");
            if uniform {
                assert!(matches!(Outcome::evaluate(board), Outcome::Won { .. }));
            } else if is_full(board) {
                assert_eq!(Outcome::evaluate(board), Outcome::Draw);
            }
        }
    }
}

/// Reproduces `picture` through legal play when the mark counts allow it
/// and no line is completed before the last move. Returns `None` otherwise.
fn build_board<'a>(
    session: &'a mut Session,
    picture: &[Cell; 9],
) -> Option<&'a noughts_core::Board> {
    let xs: Vec<usize> = (0..9)
        .filter(|&i| picture[i] == Cell::Marked(Mark::X))
        .collect();
    let os: Vec<usize> = (0..9)
        .filter(|&i| picture[i] == Cell::Marked(Mark::O))
        .collect();
    if xs.len() != os.len() && xs.len() != os.len() + 1 {
        return None;
    }
    let mut order = Vec::with_capacity(9);
    for k in 0..xs.len() {
        order.push(xs[k]);
        if let Some(&o) = os.get(k) {
            order.push(o);
        }
    }
    for &i in &order {
        if !session.click(i) {
            return None;
        }
    }
    Some(session.board())
}
