//! End-to-end games through the `GameState` surface.

use checkers_engine::board::{MoveErrorKind, SearchParams};
use checkers_engine::{Board, Color, GameConfig, GameState, GameStatus, Rules, Square};

#[test]
fn opening_exchange_against_the_engine() {
    let mut game = GameState::new(GameConfig {
        search: SearchParams::with_depth(3),
        ..Default::default()
    });
    assert_eq!(game.computer(), Some(Color::Dark));

    let outcome = game.play(Square(2, 1), Square(3, 0)).unwrap();
    assert_eq!(outcome.to_string(), "Move completed.");

    let reply = game.computer_move().unwrap().expect("engine should reply");
    assert_eq!(
        game.board().piece_at(reply.mv.to()).map(|p| p.color()),
        Some(Color::Dark)
    );
    assert_eq!(game.side_to_move(), Color::Light);
    assert_eq!(game.board().piece_count(Color::Light), 12);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn engine_cannot_be_moved_by_the_player() {
    let mut game = GameState::default();
    let err = game.play(Square(5, 0), Square(4, 1)).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::InvalidOrigin);
    assert_eq!(*game.board(), Board::new());
}

#[test]
fn hints_match_playable_moves() {
    let mut game = GameState::new(GameConfig {
        computer: None,
        ..Default::default()
    });
    for _ in 0..20 {
        if game.status() != GameStatus::InProgress {
            break;
        }
        let color = game.side_to_move();
        let squares: Vec<Square> = game.board().pieces_of(color).iter().collect();
        let Some((from, to)) = squares.iter().find_map(|from| {
            game.hint(*from).first().map(|to| (*from, *to))
        }) else {
            break;
        };
        game.play(from, to).unwrap();
        assert_eq!(game.side_to_move(), color.opponent());
    }
}

#[test]
fn scripted_game_with_forced_capture() {
    let mut game = GameState::new(GameConfig {
        computer: None,
        ..Default::default()
    });
    game.play(Square(2, 3), Square(3, 4)).unwrap();
    game.play(Square(5, 2), Square(4, 3)).unwrap();

    // Light's man on (3, 4) now has to take
    let err = game.play(Square(3, 4), Square(4, 5)).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::ForcedCaptureViolation);
    assert_eq!(game.hint(Square(3, 4)), vec![Square(5, 2)]);

    let outcome = game.play(Square(3, 4), Square(5, 2)).unwrap();
    assert!(outcome.captured.is_some());
    assert_eq!(game.board().piece_count(Color::Dark), 11);
    assert_eq!(game.side_to_move(), Color::Dark);
}

#[test]
fn engine_plays_out_a_game() {
    let mut game = GameState::new(GameConfig {
        rules: Rules::side_wide(),
        computer: Some(Color::Dark),
        search: SearchParams::with_depth(2),
    });

    for _ in 0..60 {
        if game.status() != GameStatus::InProgress {
            break;
        }
        if game.is_computer_turn() {
            assert!(matches!(game.computer_move(), Ok(Some(_))));
        } else {
            let moves = game.legal_moves();
            let mv = moves[0];
            game.play(mv.from(), mv.to()).unwrap();
        }
        for (square, _) in game.board().pieces() {
            assert!(square.is_playable());
        }
    }
}
