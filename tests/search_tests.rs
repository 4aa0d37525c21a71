//! Search tests to verify the engine finds sensible moves in small positions.

use checkers_engine::board::{
    find_best_move, parallel_search, search, Board, BoardBuilder, Color, Move, SearchParams,
    SearchState, Square,
};

fn state_at(depth: u32) -> SearchState {
    SearchState::new(SearchParams::with_depth(depth))
}

/// Test that the engine does not step into a capture
#[test]
fn avoids_hanging_a_man() {
    // (2,1)-(3,2) walks into the Dark man on (4,3)
    let board = BoardBuilder::new()
        .man(Square(2, 1), Color::Light)
        .man(Square(4, 3), Color::Dark)
        .build()
        .unwrap();

    for depth in 2..=3 {
        let mut state = state_at(depth);
        let result = search(&board, Color::Light, &mut state);
        assert_eq!(
            result.best_move,
            Some(Move::quiet(Square(2, 1), Square(3, 0))),
            "depth {depth}"
        );
        assert_eq!(result.score, 0);
    }
}

/// Test that a shallow search does not see the threat
#[test]
fn depth_one_misses_the_reply() {
    let board = BoardBuilder::new()
        .man(Square(2, 1), Color::Light)
        .man(Square(4, 3), Color::Dark)
        .build()
        .unwrap();
    let mut state = state_at(1);
    assert_eq!(
        find_best_move(&board, Color::Light, &mut state),
        Some(Move::quiet(Square(2, 1), Square(3, 0)))
    );
    // Both moves look equal one ply deep, so the first generated one is kept
    assert_eq!(search(&board, Color::Light, &mut state).score, 0);
}

/// Test that the engine crowns a man when it can
#[test]
fn prefers_crowning() {
    let board = BoardBuilder::new()
        .man(Square(6, 1), Color::Light)
        .man(Square(2, 1), Color::Light)
        .man(Square(5, 6), Color::Dark)
        .build()
        .unwrap();
    let mut state = state_at(1);
    let result = search(&board, Color::Light, &mut state);
    assert_eq!(result.best_move, Some(Move::quiet(Square(6, 1), Square(7, 0))));
    assert_eq!(result.score, 3);
}

/// Test that Dark, searching as the maximizing side, takes material
#[test]
fn dark_takes_material() {
    let board = BoardBuilder::new()
        .man(Square(4, 3), Color::Dark)
        .man(Square(3, 4), Color::Light)
        .man(Square(0, 1), Color::Light)
        .man(Square(7, 0), Color::Dark)
        .build()
        .unwrap();
    let mut state = state_at(2);
    let mv = find_best_move(&board, Color::Dark, &mut state).unwrap();
    assert!(mv.is_capture());
    assert_eq!(mv.to(), Square(2, 5));
}

/// Test that parallel root search agrees with the sequential search
#[test]
fn parallel_search_agrees() {
    let board = Board::new();
    for depth in 1..=5 {
        let expected = search(&board, Color::Light, &mut state_at(depth));
        let result = parallel_search(&board, Color::Light, &mut state_at(depth), 3);
        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.score);
    }
}
