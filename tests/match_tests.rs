//! Match sequencing and win detection.

use rust_bricks::core::{BoardConfig, BricksError, Coord, MatchConfig, Orientation};
use rust_bricks::rules::{Match, MatchStatus};

const H: Orientation = Orientation::Horizontal;
const V: Orientation = Orientation::Vertical;

fn game(rows: usize, cols: usize) -> Match {
    Match::with_dimensions(rows, cols).unwrap()
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_fresh_match_in_progress() {
    let game = Match::default();

    assert_eq!(game.board().rows(), 3);
    assert_eq!(game.board().cols(), 5);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert!(game.are_placements_available(H));
    assert!(game.are_placements_available(V));
    assert_eq!(game.turn(), 0);
    assert_eq!(game.to_move(), H);
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        Match::with_dimensions(0, 5),
        Err(BricksError::InvalidDimension { rows: 0, cols: 5 })
    ));
}

#[test]
fn test_reset_clears_board() {
    let mut game = Match::default();
    game.place_brick(H, Coord::new(0, 0)).unwrap();
    game.place_brick(V, Coord::new(1, 2)).unwrap();

    game.reset();

    assert!(game.board().bricks().is_empty());
    assert_eq!(game.turn(), 0);
    assert_eq!(game.status(), MatchStatus::InProgress);
}

#[test]
fn test_reset_with_first_changes_starter() {
    let mut game = Match::default();
    game.place_brick(H, Coord::new(0, 0)).unwrap();

    game.reset_with_first(V);

    assert_eq!(game.to_move(), V);
    assert_eq!(game.config().first_to_move, V);
    assert!(game.board().bricks().is_empty());

    game.place_brick(V, Coord::new(0, 0)).unwrap();
    assert_eq!(game.to_move(), H);
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_turn_counter_counts_successes_only() {
    let mut game = Match::default();

    game.place_brick(H, Coord::new(0, 0)).unwrap();
    assert!(game.place_brick(V, Coord::new(0, 0)).is_err());
    assert!(game.place_brick(H, Coord::new(0, 4)).is_err());
    game.place_brick(V, Coord::new(1, 0)).unwrap();

    assert_eq!(game.turn(), 2);
    assert_eq!(game.board().bricks().len(), 2);
}

#[test]
fn test_rejected_placement_is_atomic() {
    let mut game = Match::default();
    game.place_brick(H, Coord::new(1, 1)).unwrap();
    let before = game.board().clone();

    let err = game.place_brick(V, Coord::new(0, 1)).unwrap_err();

    assert!(matches!(err, BricksError::InvalidPlacement { orientation: V, .. }));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_error_message_names_the_placement() {
    let mut game = Match::default();
    let err = game.place_brick(V, Coord::new(2, 0)).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("vertical"), "{message}");
    assert!(message.contains("(2, 0)"), "{message}");
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_vertical_wins_when_horizontal_blocked() {
    // 2x2: one vertical brick leaves no horizontal pair.
    let mut game = game(2, 2);
    game.place_brick(V, Coord::new(0, 0)).unwrap();

    assert!(!game.are_placements_available(H));
    assert!(game.are_placements_available(V));
    assert_eq!(game.winner(), Some(V));
    assert_eq!(game.status(), MatchStatus::VerticalWins);
}

#[test]
fn test_horizontal_wins_when_vertical_blocked() {
    let mut game = game(2, 2);
    game.place_brick(H, Coord::new(0, 0)).unwrap();

    assert!(game.are_placements_available(H));
    assert!(!game.are_placements_available(V));
    assert_eq!(game.winner(), Some(H));
    assert!(game.status().is_winner(H));
}

#[test]
fn test_both_blocked_reports_vertical() {
    // 2x2 filled by two horizontal bricks.
    let mut game = game(2, 2);
    game.place_brick(H, Coord::new(0, 0)).unwrap();
    game.place_brick(H, Coord::new(1, 0)).unwrap();

    assert!(!game.are_placements_available(H));
    assert!(!game.are_placements_available(V));
    assert_eq!(game.winner(), Some(V));
    assert_eq!(game.status(), MatchStatus::VerticalWins);
}

#[test]
fn test_one_by_two_scenario() {
    let mut game = game(1, 2);
    // No room for a vertical brick at all.
    assert_eq!(game.winner(), Some(H));

    game.place_brick(H, Coord::new(0, 0)).unwrap();

    assert!(game.board().available_placements(H).is_empty());
    assert!(game.board().available_placements(V).is_empty());
    assert_eq!(game.winner(), Some(V));
    assert!(game.is_over());
}

#[test]
fn test_reference_game_to_completion() {
    let mut game = Match::new(MatchConfig::new(BoardConfig::default()));
    let moves = [
        (H, Coord::new(0, 0)),
        (V, Coord::new(0, 2)),
        (H, Coord::new(1, 0)),
        (V, Coord::new(0, 3)),
        (H, Coord::new(2, 0)),
        (V, Coord::new(0, 4)),
    ];

    for (orientation, head) in moves {
        assert_eq!(game.to_move(), orientation);
        assert_eq!(game.winner(), None);
        game.place_brick(orientation, head).unwrap();
    }

    // Only the bottom row has room left, and only for horizontal bricks.
    assert_eq!(game.board().available_placements(H), vec![Coord::new(2, 2), Coord::new(2, 3)]);
    assert!(!game.are_placements_available(V));
    assert_eq!(game.winner(), Some(H));
    assert_eq!(game.turn(), 6);
}
