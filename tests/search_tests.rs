//! Search agents playing full matches.

use rust_bricks::board::Board;
use rust_bricks::core::{BoardConfig, Coord, MatchConfig, Orientation};
use rust_bricks::rules::Match;
use rust_bricks::search::{
    play_match, Agent, FirstAgent, MinimaxAgent, RandomAgent, SearchConfig, WIN_SCORE,
};

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_random_self_play_is_reproducible() {
    let run = |seed: u64| {
        let mut game = Match::default();
        let mut horizontal = RandomAgent::new(seed);
        let mut vertical = RandomAgent::new(seed + 1);
        play_match(&mut game, &mut horizontal, &mut vertical).unwrap()
    };

    for seed in 0..5 {
        assert_eq!(run(seed), run(seed));
    }
}

#[test]
fn test_record_replays_onto_fresh_board() {
    let mut game = Match::default();
    let mut horizontal = MinimaxAgent::new(SearchConfig::default().with_max_depth(3));
    let mut vertical = RandomAgent::new(9);

    let record = play_match(&mut game, &mut horizontal, &mut vertical).unwrap();

    let mut replay = Board::default();
    for brick in &record.placements {
        replay.place_brick_at(brick.orientation, brick.head).unwrap();
    }
    assert_eq!(&replay, game.board());
    assert_eq!(record.winner, game.winner());
    assert!(game.is_over());
}

#[test]
fn test_agents_alternate() {
    let mut game = Match::new(MatchConfig::default().with_first_to_move(Orientation::Vertical));
    let record = play_match(&mut game, &mut FirstAgent, &mut FirstAgent).unwrap();

    for (i, brick) in record.placements.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        assert_eq!(brick.orientation, expected);
    }
}

// =============================================================================
// Minimax
// =============================================================================

#[test]
fn test_full_search_never_loses_a_won_position() {
    // 2x3 is a first-player win for either orientation.
    for first in Orientation::ALL {
        for seed in 0..5 {
            let config = MatchConfig::new(BoardConfig::new(2, 3).unwrap()).with_first_to_move(first);
            let mut game = Match::new(config);
            let mut minimax = MinimaxAgent::default();
            let mut random = RandomAgent::new(seed);

            let record = match first {
                Orientation::Horizontal => play_match(&mut game, &mut minimax, &mut random),
                Orientation::Vertical => play_match(&mut game, &mut random, &mut minimax),
            }
            .unwrap();

            assert_eq!(record.winner, Some(first));
        }
    }
}

#[test]
fn test_search_reports_forced_win() {
    let mut board = Board::default();
    // Free cells: (1,2) (1,3) (2,2) (2,3) (2,4).
    for (orientation, head) in [
        (Orientation::Horizontal, Coord::new(0, 0)),
        (Orientation::Horizontal, Coord::new(0, 2)),
        (Orientation::Vertical, Coord::new(0, 4)),
        (Orientation::Horizontal, Coord::new(1, 0)),
        (Orientation::Horizontal, Coord::new(2, 0)),
    ] {
        board.place_brick_at(orientation, head).unwrap();
    }

    let mut agent = MinimaxAgent::default();
    let (head, score) = agent.search(&board, Orientation::Vertical).unwrap();

    // (1,2) forces horizontal into (2,3), which leaves nobody a move;
    // a blocked horizontal side loses, so vertical wins.
    assert_eq!(head, Coord::new(1, 2));
    assert_eq!(score, WIN_SCORE);

    let mut game = Match::with_dimensions(3, 5).unwrap();
    for brick in board.bricks() {
        game.place_brick(brick.orientation, brick.head).unwrap();
    }
    game.place_brick(Orientation::Vertical, head).unwrap();
    game.place_brick(Orientation::Horizontal, Coord::new(2, 3)).unwrap();
    assert_eq!(game.winner(), Some(Orientation::Vertical));
    assert_eq!(agent.name(), "Minimax");
}

#[test]
fn test_minimax_wins_double_block_positions() {
    // ....
    // ...|
    // .--|
    let config = MatchConfig::new(BoardConfig::new(3, 4).unwrap());
    for seed in 0..10 {
        let mut game = Match::new(config);
        game.place_brick(Orientation::Vertical, Coord::new(1, 3)).unwrap();
        game.place_brick(Orientation::Horizontal, Coord::new(2, 1)).unwrap();

        let mut minimax = MinimaxAgent::default();
        let mut random = RandomAgent::new(seed);
        let record = play_match(&mut game, &mut minimax, &mut random).unwrap();

        assert_eq!(record.placements[0].head, Coord::new(0, 1));
        assert_eq!(record.winner, Some(Orientation::Horizontal));
    }
}

#[test]
fn test_depth_limit_bounds_ply() {
    let board = Board::default();
    let mut agent = MinimaxAgent::new(SearchConfig::default().with_max_depth(2));

    let best = agent.search(&board, Orientation::Horizontal);

    assert!(best.is_some());
    assert!(agent.stats().max_ply <= 2);
    assert!(agent.stats().nodes > 1);
}
