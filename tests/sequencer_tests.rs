//! Piece sequencing tests

use blockfall::core::{BagSequencer, GameState, PieceSource, Sequencer};
use blockfall::types::{ShapeKind, SHAPE_ORDER};

#[test]
fn test_cyclic_order_from_fresh_sequencer() {
    let mut seq = Sequencer::new();
    let drawn: Vec<_> = (0..7).map(|_| seq.next_shape()).collect();
    assert_eq!(
        drawn,
        vec![
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::O,
            ShapeKind::L,
            ShapeKind::J,
            ShapeKind::I,
            ShapeKind::T,
        ]
    );
}

#[test]
fn test_calls_one_to_seven_match_eight_to_fourteen() {
    let drawn: Vec<_> = Sequencer::new().take(14).collect();
    assert_eq!(drawn[..7], drawn[7..]);
}

#[test]
fn test_cycle_holds_far_out() {
    let mut seq = Sequencer::starting_at(7 * 1000);
    for expected in SHAPE_ORDER {
        assert_eq!(seq.next_shape(), expected);
    }
}

#[test]
fn test_peek_does_not_advance() {
    let mut seq = Sequencer::new();
    assert_eq!(seq.peek(), ShapeKind::S);
    assert_eq!(seq.peek(), ShapeKind::S);
    assert_eq!(seq.next_shape(), ShapeKind::S);
    assert_eq!(seq.peek(), ShapeKind::Z);
}

#[test]
fn test_engine_spawns_in_sequencer_order() {
    let mut gs = GameState::new();
    gs.reset(10, 20).unwrap();

    let mut spawned = Vec::new();
    for _ in 0..8 {
        gs.tick().unwrap();
        spawned.push(gs.active().unwrap().kind);
        // Hard drop so the next tick spawns again
        while gs.active().is_some() {
            gs.tick().unwrap();
        }
        gs.reset(10, 20).unwrap();
    }

    let expected: Vec<_> = Sequencer::new().take(8).collect();
    assert_eq!(spawned, expected);
}

#[test]
fn test_next_piece_is_always_one_ahead() {
    let mut gs = GameState::new();
    gs.reset(10, 20).unwrap();
    assert_eq!(gs.next().kind, ShapeKind::S);

    gs.tick().unwrap();
    assert_eq!(gs.active().unwrap().kind, ShapeKind::S);
    assert_eq!(gs.next().kind, ShapeKind::Z);
}

#[test]
fn test_bag_is_deterministic_per_seed() {
    let mut a = BagSequencer::new(42);
    let mut b = BagSequencer::new(42);
    for _ in 0..50 {
        assert_eq!(a.next_shape(), b.next_shape());
    }
}

#[test]
fn test_engine_accepts_bag_policy() {
    let mut gs = GameState::with_sequencer(BagSequencer::new(3));
    gs.reset(10, 20).unwrap();
    let upcoming = gs.next().kind;
    gs.tick().unwrap();
    assert_eq!(gs.active().unwrap().kind, upcoming);
}
