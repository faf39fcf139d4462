//! Property tests for engine invariants
//!
//! Random command streams are applied to fresh sessions. Whatever happens,
//! the board keeps its size, the falling piece stays inside it and is the
//! only thing that moves, and the score only grows by the clear table.

use proptest::prelude::*;

use blockfall::core::line_clear::line_score;
use blockfall::core::placement::collides;
use blockfall::core::{BagSequencer, Board, EngineError, GameState, Piece, PieceSource, Sequencer};
use blockfall::engine::{apply, Command};
use blockfall::types::{Cell, ShapeKind};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Tick),
        2 => Just(Command::MoveLeft),
        2 => Just(Command::MoveRight),
        2 => Just(Command::Rotate),
        1 => Just(Command::HardDrop),
    ]
}

fn shape() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn assert_active_in_bounds<S: PieceSource>(gs: &GameState<S>) {
    let Some(piece) = gs.active() else {
        return;
    };
    let board = gs.board();
    for (i, cell) in piece.cells().into_iter().enumerate() {
        assert!(board.in_bounds(cell.x, cell.y), "{:?} out of bounds", cell);
        if i > 0 {
            assert!(cell.y > 0, "block on row 0: {:?}", cell);
        }
        assert_eq!(board.get(cell.x, cell.y), Some(Cell::Block(piece.kind)));
    }
}

fn run_session<S: PieceSource>(mut gs: GameState<S>, commands: &[Command]) {
    gs.reset(10, 20).unwrap();
    let mut score = 0;

    for &command in commands {
        match apply(&mut gs, command) {
            Ok(cleared) => {
                score += line_score(cleared.len());
                if !cleared.is_empty() {
                    assert_eq!(gs.last_cleared(), cleared.as_slice());
                }
            }
            Err(EngineError::TopOut { .. }) => {
                assert!(gs.is_over());
                assert!(gs.active().is_none());
                break;
            }
            Err(err) => panic!("unexpected error {err}"),
        }

        assert_eq!(gs.score(), score);
        assert_eq!(gs.board().row_count(), 20);
        assert_eq!(gs.board().cells().len(), 200);
        assert_active_in_bounds(&gs);
    }
}

proptest! {
    #[test]
    fn cyclic_sessions_keep_invariants(commands in prop::collection::vec(command(), 1..200)) {
        run_session(GameState::new(), &commands);
    }

    #[test]
    fn bag_sessions_keep_invariants(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 1..200),
    ) {
        run_session(GameState::with_sequencer(BagSequencer::new(seed)), &commands);
    }

    #[test]
    fn rejected_moves_leave_state_untouched(
        commands in prop::collection::vec(command(), 0..60),
        probe in prop_oneof![Just(Command::MoveLeft), Just(Command::MoveRight), Just(Command::Rotate)],
    ) {
        let mut gs = GameState::new();
        gs.reset(10, 20).unwrap();
        for command in commands {
            if apply(&mut gs, command).is_err() {
                return Ok(());
            }
        }

        let board = gs.board().clone();
        let active = gs.active().copied();
        let filled = board.filled_count();

        apply(&mut gs, probe).unwrap();

        // Either the piece changed or nothing did; no cells appear or vanish
        prop_assert_eq!(gs.board().filled_count(), filled);
        if gs.active().copied() == active {
            prop_assert_eq!(gs.board(), &board);
        }
    }

    #[test]
    fn four_rotations_restore_any_piece(kind in shape(), x in -5i32..15, y in -5i32..25) {
        let mut piece = Piece::at(kind, x, y);
        let original = piece;
        for _ in 0..4 {
            piece.rotate();
        }
        prop_assert_eq!(piece, original);
    }

    #[test]
    fn rotate_back_undoes_rotate(kind in shape(), turns in 0usize..8) {
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece.rotate();
        }
        let before = piece;
        piece.rotate();
        piece.rotate_back();
        prop_assert_eq!(piece, before);
    }

    #[test]
    fn collision_respects_bounds(kind in shape(), x in -3i32..13, y in -3i32..23) {
        let board = Board::new(10, 20);
        let piece = Piece::at(kind, x, y);
        let inside = piece.cells().iter().enumerate().all(|(i, c)| {
            (0..10).contains(&c.x) && (0..20).contains(&c.y) && (i == 0 || c.y > 0)
        });
        prop_assert_eq!(collides(&piece, &board), !inside);
    }

    #[test]
    fn ghost_is_below_and_stable(commands in prop::collection::vec(command(), 1..80)) {
        let mut gs = GameState::with_sequencer(Sequencer::new());
        gs.reset(10, 20).unwrap();
        for command in commands {
            if apply(&mut gs, command).is_err() {
                return Ok(());
            }
        }

        if let Some(active) = gs.active().copied() {
            let landing = gs.ghost_landing().unwrap();
            prop_assert_eq!(landing.x, active.x);
            prop_assert!(landing.y >= active.y);
            prop_assert_eq!(gs.ghost_landing(), Some(landing));
            prop_assert_eq!(gs.active().copied(), Some(active));
        }
    }
}
