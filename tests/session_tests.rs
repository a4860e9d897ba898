//! Session tests: human vs computer ordering and full games.

use std::cell::RefCell;
use std::rc::Rc;

use dots_boxes::agent::MovePolicy;
use dots_boxes::board::{Board, CellKind, Coord};
use dots_boxes::core::{GameError, IllegalMoveReason, Player, SessionConfig};
use dots_boxes::events::{EventLog, GameEvent};
use dots_boxes::session::Session;

/// Plays a fixed list of edges, then proposes nothing.
struct Scripted {
    moves: std::vec::IntoIter<Coord>,
}

impl Scripted {
    fn new(moves: &[(usize, usize)]) -> Self {
        let moves: Vec<Coord> = moves.iter().map(|&m| m.into()).collect();
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl MovePolicy for Scripted {
    fn select_move(&mut self, _board: &Board) -> Option<Coord> {
        self.moves.next()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn ai_config(size: usize, seed: u64) -> SessionConfig {
    SessionConfig::new().with_board_size(size).with_ai(true).with_seed(seed)
}

#[test]
fn test_human_vs_computer_to_completion() {
    let mut session = Session::new(ai_config(3, 21)).unwrap();

    while !session.engine().is_game_over() {
        assert_eq!(session.engine().current_player(), Player::One);
        let edge = session.engine().legal_moves()[0];
        session.request_move(edge.row, edge.col).unwrap();
        session.run_pending().unwrap();
    }

    let engine = session.engine();
    assert_eq!(engine.score(Player::One) + engine.score(Player::Two), 9);
    assert!(engine.result().is_some());
    assert!(!session.has_pending());
}

#[test]
fn test_computer_keeps_turn_after_closing_box() {
    let config = SessionConfig::new().with_board_size(2);
    let agent = Scripted::new(&[(1, 0), (1, 2), (0, 3)]);
    let mut session = Session::with_agent(config, Box::new(agent)).unwrap();

    session.request_move(0, 1).unwrap(); // P1
    session.run_pending().unwrap(); // P2 (1,0)

    // Box (1,1) now has top, left and bottom drawn.
    session.request_move(2, 1).unwrap();
    let computer = session.run_pending().unwrap();

    assert_eq!(computer.len(), 2);
    assert_eq!(computer[0].player, Player::Two);
    assert_eq!(computer[0].edge, Coord::new(1, 2));
    assert_eq!(computer[0].completed.as_slice(), &[Coord::new(1, 1)]);
    assert!(computer[0].extra_turn());
    assert_eq!(computer[1].player, Player::Two);
    assert!(!computer[1].extra_turn());

    let engine = session.engine();
    assert_eq!(engine.score(Player::Two), 1);
    assert_eq!(engine.board().owner(Coord::new(1, 1)), Some(Player::Two));
    assert_eq!(engine.current_player(), Player::One);
    assert!(!session.has_pending());
}

#[test]
fn test_rejected_computer_move_keeps_turn_pending() {
    let config = SessionConfig::new().with_board_size(2);
    let agent = Scripted::new(&[(0, 0)]);
    let mut session = Session::with_agent(config, Box::new(agent)).unwrap();
    session.request_move(2, 1).unwrap();

    let err = session.run_pending().unwrap_err();

    assert_eq!(
        err,
        GameError::IllegalMove {
            coord: Coord::new(0, 0),
            reason: IllegalMoveReason::NotAnEdge(CellKind::Dot),
        }
    );
    assert!(session.is_agent_turn());
    assert!(session.has_pending());

    // The computer's seat is never played by a human click.
    assert!(session.request_move(0, 1).is_err());
    assert_eq!(session.engine().moves_played(), 1);
    assert_eq!(session.engine().board().owner(Coord::new(0, 1)), None);
}

#[test]
fn test_stalled_computer_rejects_human_input() {
    let config = SessionConfig::new().with_board_size(2);
    let mut session = Session::with_agent(config, Box::new(Scripted::new(&[]))).unwrap();
    session.request_move(2, 1).unwrap();

    assert!(session.run_pending().unwrap().is_empty());
    assert!(session.has_pending());

    assert_eq!(
        session.request_move(0, 1),
        Err(GameError::ComputerTurn(Player::Two))
    );
    assert_eq!(session.engine().moves_played(), 1);

    session.reset();
    assert!(!session.has_pending());
    assert!(session.request_move(0, 1).is_ok());
}

#[test]
fn test_oversized_config_is_an_error() {
    let config: SessionConfig = serde_json::from_str(r#"{"board_size": 4294967296}"#).unwrap();

    assert_eq!(
        Session::new(config).unwrap_err(),
        GameError::InvalidBoardSize(4_294_967_296)
    );
}

#[test]
fn test_illegal_human_move_does_not_schedule() {
    let mut session = Session::new(ai_config(2, 1)).unwrap();

    let err = session.request_move(1, 1).unwrap_err();

    assert!(matches!(
        err,
        GameError::IllegalMove {
            reason: IllegalMoveReason::NotAnEdge(_),
            ..
        }
    ));
    assert!(!session.has_pending());
    assert_eq!(session.engine().moves_played(), 0);
    assert_eq!(session.engine().current_player(), Player::One);
}

#[test]
fn test_observer_sees_human_then_computer() {
    let log = Rc::new(RefCell::new(EventLog::new()));
    let mut session = Session::new(ai_config(2, 9)).unwrap();
    session.add_observer(Box::new(Rc::clone(&log)));

    session.request_move(0, 1).unwrap();
    session.run_pending().unwrap();

    let events = log.borrow_mut().drain();
    let drawn: Vec<Player> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::EdgeDrawn { player, .. } => Some(*player),
            _ => None,
        })
        .collect();

    assert_eq!(drawn[0], Player::One);
    assert!(drawn[1..].iter().all(|&p| p == Player::Two));
    assert!(drawn.len() >= 2);
}

#[test]
fn test_reset_mid_game() {
    let mut session = Session::new(ai_config(2, 2)).unwrap();
    session.request_move(0, 1).unwrap();
    assert!(session.has_pending());

    session.reset();

    assert!(!session.has_pending());
    assert_eq!(session.engine().moves_played(), 0);
    assert_eq!(session.engine().current_player(), Player::One);
    assert!(session.request_move(0, 1).is_ok());
    assert_eq!(
        session.engine().board().owner(Coord::new(0, 1)),
        Some(Player::One)
    );
}

#[test]
fn test_move_after_game_over() {
    let mut session = Session::new(SessionConfig::new().with_board_size(1)).unwrap();
    for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
        session.request_move(row, col).unwrap();
    }

    assert_eq!(session.request_move(0, 1), Err(GameError::GameAlreadyOver));
}
