//! The Dots and Boxes rules engine.
//!
//! `GameEngine` owns the `GameState` and is the only thing that mutates it.
//! A move goes through these steps:
//!
//! 1. Legality: the game must be in progress, and the target must be an
//!    undrawn edge on the board. A rejected move changes nothing.
//! 2. Draw the edge for the current player.
//! 3. Check the one or two boxes the edge borders. Each newly closed box
//!    goes to the mover and scores a point.
//! 4. Turn: a move that closes no box passes the turn; closing one or more
//!    grants an extra turn.
//! 5. When the last edge is drawn the game ends and the result is fixed.
//!
//! Observers are told about every change once the move is complete.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::result::{GameResult, Phase};
use crate::board::{Board, Coord};
use crate::core::{GameError, Player, PlayerMap, Result};
use crate::events::{GameEvent, GameObserver};

/// Boxes closed by a single move (zero, one or two).
pub type CompletedBoxes = SmallVec<[Coord; 2]>;

/// One accepted move, as kept in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 0-based position in the game.
    pub sequence: u32,
    /// The player who drew the edge.
    pub player: Player,
    /// The edge drawn.
    pub edge: Coord,
    /// Boxes the move closed.
    pub completed: CompletedBoxes,
    /// Player to move after this one.
    pub next_player: Player,
}

/// What a legal move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The edge drawn.
    pub edge: Coord,
    /// The player who drew it.
    pub player: Player,
    /// Boxes the move closed, in check order.
    pub completed: CompletedBoxes,
    /// Player to move next.
    pub next_player: Player,
    /// Scores after the move.
    pub scores: PlayerMap<u32>,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    /// The mover keeps the turn.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }

    /// This move drew the last edge.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.result.is_some()
    }
}

/// Full game state: board, turn, scores and history.
///
/// Cloning is cheap enough for snapshots: the history is a persistent
/// vector and the board is a flat `Vec`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    scores: PlayerMap<u32>,
    phase: Phase,
    result: Option<GameResult>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh state: nothing drawn, scores zero, Player 1 to move.
    pub fn new(board_size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(board_size)?,
            current_player: Player::One,
            scores: PlayerMap::default(),
            phase: Phase::InProgress,
            result: None,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}

/// Dots and Boxes rules engine.
///
/// ```
/// use dots_boxes::core::Player;
/// use dots_boxes::rules::{GameEngine, GameResult};
///
/// let mut engine = GameEngine::new(1).unwrap();
/// engine.apply_move(0, 1).unwrap();
/// engine.apply_move(1, 0).unwrap();
/// engine.apply_move(1, 2).unwrap();
/// let outcome = engine.apply_move(2, 1).unwrap();
///
/// assert_eq!(outcome.completed.len(), 1);
/// assert_eq!(engine.result(), Some(GameResult::Winner(Player::Two)));
/// ```
pub struct GameEngine {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine for a board with `board_size` boxes per side.
    pub fn new(board_size: usize) -> Result<Self> {
        Ok(Self {
            state: GameState::new(board_size)?,
            observers: Vec::new(),
        })
    }

    /// Register an observer. It receives every event from now on.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    // === Queries ===

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Boxes per side.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.state.board.size()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.state.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.state.scores
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Every edge has been drawn.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.phase == Phase::GameOver
    }

    /// The winner, or a tie, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.state.history.len()
    }

    /// Undrawn edges in row-major order. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.state.board.unowned_edges().collect()
    }

    // === Mutation ===

    /// Draw the edge at `(row, col)` for the current player.
    ///
    /// Fails with `GameAlreadyOver` after the last edge is drawn, and with
    /// `IllegalMove` when the target is off the board, is not an edge, or
    /// is already drawn. A failed move leaves the state untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        let edge = Coord::new(row, col);

        if self.state.phase == Phase::GameOver {
            warn!(%edge, "move rejected: game already over");
            return Err(GameError::GameAlreadyOver);
        }
        if let Err(reason) = self.state.board.check_drawable(edge) {
            warn!(%edge, %reason, "illegal move rejected");
            return Err(GameError::IllegalMove { coord: edge, reason });
        }

        let player = self.state.current_player;
        self.state.board.draw_edge(edge, player);

        let mut completed = CompletedBoxes::new();
        for cell in self.state.board.adjacent_boxes(edge) {
            if self.close_box_if_complete(cell, player) {
                completed.push(cell);
            }
        }

        let next_player = if completed.is_empty() {
            player.opponent()
        } else {
            player
        };
        self.state.current_player = next_player;

        let sequence = self.state.history.len() as u32;
        self.state.history.push_back(MoveRecord {
            sequence,
            player,
            edge,
            completed: completed.clone(),
            next_player,
        });

        debug!(
            %edge,
            player = player.id(),
            boxes = completed.len(),
            next = next_player.id(),
            "move applied"
        );

        if self.state.board.is_full() {
            let result = GameResult::from_scores(&self.state.scores);
            self.state.phase = Phase::GameOver;
            self.state.result = Some(result);
            info!(
                %result,
                player_one = self.state.scores[Player::One],
                player_two = self.state.scores[Player::Two],
                "game over"
            );
        }

        let outcome = MoveOutcome {
            edge,
            player,
            completed,
            next_player,
            scores: self.state.scores.clone(),
            result: self.state.result,
        };
        self.publish_move(&outcome);

        Ok(outcome)
    }

    /// Discard the current game and start a fresh one on the same board size.
    pub fn reset(&mut self) {
        let board_size = self.board_size();
        self.state = GameState {
            board: self.state.board.cleared(),
            current_player: Player::One,
            scores: PlayerMap::default(),
            phase: Phase::InProgress,
            result: None,
            history: Vector::new(),
        };
        info!(board_size, "game reset");

        let events = [
            GameEvent::Reset { board_size },
            self.score_event(),
            GameEvent::TurnChanged {
                player: Player::One,
            },
        ];
        self.publish(&events);
    }

    /// Box-completion check: claim `cell` for `player` if all four sides
    /// are drawn. Returns whether the box was closed.
    fn close_box_if_complete(&mut self, cell: Coord, player: Player) -> bool {
        if !self.state.board.is_box_complete(cell) {
            return false;
        }
        self.state.board.claim_box(cell, player);
        self.state.scores[player] += 1;
        debug!(%cell, player = player.id(), "box completed");
        true
    }

    fn score_event(&self) -> GameEvent {
        GameEvent::ScoreUpdated {
            player_one: self.state.scores[Player::One],
            player_two: self.state.scores[Player::Two],
        }
    }

    fn publish_move(&mut self, outcome: &MoveOutcome) {
        let mut events = Vec::with_capacity(6);
        events.push(GameEvent::EdgeDrawn {
            edge: outcome.edge,
            player: outcome.player,
        });
        events.extend(outcome.completed.iter().map(|&cell| GameEvent::BoxCompleted {
            cell,
            player: outcome.player,
        }));
        events.push(self.score_event());
        events.push(GameEvent::TurnChanged {
            player: outcome.next_player,
        });
        if let Some(result) = outcome.result {
            events.push(GameEvent::GameOver { result });
        }
        self.publish(&events);
    }

    fn publish(&mut self, events: &[GameEvent]) {
        for observer in &mut self.observers {
            for event in events {
                observer.notify(event);
            }
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
