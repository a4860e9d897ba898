//! Move selection policies for computer players.
//!
//! A policy looks at the board and proposes an edge. It never mutates game
//! state: the proposed move goes through `GameEngine::apply_move` like any
//! human move and faces the same legality checks.

use tracing::trace;

use crate::board::{Board, Coord};
use crate::core::GameRng;

/// Chooses a move for the player whose turn it is.
pub trait MovePolicy {
    /// Pick an undrawn edge, or `None` when every edge is drawn.
    fn select_move(&mut self, board: &Board) -> Option<Coord>;

    /// Policy name, for logs.
    fn name(&self) -> &'static str;
}

/// Uniform choice among the undrawn edges.
pub(crate) fn random_unowned_edge(board: &Board, rng: &mut GameRng) -> Option<Coord> {
    let available: Vec<Coord> = board.unowned_edges().collect();
    let choice = rng.choose(&available).copied();
    trace!(candidates = available.len(), ?choice, "random edge");
    choice
}

/// Plays a uniformly random undrawn edge every turn.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Option<Coord> {
        random_unowned_edge(board, &mut self.rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellKind;
    use crate::core::Player;

    #[test]
    fn test_random_agent_picks_unowned_edge() {
        let mut board = Board::new(2).unwrap();
        board.draw_edge(Coord::new(0, 1), Player::One);
        board.draw_edge(Coord::new(2, 1), Player::Two);

        let mut agent = RandomAgent::new(7);
        for _ in 0..50 {
            let edge = agent.select_move(&board).unwrap();
            assert_eq!(board.cell_kind(edge), Some(CellKind::Edge));
            assert!(!board.is_edge_drawn(edge));
        }
    }

    #[test]
    fn test_random_agent_full_board() {
        let mut board = Board::new(1).unwrap();
        for edge in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            board.draw_edge(edge.into(), Player::One);
        }

        let mut agent = RandomAgent::new(7);
        assert_eq!(agent.select_move(&board), None);
    }

    #[test]
    fn test_random_agent_deterministic() {
        let board = Board::new(3).unwrap();
        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);

        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }
}
