//! Greedy one-ply heuristic opponent.
//!
//! Priority order:
//! 1. The first undrawn edge, in row-major order, that closes a box (some
//!    adjacent box already has three sides drawn).
//! 2. Otherwise a uniformly random undrawn edge.
//!
//! There is no lookahead: the agent will happily draw a third side and
//! hand the box to its opponent, and it does not prefer double closes.

use tracing::{debug, trace};

use super::policy::{random_unowned_edge, MovePolicy};
use crate::board::{Board, Coord};
use crate::core::GameRng;

/// Greedy-then-random computer player.
#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    rng: GameRng,
}

impl HeuristicAgent {
    /// Create an agent whose random fallback uses `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Seed of the fallback RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// First undrawn edge in scan order that would close a box.
    #[must_use]
    pub fn find_completing_move(board: &Board) -> Option<Coord> {
        let found = board
            .unowned_edges()
            .find(|&edge| board.would_complete_box(edge));
        trace!(?found, "greedy scan");
        found
    }
}

impl MovePolicy for HeuristicAgent {
    fn select_move(&mut self, board: &Board) -> Option<Coord> {
        if let Some(edge) = Self::find_completing_move(board) {
            debug!(%edge, "heuristic: closing box");
            return Some(edge);
        }

        let edge = random_unowned_edge(board, &mut self.rng);
        debug!(?edge, "heuristic: random fallback");
        edge
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn board_with(size: usize, edges: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &edge in edges {
            board.draw_edge(edge.into(), Player::One);
        }
        board
    }

    #[test]
    fn test_takes_the_closing_edge() {
        // Box (3,3) has top, left and right drawn; bottom (4,3) closes it.
        let board = board_with(2, &[(2, 3), (3, 2), (3, 4)]);

        let mut agent = HeuristicAgent::new(1);
        for _ in 0..10 {
            assert_eq!(agent.select_move(&board), Some(Coord::new(4, 3)));
        }
    }

    #[test]
    fn test_first_closing_edge_in_scan_order() {
        // (1,1) missing left (1,0); (3,3) missing bottom (4,3).
        let board = board_with(2, &[(0, 1), (2, 1), (1, 2), (2, 3), (3, 2), (3, 4)]);

        assert_eq!(HeuristicAgent::find_completing_move(&board), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_no_closing_edge_on_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(HeuristicAgent::find_completing_move(&board), None);

        let mut agent = HeuristicAgent::new(5);
        let edge = agent.select_move(&board).unwrap();
        assert!(board.unowned_edges().any(|e| e == edge));
    }

    #[test]
    fn test_two_sided_box_not_greedy() {
        let board = board_with(1, &[(0, 1), (1, 0)]);
        assert_eq!(HeuristicAgent::find_completing_move(&board), None);
    }

    #[test]
    fn test_seed_reported() {
        assert_eq!(HeuristicAgent::new(1234).seed(), 1234);
    }
}
