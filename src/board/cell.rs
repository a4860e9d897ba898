//! Grid coordinates and cell kinds.
//!
//! A board of dimension `N` is a `(2N+1) x (2N+1)` grid. The kind of every
//! cell is fixed by the parity of its coordinates:
//!
//! | row  | col  | kind |
//! |------|------|------|
//! | even | even | Dot  |
//! | even | odd  | Edge (horizontal) |
//! | odd  | even | Edge (vertical)   |
//! | odd  | odd  | Box  |

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// A `(row, col)` position on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell kind selected by this coordinate's parity.
    #[must_use]
    pub const fn kind(self) -> CellKind {
        match (self.row % 2 == 0, self.col % 2 == 0) {
            (true, true) => CellKind::Dot,
            (false, false) => CellKind::Box,
            _ => CellKind::Edge,
        }
    }

    /// Orientation, if this coordinate addresses an edge.
    #[must_use]
    pub const fn edge_orientation(self) -> Option<Orientation> {
        match (self.row % 2 == 0, self.col % 2 == 0) {
            (true, false) => Some(Orientation::Horizontal),
            (false, true) => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The three kinds of grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Decorative vertex. Never owned.
    Dot,
    /// Line segment between two dots. Claimed directly by a move.
    Edge,
    /// Unit square. Owned once all four bounding edges are drawn.
    Box,
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Dot => "dot",
            CellKind::Edge => "edge",
            CellKind::Box => "box",
        };
        f.write_str(name)
    }
}

/// Edge orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Even row, odd column. Borders the boxes above and below.
    Horizontal,
    /// Odd row, even column. Borders the boxes left and right.
    Vertical,
}

/// Stored cell contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Cell {
    Dot,
    Edge(Option<Player>),
    Box(Option<Player>),
}

impl Cell {
    pub(crate) fn empty(kind: CellKind) -> Self {
        match kind {
            CellKind::Dot => Cell::Dot,
            CellKind::Edge => Cell::Edge(None),
            CellKind::Box => Cell::Box(None),
        }
    }

    pub(crate) fn owner(self) -> Option<Player> {
        match self {
            Cell::Dot => None,
            Cell::Edge(owner) | Cell::Box(owner) => owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_by_parity() {
        assert_eq!(Coord::new(0, 0).kind(), CellKind::Dot);
        assert_eq!(Coord::new(2, 4).kind(), CellKind::Dot);
        assert_eq!(Coord::new(0, 1).kind(), CellKind::Edge);
        assert_eq!(Coord::new(1, 0).kind(), CellKind::Edge);
        assert_eq!(Coord::new(1, 1).kind(), CellKind::Box);
        assert_eq!(Coord::new(3, 5).kind(), CellKind::Box);
    }

    #[test]
    fn test_edge_orientation() {
        assert_eq!(Coord::new(0, 1).edge_orientation(), Some(Orientation::Horizontal));
        assert_eq!(Coord::new(1, 2).edge_orientation(), Some(Orientation::Vertical));
        assert_eq!(Coord::new(1, 1).edge_orientation(), None);
        assert_eq!(Coord::new(2, 2).edge_orientation(), None);
    }

    #[test]
    fn test_coord_display_and_from() {
        let coord: Coord = (3, 4).into();
        assert_eq!(coord, Coord::new(3, 4));
        assert_eq!(format!("{}", coord), "(3, 4)");
    }

    #[test]
    fn test_empty_cells_unowned() {
        for kind in [CellKind::Dot, CellKind::Edge, CellKind::Box] {
            assert_eq!(Cell::empty(kind).owner(), None);
        }
    }
}
