//! The Dots and Boxes grid.
//!
//! `Board` stores every cell of the `(2N+1)²` grid in row-major order. Dots
//! are stored too so that any in-bounds coordinate indexes directly.
//!
//! Read access is public. Mutation is crate-private: only the rules engine
//! draws edges and claims boxes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, CellKind, Coord, Orientation};
use crate::core::{GameError, IllegalMoveReason, Player, Result, MAX_BOARD_SIZE};

/// Board state: cell ownership for every edge and box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Boxes per side (N).
    size: usize,
    /// Grid axis length (2N + 1).
    axis: usize,
    cells: Vec<Cell>,
    /// Number of edges drawn so far.
    drawn_edges: usize,
}

impl Board {
    /// Create an empty board with `size` boxes per side.
    ///
    /// Fails with `InvalidBoardSize` for 0 or anything above `MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }

        Ok(Self::empty(size))
    }

    /// A fresh board of the same size.
    pub(crate) fn cleared(&self) -> Self {
        Self::empty(self.size)
    }

    fn empty(size: usize) -> Self {
        let axis = 2 * size + 1;
        let cells = (0..axis * axis)
            .map(|i| Cell::empty(Coord::new(i / axis, i % axis).kind()))
            .collect();

        Self {
            size,
            axis,
            cells,
            drawn_edges: 0,
        }
    }

    /// Boxes per side (N).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Grid axis length (2N + 1).
    #[must_use]
    pub fn axis_len(&self) -> usize {
        self.axis
    }

    /// Total number of boxes (N²).
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.size * self.size
    }

    /// Total number of edges (2·N·(N+1)).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        2 * self.size * (self.size + 1)
    }

    /// Number of edges drawn so far.
    #[must_use]
    pub fn drawn_edge_count(&self) -> usize {
        self.drawn_edges
    }

    /// Check whether a coordinate lies on the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.axis && coord.col < self.axis
    }

    /// Cell kind at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn cell_kind(&self, coord: Coord) -> Option<CellKind> {
        self.contains(coord).then(|| coord.kind())
    }

    /// Owner of the edge or box at `coord`.
    ///
    /// Dots, unowned cells and out-of-bounds coordinates all return `None`.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<Player> {
        self.cell(coord).and_then(Cell::owner)
    }

    /// Whether `coord` is a drawn edge.
    #[must_use]
    pub fn is_edge_drawn(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(Cell::Edge(Some(_))))
    }

    /// All edge coordinates in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|c| c.kind() == CellKind::Edge)
    }

    /// Undrawn edge coordinates in row-major order.
    pub fn unowned_edges(&self) -> impl Iterator<Item = Coord> + '_ {
        self.edges().filter(move |&c| !self.is_edge_drawn(c))
    }

    /// All box coordinates in row-major order.
    pub fn boxes(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|c| c.kind() == CellKind::Box)
    }

    /// Boxes bordered by an edge: one on the outer boundary, two inside.
    ///
    /// Returns an empty list when `edge` is not an in-bounds edge.
    #[must_use]
    pub fn adjacent_boxes(&self, edge: Coord) -> SmallVec<[Coord; 2]> {
        let mut boxes = SmallVec::new();
        if !self.contains(edge) {
            return boxes;
        }

        let last = self.axis - 1;
        match edge.edge_orientation() {
            Some(Orientation::Horizontal) => {
                if edge.row > 0 {
                    boxes.push(Coord::new(edge.row - 1, edge.col));
                }
                if edge.row < last {
                    boxes.push(Coord::new(edge.row + 1, edge.col));
                }
            }
            Some(Orientation::Vertical) => {
                if edge.col > 0 {
                    boxes.push(Coord::new(edge.row, edge.col - 1));
                }
                if edge.col < last {
                    boxes.push(Coord::new(edge.row, edge.col + 1));
                }
            }
            None => {}
        }
        boxes
    }

    /// The four edges around a box: top, bottom, left, right.
    ///
    /// `cell` must be a box coordinate, so both neighbours on each axis exist.
    #[must_use]
    pub fn bounding_edges(cell: Coord) -> [Coord; 4] {
        debug_assert_eq!(cell.kind(), CellKind::Box);
        [
            Coord::new(cell.row - 1, cell.col),
            Coord::new(cell.row + 1, cell.col),
            Coord::new(cell.row, cell.col - 1),
            Coord::new(cell.row, cell.col + 1),
        ]
    }

    /// Number of a box's bounding edges that are drawn (0..=4).
    #[must_use]
    pub fn owned_sides(&self, cell: Coord) -> usize {
        Self::bounding_edges(cell)
            .into_iter()
            .filter(|&e| self.is_edge_drawn(e))
            .count()
    }

    /// All four sides drawn.
    #[must_use]
    pub fn is_box_complete(&self, cell: Coord) -> bool {
        self.owned_sides(cell) == 4
    }

    /// Exactly three sides drawn: the next edge around it scores.
    #[must_use]
    pub fn is_almost_complete(&self, cell: Coord) -> bool {
        self.owned_sides(cell) == 3
    }

    /// Whether drawing `edge` now would complete at least one box.
    #[must_use]
    pub fn would_complete_box(&self, edge: Coord) -> bool {
        self.adjacent_boxes(edge)
            .into_iter()
            .any(|b| self.is_almost_complete(b))
    }

    /// Every edge has been drawn.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.drawn_edges == self.edge_count()
    }

    /// Check that `coord` is a legal edge to draw.
    pub(crate) fn check_drawable(&self, coord: Coord) -> std::result::Result<(), IllegalMoveReason> {
        match self.cell(coord) {
            None => Err(IllegalMoveReason::OutOfBounds),
            Some(Cell::Edge(None)) => Ok(()),
            Some(Cell::Edge(Some(owner))) => Err(IllegalMoveReason::AlreadyOwned(owner)),
            Some(_) => Err(IllegalMoveReason::NotAnEdge(coord.kind())),
        }
    }

    /// Mark an undrawn edge as drawn by `player`.
    pub(crate) fn draw_edge(&mut self, edge: Coord, player: Player) {
        let index = self.index(edge);
        debug_assert_eq!(self.cells[index], Cell::Edge(None));
        self.cells[index] = Cell::Edge(Some(player));
        self.drawn_edges += 1;
    }

    /// Assign an unowned box to `player`.
    pub(crate) fn claim_box(&mut self, cell: Coord, player: Player) {
        let index = self.index(cell);
        debug_assert_eq!(self.cells[index], Cell::Box(None));
        self.cells[index] = Cell::Box(Some(player));
    }

    fn cell(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.axis + coord.col
    }

    fn coords(&self) -> impl Iterator<Item = Coord> {
        let axis = self.axis;
        (0..axis * axis).map(move |i| Coord::new(i / axis, i % axis))
    }
}

impl std::fmt::Display for Board {
    /// Text grid: `+` dots, `-`/`|` drawn edges, player ids in owned boxes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.axis {
            for col in 0..self.axis {
                let coord = Coord::new(row, col);
                let glyph = match (self.cells[self.index(coord)], coord.edge_orientation()) {
                    (Cell::Dot, _) => '+',
                    (Cell::Edge(Some(_)), Some(Orientation::Horizontal)) => '-',
                    (Cell::Edge(Some(_)), _) => '|',
                    (Cell::Box(Some(Player::One)), _) => '1',
                    (Cell::Box(Some(Player::Two)), _) => '2',
                    _ => ' ',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
