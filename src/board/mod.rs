//! Board representation.
//!
//! - `Coord`, `CellKind`, `Orientation`: grid addressing by parity
//! - `Board`: cell ownership plus the read-only queries agents and
//!   presentations use (adjacency, side counts, unowned edges)

pub mod cell;
pub mod grid;

pub use cell::{CellKind, Coord, Orientation};
pub use grid::Board;
