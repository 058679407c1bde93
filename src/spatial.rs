//! Neighborhood queries over the cell grid

use serde::{Deserialize, Serialize};

use crate::world::Grid;

/// Cell position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: usize,
    pub y: usize,
}

impl CellPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

static OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The up to 8 in-bounds neighbors of `pos` (Moore neighborhood, no wraparound).
/// The center is never yielded.
pub fn moore_neighbors(grid: &Grid, pos: CellPos) -> impl Iterator<Item = CellPos> + '_ {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        grid.contains(x, y).then_some(CellPos { x, y })
    })
}

/// True when a Transmission or Plant cell touches `(x, y)`, diagonals included.
pub fn is_power_adjacent(grid: &Grid, x: usize, y: usize) -> bool {
    moore_neighbors(grid, CellPos::new(x, y)).any(|n| grid.at(n).zone.is_power_source())
}

/// Sum of population over the neighbors of `(x, y)`.
pub fn total_adjacent_population(grid: &Grid, x: usize, y: usize) -> u32 {
    moore_neighbors(grid, CellPos::new(x, y))
        .map(|n| grid.at(n).population)
        .sum()
}
