use serde::{Deserialize, Serialize};

use crate::spatial::CellPos;

pub const RESIDENTIAL_CAPACITY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneType {
    Residential,
    Industrial,
    Commercial,
    Transmission,
    Plant,
    /// Unbuildable land. Behaves as empty but keeps its own symbol.
    Blocked,
    Empty,
}

impl ZoneType {
    /// Maps a layout symbol to its zone. Unknown symbols are empty land.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'R' => ZoneType::Residential,
            'I' => ZoneType::Industrial,
            'C' => ZoneType::Commercial,
            'T' => ZoneType::Transmission,
            'P' => ZoneType::Plant,
            '#' => ZoneType::Blocked,
            _ => ZoneType::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZoneType::Residential => 'R',
            ZoneType::Industrial => 'I',
            ZoneType::Commercial => 'C',
            ZoneType::Transmission => 'T',
            ZoneType::Plant => 'P',
            ZoneType::Blocked => '#',
            ZoneType::Empty => '-',
        }
    }

    pub fn is_power_source(self) -> bool {
        matches!(self, ZoneType::Transmission | ZoneType::Plant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub zone: ZoneType,
    pub population: u32,
    pub pollution: u32,
}

impl Cell {
    pub fn new(zone: ZoneType) -> Self {
        Self {
            zone,
            population: 0,
            pollution: 0,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(ZoneType::Empty)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub workers: u32,
    pub goods: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    Cell {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("area ({x1}, {y1})-({x2}, {y2}) is inverted or outside the {width}x{height} grid")]
    Rect {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        width: usize,
        height: usize,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub workers: u32,
    pub goods: u32,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    resources: Resources,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            resources: Resources::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, BoundsError> {
        let index = self.index(x, y)?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, BoundsError> {
        let index = self.index(x, y)?;
        Ok(&mut self.cells[index])
    }

    pub fn set_zone(&mut self, x: usize, y: usize, zone: ZoneType) -> Result<(), BoundsError> {
        self.cell_mut(x, y)?.zone = zone;
        Ok(())
    }

    /// Unchecked access for callers iterating [`Grid::positions`].
    pub(crate) fn at(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.y * self.width + pos.x]
    }

    pub(crate) fn at_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.cells[pos.y * self.width + pos.x]
    }

    pub fn resources(&self) -> Resources {
        self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| CellPos { x, y }))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on zero, an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }

    pub fn total_population(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.population)).sum()
    }

    pub fn total_pollution(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.pollution)).sum()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            workers: self.resources.workers,
            goods: self.resources.goods,
            rows: self.rows().map(<[Cell]>::to_vec).collect(),
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoundsError> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(BoundsError::Cell {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
