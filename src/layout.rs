//! Region layout loading
//!
//! A layout is comma-delimited text with one grid row per line. The first
//! character of each field picks the zone (`R`, `I`, `C`, `T`, `P`, `#`);
//! blank fields and any other symbol are empty land. Short rows are padded.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::world::{Grid, ZoneType};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read layout {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("layout contains no rows")]
    Empty,
}

pub fn load_layout(path: impl AsRef<Path>) -> Result<Grid, LayoutError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_layout(&text)
}

pub fn parse_layout(text: &str) -> Result<Grid, LayoutError> {
    let rows: Vec<Vec<ZoneType>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(parse_zone).collect())
        .collect();

    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(LayoutError::Empty);
    }

    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, zone) in row.iter().enumerate() {
            if let Ok(cell) = grid.cell_mut(x, y) {
                cell.zone = *zone;
            }
        }
    }
    debug!(width, height, "layout parsed");
    Ok(grid)
}

fn parse_zone(field: &str) -> ZoneType {
    field
        .chars()
        .find(|c| !c.is_whitespace())
        .map_or(ZoneType::Empty, ZoneType::from_symbol)
}
