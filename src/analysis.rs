use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::world::{BoundsError, Grid};

/// Inclusive rectangle from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Rect {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 < width && self.y2 < height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) to ({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected four comma separated coordinates x1,y1,x2,y2, got '{0}'")]
pub struct ParseRectError(String);

impl FromStr for Rect {
    type Err = ParseRectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseRectError(s.to_string()))?;
        match values.as_slice() {
            [x1, y1, x2, y2] => Ok(Rect::new(*x1, *y1, *x2, *y2)),
            _ => Err(ParseRectError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaSummary {
    pub population: u64,
    pub pollution: u64,
}

/// Totals population and pollution over `rect`, bounds inclusive.
pub fn analyze_area(grid: &Grid, rect: Rect) -> Result<AreaSummary, BoundsError> {
    if !rect.fits(grid.width(), grid.height()) {
        return Err(BoundsError::Rect {
            x1: rect.x1,
            y1: rect.y1,
            x2: rect.x2,
            y2: rect.y2,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut summary = AreaSummary {
        population: 0,
        pollution: 0,
    };
    for y in rect.y1..=rect.y2 {
        for x in rect.x1..=rect.x2 {
            let cell = grid.cell(x, y)?;
            summary.population += u64::from(cell.population);
            summary.pollution += u64::from(cell.pollution);
        }
    }
    Ok(summary)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub population: u64,
    pub pollution: u64,
    pub workers: u32,
    pub goods: u32,
}

impl RegionSummary {
    pub fn of(grid: &Grid) -> Self {
        let resources = grid.resources();
        Self {
            population: grid.total_population(),
            pollution: grid.total_pollution(),
            workers: resources.workers,
            goods: resources.goods,
        }
    }
}
