use std::cmp::Ordering;

use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    spatial::{is_power_adjacent, total_adjacent_population, CellPos},
    world::{Grid, ZoneType, RESIDENTIAL_CAPACITY},
};

/// Resolves competing growth requests against the shared worker and goods pool.
pub struct GrowthSystem;

impl GrowthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GrowthSystem {
    fn name(&self) -> &str {
        "growth"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> bool {
        let candidates = collect_candidates(grid);
        let mut applied = 0_usize;
        for candidate in &candidates {
            if try_grow(grid, candidate.pos) {
                applied += 1;
            }
        }
        debug!(
            step = ctx.step,
            candidates = candidates.len(),
            applied,
            "growth resolved"
        );
        applied > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: CellPos,
    pub zone: ZoneType,
    pub population: u32,
    pub adjacent_population: u32,
}

impl Candidate {
    /// Commercial before industrial before residential, then larger cells,
    /// then busier neighborhoods, then top-to-bottom and left-to-right.
    fn priority_cmp(&self, other: &Self) -> Ordering {
        zone_rank(other.zone)
            .cmp(&zone_rank(self.zone))
            .then_with(|| other.population.cmp(&self.population))
            .then_with(|| other.adjacent_population.cmp(&self.adjacent_population))
            .then_with(|| self.pos.y.cmp(&other.pos.y))
            .then_with(|| self.pos.x.cmp(&other.pos.x))
    }
}

fn zone_rank(zone: ZoneType) -> u8 {
    match zone {
        ZoneType::Commercial => 3,
        ZoneType::Industrial => 2,
        ZoneType::Residential => 1,
        _ => 0,
    }
}

/// Whether the cell at `pos` may grow given the grid as it stands right now.
pub fn is_eligible(grid: &Grid, pos: CellPos) -> bool {
    let cell = grid.at(pos);
    let resources = grid.resources();
    let wants_growth = match cell.zone {
        ZoneType::Residential => cell.population < RESIDENTIAL_CAPACITY,
        ZoneType::Industrial => cell.population == 0 && resources.workers >= 2,
        ZoneType::Commercial => {
            cell.population == 0 && resources.workers >= 1 && resources.goods >= 1
        }
        _ => false,
    };
    wants_growth && is_power_adjacent(grid, pos.x, pos.y)
}

/// Eligible cells of the current grid, in the order growth is applied.
pub fn collect_candidates(grid: &Grid) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = grid
        .positions()
        .filter(|&pos| is_eligible(grid, pos))
        .map(|pos| {
            let cell = grid.at(pos);
            Candidate {
                pos,
                zone: cell.zone,
                population: cell.population,
                adjacent_population: total_adjacent_population(grid, pos.x, pos.y),
            }
        })
        .collect();
    candidates.sort_by(Candidate::priority_cmp);
    candidates
}

fn try_grow(grid: &mut Grid, pos: CellPos) -> bool {
    if !is_eligible(grid, pos) {
        return false;
    }
    let cell = *grid.at(pos);
    let grown = cell.population + 1;

    let resources = grid.resources_mut();
    match cell.zone {
        ZoneType::Residential => resources.workers += 1,
        ZoneType::Industrial => {
            resources.workers -= 2;
            resources.goods += grown;
        }
        ZoneType::Commercial => {
            resources.workers -= 1;
            resources.goods -= 1;
        }
        _ => return false,
    }
    grid.at_mut(pos).population = grown;
    true
}
