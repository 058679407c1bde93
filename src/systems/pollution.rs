use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    spatial::moore_neighbors,
    world::{Grid, ZoneType},
};

/// Rebuilds the pollution field from scratch out of populated industry.
pub struct PollutionSystem;

impl PollutionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PollutionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PollutionSystem {
    fn name(&self) -> &str {
        "pollution"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> bool {
        let sources = diffuse(grid);
        debug!(step = ctx.step, sources, "pollution diffused");
        sources > 0
    }
}

/// Replaces every cell's pollution with the field emitted by industrial
/// cells: full strength on the source, one less on each neighbor.
/// Returns the number of sources.
pub fn diffuse(grid: &mut Grid) -> usize {
    let width = grid.width();
    let mut field = vec![0_u32; width * grid.height()];
    let mut sources = 0;

    for pos in grid.positions() {
        let cell = grid.at(pos);
        if cell.zone != ZoneType::Industrial || cell.population == 0 {
            continue;
        }
        sources += 1;
        let amount = cell.population;
        field[pos.y * width + pos.x] += amount;
        for neighbor in moore_neighbors(grid, pos) {
            field[neighbor.y * width + neighbor.x] += amount.saturating_sub(1);
        }
    }

    for pos in grid.positions().collect::<Vec<_>>() {
        grid.at_mut(pos).pollution = field[pos.y * width + pos.x];
    }
    sources
}
