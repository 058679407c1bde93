use crate::analysis::{AreaSummary, RegionSummary, Rect};
use crate::world::{Grid, Resources};

/// One line per row; populated cells show their population, others their zone symbol.
pub fn region(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                if cell.population == 0 {
                    cell.zone.symbol().to_string()
                } else {
                    cell.population.to_string()
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

pub fn resources(resources: Resources) -> String {
    format!(
        "Available Workers: {}\nAvailable Goods: {}\n",
        resources.workers, resources.goods
    )
}

pub fn summary(summary: &RegionSummary) -> String {
    format!(
        "--- Final Simulation Summary ---\n\
         Total Population: {}\n\
         Total Pollution: {}\n\
         Total Available Workers: {}\n\
         Total Available Goods: {}\n",
        summary.population, summary.pollution, summary.workers, summary.goods
    )
}

pub fn area(rect: Rect, summary: &AreaSummary) -> String {
    format!(
        "Area Analysis from {rect}:\nTotal Population: {}\nTotal Pollution: {}\n",
        summary.population, summary.pollution
    )
}
