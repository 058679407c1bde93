use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use citygrid::{
    analyze_area, engine::Engine, layout::load_layout, prompt::read_area, render, ConfigLoader,
    Grid, Rect, RegionSummary, Termination,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Zoned city growth simulator")]
struct Cli {
    /// Path to the run configuration YAML file
    #[arg(long, default_value = "scenarios/config.yaml")]
    config: PathBuf,

    /// Override the step budget (uses the configured time limit when omitted)
    #[arg(long)]
    steps: Option<u64>,

    /// Override how often, in steps, the region is printed
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    refresh_rate: Option<u64>,

    /// Area to analyse after the run, as x1,y1,x2,y2
    #[arg(long)]
    area: Option<Rect>,

    /// Skip the interactive area prompt
    #[arg(long)]
    no_prompt: bool,

    /// Print the final region as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ConfigLoader::new(".");
    let config = loader.load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut grid = load_layout(&config.region_layout)?;
    let steps = cli.steps.unwrap_or(config.time_limit);
    let refresh_rate = cli.refresh_rate.unwrap_or(config.refresh_rate);
    info!(
        layout = %config.region_layout.display(),
        width = grid.width(),
        height = grid.height(),
        steps,
        "region loaded"
    );

    println!("Initial Region State (Time Step 0):");
    print!("{}", render::region(&grid));
    println!("{}", render::resources(grid.resources()));

    let mut engine = Engine::standard();
    let outcome = engine.run_with_hook(&mut grid, steps, |report, grid| {
        if report.step % refresh_rate == 0 {
            println!("Time Step {}:", report.step);
            print!("{}", render::resources(grid.resources()));
            println!("{}", render::region(grid));
        }
    });

    match outcome.termination {
        Termination::Converged => println!(
            "Simulation halted after {} time steps: no visible or functional changes detected.",
            outcome.steps
        ),
        Termination::BudgetExhausted => {
            println!("Simulation completed after {} time steps.", outcome.steps)
        }
    }

    println!();
    print!("{}", final_region(&grid, cli.json)?);
    println!();
    print!("{}", render::summary(&RegionSummary::of(&grid)));

    let rect = match cli.area {
        Some(rect) => Some(rect),
        None if cli.no_prompt => None,
        None => {
            println!();
            let stdin = io::stdin();
            read_area(&mut stdin.lock(), &mut io::stdout(), grid.width(), grid.height())?
        }
    };
    if let Some(rect) = rect {
        let summary = analyze_area(&grid, rect)?;
        print!("{}", render::area(rect, &summary));
    }
    Ok(())
}

/// The final grid as text, or as a JSON snapshot when `json` is set.
fn final_region(grid: &Grid, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&grid.snapshot())? + "\n")
    } else {
        Ok(format!("Final Region State:\n{}", render::region(grid)))
    }
}
