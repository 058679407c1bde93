use citygrid::{
    analyze_area, engine::Engine, layout::load_layout, BoundsError, ConfigLoader, Grid, Rect,
    Termination, ZoneType,
};

fn config_loader() -> ConfigLoader {
    ConfigLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn load_region() -> (Grid, u64) {
    let config = config_loader()
        .load("scenarios/config.yaml")
        .expect("config parses");
    let grid = load_layout(&config.region_layout).expect("layout parses");
    (grid, config.time_limit)
}

fn population(grid: &Grid, x: usize, y: usize) -> u32 {
    grid.cell(x, y).unwrap().population
}

#[test]
fn region_fixture_loads() {
    let (grid, time_limit) = load_region();
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 9);
    assert_eq!(time_limit, 20);
    assert_eq!(grid.cell(0, 0).unwrap().zone, ZoneType::Plant);
}

#[test]
fn first_step_grows_only_powered_residential() {
    let (mut grid, _) = load_region();
    let mut engine = Engine::standard();

    let report = engine.step(&mut grid);
    assert!(report.changed);
    assert!(!report.converged);

    for (x, y) in [(1, 0), (0, 1), (1, 1)] {
        assert_eq!(population(&grid, x, y), 1, "residential at ({x}, {y})");
    }
    assert_eq!(grid.resources().workers, 3);
    assert_eq!(grid.resources().goods, 0);
    for pos in grid.positions() {
        let cell = grid.cell(pos.x, pos.y).unwrap();
        if matches!(cell.zone, ZoneType::Industrial | ZoneType::Commercial) {
            assert_eq!(cell.population, 0);
        }
    }
    assert_eq!(grid.total_pollution(), 0);
}

#[test]
fn region_converges_before_budget() {
    let (mut grid, time_limit) = load_region();
    let mut engine = Engine::standard();

    let mut last_growth = 0;
    let outcome = engine.run_with_hook(&mut grid, time_limit, |report, _| {
        if report.changed {
            last_growth = report.step;
        }
    });

    assert_eq!(outcome.termination, Termination::Converged);
    assert!(outcome.steps < time_limit);
    assert!(last_growth <= 5, "last growth at step {last_growth}");
    assert_eq!(outcome.steps, last_growth + 1);
    assert_eq!(grid.total_population(), 15);
    assert_eq!(grid.resources().workers, 15);
}

#[test]
fn convergence_is_idempotent() {
    let (mut grid, time_limit) = load_region();
    let mut engine = Engine::standard();
    engine.run(&mut grid, time_limit);

    let settled = grid.clone();
    for _ in 0..3 {
        let report = engine.step(&mut grid);
        assert!(report.converged);
        assert_eq!(grid, settled);
    }
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let (mut grid_a, time_limit) = load_region();
    let (mut grid_b, _) = load_region();

    let outcome_a = Engine::standard().run(&mut grid_a, time_limit);
    let outcome_b = Engine::standard().run(&mut grid_b, time_limit);

    assert_eq!(outcome_a, outcome_b);
    assert_eq!(grid_a, grid_b);
}

#[test]
fn residential_block_area_analysis() {
    // 3x3 residential block ringed by transmission lines, seeded to 9 people
    let populations = [[2, 1, 0], [1, 1, 1], [0, 2, 1]];
    let mut grid = Grid::new(5, 5);
    for pos in grid.positions().collect::<Vec<_>>() {
        let cell = grid.cell_mut(pos.x, pos.y).unwrap();
        if (1..=3).contains(&pos.x) && (1..=3).contains(&pos.y) {
            cell.zone = ZoneType::Residential;
            cell.population = populations[pos.y - 1][pos.x - 1];
        } else {
            cell.zone = ZoneType::Transmission;
        }
    }

    let summary = analyze_area(&grid, Rect::new(1, 1, 3, 3)).unwrap();
    assert_eq!(summary.population, 9);
    assert_eq!(summary.pollution, 0);

    let err = analyze_area(&grid, Rect::new(1, 1, 5, 3)).unwrap_err();
    assert!(matches!(err, BoundsError::Rect { x2: 5, .. }));
    let err = analyze_area(&grid, Rect::new(1, 1, 3, 5)).unwrap_err();
    assert!(matches!(err, BoundsError::Rect { y2: 5, .. }));
}

#[test]
fn block_center_without_power_stays_empty() {
    // the middle of a residential block touches no power line
    let mut grid = Grid::new(5, 5);
    for pos in grid.positions().collect::<Vec<_>>() {
        let interior = (1..=3).contains(&pos.x) && (1..=3).contains(&pos.y);
        let zone = if interior {
            ZoneType::Residential
        } else {
            ZoneType::Transmission
        };
        grid.set_zone(pos.x, pos.y, zone).unwrap();
    }

    Engine::standard().step(&mut grid);

    assert_eq!(population(&grid, 2, 2), 0);
    let summary = analyze_area(&grid, Rect::new(1, 1, 3, 3)).unwrap();
    assert_eq!(summary.population, 8);
}
