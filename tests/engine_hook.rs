use citygrid::{
    engine::{EngineBuilder, System, SystemContext},
    layout::parse_layout,
    systems::{GrowthSystem, PollutionSystem},
    Grid, Termination,
};

#[test]
fn engine_runs_hook_each_step() {
    let mut grid = parse_layout("P,R,R\nR,R,R\n").expect("layout parses");
    let mut engine = EngineBuilder::new()
        .with_system(GrowthSystem::new())
        .with_system(PollutionSystem::new())
        .build();

    let mut steps = Vec::new();
    let outcome = engine.run_with_hook(&mut grid, 4, |report, _| steps.push(report.step));

    assert_eq!(outcome.termination, Termination::BudgetExhausted);
    assert_eq!(steps, vec![1, 2, 3, 4]);
    assert_eq!(engine.current_step(), 4);
}

#[test]
fn hook_sees_converged_step_last() {
    let mut grid = parse_layout("P,R\n").expect("layout parses");
    let mut engine = EngineBuilder::new()
        .with_system(GrowthSystem::new())
        .with_system(PollutionSystem::new())
        .build();

    let mut reports = Vec::new();
    engine.run_with_hook(&mut grid, 20, |report, _| reports.push(report.clone()));

    assert_eq!(reports.len(), 6);
    assert!(reports[..5].iter().all(|r| r.changed));
    assert!(reports[5].converged);
}

struct Counter {
    calls: u64,
}

impl System for Counter {
    fn name(&self) -> &str {
        "counter"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> bool {
        self.calls += 1;
        assert_eq!(ctx.step, self.calls);
        grid.resources_mut().goods += 1;
        grid.cell_mut(0, 0).map(|c| c.pollution += 1).is_ok()
    }
}

#[test]
fn custom_systems_run_after_builtin_ones() {
    let mut grid = parse_layout("-,R\nP,-\n").expect("layout parses");
    let mut builder = EngineBuilder::new().with_system(GrowthSystem::new());
    builder.push_system(Counter { calls: 0 });
    let mut engine = builder.build();

    let report = engine.step(&mut grid);
    let names: Vec<_> = report.systems.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["growth", "counter"]);
    assert_eq!(grid.resources().goods, 1);
    assert_eq!(grid.cell(0, 0).unwrap().pollution, 1);
}
