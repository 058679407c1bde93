use tracing::{debug, info};

use crate::systems::{GrowthSystem, PollutionSystem};
use crate::world::Grid;

pub struct EngineBuilder {
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn push_system(&mut self, system: impl System + 'static) {
        self.systems.push(Box::new(system));
    }

    pub fn build(self) -> Engine {
        Engine {
            systems: self.systems,
            step: 0,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Engine {
    systems: Vec<Box<dyn System>>,
    step: u64,
}

impl Engine {
    /// Growth followed by pollution, so pollution reflects this step's industry.
    pub fn standard() -> Self {
        EngineBuilder::new()
            .with_system(GrowthSystem::new())
            .with_system(PollutionSystem::new())
            .build()
    }

    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Runs every system once and reports whether the grid reached a fixed point.
    pub fn step(&mut self, grid: &mut Grid) -> StepReport {
        self.step += 1;
        let previous = grid.clone();
        let ctx = SystemContext { step: self.step };

        let mut systems = Vec::with_capacity(self.systems.len());
        for system in &mut self.systems {
            let changed = system.run(&ctx, grid);
            debug!(step = self.step, system = system.name(), changed, "system ran");
            systems.push(SystemReport {
                name: system.name().to_string(),
                changed,
            });
        }

        let any_system_changed = systems.iter().any(|report| report.changed);
        let converged = !any_system_changed || previous == *grid;
        StepReport {
            step: self.step,
            changed: !converged,
            converged,
            systems,
        }
    }

    pub fn run(&mut self, grid: &mut Grid, budget: u64) -> RunOutcome {
        self.run_with_hook(grid, budget, |_, _| {})
    }

    /// Like [`Engine::run`], calling `hook` after every executed step.
    pub fn run_with_hook<F>(&mut self, grid: &mut Grid, budget: u64, mut hook: F) -> RunOutcome
    where
        F: FnMut(&StepReport, &Grid),
    {
        for executed in 1..=budget {
            let report = self.step(grid);
            hook(&report, grid);
            if report.converged {
                info!(step = report.step, "simulation converged");
                return RunOutcome {
                    steps: executed,
                    termination: Termination::Converged,
                };
            }
        }
        info!(steps = budget, "step budget exhausted");
        RunOutcome {
            steps: budget,
            termination: Termination::BudgetExhausted,
        }
    }
}

pub struct SystemContext {
    pub step: u64,
}

pub trait System {
    fn name(&self) -> &str;
    /// Returns true when the system changed the grid.
    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemReport {
    pub name: String,
    pub changed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub step: u64,
    pub changed: bool,
    pub converged: bool,
    pub systems: Vec<SystemReport>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Converged,
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub steps: u64,
    pub termination: Termination,
}
