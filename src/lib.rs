pub mod analysis;
pub mod config;
pub mod engine;
pub mod layout;
pub mod prompt;
pub mod render;
pub mod spatial;
pub mod systems;
pub mod world;

pub use analysis::{analyze_area, AreaSummary, Rect, RegionSummary};
pub use config::{ConfigLoader, SimulationConfig};
pub use engine::{Engine, EngineBuilder, RunOutcome, StepReport, Termination};
pub use world::{BoundsError, Cell, Grid, Resources, ZoneType};
