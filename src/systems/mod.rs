mod growth;
mod pollution;

pub use growth::{collect_candidates, is_eligible, Candidate, GrowthSystem};
pub use pollution::{diffuse, PollutionSystem};
