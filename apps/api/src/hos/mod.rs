// Hours-of-Service trip planning: rule set, duty ledgers and the compliance simulation.
// The simulation is synchronous and CPU-bound; HTTP callers run it on the blocking pool.

pub mod day;
pub mod models;
pub mod planner;
pub mod rules;
pub mod validation;

pub use planner::TripPlanner;
pub use rules::HosRules;
