// Consensus - Cycle membership tracking consumed by the mesh registry
pub mod cycle;

pub use cycle::{CycleProvider, RecentCycleTracker, SharedCycleProvider, RETAINED_CYCLES};
