// Cycle Membership - Who verified in the recent consensus cycles
// Principle: Recency decides whether a mesh address may change hands

use crate::types::VerifierId;
use parking_lot::RwLock;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// Answers recent-cycle membership queries for the mesh registry
///
/// Implementations must be fast local lookups: the registry consults the
/// provider while holding its lock.
pub trait CycleProvider: Send + Sync {
    /// True iff the identifier verified a block in either of the two most
    /// recent consensus cycles
    fn verifier_in_recent_cycles(&self, identifier: &VerifierId) -> bool;
}

/// Shared handle to a cycle provider
pub type SharedCycleProvider = Arc<dyn CycleProvider>;

/// Number of trailing cycles whose membership is retained
pub const RETAINED_CYCLES: usize = 2;

/// Membership of the most recent consensus cycles
///
/// The block-processing layer records each completed cycle; queries answer
/// from the union of the retained sets. Before any cycle has been recorded,
/// every identifier reports as not recent.
#[derive(Debug, Default)]
pub struct RecentCycleTracker {
    cycles: RwLock<VecDeque<HashSet<VerifierId>>>,
}

impl RecentCycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the membership of a completed cycle, discarding the oldest
    /// retained set once the window is full
    pub fn record_cycle<I>(&self, members: I)
    where
        I: IntoIterator<Item = VerifierId>,
    {
        let mut cycles = self.cycles.write();
        cycles.push_back(members.into_iter().collect());
        while cycles.len() > RETAINED_CYCLES {
            cycles.pop_front();
        }
    }

    /// Number of cycles currently retained
    pub fn recorded_cycles(&self) -> usize {
        self.cycles.read().len()
    }
}

impl CycleProvider for RecentCycleTracker {
    fn verifier_in_recent_cycles(&self, identifier: &VerifierId) -> bool {
        self.cycles
            .read()
            .iter()
            .any(|cycle| cycle.contains(identifier))
    }
}
