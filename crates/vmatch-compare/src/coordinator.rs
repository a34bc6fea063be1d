//! Readiness coordination for the compare control.

use tracing::debug;
use vmatch_models::SlotSnapshot;

/// The compare action is enabled iff both slots are ready.
pub fn is_compare_enabled(slot_a_ready: bool, slot_b_ready: bool) -> bool {
    slot_a_ready && slot_b_ready
}

/// Observer the host invokes with both slots' snapshots after every
/// state-changing operation; holds the current enable/disable decision
/// for the compare control.
#[derive(Debug, Default)]
pub struct CompareGate {
    enabled: bool,
}

impl CompareGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the decision from fresh snapshots.
    pub fn observe(&mut self, slot_a: &SlotSnapshot, slot_b: &SlotSnapshot) -> bool {
        let enabled = is_compare_enabled(slot_a.ready, slot_b.ready);
        if enabled != self.enabled {
            debug!(enabled, "compare control toggled");
        }
        self.enabled = enabled;
        enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
