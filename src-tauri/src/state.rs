//! Shared application state managed by Tauri.

use std::sync::atomic::{AtomicBool, Ordering};

/// Admits at most one native dialog at a time.
///
/// The host platform shows dialogs modally over the main window; a second
/// request while one is pending is rejected rather than queued, so the
/// renderer gets an immediate error instead of a silently stacked dialog.
#[derive(Default)]
pub struct DialogGate {
    in_flight: AtomicBool,
}

impl DialogGate {
    /// Returns a permit if no dialog is currently showing. The permit
    /// releases the gate when dropped.
    pub fn try_acquire(&self) -> Option<DialogPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(DialogPermit { gate: self })
    }
}

pub struct DialogPermit<'a> {
    gate: &'a DialogGate,
}

impl Drop for DialogPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
