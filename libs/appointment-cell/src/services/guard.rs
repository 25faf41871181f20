use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

/// In-flight coordinator for mutating calls: at most one outstanding
/// mutation per appointment id. Rapid repeated invocations for the same
/// appointment are refused instead of issuing duplicate requests.
#[derive(Debug, Default)]
pub struct MutationGuard {
    in_flight: Mutex<HashSet<Uuid>>,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the appointment for a mutation. Returns None while a previous
    /// permit for the same id is still alive.
    pub fn begin(&self, appointment_id: Uuid) -> Option<MutationPermit<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(appointment_id) {
            return None;
        }
        Some(MutationPermit {
            guard: self,
            appointment_id,
        })
    }
}

/// Releases the claim on drop, success or failure alike.
pub struct MutationPermit<'a> {
    guard: &'a MutationGuard,
    appointment_id: Uuid,
}

impl Drop for MutationPermit<'_> {
    fn drop(&mut self) {
        self.guard
            .in_flight
            .lock()
            .unwrap()
            .remove(&self.appointment_id);
    }
}
