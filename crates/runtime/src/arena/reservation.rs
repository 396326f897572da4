//! Squads currently held by an in-flight battle.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use warband_core::SquadId;

use crate::api::{ArenaError, Result};

#[derive(Clone, Debug, Default)]
pub(crate) struct Reservations {
    held: Arc<Mutex<HashSet<SquadId>>>,
}

impl Reservations {
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, HashSet<SquadId>>> {
        self.held.lock().map_err(|_| ArenaError::ReservationsPoisoned)
    }

    /// Reserves both squads or fails with the first one already held.
    pub(crate) fn reserve(&self, squads: [SquadId; 2]) -> Result<Reservation> {
        let mut held = self.lock()?;
        if let Some(busy) = squads.iter().find(|id| held.contains(*id)) {
            return Err(ArenaError::SquadBusy(*busy));
        }
        Ok(self.claim(&mut held, squads))
    }

    /// Claims squads under an already held lock.
    pub(crate) fn claim(&self, held: &mut HashSet<SquadId>, squads: [SquadId; 2]) -> Reservation {
        held.extend(squads);
        Reservation {
            held: Arc::clone(&self.held),
            squads,
        }
    }
}

/// Releases its squads when dropped.
#[derive(Debug)]
pub struct Reservation {
    held: Arc<Mutex<HashSet<SquadId>>>,
    squads: [SquadId; 2],
}

impl Reservation {
    pub fn squads(&self) -> [SquadId; 2] {
        self.squads
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if let Ok(mut held) = self.held.lock() {
            for squad in &self.squads {
                held.remove(squad);
            }
        }
    }
}
