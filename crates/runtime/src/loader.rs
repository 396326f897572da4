//! Roster Loader: fetches both squads' rosters before a battle.

use warband_core::{Roster, SquadId};

use crate::api::Result;
use crate::repository::RosterRepository;

/// Reads rosters through an explicitly passed repository handle.
pub struct RosterLoader<'a, R: RosterRepository + ?Sized> {
    repo: &'a R,
}

impl<'a, R: RosterRepository + ?Sized> RosterLoader<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn load(&self, squad: SquadId) -> Result<Roster> {
        let roster = self.repo.load_roster(squad)?;
        tracing::debug!(
            squad = %squad,
            name = %roster.squad.name,
            units = roster.units.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Loads the first and second squad, in that order.
    pub fn load_pair(&self, first: SquadId, second: SquadId) -> Result<(Roster, Roster)> {
        Ok((self.load(first)?, self.load(second)?))
    }
}
