//! Outcome Committer: makes a battle's effects durable in one transaction.
//!
//! A commit is the ordered effect list
//! `[InsertReport, IncrementSquadLevel(winner), DeleteSquad(loser)]`
//! handed to [`TransactionalStore::run_in_transaction`]. Either all three
//! land or none do.

use chrono::{DateTime, Utc};
use warband_core::BattleOutcome;

use crate::api::{ArenaError, Result};
use crate::repository::{Effect, NewReport, ReportId, TransactionalStore};

/// What a successful commit produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitReceipt {
    pub report: ReportId,
    /// Winner's level after the increment.
    pub winner_level: u32,
    /// Units removed along with the losing squad.
    pub units_removed: usize,
}

/// Builds the effect list for one outcome.
pub fn commit_effects(outcome: &BattleOutcome, timestamp: DateTime<Utc>) -> Vec<Effect> {
    vec![
        Effect::InsertReport(NewReport {
            content: outcome.content(),
            winner: outcome.winner,
            loser: outcome.loser,
            winner_name: outcome.winner_name.clone(),
            loser_name: outcome.loser_name.clone(),
            timestamp,
        }),
        Effect::IncrementSquadLevel(outcome.winner),
        Effect::DeleteSquad(outcome.loser),
    ]
}

pub struct OutcomeCommitter<'a, S: TransactionalStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TransactionalStore + ?Sized> OutcomeCommitter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Commits `outcome` stamped with `timestamp`.
    ///
    /// # Errors
    ///
    /// [`ArenaError::Commit`] when the store rejects the transaction. No part
    /// of the outcome is visible afterwards; do not retry without re-running
    /// the battle.
    pub fn commit(
        &self,
        outcome: &BattleOutcome,
        timestamp: DateTime<Utc>,
    ) -> Result<CommitReceipt> {
        let effects = commit_effects(outcome, timestamp);

        let receipt = self.store.run_in_transaction(&effects).map_err(|source| {
            tracing::error!(
                winner = %outcome.winner,
                loser = %outcome.loser,
                error = %source,
                "battle commit rolled back"
            );
            ArenaError::Commit {
                winner: outcome.winner,
                loser: outcome.loser,
                source,
            }
        })?;

        let (Some(&report), Some(&(_, winner_level)), Some((_, units_removed))) = (
            receipt.reports.first(),
            receipt.level_ups.first(),
            receipt.deleted.first(),
        ) else {
            return Err(ArenaError::IncompleteReceipt);
        };

        tracing::info!(
            report = %report,
            winner = %outcome.winner_name,
            loser = %outcome.loser_name,
            winner_level,
            "battle committed"
        );

        Ok(CommitReceipt {
            report,
            winner_level,
            units_removed: *units_removed,
        })
    }
}
