//! Traits describing read-only battle inputs.
//!
//! Oracles expose the race, armor and weapon reference tables plus the
//! random number source. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod error;
mod items;
mod rng;
mod tables;

pub use error::OracleError;
pub use items::{ArmorStats, ItemOracle, WeaponStats};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};
pub use tables::{RaceStats, TablesOracle};

/// Aggregates read-only oracles required by the stat resolver and engine.
pub struct Env<'a, T, I, R>
where
    T: TablesOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    tables: Option<&'a T>,
    items: Option<&'a I>,
    rng: Option<&'a R>,
}

// Manual impls: derive would demand `T: Clone`, which trait objects never are.
impl<T, I, R> Clone for Env<'_, T, I, R>
where
    T: TablesOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I, R> Copy for Env<'_, T, I, R>
where
    T: TablesOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type BattleEnv<'a> = Env<'a, dyn TablesOracle + 'a, dyn ItemOracle + 'a, dyn RngOracle + 'a>;

impl<'a, T, I, R> Env<'a, T, I, R>
where
    T: TablesOracle + ?Sized,
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(tables: Option<&'a T>, items: Option<&'a I>, rng: Option<&'a R>) -> Self {
        Self { tables, items, rng }
    }

    pub fn with_all(tables: &'a T, items: &'a I, rng: &'a R) -> Self {
        Self::new(Some(tables), Some(items), Some(rng))
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no items oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
