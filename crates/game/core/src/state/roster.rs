use std::fmt;

/// Unique identifier for a squad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SquadId(pub u32);

impl fmt::Display for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "squad#{}", self.0)
    }
}

/// Unique identifier for a unit. Unit ids are unique across all squads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// A squad record as stored by the surrounding CRUD layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squad {
    pub id: SquadId,
    pub name: String,
    pub commander: String,
    pub description: String,
    /// Starts at the creation value; only a victory increments it.
    pub level: u32,
}

/// A unit record. Race, armor and weapon are foreign keys into the
/// reference tables; the class is descriptive only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub squad: SquadId,
    pub name: String,
    pub level: u32,
    pub race: String,
    pub class: String,
    pub armor: String,
    pub weapon: String,
}

/// One squad together with its units in load order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub squad: Squad,
    pub units: Vec<Unit>,
}

impl Roster {
    pub fn new(squad: Squad, units: Vec<Unit>) -> Self {
        Self { squad, units }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Which of the two battle participants a unit fights for.
///
/// `First` is the squad passed first to the engine; it lists first in the
/// narrative, wins speed ties and is checked first for elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}
