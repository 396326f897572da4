/// Oracle providing the armor and weapon reference tables.
pub trait ItemOracle: Send + Sync {
    fn armor(&self, name: &str) -> Option<ArmorStats>;

    fn weapon(&self, name: &str) -> Option<WeaponStats>;
}

/// Armor reference row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorStats {
    pub name: String,
    /// Speed penalty. Rows without a weight (e.g. "None") slow nobody down.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<i32>,
    pub defense_bonus: i32,
}

impl ArmorStats {
    pub fn new(name: impl Into<String>, weight: Option<i32>, defense_bonus: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            defense_bonus,
        }
    }
}

/// Weapon reference row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    pub name: String,
    pub damage: i32,
}

impl WeaponStats {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}
