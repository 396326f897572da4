/// Oracle providing the race reference table.
///
/// Races carry the base numbers of a unit (health, speed, damage). Lookups
/// are by the exact name stored on the unit.
pub trait TablesOracle: Send + Sync {
    fn race(&self, name: &str) -> Option<RaceStats>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceStats {
    pub name: String,
    pub base_hp: u32,
    pub base_speed: i32,
    pub base_damage: i32,
}

impl RaceStats {
    pub fn new(name: impl Into<String>, base_hp: u32, base_speed: i32, base_damage: i32) -> Self {
        Self {
            name: name.into(),
            base_hp,
            base_speed,
            base_damage,
        }
    }
}
