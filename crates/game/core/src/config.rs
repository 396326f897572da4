/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Sides of the attack die rolled by the acting unit.
    pub attack_die: u32,

    /// Sides of the defense die rolled by the target.
    pub defense_die: u32,

    /// Upper bound on rounds before the engine gives up with an error.
    ///
    /// Only reachable when negative bonuses floor damage to zero; a
    /// well-formed battle always terminates long before this.
    pub max_rounds: u32,

    /// Fixed battle seed. `None` lets the caller pick a fresh seed per battle.
    pub seed: Option<u64>,
}

impl BattleConfig {
    pub const DEFAULT_DIE_SIDES: u32 = 20;
    pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            attack_die: Self::DEFAULT_DIE_SIDES,
            defense_die: Self::DEFAULT_DIE_SIDES,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
