//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a battle (target selection, attack roll, defense
//! roll) is drawn from an [`RngOracle`] with a seed derived from the battle
//! seed and the draw's position in the battle. Given the same battle seed and
//! rosters, a battle produces a byte-identical narrative.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It is stateless: the seed fully determines the output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// RNG oracle that replays a fixed script of draw results.
///
/// Each draw that has a real choice (a die roll, or a range wider than one
/// value) consumes the next scripted value, clamped into the legal range.
/// Single-choice ranges (one alive target) consume nothing. Once the script
/// runs out, draws fall back to [`PcgRng`].
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|script| script.len()).unwrap_or(0)
    }

    fn next_scripted(&self) -> Option<u32> {
        self.script.lock().ok()?.pop_front()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        self.next_scripted()
            .unwrap_or_else(|| PcgRng.next_u32(seed))
    }

    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        match self.next_scripted() {
            Some(value) => value.clamp(1, sides.max(1)),
            None => PcgRng.roll_die(seed, sides),
        }
    }

    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        match self.next_scripted() {
            Some(value) => value.clamp(min, max),
            None => PcgRng.range(seed, min, max),
        }
    }
}

/// Compute a deterministic seed for one random draw.
///
/// # Arguments
///
/// * `battle_seed` - Base seed chosen when the battle starts
/// * `round` - Round number (1-based)
/// * `actor` - Unit performing the action
/// * `context` - Distinguishes several draws made by the same action
///
/// # Context Values
///
/// - `0`: Target selection
/// - `1`: Attack roll
/// - `2`: Defense roll
pub fn compute_seed(battle_seed: u64, round: u64, actor: u32, context: u32) -> u64 {
    // Constants are SplitMix64 / FxHash multipliers
    let mut hash = battle_seed;

    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
