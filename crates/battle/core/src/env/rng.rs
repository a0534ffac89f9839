//! Seedable randomness for target tie-breaks and first-side selection.
//!
//! # Determinism
//!
//! Randomness is the only source of non-determinism in a battle and it is
//! confined to the injected [`BattleRng`]. The same seed and rosters always
//! replay the same battle.

/// Random source consumed by the engine.
pub trait BattleRng {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl BattleRng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Scripted source replaying a fixed list of values, cycling at the end.
///
/// Meant for fixtures that need to steer target picks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always yields zero, i.e. always picks the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl BattleRng for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
