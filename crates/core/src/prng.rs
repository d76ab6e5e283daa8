//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Every random quantity in the engine — spawn positions, sizes, speeds,
//! swing phases, per-frame spawn rolls — is drawn from this generator, so
//! the same seed reproduces the same confetti shower bit for bit on every
//! platform. Pure integer arithmetic in the core step; no floating point.

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). A seed of 0 is replaced
/// with a non-zero fallback since the all-zeros state is a fixed point of
/// the algorithm.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback used when the caller seeds with 0.
    const FALLBACK_SEED: u64 = 0xC0F_FE77_1C0F_FE77;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    ///
    /// An empty range (`min == max`) always returns `min`, which spawn code
    /// relies on to pin a value exactly.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Modulo reduction; bias is negligible at 64-bit state width.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }

    /// Rolls a Bernoulli trial: true with probability `p`.
    ///
    /// `p <= 0` never succeeds and `p >= 1` always does. The generator
    /// advances exactly one step either way.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
