#![forbid(unsafe_code)]

//! Seeded pseudo-random source for simulated widget data.

/// Deterministic LCG. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform value in `min..=max`.
    pub fn next_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        // High bits of an LCG are better distributed than low bits.
        min + ((self.next_u64() >> 33) % span) as u32
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(0x5EED_DA5B_0A2D)
    }
}
