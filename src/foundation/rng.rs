/// Pseudo-random integers for the exploded layout.
///
/// Injected into the engine so tests can pin the scatter.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`; `0` when `bound == 0`.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift on the high 32 bits keeps the result in range without division.
        let hi = self.next_u64() >> 32;
        ((hi * u64::from(bound)) >> 32) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
