//! Linear congruential generator for game randomness.
//!
//! Owned by the application host and passed to whoever needs a number, so a
//! fixed seed replays the same game.

#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;

    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `0..2^31`.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state & 0x7FFF_FFFF
    }

    /// Uniform-ish value in `0..bound`; `bound == 0` yields 0.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // High bits of an LCG are the better-distributed ones
        (self.next_u32() >> 8) % bound
    }
}
