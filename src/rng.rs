// Deterministic xorshift32 RNG for lightweight randomness (no external crate).
// Visual: drives the jitter of the impressionist and expressionist brushes.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct Rng32 {
    state: u32,
}

impl Rng32 {
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    /// Seed from the clock so every run of the app jitters differently.
    /// Exact stroke texture is not meant to be reproducible across runs.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0xC0FFEE);
        Self::from_seed(nanos)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Xorshift—fast and good enough for visual noise
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        // Uniform [0,1)
        (self.next_u32() >> 8) as f32 / ((1u32 << 24) as f32)
    }

    /// Uniform value in [min, max).
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}
