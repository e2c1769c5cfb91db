//! Frequency offsets applied to interference tones.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of per-tone frequency offsets.
pub trait Detune {
    /// Offset in Hz, within `-max_hz..max_hz`.
    fn offset_hz(&mut self, max_hz: f32) -> f32;
}

/// Never detunes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDetune;

impl Detune for NoDetune {
    fn offset_hz(&mut self, _max_hz: f32) -> f32 {
        0.0
    }
}

/// Constant offset, clamped to the allowed range.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedDetune(pub f32);

impl Detune for FixedDetune {
    fn offset_hz(&mut self, max_hz: f32) -> f32 {
        self.0.clamp(-max_hz.max(0.0), max_hz.max(0.0))
    }
}

/// Uniformly distributed offset drawn from an RNG.
#[derive(Clone, Debug)]
pub struct RandomDetune<R> {
    rng: R,
}

impl<R: RngCore> RandomDetune<R> {
    /// Wrap an RNG.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDetune<SmallRng> {
    /// Seeded small RNG.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Detune for RandomDetune<R> {
    fn offset_hz(&mut self, max_hz: f32) -> f32 {
        if max_hz <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-max_hz..max_hz)
    }
}
