// Noise module - Gaussian white-noise reference source
//
// The coherence statistics compare the waveform against fresh white noise,
// which makes them stochastic by design. The randomness stays explicit:
// callers hold the NoiseSource and may seed it for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source of standard-normal samples
pub struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    /// Entropy-seeded source for production use (fresh reference per call)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed source for reproducible runs and tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `len` standard-normal samples (Box-Muller transform)
    pub fn gaussian(&mut self, len: usize) -> Vec<f32> {
        let mut samples = Vec::with_capacity(len + 1);
        while samples.len() < len {
            // u1 in (0, 1] so the logarithm stays finite
            let u1: f32 = 1.0 - self.rng.gen::<f32>();
            let u2: f32 = self.rng.gen();
            let radius = (-2.0 * u1.ln()).sqrt();
            let angle = 2.0 * std::f32::consts::PI * u2;
            samples.push(radius * angle.cos());
            samples.push(radius * angle.sin());
        }
        samples.truncate(len);
        samples
    }
}
