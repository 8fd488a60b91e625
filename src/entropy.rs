use rand::rngs::OsRng;
use rand::{CryptoRng, TryRngCore};

use crate::GeoError;

/// 2^32, maps a full-range `u32` onto [0, 1).
const U32_RANGE: f64 = 4294967296.0;

/// Capability handing out uniformly distributed values in [0, 1).
///
/// Production code must back this with a cryptographically secure generator so
/// destinations cannot be predicted or replayed.
pub trait UniformSource {
    fn next_unit(&mut self) -> Result<f64, GeoError>;
}

pub fn unit_from_u32(value: u32) -> f64 {
    value as f64 / U32_RANGE
}

/// The operating system's CSPRNG. Failing to read from it is an error, never a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl UniformSource for OsEntropy {
    fn next_unit(&mut self) -> Result<f64, GeoError> {
        let value = OsRng.try_next_u32().map_err(|e| GeoError::Entropy(e.to_string()))?;
        Ok(unit_from_u32(value))
    }
}

/// Any in-process cryptographically secure generator, e.g. `rand::rng()` or a seeded `StdRng`.
#[derive(Clone, Debug)]
pub struct CryptoSource<R: CryptoRng> {
    rng: R,
}

impl<R: CryptoRng> CryptoSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRng> UniformSource for CryptoSource<R> {
    fn next_unit(&mut self) -> Result<f64, GeoError> {
        Ok(unit_from_u32(self.rng.next_u32()))
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> Result<f64, GeoError> {
        (**self).next_unit()
    }
}
