// Randomness Source
// Cryptographically secure byte supply for witness sampling and prime candidates

use rand::{CryptoRng, RngCore};

use crate::error::Result;

/// A supplier of cryptographically secure random bytes.
///
/// Implemented for every `RngCore + CryptoRng`, so `rand::rngs::OsRng` works
/// as the default source and a seeded `StdRng` can be used where a
/// reproducible stream is wanted.
pub trait RandomSource {
    /// Draw exactly `count` random bytes.
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}
