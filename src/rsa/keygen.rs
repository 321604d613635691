// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use log::{info, warn};
use num_traits::One;
use rand::rngs::OsRng;

use super::bigint::{mod_inverse, select_coprime, RsaBigInt};
use super::prime::{generate_prime, DEFAULT_ROUNDS};
use super::random::RandomSource;
use crate::error::{Result, RsaError};

/// Prime size used when nothing else is configured
pub const DEFAULT_BIT_LENGTH: u32 = 2048;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt,  // Public exponent
    pub n: RsaBigInt,  // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt,  // Private exponent
    pub n: RsaBigInt,  // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    /// Bit length each prime was generated at
    pub bit_length: u32,
}

/// Key generation settings
#[derive(Clone, Debug)]
pub struct KeyGenConfig {
    /// Bit length of each of the two primes; the modulus is about twice this
    pub bit_length: u32,
    /// Miller-Rabin rounds per primality check
    pub rounds: u32,
    /// Draw q again whenever it comes out equal to p
    pub distinct_primes: bool,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            rounds: DEFAULT_ROUNDS,
            distinct_primes: true,
        }
    }
}

impl KeyGenConfig {
    pub fn with_bit_length(mut self, bit_length: u32) -> Self {
        self.bit_length = bit_length;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_distinct_primes(mut self, distinct: bool) -> Self {
        self.distinct_primes = distinct;
        self
    }
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// `(exponent, modulus)`
    pub fn as_pair(&self) -> (&RsaBigInt, &RsaBigInt) {
        (&self.e, &self.n)
    }

    /// Encrypt a message using this public key
    /// Returns one integer block per plaintext chunk
    pub fn encrypt(&self, message: &str) -> Result<Vec<RsaBigInt>> {
        super::encrypt::encrypt_string(message, self)
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// `(exponent, modulus)`
    pub fn as_pair(&self) -> (&RsaBigInt, &RsaBigInt) {
        (&self.d, &self.n)
    }

    /// Decrypt a block sequence using this private key
    pub fn decrypt(&self, blocks: &[RsaBigInt]) -> Result<String> {
        super::decrypt::decrypt_to_string(blocks, self)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }
}

/// Generate an RSA key pair from two primes of `bit_length` bits each,
/// drawing randomness from the operating system.
pub fn generate_keypair(bit_length: u32) -> Result<RsaKeyPair> {
    let config = KeyGenConfig::default().with_bit_length(bit_length);
    generate_keypair_with(&config, &mut OsRng)
}

/// Generate an RSA key pair with explicit settings and randomness source
///
/// n = p·q, φ = (p-1)(q-1), e is the smallest integer coprime to φ and
/// d = e^(-1) mod φ. The factors and φ are dropped on return.
pub fn generate_keypair_with<R>(config: &KeyGenConfig, rng: &mut R) -> Result<RsaKeyPair>
where
    R: RandomSource + ?Sized,
{
    // Below one byte every search starts at zero and lands on 2
    if config.distinct_primes && config.bit_length < 8 {
        return Err(RsaError::GenerationFailed(format!(
            "bit length {} cannot produce two distinct primes",
            config.bit_length
        )));
    }

    // Step 1: Generate two random primes p and q
    let p = generate_prime(config.bit_length, config.rounds, rng)?;
    let mut q = generate_prime(config.bit_length, config.rounds, rng)?;
    while config.distinct_primes && q == p {
        warn!("second prime equals the first, drawing again");
        q = generate_prime(config.bit_length, config.rounds, rng)?;
    }

    // Step 2: Compute n = p * q
    let n = &p * &q;

    // Step 3: Compute φ(n) = (p-1)(q-1)
    let phi_n = (&p - 1u8) * (&q - 1u8);

    // Step 4: Pick e coprime to φ(n)
    let e = select_coprime(&phi_n).ok_or_else(|| {
        RsaError::GenerationFailed(format!("no exponent below φ(n) = {} is coprime to it", phi_n))
    })?;

    // Step 5: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi_n).ok_or_else(|| {
        RsaError::GenerationFailed("public exponent has no inverse mod φ(n)".to_string())
    })?;

    info!(
        "generated key pair: {}-bit modulus, public exponent {}",
        n.bits(),
        e
    );

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
        bit_length: config.bit_length,
    })
}

/// Check `e·d ≡ 1 (mod φ)` for a known totient
pub fn exponents_match(e: &RsaBigInt, d: &RsaBigInt, phi: &RsaBigInt) -> bool {
    ((e * d) % phi).is_one()
}
