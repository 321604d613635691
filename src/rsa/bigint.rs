// RSA Big Integer Operations
// Wrapper around num-bigint for the number-theoretic routines of key generation

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Number of bytes needed to hold `n`; zero occupies one byte.
pub fn byte_len(n: &RsaBigInt) -> usize {
    let bits = n.bits().max(1);
    ((bits + 7) / 8) as usize
}

/// Modular exponentiation: base^exp mod modulus
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }
    base.modpow(exp, modulus)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Compute modular inverse: a^(-1) mod m
///
/// Iterative extended Euclidean algorithm. The result lies in `[0, m)`.
/// `m == 1` yields zero. Returns `None` when `gcd(a, m) != 1` or `m` is zero,
/// where no inverse exists.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }
    if m.is_one() {
        return Some(RsaBigInt::zero());
    }
    if !gcd(a, m).is_one() {
        return None;
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut m = m0.clone();
    let mut x = BigInt::one();
    let mut y = BigInt::zero();

    while a > BigInt::one() {
        if m.is_zero() {
            return None;
        }
        let q = &a / &m;
        let r = &a % &m;
        a = std::mem::replace(&mut m, r);
        let next_y = &x - &q * &y;
        x = std::mem::replace(&mut y, next_y);
    }

    // |x| never exceeds m0, one floored reduction lands it in [0, m0)
    x.mod_floor(&m0).to_biguint()
}

/// Smallest integer in `[2, n)` coprime to `n`.
///
/// A linear scan; for a totient of cryptographic size this almost always
/// returns 3 or 5. Returns `None` if no such value exists below `n`.
pub fn select_coprime(n: &RsaBigInt) -> Option<RsaBigInt> {
    let mut candidate = from_u64(2);
    while &candidate < n {
        if gcd(&candidate, n).is_one() {
            return Some(candidate);
        }
        candidate += 1u8;
    }
    None
}
