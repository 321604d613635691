// Primality testing and prime generation
// Miller-Rabin with byte-sized witness sampling, linear next-prime search

use log::{debug, trace};
use num_integer::Integer;
use num_traits::One;

use super::bigint::{byte_len, from_u64, mod_pow, RsaBigInt};
use super::random::RandomSource;
use crate::error::Result;

/// Miller-Rabin rounds used unless the caller asks otherwise (~2^-128 error).
pub const DEFAULT_ROUNDS: u32 = 128;

/// Miller-Rabin primality test
/// Returns true if n is probably prime
///
/// 2 and 3 are prime, even numbers and anything below 2 are not. Every other
/// candidate must pass `rounds` random witnesses.
pub fn is_prime<R>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> Result<bool>
where
    R: RandomSource + ?Sized,
{
    let two = from_u64(2);
    let three = from_u64(3);
    if *n == two || *n == three {
        return Ok(true);
    }
    if *n < two || n.is_even() {
        return Ok(false);
    }

    // Write n-1 as r * 2^s with r odd
    let n_minus_one: RsaBigInt = n - 1u8;
    let mut r = n_minus_one.clone();
    let mut s = 0u32;
    while r.is_even() {
        r >>= 1;
        s += 1;
    }

    for _ in 0..rounds {
        let a = random_witness(n, rng)?;
        let mut x = mod_pow(&a, &r, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut j = 1;
        while j < s && x != n_minus_one {
            x = mod_pow(&x, &two, n);
            if x.is_one() {
                return Ok(false);
            }
            j += 1;
        }
        if x != n_minus_one {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Draw a witness in `[2, n-2)`.
///
/// Bytes are drawn at the full width of `n` and rejected until they land in
/// range. Not a uniform range draw, and it wastes draws when the top byte of
/// `n` is small.
fn random_witness<R>(n: &RsaBigInt, rng: &mut R) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
{
    let width = byte_len(n);
    let lower = from_u64(2);
    let upper: RsaBigInt = n - 2u8;
    loop {
        let bytes = rng.next_bytes(width)?;
        let a = RsaBigInt::from_bytes_le(&bytes);
        if a >= lower && a < upper {
            return Ok(a);
        }
    }
}

/// Smallest probable prime `>= start`, found by stepping one at a time.
pub fn next_prime<R>(start: RsaBigInt, rounds: u32, rng: &mut R) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
{
    let mut candidate = start;
    let mut scanned = 0u64;
    while !is_prime(&candidate, rounds, rng)? {
        candidate += 1u8;
        scanned += 1;
    }
    trace!("next_prime: scanned {} candidates", scanned);
    Ok(candidate)
}

/// Random starting point for a prime search.
///
/// `bit_length / 8` bytes, read little-endian, with the top bit of the most
/// significant byte cleared so the value stays below `2^(bit_length - 1)`.
pub fn random_candidate<R>(bit_length: u32, rng: &mut R) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
{
    let mut bytes = rng.next_bytes((bit_length / 8) as usize)?;
    if let Some(top) = bytes.last_mut() {
        *top &= 0x7F;
    }
    Ok(RsaBigInt::from_bytes_le(&bytes))
}

/// Generate a random prime of specified bit length
///
/// Loops until a candidate passes both the search and the re-check; there is
/// no iteration cap.
pub fn generate_prime<R>(bit_length: u32, rounds: u32, rng: &mut R) -> Result<RsaBigInt>
where
    R: RandomSource + ?Sized,
{
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let start = random_candidate(bit_length, rng)?;
        let prime = next_prime(start, rounds, rng)?;
        if is_prime(&prime, rounds, rng)? {
            debug!(
                "generated {}-bit prime after {} attempt(s)",
                prime.bits(),
                attempts
            );
            return Ok(prime);
        }
    }
}
