// Block layout
// Sizing, padding and chunk <-> integer conversion shared by encrypt and decrypt

use num_traits::{One, Zero};

use super::bigint::RsaBigInt;
use crate::error::{Result, RsaError};

/// Byte used to pad the message up to a whole number of chunks
pub const PAD_BYTE: u8 = b' ';

/// `ceil(log_256(n))`: the smallest `k` with `256^k >= n`.
///
/// Computed exactly from the bit length instead of a floating-point logarithm.
pub fn block_byte_size(n: &RsaBigInt) -> usize {
    if n.is_zero() {
        return 0;
    }
    let len = ((n.bits() + 7) / 8) as usize;
    let floor = RsaBigInt::one() << (8 * (len - 1));
    if *n == floor {
        len - 1
    } else {
        len
    }
}

/// Plaintext bytes per block: one less than the block size, so every chunk
/// read as an integer is strictly below `n`.
pub fn chunk_size(n: &RsaBigInt) -> Result<usize> {
    match block_byte_size(n) {
        0 | 1 => Err(RsaError::ModulusTooSmall { bits: n.bits() }),
        size => Ok(size - 1),
    }
}

/// Right-pad with spaces to a positive multiple of `chunk_size`.
///
/// An empty message still yields one chunk of padding.
pub fn pad_message(message: &[u8], chunk_size: usize) -> Vec<u8> {
    let chunks = message.len().div_ceil(chunk_size).max(1);
    let mut padded = Vec::with_capacity(chunks * chunk_size);
    padded.extend_from_slice(message);
    padded.resize(chunks * chunk_size, PAD_BYTE);
    padded
}

/// Interpret a chunk as an integer, first byte most significant.
///
/// The byte order is reversed explicitly and the result read little-endian,
/// so the layout never depends on platform byte order.
pub fn chunk_to_int(chunk: &[u8]) -> RsaBigInt {
    let mut reversed = chunk.to_vec();
    reversed.reverse();
    RsaBigInt::from_bytes_le(&reversed)
}

/// Inverse of [`chunk_to_int`] into a `chunk_size` slot.
///
/// The minimal big-endian bytes are copied to the front of the slot and the
/// rest is zero-filled. A chunk that began with zero bytes therefore comes
/// back shifted left; an integer wider than the slot is truncated.
pub fn int_to_chunk(value: &RsaBigInt, chunk_size: usize) -> Vec<u8> {
    let mut bytes = value.to_bytes_le();
    bytes.reverse();
    let mut slot = vec![0u8; chunk_size];
    let len = bytes.len().min(chunk_size);
    slot[..len].copy_from_slice(&bytes[..len]);
    slot
}
