// RSA Encryption Implementation
// Splits a message into fixed-width chunks and encrypts each as one block

use log::trace;

use super::bigint::{mod_pow, RsaBigInt};
use super::block::{chunk_size, chunk_to_int, pad_message};
use super::keygen::RsaPublicKey;
use crate::error::{Result, RsaError};

/// Encrypt bytes using RSA public key
///
/// The input is space-padded to whole chunks of `ceil(log_256(n)) - 1` bytes
/// and each chunk becomes `chunk^e mod n`, in input order.
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> Result<Vec<RsaBigInt>> {
    let size = chunk_size(&public_key.n)?;
    let padded = pad_message(plaintext, size);

    let blocks: Vec<RsaBigInt> = padded
        .chunks(size)
        .map(|chunk| mod_pow(&chunk_to_int(chunk), &public_key.e, &public_key.n))
        .collect();

    trace!(
        "encrypted {} bytes into {} block(s) of {} bytes",
        plaintext.len(),
        blocks.len(),
        size
    );
    Ok(blocks)
}

/// Encrypt an ASCII string using RSA public key
pub fn encrypt_string(plaintext: &str, public_key: &RsaPublicKey) -> Result<Vec<RsaBigInt>> {
    if let Some(offset) = plaintext.bytes().position(|b| !b.is_ascii()) {
        return Err(RsaError::NonAscii {
            offset,
            byte: plaintext.as_bytes()[offset],
        });
    }
    encrypt_bytes(plaintext.as_bytes(), public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::block::chunk_size;
    use crate::rsa::keygen::{generate_keypair_with, KeyGenConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_key() -> RsaPublicKey {
        let config = KeyGenConfig::default().with_bit_length(256).with_rounds(32);
        generate_keypair_with(&config, &mut StdRng::seed_from_u64(256))
            .unwrap()
            .public_key
    }

    // p = 61, q = 53, e = 7 (the smallest exponent coprime to 3120)
    fn textbook_key() -> RsaPublicKey {
        RsaPublicKey {
            e: from_u64(7),
            n: from_u64(3233),
        }
    }

    #[test]
    fn test_encrypt_textbook() {
        // One byte per block: 'A' = 65, 65^7 mod 3233
        let blocks = encrypt_bytes(b"A", &textbook_key()).unwrap();
        assert_eq!(blocks, vec![mod_pow(&from_u64(65), &from_u64(7), &from_u64(3233))]);
    }

    #[test]
    fn test_encrypt_string() {
        let key = test_key();
        let blocks = encrypt_string("Hallo Welt", &key).unwrap();
        assert!(!blocks.is_empty());
        for block in &blocks {
            assert!(block < &key.n);
        }
    }

    #[test]
    fn test_encrypt_empty() {
        let key = test_key();
        let blocks = encrypt_bytes(b"", &key).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_encrypt_block_boundaries() {
        let key = test_key();
        let size = chunk_size(&key.n).unwrap();

        let exact = vec![b'x'; size];
        assert_eq!(encrypt_bytes(&exact, &key).unwrap().len(), 1);

        let over = vec![b'x'; size + 1];
        let blocks = encrypt_bytes(&over, &key).unwrap();
        assert_eq!(blocks.len(), 2);

        // Second block is one character followed by padding
        let mut tail = vec![b' '; size];
        tail[0] = b'x';
        assert_eq!(blocks[1], encrypt_bytes(&tail, &key).unwrap()[0]);
    }

    #[test]
    fn test_encrypt_preserves_order() {
        let key = textbook_key();
        let blocks = encrypt_bytes(b"AB", &key).unwrap();
        let a = encrypt_bytes(b"A", &key).unwrap();
        let b = encrypt_bytes(b"B", &key).unwrap();
        assert_eq!(blocks, vec![a[0].clone(), b[0].clone()]);
    }

    #[test]
    fn test_encrypt_rejects_non_ascii() {
        let key = textbook_key();
        let result = encrypt_string("Grüße", &key);
        assert!(matches!(result, Err(RsaError::NonAscii { offset: 2, byte: 0xc3 })));
    }

    #[test]
    fn test_encrypt_rejects_tiny_modulus() {
        let key = RsaPublicKey {
            e: from_u64(3),
            n: from_u64(253),
        };
        assert!(matches!(
            encrypt_bytes(b"a", &key),
            Err(RsaError::ModulusTooSmall { .. })
        ));
    }
}
