// RSA Decryption Implementation
// Turns a block sequence back into the padded plaintext and then into text

use log::trace;

use super::bigint::{mod_pow, RsaBigInt};
use super::block::{chunk_size, int_to_chunk, PAD_BYTE};
use super::keygen::RsaPrivateKey;
use crate::error::{Result, RsaError};

/// Decrypt blocks using RSA private key
/// Returns the concatenated plaintext chunks, padding included
pub fn decrypt_bytes(blocks: &[RsaBigInt], private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let size = chunk_size(&private_key.n)?;
    let mut plaintext = Vec::with_capacity(blocks.len() * size);

    for (index, block) in blocks.iter().enumerate() {
        if block >= &private_key.n {
            return Err(RsaError::BlockOutOfRange { index });
        }
        let m = mod_pow(block, &private_key.d, &private_key.n);
        plaintext.extend_from_slice(&int_to_chunk(&m, size));
    }

    trace!("decrypted {} block(s) into {} bytes", blocks.len(), plaintext.len());
    Ok(plaintext)
}

/// Decrypt blocks to a string
///
/// The bytes must be ASCII; anything else (typically the result of a wrong
/// key) is a decode error. Trailing padding spaces are stripped, including any
/// the original message ended with.
pub fn decrypt_to_string(blocks: &[RsaBigInt], private_key: &RsaPrivateKey) -> Result<String> {
    let plaintext = decrypt_bytes(blocks, private_key)?;
    if let Some(offset) = plaintext.iter().position(|b| !b.is_ascii()) {
        return Err(RsaError::Decode {
            offset,
            byte: plaintext[offset],
        });
    }

    let end = plaintext
        .iter()
        .rposition(|&b| b != PAD_BYTE)
        .map_or(0, |last| last + 1);
    String::from_utf8(plaintext[..end].to_vec()).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        RsaError::Decode {
            offset,
            byte: plaintext[offset],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::block::chunk_size;
    use crate::rsa::encrypt::{encrypt_bytes, encrypt_string};
    use crate::rsa::keygen::{generate_keypair_with, KeyGenConfig, RsaKeyPair};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_keypair(seed: u64) -> RsaKeyPair {
        let config = KeyGenConfig::default().with_bit_length(512).with_rounds(32);
        generate_keypair_with(&config, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn test_roundtrip(keypair: &RsaKeyPair, message: &str) {
        let blocks = keypair.public_key.encrypt(message).unwrap();
        let decrypted = keypair.private_key.decrypt(&blocks).unwrap();
        assert_eq!(message, decrypted);
    }

    #[test]
    fn test_decrypt_hallo_welt() {
        let keypair = test_keypair(1);
        let blocks = encrypt_string("Hallo Welt", &keypair.public_key).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0] < keypair.public_key.n);

        let decrypted = decrypt_to_string(&blocks, &keypair.private_key).unwrap();
        assert_eq!(decrypted, "Hallo Welt");
    }

    #[test]
    fn test_decrypt_bytes_keeps_padding() {
        let keypair = test_keypair(2);
        let size = chunk_size(&keypair.private_key.n).unwrap();
        let blocks = encrypt_bytes(b"pad", &keypair.public_key).unwrap();
        let plaintext = decrypt_bytes(&blocks, &keypair.private_key).unwrap();

        assert_eq!(plaintext.len(), size);
        assert_eq!(&plaintext[..3], b"pad");
        assert!(plaintext[3..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_roundtrip_various_sizes() {
        let keypair = test_keypair(3);
        let size = chunk_size(&keypair.private_key.n).unwrap();

        let long = "The quick brown fox jumps over the lazy dog. ".repeat(12);
        let test_cases = vec![
            "A".to_string(),
            "AB".to_string(),
            "Hello, World!".to_string(),
            "x".repeat(size),
            "y".repeat(size + 1),
            "z".repeat(3 * size - 1),
            "tab\tnewline\n~".to_string(),
            long.trim_end().to_string(),
        ];

        for message in test_cases {
            test_roundtrip(&keypair, &message);
        }
    }

    #[test]
    fn test_trailing_spaces_are_lost() {
        let keypair = test_keypair(4);
        let blocks = keypair.public_key.encrypt("spaced   ").unwrap();
        assert_eq!(keypair.private_key.decrypt(&blocks).unwrap(), "spaced");
    }

    #[test]
    fn test_empty_message() {
        let keypair = test_keypair(5);
        let blocks = keypair.public_key.encrypt("").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(keypair.private_key.decrypt(&blocks).unwrap(), "");
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let keypair1 = test_keypair(6);
        let keypair2 = test_keypair(7);

        let message = "Hallo Welt, this message is long enough to matter";
        let blocks = keypair1.public_key.encrypt(message).unwrap();

        // Garbage bytes cannot all be ASCII; out-of-range blocks fail earlier
        let result = keypair2.private_key.decrypt(&blocks);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_codec_failure());
    }

    #[test]
    fn test_decrypt_block_out_of_range() {
        let keypair = test_keypair(8);
        let n = keypair.private_key.n.clone();
        let result = decrypt_bytes(&[from_u64(1), n], &keypair.private_key);
        assert!(matches!(result, Err(RsaError::BlockOutOfRange { index: 1 })));
    }

    #[test]
    fn test_decrypt_leading_zero_chunk_is_shifted() {
        let keypair = test_keypair(9);
        let size = chunk_size(&keypair.private_key.n).unwrap();
        let mut chunk = vec![b'a'; size];
        chunk[0] = 0;

        let blocks = encrypt_bytes(&chunk, &keypair.public_key).unwrap();
        let plaintext = decrypt_bytes(&blocks, &keypair.private_key).unwrap();

        let mut expected = chunk[1..].to_vec();
        expected.push(0);
        assert_eq!(plaintext, expected);
    }

    #[test]
    #[ignore = "generates two 2048-bit primes"]
    fn test_hallo_welt_2048() {
        let keypair = crate::rsa::generate_keypair(2048).unwrap();
        let blocks = keypair.public_key.encrypt("Hallo Welt").unwrap();
        assert!(blocks.iter().all(|b| b < &keypair.public_key.n));
        assert_eq!(keypair.private_key.decrypt(&blocks).unwrap(), "Hallo Welt");
    }
}
