// RSA Module - Main module file
// Exports key generation and the block codec

pub mod bigint;
pub mod block;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod prime;
pub mod random;

pub use bigint::{mod_inverse, select_coprime, RsaBigInt};
pub use decrypt::{decrypt_bytes, decrypt_to_string};
pub use encrypt::{encrypt_bytes, encrypt_string};
pub use keygen::{
    generate_keypair, generate_keypair_with, KeyGenConfig, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
pub use prime::{generate_prime, is_prime, next_prime, DEFAULT_ROUNDS};
pub use random::RandomSource;
