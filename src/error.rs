// Error types
// Key generation and block codec failures

use std::io;

/// Errors raised while generating keys or running the block codec.
#[derive(Debug, thiserror::Error)]
pub enum RsaError {
    #[error("Randomness source failed: {0}")]
    Randomness(#[from] rand::Error),

    #[error("Key generation failed: {0}")]
    GenerationFailed(String),

    #[error("Modulus of {bits} bits is too small to hold a plaintext block")]
    ModulusTooSmall { bits: u64 },

    #[error("Message is not ASCII: byte {byte:#04x} at offset {offset}")]
    NonAscii { offset: usize, byte: u8 },

    #[error("Block {index} is not below the modulus")]
    BlockOutOfRange { index: usize },

    #[error("Decrypted bytes are not valid text: byte {byte:#04x} at offset {offset}")]
    Decode { offset: usize, byte: u8 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid block on line {line}: {reason}")]
    InvalidBlockText { line: usize, reason: String },
}

impl RsaError {
    /// True for failures of the key generation path.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, RsaError::Randomness(_) | RsaError::GenerationFailed(_))
    }

    /// True for failures of the block codec.
    pub fn is_codec_failure(&self) -> bool {
        matches!(
            self,
            RsaError::ModulusTooSmall { .. }
                | RsaError::NonAscii { .. }
                | RsaError::BlockOutOfRange { .. }
                | RsaError::Decode { .. }
        )
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, RsaError>;
