//! RSA key generation and block-based text encryption built on
//! arbitrary-precision integers.
//!
//! Not a standards-compliant RSA: there is no OAEP/PKCS#1 padding, no
//! constant-time arithmetic and the public exponent is the smallest value
//! coprime to φ(n). Use it to study the arithmetic, not to protect data.

pub mod error;
pub mod rsa;
pub mod util;

pub use error::{Result, RsaError};
