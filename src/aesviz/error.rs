use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type. Every variant is a caller-input validation failure; none
/// are transient, none are retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Provided key bytes do not match the declared key size.
    #[error("invalid key length: {len} bytes (expected {expected} for AES-{bits})")]
    InvalidKeyLength {
        len: usize,
        bits: usize,
        expected: usize,
    },

    /// Declared or derived key size is not 128, 192, or 256 bits.
    #[error("unsupported key size: {bits} bits (expected 128, 192, or 256)")]
    UnsupportedKeySize { bits: usize },

    /// Mode name did not match any supported mode of operation.
    #[error("unsupported mode: {mode} (expected ECB, CBC, CFB, OFB, or CTR)")]
    UnsupportedMode { mode: String },

    /// Block primitive was handed something other than 16 bytes.
    #[error("invalid block length: {len} bytes (AES blocks are 16 bytes)")]
    InvalidBlockLength { len: usize },

    /// Block-mode ciphertext whose length is not a multiple of 16 bytes.
    #[error("invalid ciphertext length: {len} bytes (must be a multiple of 16 for {mode})")]
    InvalidCiphertextLength { len: usize, mode: &'static str },

    /// Malformed PKCS#7 padding. Intentionally carries no detail about which
    /// check rejected the input.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// Non-hex digit in a hex-encoded input.
    #[error("invalid hex digit: {0:?}")]
    InvalidHex(char),

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
