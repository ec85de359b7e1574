//! Modes of operation layered over the block primitive. ECB and CBC are
//! block modes (PKCS#7 padded, ciphertext a multiple of 16 bytes); CFB, OFB,
//! and CTR are stream-like and keep the message length exactly.

pub(crate) mod cbc;
pub(crate) mod cfb;
pub(crate) mod ctr;
pub(crate) mod ecb;
pub(crate) mod ofb;
pub(crate) mod util;

use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::{Error, Result};
use crate::aesviz::trace::BlockTrace;

/// Mode of operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl Mode {
    /// Case-insensitive mode lookup; anything else is `UnsupportedMode`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            "CFB" => Ok(Mode::Cfb),
            "OFB" => Ok(Mode::Ofb),
            "CTR" => Ok(Mode::Ctr),
            _ => Err(Error::UnsupportedMode {
                mode: name.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
            Mode::Ctr => "CTR",
        }
    }

    /// Stream-like modes take no padding and keep the message length.
    pub fn is_stream(self) -> bool {
        matches!(self, Mode::Cfb | Mode::Ofb | Mode::Ctr)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-message chaining state. Each variant owns exactly the buffer its mode
/// carries between blocks; the context lives for one message and is
/// discarded afterwards, never shared across calls.
pub(crate) enum ModeContext {
    Ecb,
    Cbc { prev_cipher: [u8; 16] },
    Cfb { prev_cipher: [u8; 16] },
    Ofb { prev_keystream: [u8; 16] },
    Ctr { counter: [u8; 16] },
}

impl ModeContext {
    /// Seeds the chaining buffer from the normalized IV or counter block.
    pub(crate) fn new(mode: Mode, iv: [u8; 16], counter: [u8; 16]) -> Self {
        match mode {
            Mode::Ecb => ModeContext::Ecb,
            Mode::Cbc => ModeContext::Cbc { prev_cipher: iv },
            Mode::Cfb => ModeContext::Cfb { prev_cipher: iv },
            Mode::Ofb => ModeContext::Ofb { prev_keystream: iv },
            Mode::Ctr => ModeContext::Ctr { counter },
        }
    }

    /// One encryption step: consumes a full 16-byte plaintext block, returns
    /// the mode's output block plus the primitive's trace, and advances the
    /// chaining buffer.
    pub(crate) fn encrypt_block(
        &mut self,
        cipher: &Cipher,
        plaintext: &[u8; 16],
    ) -> Result<([u8; 16], BlockTrace)> {
        match self {
            ModeContext::Ecb => ecb::encrypt_block(cipher, plaintext),
            ModeContext::Cbc { prev_cipher } => cbc::encrypt_block(cipher, prev_cipher, plaintext),
            ModeContext::Cfb { prev_cipher } => cfb::encrypt_block(cipher, prev_cipher, plaintext),
            ModeContext::Ofb { prev_keystream } => {
                ofb::encrypt_block(cipher, prev_keystream, plaintext)
            }
            ModeContext::Ctr { counter } => ctr::encrypt_block(cipher, counter, plaintext),
        }
    }

    /// One decryption step. The keystream variants (CFB/OFB/CTR) run the
    /// forward primitive here too; only ECB and CBC touch the inverse.
    pub(crate) fn decrypt_block(
        &mut self,
        cipher: &Cipher,
        ciphertext: &[u8; 16],
    ) -> Result<([u8; 16], BlockTrace)> {
        match self {
            ModeContext::Ecb => ecb::decrypt_block(cipher, ciphertext),
            ModeContext::Cbc { prev_cipher } => cbc::decrypt_block(cipher, prev_cipher, ciphertext),
            ModeContext::Cfb { prev_cipher } => cfb::decrypt_block(cipher, prev_cipher, ciphertext),
            ModeContext::Ofb { prev_keystream } => {
                ofb::decrypt_block(cipher, prev_keystream, ciphertext)
            }
            ModeContext::Ctr { counter } => ctr::decrypt_block(cipher, counter, ciphertext),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Mode::parse("cbc").unwrap(), Mode::Cbc);
        assert_eq!(Mode::parse("Ofb").unwrap(), Mode::Ofb);
        assert_eq!(Mode::parse("CTR").unwrap(), Mode::Ctr);
    }

    #[test]
    fn parse_rejects_unknown_modes() {
        assert!(matches!(
            Mode::parse("GCM"),
            Err(Error::UnsupportedMode { mode }) if mode == "GCM"
        ));
        assert!(Mode::parse("").is_err());
    }

    #[test]
    fn stream_classification() {
        assert!(!Mode::Ecb.is_stream());
        assert!(!Mode::Cbc.is_stream());
        assert!(Mode::Cfb.is_stream());
        assert!(Mode::Ofb.is_stream());
        assert!(Mode::Ctr.is_stream());
    }
}
