//! Defines [`KeySize`] and [`Key`], plus the word-based key schedule shared
//! by every block operation. Keys can be built from existing bytes against a
//! declared size, or randomly generated.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aesviz::core::constants::RCON;
use crate::aesviz::core::util::sub_word;
use crate::aesviz::error::{Error, Result};

/// The three AES key sizes. Determines `Nk` (key words) and `Nr` (rounds);
/// `Nb` is 4 words for every variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Maps a declared bit count (as carried in requests) to a key size.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Bits128),
            192 => Ok(KeySize::Bits192),
            256 => Ok(KeySize::Bits256),
            _ => Err(Error::UnsupportedKeySize { bits }),
        }
    }

    pub fn bits(self) -> usize {
        match self {
            KeySize::Bits128 => 128,
            KeySize::Bits192 => 192,
            KeySize::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Nk: the number of 32-bit words comprising the key.
    pub fn words(self) -> usize {
        self.byte_len() / 4
    }

    /// Nr: 10, 12, or 14 rounds.
    pub fn rounds(self) -> usize {
        self.words() + 6
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key of a known size. A `Key` is required to
/// instantiate a [Cipher](crate::Cipher).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Builds a key from a byte slice against the declared size. Returns an
    /// `InvalidKeyLength` error on any mismatch.
    pub fn new(bytes: &[u8], size: KeySize) -> Result<Self> {
        if bytes.len() != size.byte_len() {
            return Err(Error::InvalidKeyLength {
                len: bytes.len(),
                bits: size.bits(),
                expected: size.byte_len(),
            });
        }

        Ok(Self {
            bytes: match size {
                // length checked above, so try_into cannot fail
                KeySize::Bits128 => KeyBytes::K128(bytes.try_into().unwrap()),
                KeySize::Bits192 => KeyBytes::K192(bytes.try_into().unwrap()),
                KeySize::Bits256 => KeyBytes::K256(bytes.try_into().unwrap()),
            },
        })
    }

    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        Ok(Self {
            bytes: match size {
                KeySize::Bits128 => {
                    let mut k = [0u8; 16];
                    OsRng.try_fill_bytes(&mut k)?;
                    KeyBytes::K128(k)
                }
                KeySize::Bits192 => {
                    let mut k = [0u8; 24];
                    OsRng.try_fill_bytes(&mut k)?;
                    KeyBytes::K192(k)
                }
                KeySize::Bits256 => {
                    let mut k = [0u8; 32];
                    OsRng.try_fill_bytes(&mut k)?;
                    KeyBytes::K256(k)
                }
            },
        })
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }

    /// Returns a reference to the internal key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}

/// AES key schedule over 32-bit words.
///
/// Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
/// Nk   The number of 32-bit words comprising the key
/// Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
/// w    The result of the key schedule, Nb*(Nr+1) big-endian words
pub(crate) fn expand_key(key: &[u8]) -> Result<Vec<u32>> {
    let nk = key.len() / 4;
    if key.len() % 4 != 0 || !matches!(nk, 4 | 6 | 8) {
        return Err(Error::UnsupportedKeySize {
            bits: key.len() * 8,
        });
    }
    let nr = nk + 6;
    let nw = 4 * (nr + 1);

    // first nk words are the key itself
    let mut w: Vec<u32> = Vec::with_capacity(nw);
    for chunk in key.chunks_exact(4) {
        w.push(u32::from_be_bytes(chunk.try_into().unwrap())); // chunks_exact guarantees 4 bytes
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            // additional substitution for AES-256 only
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    Ok(w)
}
