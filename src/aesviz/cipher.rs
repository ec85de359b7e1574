use crate::aesviz::core;
use crate::aesviz::error::Result;
use crate::aesviz::key::{Key, expand_key};
use crate::aesviz::trace::BlockTrace;

/// One expanded key. Holds the word schedule produced by
/// [key expansion](crate::aesviz::key::expand_key) and runs the traced block
/// primitives against it. Stateless across calls: the only data here is the
/// schedule, which is immutable after construction.
pub struct Cipher {
    words: Vec<u32>,
    rounds: usize,
}

impl Cipher {
    /// Expands the key into the word schedule stored in the returned
    /// instance.
    pub fn new(key: &Key) -> Result<Self> {
        Ok(Self {
            words: expand_key(key.as_bytes())?,
            rounds: key.size().rounds(),
        })
    }

    /// Nr for this key size.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Rebuilds the 16 round-key bytes for `round` from the word schedule:
    /// big-endian words laid out column-major, matching the state layout.
    pub(crate) fn round_key_bytes(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (col, word) in self.words[round * 4..round * 4 + 4].iter().enumerate() {
            out[col * 4..col * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Encrypts one 16-byte block, returning the output and the full round
    /// trace. Fails with `InvalidBlockLength` on anything but 16 bytes.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<BlockTrace> {
        core::encrypt_block_traced(block, self)
    }

    /// Decrypts one 16-byte block with the inverse permutation, returning
    /// the output and the full round trace.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<BlockTrace> {
        core::decrypt_block_traced(block, self)
    }
}
