use super::util::xor_blocks;
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::Result;
use crate::aesviz::trace::BlockTrace;

/// Output feedback. The keystream feeds back on itself: block i's keystream
/// is the forward encryption of block i-1's keystream (the IV before block
/// 0), independent of the message.
///
/// Like CFB, decryption runs the *forward* primitive only.
pub(crate) fn encrypt_block(
    cipher: &Cipher,
    prev_keystream: &mut [u8; 16],
    plaintext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(prev_keystream)?;
    *prev_keystream = trace.output;
    Ok((xor_blocks(plaintext, &trace.output), trace))
}

/// OFB is symmetric: the same keystream is XORed off again.
pub(crate) fn decrypt_block(
    cipher: &Cipher,
    prev_keystream: &mut [u8; 16],
    ciphertext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    encrypt_block(cipher, prev_keystream, ciphertext)
}
