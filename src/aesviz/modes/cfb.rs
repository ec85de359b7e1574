use super::util::xor_blocks;
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::Result;
use crate::aesviz::trace::BlockTrace;

/// Cipher feedback (full-block). The keystream for block i is the forward
/// encryption of the previous ciphertext block (the IV before block 0).
///
/// Decryption also runs the *forward* primitive: the keystream is
/// reconstructed from the received ciphertext blocks and XORed off. Wiring
/// the inverse primitive in here for symmetry with CBC would break the mode.
pub(crate) fn encrypt_block(
    cipher: &Cipher,
    prev_cipher: &mut [u8; 16],
    plaintext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(prev_cipher)?;
    let ciphertext = xor_blocks(plaintext, &trace.output);
    *prev_cipher = ciphertext;
    Ok((ciphertext, trace))
}

pub(crate) fn decrypt_block(
    cipher: &Cipher,
    prev_cipher: &mut [u8; 16],
    ciphertext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(prev_cipher)?;
    let plaintext = xor_blocks(ciphertext, &trace.output);
    *prev_cipher = *ciphertext;
    Ok((plaintext, trace))
}
