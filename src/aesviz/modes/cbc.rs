use super::util::xor_blocks;
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::Result;
use crate::aesviz::trace::BlockTrace;

/// Cipher block chaining: each plaintext block is XORed with the previous
/// ciphertext block (the IV before block 0) before entering the primitive.
pub(crate) fn encrypt_block(
    cipher: &Cipher,
    prev_cipher: &mut [u8; 16],
    plaintext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(&xor_blocks(plaintext, prev_cipher))?;
    *prev_cipher = trace.output;
    Ok((trace.output, trace))
}

pub(crate) fn decrypt_block(
    cipher: &Cipher,
    prev_cipher: &mut [u8; 16],
    ciphertext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.decrypt_block(ciphertext)?;
    let plaintext = xor_blocks(&trace.output, prev_cipher);
    *prev_cipher = *ciphertext;
    Ok((plaintext, trace))
}
