use rayon::prelude::*;

use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::Result;
use crate::aesviz::trace::BlockTrace;

/// Electronic codebook: every block goes through the primitive on its own.
/// **Vulnerable to pattern emergence in the ciphertext.**
pub(crate) fn encrypt_block(cipher: &Cipher, plaintext: &[u8; 16]) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(plaintext)?;
    Ok((trace.output, trace))
}

pub(crate) fn decrypt_block(cipher: &Cipher, ciphertext: &[u8; 16]) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.decrypt_block(ciphertext)?;
    Ok((trace.output, trace))
}

/// Whole-message path: blocks are independent, so they are transformed in
/// parallel and collected back in order.
pub(crate) fn encrypt_blocks_parallel(
    cipher: &Cipher,
    input: &[u8],
) -> Result<Vec<([u8; 16], BlockTrace)>> {
    input
        .par_chunks(16)
        .map(|chunk| {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);
            encrypt_block(cipher, &block)
        })
        .collect()
}

pub(crate) fn decrypt_blocks_parallel(
    cipher: &Cipher,
    input: &[u8],
) -> Result<Vec<([u8; 16], BlockTrace)>> {
    input
        .par_chunks(16)
        .map(|chunk| {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);
            decrypt_block(cipher, &block)
        })
        .collect()
}
