use rayon::prelude::*;

use super::util::{counter_for_block, increment, xor_blocks};
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::Result;
use crate::aesviz::trace::BlockTrace;

/// Counter mode. The keystream for block i is the forward encryption of the
/// counter block, which is incremented (big-endian, wrapping) after every
/// block. Both directions run the forward primitive.
pub(crate) fn encrypt_block(
    cipher: &Cipher,
    counter: &mut [u8; 16],
    plaintext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    let trace = cipher.encrypt_block(counter)?;
    increment(counter);
    Ok((xor_blocks(plaintext, &trace.output), trace))
}

/// CTR is symmetric: decryption XORs the same keystream off again.
pub(crate) fn decrypt_block(
    cipher: &Cipher,
    counter: &mut [u8; 16],
    ciphertext: &[u8; 16],
) -> Result<([u8; 16], BlockTrace)> {
    encrypt_block(cipher, counter, ciphertext)
}

/// Whole-message path for either direction: block i's counter is derived
/// directly from the starting value, so the keystream blocks are computed in
/// parallel and collected back in order.
pub(crate) fn transform_blocks_parallel(
    cipher: &Cipher,
    counter: &[u8; 16],
    input: &[u8],
) -> Result<Vec<([u8; 16], BlockTrace)>> {
    input
        .par_chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let block = counter_for_block(counter, i as u128);
            let trace = cipher.encrypt_block(&block)?;
            let mut out = [0u8; 16];
            out[..chunk.len()].copy_from_slice(chunk);
            let out = xor_blocks(&out, &trace.output);
            Ok((out, trace))
        })
        .collect()
}
