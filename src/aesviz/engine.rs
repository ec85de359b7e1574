//! Full-message drivers: validate the request, pad or length-check, run the
//! per-block transforms, and assemble the per-block results the visualizer
//! consumes. All state lives in this call; nothing is shared or retained.

use crate::aesviz::api::{
    AesResult, BlockResult, DecryptRequest, DecryptionResult, EncryptRequest, EncryptionResult,
};
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::{Error, Result};
use crate::aesviz::key::{Key, KeySize};
use crate::aesviz::modes::util::PARALLEL_THRESHOLD;
use crate::aesviz::modes::{Mode, ModeContext, ctr, ecb};
use crate::aesviz::trace::BlockTrace;
use crate::aesviz::util::{decode_hex, derive_iv_or_counter, encode_hex, pkcs7_pad, pkcs7_unpad};

/// Encrypts a full hex-encoded message under the requested mode, returning
/// the message-level ciphertext plus one traced result per 16-byte block.
pub fn encrypt(request: &EncryptRequest) -> Result<EncryptionResult> {
    let mode = Mode::parse(&request.mode)?;
    let cipher = cipher_for(&request.key_hex, request.key_size)?;
    let plaintext = decode_hex(&request.plaintext_hex)?;
    let iv = derive_iv_or_counter(request.iv_hex.as_deref())?;
    let counter = derive_iv_or_counter(request.ctr_counter_hex.as_deref())?;

    let (working, pad_len) = if mode.is_stream() {
        (plaintext, 0)
    } else {
        let padded = pkcs7_pad(&plaintext);
        let pad_len = padded.len() - plaintext.len();
        (padded, pad_len)
    };

    let transformed = encrypt_blocks(mode, &cipher, &working, iv, counter)?;

    let mut block_results = Vec::with_capacity(transformed.len());
    let mut full_cipher = Vec::with_capacity(working.len());
    for (index, (chunk, (output, trace))) in working.chunks(16).zip(transformed).enumerate() {
        // stream modes surface only the real bytes of a short final block
        let visible = &output[..chunk.len()];
        full_cipher.extend_from_slice(visible);
        block_results.push(BlockResult {
            block_index: index,
            plaintext_block_hex: encode_hex(chunk),
            ciphertext_block_hex: encode_hex(visible),
            aes_result: AesResult {
                ciphertext: visible.to_vec(),
                steps: trace.steps,
            },
        });
    }

    let padding_description = if mode.is_stream() {
        format!("No padding used in {mode} mode (stream-like).")
    } else {
        format!("PKCS#7 padding with {pad_len} byte(s) on the last block.")
    };

    Ok(EncryptionResult {
        mode: mode.name().to_string(),
        block_results,
        padding_description,
        ciphertext_hex: encode_hex(&full_cipher),
    })
}

/// Decrypts a full hex-encoded message. Block modes validate the ciphertext
/// length up front and strip PKCS#7 padding from the assembled plaintext at
/// the end.
pub fn decrypt(request: &DecryptRequest) -> Result<DecryptionResult> {
    let mode = Mode::parse(&request.mode)?;
    let cipher = cipher_for(&request.key_hex, request.key_size)?;
    let ciphertext = decode_hex(&request.ciphertext_hex)?;

    if !mode.is_stream() && ciphertext.len() % 16 != 0 {
        return Err(Error::InvalidCiphertextLength {
            len: ciphertext.len(),
            mode: mode.name(),
        });
    }

    let iv = derive_iv_or_counter(request.iv_hex.as_deref())?;
    let counter = derive_iv_or_counter(request.ctr_counter_hex.as_deref())?;

    let transformed = decrypt_blocks(mode, &cipher, &ciphertext, iv, counter)?;

    let mut block_results = Vec::with_capacity(transformed.len());
    let mut full_plain = Vec::with_capacity(ciphertext.len());
    for (index, (chunk, (output, trace))) in ciphertext.chunks(16).zip(transformed).enumerate() {
        let visible = &output[..chunk.len()];
        full_plain.extend_from_slice(visible);
        block_results.push(BlockResult {
            block_index: index,
            plaintext_block_hex: encode_hex(visible),
            ciphertext_block_hex: encode_hex(chunk),
            // the decryption view visualizes the recovered plaintext bytes
            aes_result: AesResult {
                ciphertext: visible.to_vec(),
                steps: trace.steps,
            },
        });
    }

    let padding_description = if mode.is_stream() {
        format!("No padding used in {mode} mode (stream-like).")
    } else {
        pkcs7_unpad(&mut full_plain)?;
        "PKCS#7 padding removed on the last block.".to_string()
    };

    Ok(DecryptionResult {
        mode: mode.name().to_string(),
        block_results,
        padding_description,
        plaintext_hex: encode_hex(&full_plain),
    })
}

fn cipher_for(key_hex: &str, key_size: u16) -> Result<Cipher> {
    let size = KeySize::from_bits(key_size as usize)?;
    let key_bytes = decode_hex(key_hex)?;
    let key = Key::new(&key_bytes, size)?;
    Cipher::new(&key)
}

/// Runs the per-block transforms in message order. ECB and CTR carry no
/// chaining dependency between blocks, so large messages take the parallel
/// path; the chained modes always walk the context serially.
fn encrypt_blocks(
    mode: Mode,
    cipher: &Cipher,
    input: &[u8],
    iv: [u8; 16],
    counter: [u8; 16],
) -> Result<Vec<([u8; 16], BlockTrace)>> {
    match mode {
        Mode::Ecb if input.len() >= PARALLEL_THRESHOLD => {
            ecb::encrypt_blocks_parallel(cipher, input)
        }
        Mode::Ctr if input.len() >= PARALLEL_THRESHOLD => {
            ctr::transform_blocks_parallel(cipher, &counter, input)
        }
        _ => {
            let mut context = ModeContext::new(mode, iv, counter);
            input
                .chunks(16)
                .map(|chunk| {
                    let mut block = [0u8; 16];
                    block[..chunk.len()].copy_from_slice(chunk);
                    context.encrypt_block(cipher, &block)
                })
                .collect()
        }
    }
}

fn decrypt_blocks(
    mode: Mode,
    cipher: &Cipher,
    input: &[u8],
    iv: [u8; 16],
    counter: [u8; 16],
) -> Result<Vec<([u8; 16], BlockTrace)>> {
    match mode {
        Mode::Ecb if input.len() >= PARALLEL_THRESHOLD => {
            ecb::decrypt_blocks_parallel(cipher, input)
        }
        // CTR is symmetric, so decryption shares the parallel keystream path
        Mode::Ctr if input.len() >= PARALLEL_THRESHOLD => {
            ctr::transform_blocks_parallel(cipher, &counter, input)
        }
        _ => {
            let mut context = ModeContext::new(mode, iv, counter);
            input
                .chunks(16)
                .map(|chunk| {
                    let mut block = [0u8; 16];
                    block[..chunk.len()].copy_from_slice(chunk);
                    context.decrypt_block(cipher, &block)
                })
                .collect()
        }
    }
}
