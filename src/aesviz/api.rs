//! Request, result, and history shapes exchanged with the transport and
//! persistence layers. Field names serialize in the camelCase form those
//! layers expect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aesviz::trace::RoundStep;
use crate::aesviz::util::decode_hex;

/// Full-message encryption request. The plaintext is itself a hex-encoded
/// byte string, not raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    pub plaintext_hex: String,
    pub key_hex: String,
    /// 128, 192, or 256.
    pub key_size: u16,
    /// "ECB", "CBC", "CFB", "OFB", or "CTR" (case-insensitive).
    pub mode: String,
    #[serde(default)]
    pub iv_hex: Option<String>,
    /// Initial counter block, used only by CTR.
    #[serde(default)]
    pub ctr_counter_hex: Option<String>,
}

/// Full-message decryption request; mirrors [`EncryptRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    pub ciphertext_hex: String,
    pub key_hex: String,
    pub key_size: u16,
    pub mode: String,
    #[serde(default)]
    pub iv_hex: Option<String>,
    #[serde(default)]
    pub ctr_counter_hex: Option<String>,
}

/// Block-primitive output plus its full step trace, as consumed by the
/// visualizer. For keystream modes the bytes are the visible mode output,
/// not the raw keystream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AesResult {
    pub ciphertext: Vec<u8>,
    pub steps: Vec<RoundStep>,
}

/// One 16-byte block's worth of result. For a short final stream-mode block
/// the hex fields carry only the real bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    /// 0-based.
    pub block_index: usize,
    pub plaintext_block_hex: String,
    pub ciphertext_block_hex: String,
    pub aes_result: AesResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionResult {
    pub mode: String,
    pub block_results: Vec<BlockResult>,
    pub padding_description: String,
    /// Entire message as hex.
    pub ciphertext_hex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptionResult {
    pub mode: String,
    pub block_results: Vec<BlockResult>,
    pub padding_description: String,
    /// Entire unpadded message as hex.
    pub plaintext_hex: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Encrypt => "ENCRYPT",
            Operation::Decrypt => "DECRYPT",
        })
    }
}

/// One row of the external encryption history. Built from an
/// already-finalized result; persisting it is the caller's concern and has
/// no bearing on the cipher output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// "AES-128", "AES-192", or "AES-256".
    pub algorithm: String,
    pub mode: String,
    pub operation: Operation,
    pub plaintext: String,
    pub ciphertext: String,
    pub key_used: String,
    /// Number of 16-byte blocks processed.
    pub block_count: usize,
    pub iv_used: Option<String>,
    pub ctr_used: Option<String>,
}

impl HistoryRecord {
    pub fn from_encrypt(request: &EncryptRequest, result: &EncryptionResult) -> Self {
        Self {
            algorithm: format!("AES-{}", request.key_size),
            mode: result.mode.clone(),
            operation: Operation::Encrypt,
            plaintext: request.plaintext_hex.clone(),
            ciphertext: result.ciphertext_hex.clone(),
            key_used: request.key_hex.clone(),
            block_count: result.block_results.len(),
            iv_used: request.iv_hex.clone(),
            ctr_used: request.ctr_counter_hex.clone(),
        }
    }

    /// The plaintext column is rendered as UTF-8 on a best-effort basis:
    /// arbitrary hex input need not be valid text, so the rendering is lossy
    /// and carries no correctness weight.
    pub fn from_decrypt(request: &DecryptRequest, result: &DecryptionResult) -> Self {
        // the hex came out of the engine, so decoding cannot fail
        let plain_bytes = decode_hex(&result.plaintext_hex).unwrap_or_default();
        Self {
            algorithm: format!("AES-{}", request.key_size),
            mode: result.mode.clone(),
            operation: Operation::Decrypt,
            plaintext: String::from_utf8_lossy(&plain_bytes).into_owned(),
            ciphertext: request.ciphertext_hex.clone(),
            key_used: request.key_hex.clone(),
            block_count: result.block_results.len(),
            iv_used: request.iv_hex.clone(),
            ctr_used: request.ctr_counter_hex.clone(),
        }
    }
}
