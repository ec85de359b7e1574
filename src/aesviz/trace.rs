//! Trace types consumed by the visualizer: one [`RoundStep`] per
//! sub-transformation, collected into a [`BlockTrace`] per block.

use serde::{Deserialize, Serialize};

/// 4x4 byte matrix in the canonical AES column representation: `m[col][row]`.
pub type StateMatrix = [[u8; 4]; 4];

/// Single visual step: SubBytes, ShiftRows, MixColumns, AddRoundKey, or one
/// of their inverses, recorded after the transformation was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStep {
    /// 0..Nr for encryption, Nr..0 for decryption.
    pub round: usize,
    /// "Round 1 - SubBytes", etc.
    pub step: String,
    pub state: StateMatrix,
    /// Round key for this step's round. Nullable on the wire; always
    /// populated here.
    pub round_key: Option<StateMatrix>,
}

/// Output of one block-primitive call together with its ordered, append-only
/// step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTrace {
    pub output: [u8; 16],
    pub steps: Vec<RoundStep>,
}

/// Converts the flat column-major working state into a `[col][row]` matrix.
/// The only place the layout duality is crossed.
pub(crate) fn to_matrix(state: &[u8; 16]) -> StateMatrix {
    let mut m = [[0u8; 4]; 4];
    for (col, chunk) in state.chunks_exact(4).enumerate() {
        m[col].copy_from_slice(chunk);
    }
    m
}
