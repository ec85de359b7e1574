use super::constants::SBOX_INV;
use super::util::{add_round_key, gmul, record};
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::{Error, Result};
use crate::aesviz::trace::BlockTrace;

/// Inverse AES permutation over one 16-byte block, with the same trace
/// density as the forward direction. Only ECB and CBC decryption come
/// through here; the keystream modes (CFB/OFB/CTR) run the forward
/// permutation even when decrypting.
pub(crate) fn decrypt_block_traced(block: &[u8], cipher: &Cipher) -> Result<BlockTrace> {
    let mut state: [u8; 16] = block
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: block.len() })?;
    let nr = cipher.rounds();
    let mut steps = Vec::with_capacity(4 * nr);

    add_round_key(&mut state, &cipher.round_key_bytes(nr));
    record(
        &mut steps,
        nr,
        format!("Round {nr} - AddRoundKey (initial dec)"),
        &state,
        cipher,
    );

    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        record(&mut steps, round, format!("Round {round} - InvShiftRows"), &state, cipher);

        inv_sub_bytes(&mut state);
        record(&mut steps, round, format!("Round {round} - InvSubBytes"), &state, cipher);

        add_round_key(&mut state, &cipher.round_key_bytes(round));
        record(&mut steps, round, format!("Round {round} - AddRoundKey (dec)"), &state, cipher);

        inv_mix_columns(&mut state);
        record(&mut steps, round, format!("Round {round} - InvMixColumns"), &state, cipher);
    }

    inv_shift_rows(&mut state);
    record(&mut steps, 0, "Round 0 - InvShiftRows (final)".to_string(), &state, cipher);

    inv_sub_bytes(&mut state);
    record(&mut steps, 0, "Round 0 - InvSubBytes (final)".to_string(), &state, cipher);

    add_round_key(&mut state, &cipher.round_key_bytes(0));
    record(&mut steps, 0, "Round 0 - AddRoundKey (final dec)".to_string(), &state, cipher);

    Ok(BlockTrace { output: state, steps })
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows step. Row r of the state is rotated right by r
/// positions.
#[inline(always)]
pub(crate) fn inv_shift_rows(state: &mut [u8; 16]) {
    // state is stored column-major; the new value for (row, col) comes from
    // column (col + 4 - row) & 3 of the same row
    let s = *state;
    for row in 0..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// Inverse MixColumns step. Each column is multiplied by the inverse
/// constant matrix using Galois field multiplication.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = gmul(a, 0x0e) ^ gmul(b, 0x0b) ^ gmul(c, 0x0d) ^ gmul(d, 0x09);
        state[i + 1] = gmul(a, 0x09) ^ gmul(b, 0x0e) ^ gmul(c, 0x0b) ^ gmul(d, 0x0d);
        state[i + 2] = gmul(a, 0x0d) ^ gmul(b, 0x09) ^ gmul(c, 0x0e) ^ gmul(d, 0x0b);
        state[i + 3] = gmul(a, 0x0b) ^ gmul(b, 0x0d) ^ gmul(c, 0x09) ^ gmul(d, 0x0e);
    }
}
