use super::constants::SBOX;
use super::util::{add_round_key, dbl, record};
use crate::aesviz::cipher::Cipher;
use crate::aesviz::error::{Error, Result};
use crate::aesviz::trace::BlockTrace;

/// Forward AES permutation over one 16-byte block, recording the state after
/// every sub-transformation: 1 initial AddRoundKey, 4 steps per full round,
/// 3 for the final round (no MixColumns).
pub(crate) fn encrypt_block_traced(block: &[u8], cipher: &Cipher) -> Result<BlockTrace> {
    let mut state: [u8; 16] = block
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: block.len() })?;
    let nr = cipher.rounds();
    let mut steps = Vec::with_capacity(4 * nr);

    add_round_key(&mut state, &cipher.round_key_bytes(0));
    record(
        &mut steps,
        0,
        "Round 0 - AddRoundKey (initial)".to_string(),
        &state,
        cipher,
    );

    for round in 1..nr {
        sub_bytes(&mut state);
        record(&mut steps, round, format!("Round {round} - SubBytes"), &state, cipher);

        shift_rows(&mut state);
        record(&mut steps, round, format!("Round {round} - ShiftRows"), &state, cipher);

        mix_columns(&mut state);
        record(&mut steps, round, format!("Round {round} - MixColumns"), &state, cipher);

        add_round_key(&mut state, &cipher.round_key_bytes(round));
        record(&mut steps, round, format!("Round {round} - AddRoundKey"), &state, cipher);
    }

    // last round skips the MixColumns step
    sub_bytes(&mut state);
    record(&mut steps, nr, format!("Round {nr} - SubBytes (final)"), &state, cipher);

    shift_rows(&mut state);
    record(&mut steps, nr, format!("Round {nr} - ShiftRows (final)"), &state, cipher);

    add_round_key(&mut state, &cipher.round_key_bytes(nr));
    record(&mut steps, nr, format!("Round {nr} - AddRoundKey (final)"), &state, cipher);

    Ok(BlockTrace { output: state, steps })
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step. Row r of the state is rotated left by r positions; the
/// state is stored column-major, so row r lives at indices r, r+4, r+8, r+12.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;

    // row 0 (indices 0,4,8,12): unchanged
    state[0] = s[0];
    state[4] = s[4];
    state[8] = s[8];
    state[12] = s[12];

    // row 1 (1,5,9,13): left rotate by 1
    state[1] = s[5];
    state[5] = s[9];
    state[9] = s[13];
    state[13] = s[1];

    // row 2 (2,6,10,14): left rotate by 2
    state[2] = s[10];
    state[6] = s[14];
    state[10] = s[2];
    state[14] = s[6];

    // row 3 (3,7,11,15): left rotate by 3
    state[3] = s[15];
    state[7] = s[3];
    state[11] = s[7];
    state[15] = s[11];
}

/// MixColumns step. Each column is multiplied by a constant matrix using
/// Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = dbl(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + 1c + 1d */
        state[i + 1] = dbl(b ^ c) ^ c ^ d ^ a; /* 1a + 2b + 3c + 1d */
        state[i + 2] = dbl(c ^ d) ^ d ^ a ^ b; /* 1a + 1b + 2c + 3d */
        state[i + 3] = dbl(d ^ a) ^ a ^ b ^ c; /* 3a + 1b + 1c + 2d */
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aesviz::cipher::Cipher;
    use crate::aesviz::error::Result;
    use crate::aesviz::key::{Key, KeySize};
    use crate::aesviz::trace::to_matrix;

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        // expressed as 4 columns of 4 bytes, stored column-major in [u8; 16]

        let mut test1: [u8; 16] = [
            // col 0
            0x63, 0x47, 0xa2, 0xf0, // col 1
            0xf2, 0x0a, 0x22, 0x5c, // col 2
            0x01, 0x01, 0x01, 0x01, // col 3
            0xc6, 0xc6, 0xc6, 0xc6,
        ];

        mix_columns(&mut test1);

        assert_eq!(
            test1,
            [
                // col 0
                0x5d, 0xe0, 0x70, 0xbb, // col 1
                0x9f, 0xdc, 0x58, 0x9d, // col 2
                0x01, 0x01, 0x01, 0x01, // col 3
                0xc6, 0xc6, 0xc6, 0xc6,
            ],
            "mix columns test case does not match"
        );
    }

    #[test]
    fn fips_197_appendix_c_vectors() -> Result<()> {
        // plaintext 00112233445566778899aabbccddeeff under the sequential
        // byte keys of appendix C
        let plaintext: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
            0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
        ];

        let key_256: Vec<u8> = (0u8..32).collect();

        let cases: [(KeySize, [u8; 16]); 3] = [
            (
                KeySize::Bits128,
                [
                    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, //
                    0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
                ],
            ),
            (
                KeySize::Bits192,
                [
                    0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, //
                    0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71, 0x91,
                ],
            ),
            (
                KeySize::Bits256,
                [
                    0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, //
                    0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89,
                ],
            ),
        ];

        for (size, expected) in cases {
            let key = Key::new(&key_256[..size.byte_len()], size)?;
            let cipher = Cipher::new(&key)?;
            let trace = cipher.encrypt_block(&plaintext)?;
            assert_eq!(trace.output, expected, "AES-{} block mismatch", size.bits());
        }

        Ok(())
    }

    #[test]
    fn trace_has_expected_shape() -> Result<()> {
        let key_bytes: Vec<u8> = (0u8..16).collect();
        let key = Key::new(&key_bytes, KeySize::Bits128)?;
        let cipher = Cipher::new(&key)?;

        let block = [0u8; 16];
        let trace = cipher.encrypt_block(&block)?;

        // 1 initial AddRoundKey + 9 rounds x 4 + final round x 3 = 40
        assert_eq!(trace.steps.len(), 40);
        assert_eq!(trace.steps[0].step, "Round 0 - AddRoundKey (initial)");
        assert_eq!(trace.steps[1].step, "Round 1 - SubBytes");
        assert_eq!(
            trace.steps.last().unwrap().step,
            "Round 10 - AddRoundKey (final)"
        );

        // round 0 key is the key itself, column-major
        let key_16: [u8; 16] = key_bytes.as_slice().try_into().unwrap();
        assert_eq!(trace.steps[0].round_key, Some(to_matrix(&key_16)));

        // the last recorded state is the block output
        assert_eq!(trace.steps.last().unwrap().state, to_matrix(&trace.output));

        Ok(())
    }

    #[test]
    fn trace_length_scales_with_rounds() -> Result<()> {
        for (size, expected_steps) in [
            (KeySize::Bits128, 40),
            (KeySize::Bits192, 48),
            (KeySize::Bits256, 56),
        ] {
            let key = Key::new(&vec![0u8; size.byte_len()], size)?;
            let cipher = Cipher::new(&key)?;
            let trace = cipher.encrypt_block(&[0u8; 16])?;
            assert_eq!(trace.steps.len(), expected_steps);
        }
        Ok(())
    }

    #[test]
    fn rejects_short_and_long_blocks() -> Result<()> {
        let key = Key::new(&[0u8; 16], KeySize::Bits128)?;
        let cipher = Cipher::new(&key)?;
        assert!(cipher.encrypt_block(&[0u8; 15]).is_err());
        assert!(cipher.encrypt_block(&[0u8; 17]).is_err());
        Ok(())
    }
}
