use crate::aesviz::error::{Error, Result};

/// Decode a hex string into bytes. ASCII whitespace is stripped, odd-length
/// input gains a leading zero nibble, and both cases are accepted.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let mut hex: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if hex.is_empty() {
        return Ok(Vec::new());
    }
    if hex.len() % 2 == 1 {
        hex.insert(0, '0');
    }

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

fn nibble(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(Error::InvalidHex(b as char)),
    }
}

/// Encode bytes as lowercase two-digit hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// PKCS#7 padding for 16-byte blocks. Always pads: a block-aligned input
/// gains a full block of 0x10.
pub(crate) fn pkcs7_pad(plaintext: &[u8]) -> Vec<u8> {
    let rem = plaintext.len() % 16;
    let pad_len = if rem == 0 { 16 } else { 16 - rem };

    let mut out = vec![0u8; plaintext.len() + pad_len];
    out[..plaintext.len()].copy_from_slice(plaintext);
    out[plaintext.len()..].fill(pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding in place. Every failure maps to the
/// same `InvalidPadding` so callers cannot tell which check rejected the
/// input.
pub(crate) fn pkcs7_unpad(input: &mut Vec<u8>) -> Result<()> {
    if input.is_empty() || input.len() % 16 != 0 {
        return Err(Error::InvalidPadding);
    }

    let pad = *input.last().unwrap() as usize; // non-empty checked above
    if pad == 0 || pad > 16 {
        return Err(Error::InvalidPadding);
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidPadding);
    }

    input.truncate(start);
    Ok(())
}

/// Normalize an optional hex IV/counter to exactly 16 bytes: absent or blank
/// input is all-zero; longer input keeps its last 16 bytes; shorter input is
/// right-aligned into a zeroed buffer.
pub(crate) fn derive_iv_or_counter(hex: Option<&str>) -> Result<[u8; 16]> {
    let mut out = [0u8; 16];
    let Some(hex) = hex else { return Ok(out) };

    let raw = decode_hex(hex)?;
    if raw.is_empty() {
        return Ok(out);
    }

    if raw.len() >= 16 {
        out.copy_from_slice(&raw[raw.len() - 16..]);
    } else {
        out[16 - raw.len()..].copy_from_slice(&raw);
    }
    Ok(out)
}
