// shared helpers for the modes of operation

/// Transform ECB/CTR blocks in parallel once the message is at least this
/// large; chained modes always stay serial.
pub(crate) const PARALLEL_THRESHOLD: usize = 4 * 1024;

#[inline(always)]
pub(crate) fn xor_blocks(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// Big-endian increment with carry from the least-significant byte; wraps
/// silently once all 16 bytes overflow.
pub(crate) fn increment(counter: &mut [u8; 16]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// Counter `offset` blocks past `base`; same arithmetic as calling
/// [`increment`] `offset` times.
pub(crate) fn counter_for_block(base: &[u8; 16], offset: u128) -> [u8; 16] {
    u128::from_be_bytes(*base).wrapping_add(offset).to_be_bytes()
}
