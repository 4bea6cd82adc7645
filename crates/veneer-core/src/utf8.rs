//! UTF-8 codec.
//!
//! Malformed input never aborts a scan: structurally broken sequences decode
//! to [`INVALID`] with a best-effort consumed length so the caller's position
//! still advances. Only a buffer that ends mid-sequence reports zero consumed
//! bytes, letting the caller wait for more input.

/// The replacement character, U+FFFD.
pub const INVALID: u32 = 0xFFFD;
/// Longest encoded sequence in bytes.
pub const MAX_BYTES: usize = 4;

// Index 0 is the continuation-byte pattern, 1..=4 are lead bytes by length.
const BYTE: [u8; 5] = [0x80, 0x00, 0xC0, 0xE0, 0xF0];
const MASK: [u8; 5] = [0xC0, 0x80, 0xE0, 0xF0, 0xF8];
const MIN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];
const MAX: [u32; 5] = [0x0010_FFFF, 0x7F, 0x7FF, 0xFFFF, 0x0010_FFFF];

/// Map overlong, surrogate, and out-of-range values to [`INVALID`], then
/// return the minimal encoded length of the (possibly replaced) value.
fn validate(u: &mut u32, len: usize) -> usize {
    if !(MIN[len]..=MAX[len]).contains(u) || (0xD800..=0xDFFF).contains(u) {
        *u = INVALID;
    }
    let mut i = 1;
    while *u > MAX[i] {
        i += 1;
    }
    i
}

/// Classify one byte: its payload bits and its pattern index (0 means
/// continuation, 1..=4 a lead byte of that length, 5 no match).
fn decode_byte(c: u8) -> (u32, usize) {
    for i in 0..MASK.len() {
        if c & MASK[i] == BYTE[i] {
            return (u32::from(c & !MASK[i]), i);
        }
    }
    (0, MASK.len())
}

/// Decode the first code point of `buf`, returning `(code_point, consumed)`.
///
/// - `(INVALID, 1)` when the lead byte is not a valid sequence start.
/// - `(INVALID, j)` when continuation byte `j` is missing from a structurally
///   started sequence.
/// - `(INVALID, 0)` when `buf` ends before the declared sequence length.
pub fn decode(buf: &[u8]) -> (u32, usize) {
    if buf.is_empty() {
        return (INVALID, 0);
    }
    let (mut u, len) = decode_byte(buf[0]);
    if !(1..=MAX_BYTES).contains(&len) {
        return (INVALID, 1);
    }
    let mut j = 1;
    while j < len {
        if j >= buf.len() {
            return (INVALID, 0);
        }
        let (bits, kind) = decode_byte(buf[j]);
        if kind != 0 {
            return (INVALID, j);
        }
        u = (u << 6) | bits;
        j += 1;
    }
    let mut cp = u;
    validate(&mut cp, len);
    (cp, len)
}

fn encode_byte(u: u32, i: usize) -> u8 {
    BYTE[i] | ((u as u8) & !MASK[i])
}

/// Encode `u` into `out`, returning the bytes written, or 0 when `out` is
/// too small. Invalid scalar values are encoded as [`INVALID`].
pub fn encode(u: u32, out: &mut [u8]) -> usize {
    let mut u = u;
    let len = validate(&mut u, 0);
    if out.len() < len {
        return 0;
    }
    for i in (1..len).rev() {
        out[i] = encode_byte(u, 0);
        u >>= 6;
    }
    out[0] = encode_byte(u, len);
    len
}

/// Minimal encoded length of a valid scalar value.
pub fn len_for(u: u32) -> usize {
    let mut u = u;
    validate(&mut u, 0)
}
