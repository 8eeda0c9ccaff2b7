/// Bytes emitted for one hidden input byte: `\x` plus four hex digits.
pub const ESCAPE_WIDTH: usize = 6;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Whether `byte` is printed as-is: C-locale `isprint` or `isspace`.
///
/// `u8::is_ascii_whitespace` is not used because it excludes vertical tab.
pub fn is_visible(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Append the escaped form of `input` to `out` and return the bytes appended.
///
/// Hidden bytes become `\x00NN`: the value zero-padded to four lowercase hex
/// digits. `out` never reallocates if it has `ESCAPE_WIDTH * input.len()`
/// spare capacity.
pub fn escape_into(input: &[u8], out: &mut Vec<u8>) -> usize {
    let start = out.len();
    for &byte in input {
        if is_visible(byte) {
            out.push(byte);
        } else {
            out.extend_from_slice(&[
                b'\\',
                b'x',
                b'0',
                b'0',
                HEX_DIGITS[usize::from(byte >> 4)],
                HEX_DIGITS[usize::from(byte & 0x0f)],
            ]);
        }
    }
    out.len() - start
}

/// Escape `input` into a fresh buffer.
pub fn escape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    escape_into(input, &mut out);
    out
}
