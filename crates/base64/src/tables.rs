//! Forward and reverse alphabet lookup tables.

use crate::constants::{ALPHABET_BYTES, INVALID};

/// 6-bit value to alphabet symbol.
pub static ENCODE: [u8; 64] = *ALPHABET_BYTES;

/// Byte to 6-bit value, or [`INVALID`] for bytes outside the alphabet.
///
/// Covers every `u8`, so any input byte can index it directly.
pub static DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};
