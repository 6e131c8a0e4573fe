//! Strict standard base64 decoding.

use tracing::trace;

use crate::constants::{HI4, HI6, INVALID, LO2, LO4, PAD};
use crate::tables::DECODE;
use crate::Base64Error;

/// Validates length and padding, returning the number of trailing `=` bytes.
fn padding_length(encoded: &[u8]) -> Result<usize, Base64Error> {
    let len = encoded.len();
    if !len.is_multiple_of(4) {
        trace!(len, "rejecting base64 input: length not a multiple of 4");
        return Err(Base64Error::InvalidLength);
    }

    let padding = encoded.iter().rev().take_while(|&&b| b == PAD).count();
    if padding >= 3 {
        trace!(len, padding, "rejecting base64 input: too much padding");
        return Err(Base64Error::InvalidPaddingLength);
    }
    Ok(padding)
}

/// Number of bytes `encoded` decodes to.
///
/// Only the length and padding checks run here; symbols are not inspected, so
/// [`decode`] may still reject the input.
///
/// # Example
///
/// ```
/// use strict_base64::{decoded_len, Base64Error};
///
/// assert_eq!(decoded_len(b"aGVsbG8="), Ok(5));
/// assert_eq!(decoded_len(b"aGVsbG8"), Err(Base64Error::InvalidLength));
/// ```
pub fn decoded_len(encoded: &[u8]) -> Result<usize, Base64Error> {
    let padding = padding_length(encoded)?;
    Ok(encoded.len() / 4 * 3 - padding)
}

/// Decodes padded standard base64.
///
/// Checks run in a fixed order and the first failure is returned:
/// length ([`Base64Error::InvalidLength`]), padding run
/// ([`Base64Error::InvalidPaddingLength`]), symbols
/// ([`Base64Error::InvalidData`]), then the unused bits before the padding
/// ([`Base64Error::InvalidPaddingData`]). Nothing is allocated for rejected
/// input.
///
/// # Example
///
/// ```
/// use strict_base64::{decode, Base64Error};
///
/// assert_eq!(decode(b"aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// assert_eq!(decode(b"QUJ="), Err(Base64Error::InvalidPaddingData));
/// ```
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let padding = padding_length(encoded)?;
    let data = &encoded[..encoded.len() - padding];

    if let Some(index) = data.iter().position(|&b| DECODE[b as usize] == INVALID) {
        trace!(index, byte = data[index], "rejecting base64 input: invalid symbol");
        return Err(Base64Error::InvalidData);
    }

    let chunk_count = encoded.len() / 4 - usize::from(padding > 0);
    let (body, tail) = data.split_at(chunk_count * 4);

    // The unused low bits of the last symbol before the padding are always
    // zero in a canonical encoding.
    let forced_zero = match padding {
        1 => DECODE[tail[2] as usize] & LO2,
        2 => DECODE[tail[1] as usize] & LO4,
        _ => 0,
    };
    if forced_zero != 0 {
        trace!(padding, "rejecting base64 input: non-zero bits before padding");
        return Err(Base64Error::InvalidPaddingData);
    }

    let mut out = vec![0u8; encoded.len() / 4 * 3 - padding];

    for (chunk, dest) in body.chunks_exact(4).zip(out.chunks_exact_mut(3)) {
        let y0 = DECODE[chunk[0] as usize];
        let y1 = DECODE[chunk[1] as usize];
        let y2 = DECODE[chunk[2] as usize];
        let y3 = DECODE[chunk[3] as usize];
        dest[0] = (y0 << 2) | ((y1 & HI4) >> 4);
        dest[1] = ((y1 & LO4) << 4) | ((y2 & HI6) >> 2);
        dest[2] = ((y2 & LO2) << 6) | y3;
    }

    let j = chunk_count * 3;
    if padding > 0 {
        let y0 = DECODE[tail[0] as usize];
        let y1 = DECODE[tail[1] as usize];
        out[j] = (y0 << 2) | ((y1 & HI4) >> 4);
        if padding == 1 {
            let y2 = DECODE[tail[2] as usize];
            out[j + 1] = ((y1 & LO4) << 4) | ((y2 & HI6) >> 2);
        }
    }

    Ok(out)
}

/// Decodes a padded standard base64 string.
///
/// ```
/// use strict_base64::decode_str;
///
/// assert_eq!(decode_str("Zm9v").unwrap(), b"foo");
/// ```
pub fn decode_str(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(encoded.as_bytes())
}
