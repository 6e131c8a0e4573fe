//! Standard base64 encoding.

use crate::constants::{HI2, HI4, HI6, LO2, LO4, LO6, PAD};
use crate::tables::ENCODE;

/// Number of bytes [`encode`] produces for `length` input bytes.
///
/// # Example
///
/// ```
/// use strict_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes `src` to padded base64.
///
/// The output is always `encoded_len(src.len())` bytes long, contains only
/// alphabet symbols followed by zero, one or two `=` bytes, and is never
/// wrapped.
///
/// # Example
///
/// ```
/// use strict_base64::encode;
///
/// assert_eq!(encode(b"hello world"), b"aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; encoded_len(src.len())];
    encode_into(src, &mut out);
    out
}

/// Encodes `src` to padded base64 as a `String`.
///
/// ```
/// use strict_base64::encode_to_string;
///
/// assert_eq!(encode_to_string(b"foobar"), "Zm9vYmFy");
/// ```
pub fn encode_to_string(src: &[u8]) -> String {
    encode(src).into_iter().map(char::from).collect()
}

/// Encodes `src` into the front of `dest`, returning the number of bytes written.
///
/// Bytes of `dest` past the returned length are left untouched.
///
/// # Panics
///
/// Panics if `dest` is shorter than [`encoded_len`]`(src.len())`.
///
/// # Example
///
/// ```
/// use strict_base64::encode_into;
///
/// let mut dest = [0u8; 16];
/// let len = encode_into(b"hello", &mut dest);
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_into(src: &[u8], dest: &mut [u8]) -> usize {
    let length = src.len();
    let out_length = encoded_len(length);
    assert!(
        dest.len() >= out_length,
        "destination holds {} bytes, {} needed",
        dest.len(),
        out_length
    );

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    let mut j = 0;
    while i < base_length {
        let x0 = src[i];
        let x1 = src[i + 1];
        let x2 = src[i + 2];
        dest[j] = ENCODE[((x0 & HI6) >> 2) as usize];
        dest[j + 1] = ENCODE[(((x0 & LO2) << 4) | ((x1 & HI4) >> 4)) as usize];
        dest[j + 2] = ENCODE[(((x1 & LO4) << 2) | ((x2 & HI2) >> 6)) as usize];
        dest[j + 3] = ENCODE[(x2 & LO6) as usize];
        i += 3;
        j += 4;
    }

    match extra_length {
        1 => {
            let x0 = src[base_length];
            dest[j] = ENCODE[((x0 & HI6) >> 2) as usize];
            dest[j + 1] = ENCODE[((x0 & LO2) << 4) as usize];
            dest[j + 2] = PAD;
            dest[j + 3] = PAD;
        }
        2 => {
            let x0 = src[base_length];
            let x1 = src[base_length + 1];
            dest[j] = ENCODE[((x0 & HI6) >> 2) as usize];
            dest[j + 1] = ENCODE[(((x0 & LO2) << 4) | ((x1 & HI4) >> 4)) as usize];
            dest[j + 2] = ENCODE[((x1 & LO4) << 2) as usize];
            dest[j + 3] = PAD;
        }
        _ => {}
    }

    out_length
}
