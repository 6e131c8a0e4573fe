/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding byte.
pub const PAD: u8 = b'=';

/// Marks a byte with no 6-bit value in [`DECODE`](crate::DECODE).
pub const INVALID: u8 = 255;

pub(crate) const LO2: u8 = 0b0000_0011;
pub(crate) const LO4: u8 = 0b0000_1111;
pub(crate) const LO6: u8 = 0b0011_1111;
pub(crate) const HI2: u8 = 0b1100_0000;
pub(crate) const HI4: u8 = 0b1111_0000;
pub(crate) const HI6: u8 = 0b1111_1100;
