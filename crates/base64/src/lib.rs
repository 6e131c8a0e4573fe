//! Standard base64 encoding and strictly validated decoding.
//!
//! This crate implements the classic RFC 4648 alphabet (`A-Z a-z 0-9 + /`)
//! with `=` padding:
//! - Encoding never fails and never wraps lines
//! - Decoding accepts only canonical, padded input
//!
//! # Example
//!
//! ```
//! use strict_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod tables;
mod to_base64;

use thiserror::Error;

pub use constants::{ALPHABET, ALPHABET_BYTES, INVALID, PAD};
pub use from_base64::{decode, decode_str, decoded_len};
pub use tables::{DECODE, ENCODE};
pub use to_base64::{encode, encode_into, encode_to_string, encoded_len};

/// Error type for base64 decoding.
///
/// Exactly one variant is reported per rejected input, chosen by the first
/// failing check in the order the variants are listed here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The input length is not a multiple of 4.
    #[error("Invalid length")]
    InvalidLength,
    /// The input ends with three or more `=` bytes.
    #[error("Invalid padding length")]
    InvalidPaddingLength,
    /// A byte before the padding is not an alphabet symbol.
    #[error("Invalid data")]
    InvalidData,
    /// The bits a short final chunk leaves unused are not zero.
    #[error("Invalid padding data")]
    InvalidPaddingData,
}
