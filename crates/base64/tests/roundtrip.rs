//! Property tests for the encode/decode laws.

use proptest::prelude::*;
use rand::Rng;
use strict_base64::{decode, decoded_len, encode, encoded_len, ALPHABET_BYTES, PAD};

proptest! {
    #[test]
    fn decode_inverts_encode(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = encode(&data);
        prop_assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn encoded_length_is_closed_form(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(decoded_len(&encoded), Ok(data.len()));
    }

    #[test]
    fn output_stays_in_alphabet(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        let padding = encoded.iter().rev().take_while(|&&b| b == PAD).count();
        prop_assert!(padding <= 2);
        for b in &encoded[..encoded.len() - padding] {
            prop_assert!(ALPHABET_BYTES.contains(b));
        }
    }
}

#[test]
fn large_random_roundtrip() {
    const NUM_TRIALS: usize = 1 << 6;
    const MAX_LENGTH: usize = 1 << 17;

    let mut rng = rand::thread_rng();
    for _ in 0..NUM_TRIALS {
        let length = rng.gen_range(0..MAX_LENGTH);
        let data: Vec<u8> = (0..length).map(|_| rng.gen::<u8>()).collect();
        let decoded = decode(&encode(&data)).unwrap();
        assert_eq!(decoded, data, "Failed for blob of length {length}");
    }
}
