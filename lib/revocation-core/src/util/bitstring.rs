use bit_vec::BitVec;
use ct_codecs::{Base64NoPadding, Decoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitstringError {
    #[error("Base64 error: `{0}`")]
    Base64Error(ct_codecs::Error),
    #[error("Bit index `{0}` out of bounds for decoded bitstring")]
    IndexOutOfBounds(usize),
}

/// Decodes a base64 or base64url encoded status bitstring.
///
/// Bits are addressed MSB first within each byte, so bit index `i` lives in
/// byte `i / 8` at position `7 - (i % 8)`.
pub fn decode_bitstring(encoded: &str) -> Result<BitVec, BitstringError> {
    let normalized: String = encoded
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes =
        Base64NoPadding::decode_to_vec(normalized, None).map_err(BitstringError::Base64Error)?;
    Ok(BitVec::from_bytes(&bytes))
}

/// A set bit means revoked, a cleared bit means active.
pub fn extract_bitstring_index(encoded: &str, index: usize) -> Result<bool, BitstringError> {
    let bits = decode_bitstring(encoded)?;
    bits.get(index).ok_or(BitstringError::IndexOutOfBounds(index))
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    // single byte 0b0001_0000, revoked bit at index 3
    const SINGLE_REVOCATION: &str = "EA==";

    #[rstest]
    #[case(0, false)]
    #[case(2, false)]
    #[case(3, true)]
    #[case(4, false)]
    #[case(7, false)]
    fn test_extract_bitstring_index(#[case] index: usize, #[case] expected: bool) {
        assert_eq!(
            extract_bitstring_index(SINGLE_REVOCATION, index).unwrap(),
            expected
        );
    }

    #[test]
    fn test_decode_bitstring_accepts_unpadded_input() {
        assert!(extract_bitstring_index("EA", 3).unwrap());
    }

    #[test]
    fn test_decode_bitstring_accepts_base64url_alphabet() {
        // 0xFF 0xEF encodes to "/+8" in standard base64
        let standard = decode_bitstring("/+8").unwrap();
        let url_safe = decode_bitstring("_-8").unwrap();
        assert_eq!(standard, url_safe);
        assert!(url_safe.get(0).unwrap());
    }

    #[test]
    fn test_decode_bitstring_invalid_base64() {
        let result = decode_bitstring("not base64!");
        assert!(matches!(result, Err(BitstringError::Base64Error(_))));
    }

    #[test]
    fn test_extract_bitstring_index_out_of_bounds() {
        let result = extract_bitstring_index(SINGLE_REVOCATION, 8);
        assert!(matches!(result, Err(BitstringError::IndexOutOfBounds(8))));
    }
}
