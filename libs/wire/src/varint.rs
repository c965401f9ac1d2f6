//! Base-128 varint encoding.
//!
//! Integers travel as little-endian groups of seven bits, one group per byte,
//! with the high bit flagging continuation. A u64 needs at most ten bytes.
//! Overlong encodings (redundant trailing zero groups) decode to the same
//! value and are accepted; the encoder always emits the shortest form.

use crate::{WireError, WireResult};

/// Maximum encoded length of a u64.
pub const MAX_LEN: usize = 10;

/// Number of bytes `value` occupies once encoded.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    std::cmp::max(1, (bits + 6) / 7)
}

/// Append `value` to `out` in shortest-form encoding.
pub fn encode_into(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode one varint from `data` starting at `offset`.
///
/// Returns the value and the offset of the first byte after it. Errors carry
/// the offset the varint started at.
pub fn decode(data: &[u8], offset: usize) -> WireResult<(u64, usize)> {
    let mut value = 0u64;
    let mut pos = offset;
    for shift in (0..MAX_LEN).map(|i| i * 7) {
        let byte = *data.get(pos).ok_or(WireError::Truncated { offset })?;
        pos += 1;
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, pos));
        }
    }
    Err(WireError::VarintOverflow { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7f]),
            (128, &[0x80, 0x01]),
            (300, &[0xac, 0x02]),
            (
                u64::MAX,
                &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01],
            ),
        ];
        for (value, bytes) in cases {
            let mut out = Vec::new();
            encode_into(&mut out, *value);
            assert_eq!(&out, bytes, "encoding of {}", value);
            assert_eq!(encoded_len(*value), bytes.len());

            let (decoded, next) = decode(bytes, 0).unwrap();
            assert_eq!(decoded, *value);
            assert_eq!(next, bytes.len());
        }
    }

    #[test]
    fn test_overlong_encoding_accepted() {
        // zero padded with a redundant continuation byte
        let (value, next) = decode(&[0x80, 0x00], 0).unwrap();
        assert_eq!(value, 0);
        assert_eq!(next, 2);
    }

    #[test]
    fn test_truncated_varint() {
        assert_eq!(decode(&[0x80], 0), Err(WireError::Truncated { offset: 0 }));
        assert_eq!(decode(&[], 0), Err(WireError::Truncated { offset: 0 }));
    }

    #[test]
    fn test_eleven_byte_varint_rejected() {
        let bytes = [0x80u8; 11];
        assert_eq!(
            decode(&bytes, 0),
            Err(WireError::VarintOverflow { offset: 0 })
        );
    }

    #[test]
    fn test_decode_from_offset() {
        let bytes = [0xff, 0xac, 0x02];
        let (value, next) = decode(&bytes, 1).unwrap();
        assert_eq!(value, 300);
        assert_eq!(next, 3);
    }

    #[test]
    fn test_error_reports_start_offset() {
        let bytes = [0x00, 0x00, 0x80];
        assert_eq!(decode(&bytes, 2), Err(WireError::Truncated { offset: 2 }));
    }
}
