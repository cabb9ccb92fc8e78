// Framing encode/decode suite.
//
// * `framed_bytes_from_slice` / `_from_bigint` / `_from_str`
// * `decode_framed_bytes` / `_bigint` / `_string`, `read_length_prefix`
// * `FrameWriter` / `FrameReader` over concatenated frames

#[cfg(test)]
mod tests {
    use framekit::framing::{
        decode_framed_bigint, decode_framed_bytes, decode_framed_string, framed_bytes_from_bigint,
        framed_bytes_from_slice, framed_bytes_from_str, read_length_prefix, FrameReader,
        FrameWriter,
    };
    use framekit::types::CodecError;
    use num_bigint::BigInt;

// # ✅ 1. Canonical vectors

    #[test]
    fn frame_raw_bytes() {
        let fr = framed_bytes_from_slice(&[0xAA, 0xBB], 2).unwrap();
        assert_eq!(hex::encode(fr), "0002aabb");
    }

    #[test]
    fn frame_empty_bytes() {
        assert_eq!(framed_bytes_from_slice(&[], 1).unwrap(), vec![0x00]);
        assert_eq!(framed_bytes_from_slice(&[], 4).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn frame_positive_bigint() {
        let fr = framed_bytes_from_bigint(&BigInt::from(0x0102), 1).unwrap();
        // length=2, sign=0, magnitude=0102
        assert_eq!(hex::encode(fr), "02000102");
    }

    #[test]
    fn frame_negative_bigint() {
        let fr = framed_bytes_from_bigint(&BigInt::from(-258), 1).unwrap();
        assert_eq!(hex::encode(fr), "02010102");
    }

    #[test]
    fn frame_zero_bigint_has_one_magnitude_byte() {
        let fr = framed_bytes_from_bigint(&BigInt::from(0), 2).unwrap();
        assert_eq!(hex::encode(fr), "00010000");
    }

    #[test]
    fn frame_string_is_utf8() {
        assert_eq!(hex::encode(framed_bytes_from_str("A", 1).unwrap()), "0141");
        // "é" is two bytes in UTF-8
        assert_eq!(hex::encode(framed_bytes_from_str("é", 1).unwrap()), "02c3a9");
    }

// # ❌ 2. Length overflow

    #[test]
    fn frame_bytes_overflowing_prefix_is_rejected() {
        let data = vec![0u8; 65536];
        assert!(matches!(
            framed_bytes_from_slice(&data, 2),
            Err(CodecError::Overflow(_))
        ));
        // one below the limit still fits
        assert!(framed_bytes_from_slice(&data[..65535], 2).is_ok());
    }

    #[test]
    fn frame_string_overflowing_prefix_is_rejected() {
        let s = "x".repeat(256);
        assert!(matches!(framed_bytes_from_str(&s, 1), Err(CodecError::Overflow(_))));
    }

    #[test]
    fn frame_bigint_overflowing_prefix_is_rejected() {
        // 2^(8*256) needs 257 magnitude bytes
        let v = BigInt::from(1) << (8 * 256);
        assert!(matches!(framed_bytes_from_bigint(&v, 1), Err(CodecError::Overflow(_))));
        assert!(framed_bytes_from_bigint(&v, 2).is_ok());
    }

    #[test]
    fn frame_zero_width_is_invalid() {
        assert!(matches!(
            framed_bytes_from_slice(&[1], 0),
            Err(CodecError::InvalidArgument(_))
        ));
    }

// # ✅ 3. Length prefix excludes the sign byte

    #[test]
    fn bigint_prefix_counts_magnitude_only() {
        for v in [-70000i64, -1, 0, 1, 255, 256, 70000] {
            let fr = framed_bytes_from_bigint(&BigInt::from(v), 2).unwrap();
            let announced = read_length_prefix(&fr, 2).unwrap();
            assert_eq!(announced, fr.len() - 2 - 1, "v={}", v);
        }
    }

// # ✅ 4. Decode is the inverse of encode

    #[test]
    fn decode_bytes_returns_payload_and_rest() {
        let mut wire = framed_bytes_from_slice(b"abc", 2).unwrap();
        wire.extend_from_slice(b"tail");

        let view = decode_framed_bytes(&wire, 2).unwrap();
        assert_eq!(view.payload, b"abc");
        assert_eq!(view.rest, b"tail");
    }

    #[test]
    fn decode_bigint_round_trips() {
        for v in ["0", "1", "-1", "-258", "18446744073709551616", "-340282366920938463463374607431768211456"] {
            let value: BigInt = v.parse().unwrap();
            let wire = framed_bytes_from_bigint(&value, 4).unwrap();
            let (back, rest) = decode_framed_bigint(&wire, 4).unwrap();
            assert_eq!(back, value);
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn decode_string_round_trips() {
        let wire = framed_bytes_from_str("日本", 2).unwrap();
        let (s, rest) = decode_framed_string(&wire, 2).unwrap();
        assert_eq!(s, "日本");
        assert!(rest.is_empty());
    }

// # ❌ 5. Strict decode rejects non-canonical input

    #[test]
    fn decode_truncated_prefix() {
        assert!(matches!(
            read_length_prefix(&[0x00], 2),
            Err(CodecError::Truncated { needed: 2, available: 1 })
        ));
    }

    #[test]
    fn decode_truncated_payload() {
        let wire = [0x00, 0x03, 0xAA, 0xBB];
        assert!(matches!(
            decode_framed_bytes(&wire, 2),
            Err(CodecError::Truncated { needed: 5, available: 4 })
        ));
    }

    #[test]
    fn decode_bigint_missing_sign_byte() {
        assert!(matches!(
            decode_framed_bigint(&[0x01], 1),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn decode_bigint_bad_sign_byte() {
        assert!(matches!(
            decode_framed_bigint(&[0x01, 0x02, 0x05], 1),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_bigint_empty_magnitude() {
        assert!(matches!(
            decode_framed_bigint(&[0x00, 0x00], 1),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_bigint_leading_zero() {
        assert!(matches!(
            decode_framed_bigint(&[0x02, 0x00, 0x00, 0x01], 1),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_bigint_negative_zero() {
        assert!(matches!(
            decode_framed_bigint(&[0x01, 0x01, 0x00], 1),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_string_invalid_utf8() {
        assert!(matches!(
            decode_framed_string(&[0x01, 0xFF], 1),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_prefix_wider_than_usize_must_fit() {
        let mut wire = vec![0u8; 16];
        wire[15] = 0x03;
        assert_eq!(read_length_prefix(&wire, 16).unwrap(), 3);

        wire[0] = 0x01;
        assert!(matches!(read_length_prefix(&wire, 16), Err(CodecError::Overflow(_))));
    }

// # ✅ 6. Writer / reader over a frame sequence

    #[test]
    fn writer_matches_concatenated_frames() {
        let value = BigInt::from(-258);

        let mut w = FrameWriter::new(2).unwrap();
        w.push_bytes(&[0xAA, 0xBB])
            .unwrap()
            .push_bigint(&value)
            .unwrap()
            .push_str("hi")
            .unwrap();
        let wire = w.finish();

        let mut expected = framed_bytes_from_slice(&[0xAA, 0xBB], 2).unwrap();
        expected.extend(framed_bytes_from_bigint(&value, 2).unwrap());
        expected.extend(framed_bytes_from_str("hi", 2).unwrap());
        assert_eq!(wire, expected);
    }

    #[test]
    fn reader_walks_frame_sequence() {
        let mut w = FrameWriter::new(1).unwrap();
        w.push_str("key").unwrap();
        w.push_bigint(&BigInt::from(42)).unwrap();
        w.push_bytes(&[]).unwrap();
        let wire = w.finish();

        let mut r = FrameReader::new(&wire, 1).unwrap();
        assert_eq!(r.next_str().unwrap(), "key");
        assert_eq!(r.next_bigint().unwrap(), BigInt::from(42));
        assert_eq!(r.next_bytes().unwrap(), b"");
        assert!(r.is_empty());
        r.finish().unwrap();
    }

    #[test]
    fn reader_finish_rejects_trailing_bytes() {
        let mut wire = framed_bytes_from_str("a", 1).unwrap();
        wire.push(0x99);

        let mut r = FrameReader::new(&wire, 1).unwrap();
        assert_eq!(r.next_string().unwrap(), "a");
        assert_eq!(r.remaining(), &[0x99]);
        assert!(matches!(r.finish(), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn writer_and_reader_reject_zero_width() {
        assert!(matches!(FrameWriter::new(0), Err(CodecError::InvalidArgument(_))));
        assert!(matches!(FrameReader::new(&[], 0), Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn writer_overflow_leaves_buffer_untouched() {
        let mut w = FrameWriter::new(1).unwrap();
        w.push_bytes(&[1, 2, 3]).unwrap();
        let before = w.len();
        assert!(w.push_bytes(&[0u8; 256]).is_err());
        assert_eq!(w.len(), before);
    }
}
