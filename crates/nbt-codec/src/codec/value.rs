//! Scalar, String and ByteArray payload encoding/decoding.
//!
//! Each `read_*` function decodes one payload and is registered in the
//! type table; none of them read a type id or a name.

use crate::codec::tag::{Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_ARRAY_LEN, MAX_STRING_LEN};
use crate::model::Tag;

// =============================================================================
// DECODING
// =============================================================================

/// Fills the End row of the type table. Every caller handles the End id
/// before dispatching, so this only reports a misuse of the table.
pub(crate) fn read_end(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Err(DecodeError::UnexpectedEnd {
        offset: dec.reader.position(),
    })
}

pub(crate) fn read_byte(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Byte(dec.reader.read_i8("byte")?))
}

pub(crate) fn read_short(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Short(dec.reader.read_i16("short")?))
}

pub(crate) fn read_int(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Int(dec.reader.read_i32("int")?))
}

pub(crate) fn read_long(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Long(dec.reader.read_i64("long")?))
}

pub(crate) fn read_float(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Float(dec.reader.read_f32("float")?))
}

pub(crate) fn read_double(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::Double(dec.reader.read_f64("double")?))
}

/// Reads a u16 length followed by that many opaque bytes (zero-copy).
pub(crate) fn read_string_bytes<'a>(
    dec: &mut Decoder<'a>,
    context: &'static str,
) -> Result<&'a [u8], DecodeError> {
    let len = dec.reader.read_u16(context)? as usize;
    dec.reader.read_bytes(len, context)
}

pub(crate) fn read_string(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    Ok(Tag::String(read_string_bytes(dec, "string")?.to_vec()))
}

pub(crate) fn read_byte_array(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    let offset = dec.reader.position();
    let count = dec.reader.read_i32("byte array length")?;
    if count < 0 {
        return Err(DecodeError::InvalidLength {
            context: "byte array",
            len: count as i64,
            offset,
        });
    }
    let bytes = dec.reader.read_bytes(count as usize, "byte array")?;
    Ok(Tag::ByteArray(bytes.to_vec()))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writes a u16 length followed by the raw bytes.
pub(crate) fn encode_string(enc: &mut Encoder, bytes: &[u8], field: &'static str) -> Result<(), EncodeError> {
    if bytes.len() > MAX_STRING_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field,
            len: bytes.len(),
            max: MAX_STRING_LEN,
        });
    }
    enc.writer.write_u16(bytes.len() as u16);
    enc.writer.write_bytes(bytes);
    Ok(())
}

/// Writes an i32 count followed by the raw bytes.
pub(crate) fn encode_byte_array(enc: &mut Encoder, bytes: &[u8]) -> Result<(), EncodeError> {
    if bytes.len() > MAX_ARRAY_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field: "byte array",
            len: bytes.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    enc.writer.write_i32(bytes.len() as i32);
    enc.writer.write_bytes(bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tag::{encode_payload, DecodeOptions, EncodeOptions};

    fn decoder(data: &[u8]) -> Decoder<'_> {
        Decoder::new(data, DecodeOptions::default())
    }

    fn encode(tag: &Tag) -> Result<Vec<u8>, EncodeError> {
        let mut enc = Encoder::new(EncodeOptions::default(), 16);
        encode_payload(&mut enc, tag)?;
        Ok(enc.into_bytes())
    }

    #[test]
    fn test_scalar_wire_bytes() {
        assert_eq!(encode(&Tag::Byte(-1)).unwrap(), vec![0xFF]);
        assert_eq!(encode(&Tag::Short(0x1234)).unwrap(), vec![0x12, 0x34]);
        assert_eq!(encode(&Tag::Int(0xDEAD)).unwrap(), vec![0x00, 0x00, 0xDE, 0xAD]);
        assert_eq!(encode(&Tag::Long(-2)).unwrap(), vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(encode(&Tag::Double(1.0)).unwrap(), 1.0f64.to_be_bytes().to_vec());
    }

    #[test]
    fn test_int_truncated() {
        let data = [0x00, 0x00, 0x01];
        let result = read_int(&mut decoder(&data));
        assert!(matches!(result, Err(DecodeError::TruncatedInput { needed: 4, remaining: 3, .. })));
    }

    #[test]
    fn test_string_opaque_bytes() {
        // Not valid UTF-8, kept as-is
        let data = [0x00, 0x03, 0xFF, 0x00, 0xC3];
        let tag = read_string(&mut decoder(&data)).unwrap();
        assert_eq!(tag, Tag::String(vec![0xFF, 0x00, 0xC3]));
        assert_eq!(encode(&tag).unwrap(), data.to_vec());
    }

    #[test]
    fn test_string_length_exceeds_input() {
        let data = [0x00, 0x05, b'a', b'b'];
        let result = read_string(&mut decoder(&data));
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedInput { offset: 2, needed: 5, remaining: 2, .. })
        ));
    }

    #[test]
    fn test_string_too_long_to_encode() {
        let tag = Tag::String(vec![b'x'; MAX_STRING_LEN + 1]);
        assert!(matches!(
            encode(&tag),
            Err(EncodeError::LengthExceedsLimit { field: "string", .. })
        ));
    }

    #[test]
    fn test_byte_array() {
        let data = [0x00, 0x00, 0x00, 0x03, 1, 2, 3];
        let mut dec = decoder(&data);
        let tag = read_byte_array(&mut dec).unwrap();
        assert_eq!(tag, Tag::ByteArray(vec![1, 2, 3]));
        assert_eq!(dec.position(), data.len());
        assert_eq!(encode(&tag).unwrap(), data.to_vec());
    }

    #[test]
    fn test_byte_array_negative_count() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF];
        let result = read_byte_array(&mut decoder(&data));
        assert!(matches!(
            result,
            Err(DecodeError::InvalidLength { len: -1, offset: 0, .. })
        ));
    }

    #[test]
    fn test_byte_array_count_exceeds_input() {
        let data = [0x00, 0x00, 0x00, 0x08, 1, 2];
        let result = read_byte_array(&mut decoder(&data));
        assert!(matches!(result, Err(DecodeError::TruncatedInput { .. })));
    }

    #[test]
    fn test_end_reader_fails() {
        let result = read_end(&mut decoder(&[]));
        assert!(matches!(result, Err(DecodeError::UnexpectedEnd { offset: 0 })));
    }
}
