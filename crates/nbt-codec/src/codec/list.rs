//! List payload encoding/decoding.
//!
//! Wire layout: element type id (1 byte), count (i32), then `count`
//! unnamed payloads of the element type.

use crate::codec::registry;
use crate::codec::tag::{encode_payload, Decoder, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_ARRAY_LEN;
use crate::model::{List, Tag, TagType};

// =============================================================================
// DECODING
// =============================================================================

pub(crate) fn read_list(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    dec.nested(|dec| {
        let type_offset = dec.reader.position();
        let type_id = dec.reader.read_byte("list element type")?;
        let codec = registry::lookup(type_id, type_offset)?;

        let count_offset = dec.reader.position();
        let count = dec.reader.read_i32("list length")?;
        if count < 0 {
            return Err(DecodeError::InvalidLength {
                context: "list",
                len: count as i64,
                offset: count_offset,
            });
        }
        let count = count as usize;

        // End-typed lists are only valid when empty
        if count > 0 && codec.tag_type == TagType::End {
            return Err(DecodeError::UnexpectedEnd {
                offset: dec.reader.position(),
            });
        }

        // Reject counts that cannot fit before allocating for them
        let needed = count.saturating_mul(codec.min_payload_len);
        if needed > dec.reader.remaining_len() {
            return Err(dec.reader.truncated(needed, "list elements"));
        }

        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push((codec.read)(dec)?);
        }

        Ok(Tag::List(List {
            element_type: codec.tag_type,
            elements,
        }))
    })
}

// =============================================================================
// ENCODING
// =============================================================================

pub(crate) fn encode_list(enc: &mut Encoder, list: &List) -> Result<(), EncodeError> {
    enc.nested(|enc| {
        if list.elements.len() > MAX_ARRAY_LEN {
            return Err(EncodeError::LengthExceedsLimit {
                field: "list",
                len: list.elements.len(),
                max: MAX_ARRAY_LEN,
            });
        }
        if let Some((index, bad)) = list
            .elements
            .iter()
            .enumerate()
            .find(|(_, t)| t.tag_type() != list.element_type)
        {
            return Err(EncodeError::InconsistentList {
                expected: list.element_type,
                found: bad.tag_type(),
                index,
            });
        }

        enc.writer.write_byte(list.element_type.id());
        enc.writer.write_i32(list.elements.len() as i32);
        for element in &list.elements {
            encode_payload(enc, element)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tag::{DecodeOptions, EncodeOptions};

    fn decode(data: &[u8]) -> Result<Tag, DecodeError> {
        read_list(&mut Decoder::new(data, DecodeOptions::default()))
    }

    fn encode(list: &List) -> Result<Vec<u8>, EncodeError> {
        let mut enc = Encoder::new(EncodeOptions::default(), 16);
        encode_list(&mut enc, list)?;
        Ok(enc.into_bytes())
    }

    #[test]
    fn test_list_of_shorts() {
        let data = [2, 0, 0, 0, 3, 0, 1, 0, 2, 0xFF, 0xFF];
        let tag = decode(&data).unwrap();
        let list = tag.as_list().unwrap();
        assert_eq!(list.element_type(), TagType::Short);
        let values: Vec<i16> = list.iter().filter_map(Tag::as_short).collect();
        assert_eq!(values, vec![1, 2, -1]);

        assert_eq!(encode(list).unwrap(), data.to_vec());
    }

    #[test]
    fn test_empty_list_keeps_element_type() {
        let list = List::new(TagType::Int);
        let bytes = encode(&list).unwrap();
        assert_eq!(bytes, vec![3, 0, 0, 0, 0]);

        let decoded = decode(&bytes).unwrap();
        let decoded = decoded.as_list().unwrap();
        assert_eq!(decoded.element_type(), TagType::Int);
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_empty_end_list() {
        let data = [0, 0, 0, 0, 0];
        let tag = decode(&data).unwrap();
        assert_eq!(tag.as_list().unwrap().element_type(), TagType::End);
    }

    #[test]
    fn test_nonempty_end_list_rejected() {
        let data = [0, 0, 0, 0, 2];
        assert!(matches!(decode(&data), Err(DecodeError::UnexpectedEnd { offset: 5 })));
    }

    #[test]
    fn test_unknown_element_type() {
        let data = [99, 0, 0, 0, 0];
        assert!(matches!(
            decode(&data),
            Err(DecodeError::UnknownTagType { type_id: 99, offset: 0 })
        ));
    }

    #[test]
    fn test_negative_count() {
        let data = [1, 0x80, 0, 0, 0];
        assert!(matches!(
            decode(&data),
            Err(DecodeError::InvalidLength { context: "list", offset: 1, .. })
        ));
    }

    #[test]
    fn test_count_larger_than_input() {
        // Claims i32::MAX longs with no payload behind it
        let data = [4, 0x7F, 0xFF, 0xFF, 0xFF];
        assert!(matches!(decode(&data), Err(DecodeError::TruncatedInput { .. })));
    }

    #[test]
    fn test_mixed_elements_rejected_on_encode() {
        let list = List {
            element_type: TagType::Int,
            elements: vec![Tag::Int(1), Tag::Long(2)],
        };
        assert!(matches!(
            encode(&list),
            Err(EncodeError::InconsistentList {
                expected: TagType::Int,
                found: TagType::Long,
                index: 1
            })
        ));
    }

    #[test]
    fn test_elements_carry_no_names() {
        let mut list = List::new(TagType::String);
        list.push("ab").unwrap();
        // type, count, then u16 length + bytes only
        assert_eq!(encode(&list).unwrap(), vec![8, 0, 0, 0, 1, 0, 2, b'a', b'b']);
    }
}
