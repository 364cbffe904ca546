//! The type table: wire id to payload codec.
//!
//! Containers never inspect tag kinds themselves; they resolve the id they
//! read here and call the entry's reader. Adding a kind means adding a row.

use crate::codec::tag::Decoder;
use crate::codec::{compound, list, value};
use crate::error::DecodeError;
use crate::limits::TAG_TYPE_COUNT;
use crate::model::{Tag, TagType};

/// Reads one payload of a fixed kind.
pub type ReadPayload = fn(&mut Decoder<'_>) -> Result<Tag, DecodeError>;

/// One row of the type table.
#[derive(Debug)]
pub struct TagCodec {
    pub tag_type: TagType,
    /// Conventional name of the kind, e.g. `TAG_Int`.
    pub name: &'static str,
    /// Smallest possible payload size in bytes.
    pub min_payload_len: usize,
    pub read: ReadPayload,
}

/// The type table, indexed by wire id.
pub static TAG_CODECS: [TagCodec; TAG_TYPE_COUNT] = [
    // Placeholder row: End ids are handled by callers before dispatch
    TagCodec { tag_type: TagType::End, name: "TAG_End", min_payload_len: 0, read: value::read_end },
    TagCodec { tag_type: TagType::Byte, name: "TAG_Byte", min_payload_len: 1, read: value::read_byte },
    TagCodec { tag_type: TagType::Short, name: "TAG_Short", min_payload_len: 2, read: value::read_short },
    TagCodec { tag_type: TagType::Int, name: "TAG_Int", min_payload_len: 4, read: value::read_int },
    TagCodec { tag_type: TagType::Long, name: "TAG_Long", min_payload_len: 8, read: value::read_long },
    TagCodec { tag_type: TagType::Float, name: "TAG_Float", min_payload_len: 4, read: value::read_float },
    TagCodec { tag_type: TagType::Double, name: "TAG_Double", min_payload_len: 8, read: value::read_double },
    TagCodec { tag_type: TagType::ByteArray, name: "TAG_Byte_Array", min_payload_len: 4, read: value::read_byte_array },
    TagCodec { tag_type: TagType::String, name: "TAG_String", min_payload_len: 2, read: value::read_string },
    // element type id + count
    TagCodec { tag_type: TagType::List, name: "TAG_List", min_payload_len: 5, read: list::read_list },
    // lone End marker
    TagCodec { tag_type: TagType::Compound, name: "TAG_Compound", min_payload_len: 1, read: compound::read_compound },
];

/// Resolves a wire id read at `offset`.
pub fn lookup(type_id: u8, offset: usize) -> Result<&'static TagCodec, DecodeError> {
    TAG_CODECS
        .get(type_id as usize)
        .ok_or(DecodeError::UnknownTagType { type_id, offset })
}

/// Returns the table row for a known kind.
pub fn codec_for(tag_type: TagType) -> &'static TagCodec {
    &TAG_CODECS[tag_type.id() as usize]
}
