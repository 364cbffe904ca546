//! Tag kinds and tag payloads.

use crate::error::TagError;
use crate::limits::{MAX_ARRAY_LEN, MAX_STRING_LEN};
use crate::model::{Compound, List};

/// Tag kinds and their wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagType {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
}

impl TagType {
    /// Creates a TagType from its wire representation.
    pub fn from_u8(v: u8) -> Option<TagType> {
        match v {
            0 => Some(TagType::End),
            1 => Some(TagType::Byte),
            2 => Some(TagType::Short),
            3 => Some(TagType::Int),
            4 => Some(TagType::Long),
            5 => Some(TagType::Float),
            6 => Some(TagType::Double),
            7 => Some(TagType::ByteArray),
            8 => Some(TagType::String),
            9 => Some(TagType::List),
            10 => Some(TagType::Compound),
            _ => None,
        }
    }

    /// Returns the wire id.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// A tag payload.
///
/// Names are not part of the payload: they belong to the enclosing compound
/// entry or document root ([`NamedTag`]). List elements carry no name at all.
///
/// There are ten variants for the eleven wire kinds. The End marker has no
/// payload, so it is represented only by [`TagType::End`]: the compound
/// terminator on the wire and the element type of an untyped empty list.
/// A tree can never hold an End value.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    /// Opaque bytes; no text encoding is assumed or validated.
    String(Vec<u8>),
    List(List),
    Compound(Compound),
}

impl Tag {
    /// Creates a String tag from anything byte-like (`&str`, `String`, `&[u8]`, `Vec<u8>`).
    pub fn string(value: impl Into<Vec<u8>>) -> Self {
        Tag::String(value.into())
    }

    /// Creates a ByteArray tag.
    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        Tag::ByteArray(value.into())
    }

    /// Returns the kind of this tag.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
        }
    }

    /// Returns the exact number of bytes this payload occupies on the wire.
    pub fn payload_len(&self) -> usize {
        match self {
            Tag::Byte(_) => 1,
            Tag::Short(_) => 2,
            Tag::Int(_) | Tag::Float(_) => 4,
            Tag::Long(_) | Tag::Double(_) => 8,
            Tag::ByteArray(bytes) => 4 + bytes.len(),
            Tag::String(bytes) => 2 + bytes.len(),
            Tag::List(list) => 1 + 4 + list.iter().map(Tag::payload_len).sum::<usize>(),
            Tag::Compound(compound) => {
                compound.entries.iter().map(NamedTag::encoded_len).sum::<usize>() + 1
            }
        }
    }

    /// Checks that a String or ByteArray payload fits its wire length field.
    ///
    /// Only the payload itself is inspected; lists and compounds check their
    /// children as those are added.
    pub(crate) fn check_len(&self) -> Result<(), TagError> {
        match self {
            Tag::String(bytes) => check_limit("string", bytes.len(), MAX_STRING_LEN),
            Tag::ByteArray(bytes) => check_limit("byte array", bytes.len(), MAX_ARRAY_LEN),
            _ => Ok(()),
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[u8]> {
        match self {
            Tag::ByteArray(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns the raw bytes of a String tag.
    pub fn as_str_bytes(&self) -> Option<&[u8]> {
        match self {
            Tag::String(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns a String tag's payload if it happens to be valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_str_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Tag::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    List => List,
    Compound => Compound,
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.as_bytes().to_vec())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value.into_bytes())
    }
}

/// A tag together with its name: a compound entry or a document root.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    /// Opaque name bytes, encoded like a String payload.
    pub name: Vec<u8>,
    pub tag: Tag,
}

pub(crate) fn check_limit(field: &'static str, len: usize, max: usize) -> Result<(), TagError> {
    if len > max {
        return Err(TagError::LengthExceedsLimit { field, len, max });
    }
    Ok(())
}

/// Checks a tag and the name it is about to be stored under.
pub(crate) fn check_named(name: &[u8], tag: &Tag) -> Result<(), TagError> {
    check_limit("name", name.len(), MAX_STRING_LEN)?;
    tag.check_len()
}

impl NamedTag {
    /// Creates a named tag.
    pub fn new(name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// Returns the name, lossily decoded for display.
    pub fn name_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Returns the full encoded size: type id, name and payload.
    pub fn encoded_len(&self) -> usize {
        1 + 2 + self.name.len() + self.tag.payload_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ids() {
        for id in 0u8..11 {
            let ty = TagType::from_u8(id).unwrap();
            assert_eq!(ty.id(), id);
        }
        assert_eq!(TagType::from_u8(11), None);
        assert_eq!(TagType::from_u8(99), None);
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(Tag::Byte(1).payload_len(), 1);
        assert_eq!(Tag::Double(1.0).payload_len(), 8);
        assert_eq!(Tag::string("abc").payload_len(), 5);
        assert_eq!(Tag::byte_array(vec![0u8; 10]).payload_len(), 14);
        assert_eq!(Tag::List(List::new(TagType::Int)).payload_len(), 5);
        assert_eq!(Tag::Compound(Compound::new()).payload_len(), 1);
    }

    #[test]
    fn test_named_encoded_len() {
        let tag = NamedTag::new("hp", 20i16);
        // id + u16 length + "hp" + i16
        assert_eq!(tag.encoded_len(), 1 + 2 + 2 + 2);
    }

    #[test]
    fn test_accessors() {
        let tag = Tag::from("hello");
        assert_eq!(tag.as_str(), Some("hello"));
        assert_eq!(tag.as_int(), None);

        let raw = Tag::string(vec![0xFFu8, 0xFE]);
        assert_eq!(raw.as_str(), None);
        assert_eq!(raw.as_str_bytes(), Some(&[0xFF, 0xFE][..]));
    }

    #[test]
    fn test_length_checks() {
        assert!(check_named(&[b'n'; MAX_STRING_LEN], &Tag::string(vec![0u8; MAX_STRING_LEN])).is_ok());
        assert!(matches!(
            check_named(&[b'n'; MAX_STRING_LEN + 1], &Tag::Int(0)),
            Err(TagError::LengthExceedsLimit { field: "name", .. })
        ));
        assert!(matches!(
            Tag::string(vec![b'x'; 70000]).check_len(),
            Err(TagError::LengthExceedsLimit { field: "string", len: 70000, max: 65535 })
        ));
    }
}
