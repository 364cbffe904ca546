//! Top-level sequence of root tags.

use crate::error::TagError;
use crate::model::tag::check_named;
use crate::model::{NamedTag, Tag};

/// An ordered sequence of named root tags covering one buffer.
///
/// Most files hold a single root compound, but nothing in the format stops
/// several roots from following each other, and all of them are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub roots: Vec<NamedTag>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document with a single root.
    pub fn with_root(name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Result<Self, TagError> {
        let mut doc = Self::new();
        doc.push(name, tag)?;
        Ok(doc)
    }

    /// Appends a root tag, checking the name and payload lengths.
    pub fn push(&mut self, name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Result<(), TagError> {
        let root = NamedTag::new(name, tag);
        check_named(&root.name, &root.tag)?;
        self.roots.push(root);
        Ok(())
    }

    /// Returns the first root tag with the given name.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Tag> {
        let name = name.as_ref();
        self.roots.iter().find(|r| r.name == name).map(|r| &r.tag)
    }

    pub fn get_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Tag> {
        let name = name.as_ref();
        self.roots.iter_mut().find(|r| r.name == name).map(|r| &mut r.tag)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedTag> {
        self.roots.iter()
    }

    /// Returns the total encoded size of all roots.
    pub fn encoded_len(&self) -> usize {
        self.roots.iter().map(NamedTag::encoded_len).sum()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a NamedTag;
    type IntoIter = std::slice::Iter<'a, NamedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_match() {
        let mut doc = Document::new();
        doc.push("a", 1i8).unwrap();
        doc.push("a", 2i8).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("a"), Some(&Tag::Byte(1)));
        assert_eq!(doc.get("b"), None);

        if let Some(tag) = doc.get_mut("a") {
            *tag = Tag::Byte(5);
        }
        let values: Vec<Option<i8>> = doc.iter().map(|r| r.tag.as_byte()).collect();
        assert_eq!(values, vec![Some(5), Some(2)]);
    }

    #[test]
    fn test_encoded_len_sums_roots() {
        let mut doc = Document::with_root("x", 7i32).unwrap();
        doc.push("", "hi").unwrap();
        // (1 + 2 + 1 + 4) + (1 + 2 + 0 + 2 + 2)
        assert_eq!(doc.encoded_len(), 8 + 7);
    }

    #[test]
    fn test_oversized_root_rejected() {
        assert!(matches!(
            Document::with_root(vec![b'r'; 65536], 1i8),
            Err(TagError::LengthExceedsLimit { field: "name", .. })
        ));

        let mut doc = Document::new();
        assert!(doc.push("r", Tag::byte_array(vec![0u8; 8])).is_ok());
        assert!(doc.push("s", Tag::string(vec![b'x'; 70000])).is_err());
        assert_eq!(doc.len(), 1);
    }
}
