//! Homogeneous, unnamed tag sequences.

use crate::error::TagError;
use crate::limits::MAX_ARRAY_LEN;
use crate::model::tag::check_limit;
use crate::model::{Tag, TagType};

/// An ordered sequence of unnamed tags sharing one declared element type.
///
/// The element type is part of the wire state and survives even when the
/// list is empty. Mutation through the methods keeps every element of the
/// declared type and within the wire length limits; the fields are public for direct assembly, in which case
/// the encoder checks consistency.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub element_type: TagType,
    pub elements: Vec<Tag>,
}

impl List {
    /// Creates an empty list of the given element type.
    pub fn new(element_type: TagType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(element_type: TagType, capacity: usize) -> Self {
        Self {
            element_type,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Builds a list from tags, taking the element type from the first one.
    ///
    /// An empty input produces a list of element type End.
    pub fn from_tags(tags: Vec<Tag>) -> Result<Self, TagError> {
        let element_type = tags.first().map(Tag::tag_type).unwrap_or(TagType::End);
        let mut list = Self::with_capacity(element_type, tags.len());
        for tag in tags {
            list.push(tag)?;
        }
        Ok(list)
    }

    /// Returns the declared element type.
    pub fn element_type(&self) -> TagType {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.elements.get(index)
    }

    /// Returns a mutable element. Replacing it with a tag of another kind
    /// makes the list fail to encode.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.elements.iter()
    }

    fn check(&self, tag: &Tag) -> Result<(), TagError> {
        let found = tag.tag_type();
        if found != self.element_type {
            return Err(TagError::ListTypeMismatch {
                expected: self.element_type,
                found,
            });
        }
        tag.check_len()
    }

    fn check_grow(&self, tag: &Tag) -> Result<(), TagError> {
        check_limit("list", self.elements.len() + 1, MAX_ARRAY_LEN)?;
        self.check(tag)
    }

    /// Appends an element of the declared type.
    pub fn push(&mut self, tag: impl Into<Tag>) -> Result<(), TagError> {
        let tag = tag.into();
        self.check_grow(&tag)?;
        self.elements.push(tag);
        Ok(())
    }

    /// Inserts an element at `index`, shifting later elements.
    ///
    /// Fails with [`TagError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, tag: impl Into<Tag>) -> Result<(), TagError> {
        let len = self.elements.len();
        if index > len {
            return Err(TagError::IndexOutOfBounds { index, len });
        }
        let tag = tag.into();
        self.check_grow(&tag)?;
        self.elements.insert(index, tag);
        Ok(())
    }

    /// Removes and returns the element at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Tag> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_enforces_type() {
        let mut list = List::new(TagType::Int);
        list.push(1i32).unwrap();
        list.push(2i32).unwrap();

        let result = list.push(3i64);
        assert!(matches!(
            result,
            Err(TagError::ListTypeMismatch {
                expected: TagType::Int,
                found: TagType::Long
            })
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_end_typed_list_rejects_elements() {
        let mut list = List::new(TagType::End);
        assert!(list.push(Tag::Byte(0)).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn test_from_tags() {
        let list = List::from_tags(vec![Tag::from("a"), Tag::from("b")]).unwrap();
        assert_eq!(list.element_type(), TagType::String);
        assert_eq!(list.len(), 2);

        let empty = List::from_tags(Vec::new()).unwrap();
        assert_eq!(empty.element_type(), TagType::End);

        let mixed = List::from_tags(vec![Tag::Byte(1), Tag::Short(1)]);
        assert!(mixed.is_err());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut list = List::new(TagType::Byte);
        list.push(1i8).unwrap();
        list.push(3i8).unwrap();
        list.insert(1, 2i8).unwrap();

        let values: Vec<i8> = list.iter().filter_map(Tag::as_byte).collect();
        assert_eq!(values, vec![1, 2, 3]);

        assert_eq!(list.remove(0), Some(Tag::Byte(1)));
        assert_eq!(list.remove(5), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut list = List::new(TagType::Byte);
        list.push(1i8).unwrap();

        assert!(matches!(
            list.insert(3, 2i8),
            Err(TagError::IndexOutOfBounds { index: 3, len: 1 })
        ));
        // Inserting at len appends
        list.insert(1, 2i8).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_oversized_element_rejected() {
        let mut list = List::new(TagType::String);
        assert!(matches!(
            list.push(Tag::string(vec![b'x'; 70000])),
            Err(TagError::LengthExceedsLimit { field: "string", len: 70000, .. })
        ));
        assert!(list.is_empty());

        let result = List::from_tags(vec![Tag::from("ok"), Tag::string(vec![b'x'; 70000])]);
        assert!(matches!(result, Err(TagError::LengthExceedsLimit { .. })));
    }
}
