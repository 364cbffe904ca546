//! Ordered, named tag collections.

use rustc_hash::FxHashSet;

use crate::error::TagError;
use crate::model::tag::check_named;
use crate::model::{List, NamedTag, Tag};

/// An ordered sequence of named child tags.
///
/// Entry order is preserved exactly as inserted or decoded. The methods keep
/// names unique and within the wire length limits; `entries` is public for
/// direct assembly, and the encoder rejects duplicates it finds there unless
/// told otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    pub entries: Vec<NamedTag>,
}

impl Compound {
    /// Creates an empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty compound with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &[u8]) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn contains_key(&self, name: impl AsRef<[u8]>) -> bool {
        self.position(name.as_ref()).is_some()
    }

    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Tag> {
        self.position(name.as_ref()).map(|i| &self.entries[i].tag)
    }

    pub fn get_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Tag> {
        self.position(name.as_ref()).map(|i| &mut self.entries[i].tag)
    }

    /// Sets `name` to `tag`.
    ///
    /// An existing entry is replaced in place, keeping its position, and the
    /// previous tag is returned. Otherwise the entry is appended.
    ///
    /// Fails with [`TagError::LengthExceedsLimit`] if the name or a String or
    /// ByteArray payload does not fit its length prefix.
    pub fn insert(&mut self, name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Result<Option<Tag>, TagError> {
        let name = name.into();
        let tag = tag.into();
        check_named(&name, &tag)?;
        match self.position(&name) {
            Some(i) => Ok(Some(std::mem::replace(&mut self.entries[i].tag, tag))),
            None => {
                self.entries.push(NamedTag { name, tag });
                Ok(None)
            }
        }
    }

    /// Appends a new entry, failing if the name is already present.
    pub fn try_insert(&mut self, name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Result<(), TagError> {
        let name = name.into();
        let tag = tag.into();
        check_named(&name, &tag)?;
        if self.position(&name).is_some() {
            return Err(TagError::DuplicateName {
                name: String::from_utf8_lossy(&name).into_owned(),
            });
        }
        self.entries.push(NamedTag { name, tag });
        Ok(())
    }

    /// Removes the entry named `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: impl AsRef<[u8]>) -> Option<Tag> {
        self.position(name.as_ref())
            .map(|i| self.entries.remove(i).tag)
    }

    /// Iterates over `(name, tag)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Tag)> {
        self.entries.iter().map(|e| (e.name.as_slice(), &e.tag))
    }

    /// Iterates over entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|e| e.name.as_slice())
    }

    pub fn get_byte(&self, name: impl AsRef<[u8]>) -> Option<i8> {
        self.get(name).and_then(Tag::as_byte)
    }

    pub fn get_short(&self, name: impl AsRef<[u8]>) -> Option<i16> {
        self.get(name).and_then(Tag::as_short)
    }

    pub fn get_int(&self, name: impl AsRef<[u8]>) -> Option<i32> {
        self.get(name).and_then(Tag::as_int)
    }

    pub fn get_long(&self, name: impl AsRef<[u8]>) -> Option<i64> {
        self.get(name).and_then(Tag::as_long)
    }

    pub fn get_double(&self, name: impl AsRef<[u8]>) -> Option<f64> {
        self.get(name).and_then(Tag::as_double)
    }

    pub fn get_str(&self, name: impl AsRef<[u8]>) -> Option<&str> {
        self.get(name).and_then(Tag::as_str)
    }

    pub fn get_list(&self, name: impl AsRef<[u8]>) -> Option<&List> {
        self.get(name).and_then(Tag::as_list)
    }

    pub fn get_compound(&self, name: impl AsRef<[u8]>) -> Option<&Compound> {
        self.get(name).and_then(Tag::as_compound)
    }

    pub fn get_compound_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Compound> {
        self.get_mut(name).and_then(Tag::as_compound_mut)
    }

    /// Returns the first name that occurs more than once.
    pub(crate) fn first_duplicate(&self) -> Option<&[u8]> {
        let mut seen = FxHashSet::with_capacity_and_hasher(self.entries.len(), Default::default());
        self.entries
            .iter()
            .map(|e| e.name.as_slice())
            .find(|name| !seen.insert(*name))
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a NamedTag;
    type IntoIter = std::slice::Iter<'a, NamedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
