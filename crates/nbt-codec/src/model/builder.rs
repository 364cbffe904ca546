//! Builder API for ergonomic Compound construction.
//!
//! Provides a fluent interface for building nested compounds.
//!
//! # Example
//!
//! ```rust
//! use nbt_codec::model::builder::CompoundBuilder;
//!
//! let player = CompoundBuilder::new()
//!     .string("Name", "Steve")
//!     .short("Health", 20)
//!     .compound("Pos", |p| p
//!         .double("x", 12.5)
//!         .double("y", 64.0)
//!         .double("z", -3.0)
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(player.get_short("Health"), Some(20));
//! ```

use crate::error::TagError;
use crate::model::{Compound, List, Tag, TagType};

/// Builder for constructing a Compound.
///
/// Setting a name twice replaces the earlier value in its original position,
/// so built compounds never contain duplicate names. The first entry whose
/// name or payload is too long for the wire is reported by [`build`](Self::build);
/// later entries are ignored.
#[derive(Debug, Clone, Default)]
pub struct CompoundBuilder {
    compound: Compound,
    error: Option<TagError>,
}

impl CompoundBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary tag.
    pub fn tag(mut self, name: impl Into<Vec<u8>>, tag: impl Into<Tag>) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.compound.insert(name, tag) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn byte(self, name: impl Into<Vec<u8>>, value: i8) -> Self {
        self.tag(name, Tag::Byte(value))
    }

    pub fn short(self, name: impl Into<Vec<u8>>, value: i16) -> Self {
        self.tag(name, Tag::Short(value))
    }

    pub fn int(self, name: impl Into<Vec<u8>>, value: i32) -> Self {
        self.tag(name, Tag::Int(value))
    }

    pub fn long(self, name: impl Into<Vec<u8>>, value: i64) -> Self {
        self.tag(name, Tag::Long(value))
    }

    pub fn float(self, name: impl Into<Vec<u8>>, value: f32) -> Self {
        self.tag(name, Tag::Float(value))
    }

    pub fn double(self, name: impl Into<Vec<u8>>, value: f64) -> Self {
        self.tag(name, Tag::Double(value))
    }

    pub fn string(self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.tag(name, Tag::String(value.into()))
    }

    pub fn byte_array(self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.tag(name, Tag::ByteArray(value.into()))
    }

    pub fn list(self, name: impl Into<Vec<u8>>, list: List) -> Self {
        self.tag(name, Tag::List(list))
    }

    /// Sets a list of compounds.
    pub fn compound_list(mut self, name: impl Into<Vec<u8>>, items: impl IntoIterator<Item = Compound>) -> Self {
        let mut list = List::new(TagType::Compound);
        for item in items {
            if let Err(e) = list.push(item) {
                self.error.get_or_insert(e);
                return self;
            }
        }
        self.tag(name, Tag::List(list))
    }

    /// Sets a nested compound built by `f`.
    pub fn compound<F>(mut self, name: impl Into<Vec<u8>>, f: F) -> Self
    where
        F: FnOnce(CompoundBuilder) -> CompoundBuilder,
    {
        match f(CompoundBuilder::new()).build() {
            Ok(nested) => self.tag(name, Tag::Compound(nested)),
            Err(e) => {
                self.error.get_or_insert(e);
                self
            }
        }
    }

    /// Finishes the compound.
    ///
    /// Fails with [`TagError::LengthExceedsLimit`] if any entry did not fit.
    pub fn build(self) -> Result<Compound, TagError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.compound),
        }
    }
}
