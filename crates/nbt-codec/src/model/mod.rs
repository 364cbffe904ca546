//! Data model types for NBT.
//!
//! This module contains the in-memory tag tree:
//! - Tag kinds and payloads
//! - Lists (homogeneous, unnamed) and compounds (ordered, named)
//! - Documents (root tag sequences)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod compound;
pub mod document;
pub mod list;
pub mod tag;

pub use builder::CompoundBuilder;
pub use compound::Compound;
pub use document::Document;
pub use list::List;
pub use tag::{NamedTag, Tag, TagType};
