//! Named Binary Tag (NBT): decoding and encoding of typed, named tag trees.
//!
//! This crate reads and writes the NBT binary format byte-for-byte over
//! in-memory buffers. Decompression, region containers, file access and
//! pretty-printing are left to callers.
//!
//! # Overview
//!
//! A buffer holds a sequence of root tags. Each tag has a one-byte type id:
//! - **Scalars**: Byte, Short, Int, Long (big-endian two's complement),
//!   Float, Double (big-endian IEEE 754)
//! - **ByteArray**: i32 count + raw bytes
//! - **String**: u16 length + opaque bytes (not validated as text)
//! - **List**: element type id + i32 count + unnamed payloads
//! - **Compound**: named, typed entries closed by an End byte
//!
//! # Quick Start
//!
//! ```rust
//! use nbt_codec::{decode, encode, CompoundBuilder, Document, List, Tag, TagType};
//!
//! let mut scores = List::new(TagType::Int);
//! scores.push(10i32).unwrap();
//! scores.push(25i32).unwrap();
//!
//! let level = CompoundBuilder::new()
//!     .string("LevelName", "world")
//!     .long("Seed", 42)
//!     .list("Scores", scores)
//!     .build()
//!     .unwrap();
//!
//! let doc = Document::with_root("Data", level).unwrap();
//!
//! // Encode to binary
//! let bytes = encode(&doc).unwrap();
//!
//! // Decode back
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, doc);
//!
//! let data = decoded.get("Data").and_then(Tag::as_compound).unwrap();
//! assert_eq!(data.get_long("Seed"), Some(42));
//! ```
//!
//! # Modules
//!
//! - [`model`]: The tag tree (Tag, List, Compound, Document, builders)
//! - [`codec`]: Binary encoding/decoding and the type table
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and default limits
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Nesting depth is bounded (see [`DecodeOptions::with_max_depth`])
//! - Declared lengths are checked against the remaining input before
//!   anything is allocated for them
//! - Every error reports the byte offset where it was detected

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    decode, decode_root, decode_root_with_options, decode_with_options, encode, encode_root,
    encode_with_options, DecodeOptions, EncodeOptions,
};
pub use error::{DecodeError, EncodeError, ErrorKind, TagError};
pub use model::{Compound, CompoundBuilder, Document, List, NamedTag, Tag, TagType};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
