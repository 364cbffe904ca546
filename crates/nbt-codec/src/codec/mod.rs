//! Binary encoding/decoding for NBT.
//!
//! Decoding dispatches every type id through the [`registry`] table;
//! encoding walks the tag tree and writes each node's bytes in order.

mod compound;
pub mod document;
mod list;
pub mod primitives;
pub mod registry;
pub mod tag;
mod value;

pub use document::{
    decode, decode_root, decode_root_with_options, decode_with_options, encode, encode_root,
    encode_with_options,
};
pub use primitives::{Reader, Writer};
pub use registry::{codec_for, lookup, TagCodec, TAG_CODECS};
pub use tag::{DecodeOptions, Decoder, EncodeOptions, Encoder};
