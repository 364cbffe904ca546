//! Decoder and encoder state shared by every tag codec.
//!
//! Both sides carry their options and the current nesting depth. Containers
//! enter a nesting level through `Decoder::nested` / `Encoder::nested`,
//! which is where the depth guard lives. Decoding is always bounded;
//! encoding only when a limit is set.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::registry::TagCodec;
use crate::codec::{compound, list, value};
use crate::error::{DecodeError, EncodeError};
use crate::limits::DEFAULT_MAX_DEPTH;
use crate::model::{NamedTag, Tag};

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of lists and compounds before failing with
    /// [`DecodeError::NestingTooDeep`].
    pub max_depth: usize,
    /// Keep repeated names inside a compound instead of failing with
    /// [`DecodeError::DuplicateName`].
    pub allow_duplicate_names: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_duplicate_names: false,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Keeps every compound entry in wire order, even when names repeat.
    pub fn allow_duplicate_names(mut self) -> Self {
        self.allow_duplicate_names = true;
        self
    }
}

/// Options for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Maximum nesting of lists and compounds, unlimited by default.
    ///
    /// Trees built through the model API always encode; a limit is only
    /// useful as a guard for trees assembled directly or taken from
    /// untrusted sources.
    pub max_depth: Option<usize>,
    /// Write compounds with repeated names as they are instead of failing
    /// with [`EncodeError::InconsistentCompound`].
    pub allow_duplicate_names: bool,
}

impl EncodeOptions {
    /// Creates default encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`EncodeError::NestingTooDeep`] past `max_depth` levels.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Writes compounds with repeated names unchanged.
    pub fn allow_duplicate_names(mut self) -> Self {
        self.allow_duplicate_names = true;
        self
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decoding state passed to every payload reader.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    pub(crate) reader: Reader<'a>,
    pub(crate) options: DecodeOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            reader: Reader::new(data),
            options,
            depth: 0,
        }
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(DecodeError::NestingTooDeep {
                max_depth: self.options.max_depth,
                offset: self.reader.position(),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Reads a named tag whose type id has already been resolved.
pub(crate) fn decode_named(
    dec: &mut Decoder<'_>,
    codec: &TagCodec,
    context: &'static str,
) -> Result<NamedTag, DecodeError> {
    let name = value::read_string_bytes(dec, context)?.to_vec();
    let tag = (codec.read)(dec)?;
    Ok(NamedTag { name, tag })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encoding state passed to every payload writer.
#[derive(Debug, Clone)]
pub struct Encoder {
    pub(crate) writer: Writer,
    pub(crate) options: EncodeOptions,
    depth: usize,
}

impl Encoder {
    pub(crate) fn new(options: EncodeOptions, capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
            options,
            depth: 0,
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, EncodeError>,
    ) -> Result<T, EncodeError> {
        if let Some(max_depth) = self.options.max_depth {
            if self.depth >= max_depth {
                return Err(EncodeError::NestingTooDeep { max_depth });
            }
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Writes a payload without type id or name.
pub(crate) fn encode_payload(enc: &mut Encoder, tag: &Tag) -> Result<(), EncodeError> {
    match tag {
        Tag::Byte(v) => enc.writer.write_i8(*v),
        Tag::Short(v) => enc.writer.write_i16(*v),
        Tag::Int(v) => enc.writer.write_i32(*v),
        Tag::Long(v) => enc.writer.write_i64(*v),
        Tag::Float(v) => enc.writer.write_f32(*v),
        Tag::Double(v) => enc.writer.write_f64(*v),
        Tag::ByteArray(bytes) => value::encode_byte_array(enc, bytes)?,
        Tag::String(bytes) => value::encode_string(enc, bytes, "string")?,
        Tag::List(l) => list::encode_list(enc, l)?,
        Tag::Compound(c) => compound::encode_compound(enc, c)?,
    }
    Ok(())
}

/// Writes type id, name and payload.
pub(crate) fn encode_named(enc: &mut Encoder, name: &[u8], tag: &Tag) -> Result<(), EncodeError> {
    enc.writer.write_byte(tag.tag_type().id());
    value::encode_string(enc, name, "name")?;
    encode_payload(enc, tag)
}
