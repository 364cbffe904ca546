//! Whole-buffer document encoding/decoding.
//!
//! A document is a run of root tags (type id, name, payload) with no outer
//! framing; it ends exactly where the buffer ends.

use log::{debug, trace};

use crate::codec::registry;
use crate::codec::tag::{decode_named, encode_named, DecodeOptions, Decoder, EncodeOptions, Encoder};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Document, NamedTag, TagType};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes every root tag in `input`.
///
/// An empty buffer is an empty document. Any error aborts the whole decode;
/// no partial document is returned.
///
/// Decoding is strict by default: a compound that repeats an entry name
/// fails with [`DecodeError::DuplicateName`], even though the wire format
/// allows it. Use [`decode_with_options`] with
/// [`DecodeOptions::allow_duplicate_names`] to keep such entries as they are.
pub fn decode(input: &[u8]) -> Result<Document, DecodeError> {
    decode_with_options(input, DecodeOptions::default())
}

/// Decodes every root tag in `input` with the given options.
pub fn decode_with_options(input: &[u8], options: DecodeOptions) -> Result<Document, DecodeError> {
    let mut dec = Decoder::new(input, options);
    let mut roots = Vec::new();

    while !dec.reader.is_empty() {
        let root = read_root(&mut dec).inspect_err(|e| {
            debug!("document decode failed after {} root tags: {e}", roots.len());
        })?;
        trace!(
            "root tag {:?} ({:?}) ends at byte {}",
            root.name_lossy(),
            root.tag.tag_type(),
            dec.position()
        );
        roots.push(root);
    }

    debug!("decoded {} root tags from {} bytes", roots.len(), input.len());
    Ok(Document { roots })
}

/// Decodes the first root tag in `input`, returning it with the number of
/// bytes it occupied. Remaining bytes are left untouched.
pub fn decode_root(input: &[u8]) -> Result<(NamedTag, usize), DecodeError> {
    decode_root_with_options(input, DecodeOptions::default())
}

/// Decodes the first root tag in `input` with the given options.
pub fn decode_root_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<(NamedTag, usize), DecodeError> {
    let mut dec = Decoder::new(input, options);
    let root = read_root(&mut dec)?;
    Ok((root, dec.position()))
}

fn read_root(dec: &mut Decoder<'_>) -> Result<NamedTag, DecodeError> {
    let offset = dec.reader.position();
    let type_id = dec.reader.read_byte("root type")?;
    if type_id == TagType::End.id() {
        return Err(DecodeError::UnexpectedEnd { offset });
    }
    let codec = registry::lookup(type_id, offset)?;
    decode_named(dec, codec, "root name")
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes every root tag of `document`, in order.
pub fn encode(document: &Document) -> Result<Vec<u8>, EncodeError> {
    encode_with_options(document, EncodeOptions::default())
}

/// Encodes every root tag of `document` with the given options.
pub fn encode_with_options(document: &Document, options: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let mut enc = Encoder::new(options, document.encoded_len());
    for root in &document.roots {
        encode_named(&mut enc, &root.name, &root.tag)?;
    }
    let bytes = enc.into_bytes();
    debug!("encoded {} root tags into {} bytes", document.len(), bytes.len());
    Ok(bytes)
}

/// Encodes a single named root tag.
pub fn encode_root(root: &NamedTag) -> Result<Vec<u8>, EncodeError> {
    let mut enc = Encoder::new(EncodeOptions::default(), root.encoded_len());
    encode_named(&mut enc, &root.name, &root.tag)?;
    Ok(enc.into_bytes())
}
