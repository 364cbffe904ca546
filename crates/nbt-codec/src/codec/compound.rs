//! Compound payload encoding/decoding.
//!
//! Wire layout: zero or more `type id, name, payload` entries followed by a
//! single End byte. Decoding loops reading a type id; End finishes the
//! compound, a known id reads one entry and loops, an unknown id fails the
//! whole compound.

use rustc_hash::FxHashSet;

use crate::codec::registry;
use crate::codec::tag::{encode_named, Decoder, Encoder};
use crate::codec::value::read_string_bytes;
use crate::error::{DecodeError, EncodeError};
use crate::model::{Compound, NamedTag, Tag, TagType};

// =============================================================================
// DECODING
// =============================================================================

pub(crate) fn read_compound(dec: &mut Decoder<'_>) -> Result<Tag, DecodeError> {
    dec.nested(|dec| {
        let mut compound = Compound::new();
        let mut seen = FxHashSet::default();

        loop {
            let offset = dec.reader.position();
            let type_id = dec.reader.read_byte("compound entry type")?;
            if type_id == TagType::End.id() {
                break;
            }
            let codec = registry::lookup(type_id, offset)?;

            let name = read_string_bytes(dec, "compound entry name")?;
            if !dec.options.allow_duplicate_names && !seen.insert(name) {
                return Err(DecodeError::DuplicateName {
                    name: String::from_utf8_lossy(name).into_owned(),
                    offset,
                });
            }

            let tag = (codec.read)(dec)?;
            compound.entries.push(NamedTag {
                name: name.to_vec(),
                tag,
            });
        }

        Ok(Tag::Compound(compound))
    })
}

// =============================================================================
// ENCODING
// =============================================================================

pub(crate) fn encode_compound(enc: &mut Encoder, compound: &Compound) -> Result<(), EncodeError> {
    enc.nested(|enc| {
        if !enc.options.allow_duplicate_names {
            if let Some(name) = compound.first_duplicate() {
                return Err(EncodeError::InconsistentCompound {
                    name: String::from_utf8_lossy(name).into_owned(),
                });
            }
        }

        for entry in &compound.entries {
            encode_named(enc, &entry.name, &entry.tag)?;
        }
        enc.writer.write_byte(TagType::End.id());
        Ok(())
    })
}
