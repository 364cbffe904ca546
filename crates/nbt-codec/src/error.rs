//! Error types for NBT decoding, encoding and tree construction.

use thiserror::Error;

use crate::model::TagType;

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fewer bytes remain than a width or length field demands.
    TruncatedInput,
    /// Type id outside the known 0-10 range.
    UnknownTagType,
    /// Negative or otherwise unusable declared count.
    InvalidLength,
    /// End marker outside a compound.
    UnexpectedEnd,
    /// Recursion guard tripped.
    NestingTooDeep,
    /// Repeated entry name inside one compound.
    DuplicateName,
}

/// Error during binary decoding.
///
/// Every variant carries the byte offset at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("truncated input while reading {context} at byte {offset}: need {needed} bytes, {remaining} remain")]
    TruncatedInput {
        context: &'static str,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("unknown tag type {type_id} at byte {offset}")]
    UnknownTagType { type_id: u8, offset: usize },

    #[error("invalid {context} length {len} at byte {offset}")]
    InvalidLength {
        context: &'static str,
        len: i64,
        offset: usize,
    },

    #[error("end tag outside of a compound at byte {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("nesting exceeds maximum depth {max_depth} at byte {offset}")]
    NestingTooDeep { max_depth: usize, offset: usize },

    #[error("duplicate entry name {name:?} in compound at byte {offset}")]
    DuplicateName { name: String, offset: usize },
}

impl DecodeError {
    /// Returns the byte offset where decoding failed.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::TruncatedInput { offset, .. }
            | DecodeError::UnknownTagType { offset, .. }
            | DecodeError::InvalidLength { offset, .. }
            | DecodeError::UnexpectedEnd { offset }
            | DecodeError::NestingTooDeep { offset, .. }
            | DecodeError::DuplicateName { offset, .. } => *offset,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            DecodeError::UnknownTagType { .. } => ErrorKind::UnknownTagType,
            DecodeError::InvalidLength { .. } => ErrorKind::InvalidLength,
            DecodeError::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            DecodeError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            DecodeError::DuplicateName { .. } => ErrorKind::DuplicateName,
        }
    }
}

/// Error during binary encoding.
///
/// Trees built through the model API never fail here: lengths, list types
/// and name uniqueness are checked as they are assembled. These variants
/// report trees whose public fields were edited directly, or an explicit
/// [`EncodeOptions::with_max_depth`](crate::EncodeOptions::with_max_depth).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("list declares {expected:?} elements but element {index} is {found:?}")]
    InconsistentList {
        expected: TagType,
        found: TagType,
        index: usize,
    },

    #[error("compound contains duplicate entry name {name:?}")]
    InconsistentCompound { name: String },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("nesting exceeds maximum depth {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

/// Error raised by the tree construction API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TagError {
    #[error("list holds {expected:?} elements, cannot add {found:?}")]
    ListTypeMismatch { expected: TagType, found: TagType },

    #[error("compound already contains an entry named {name:?}")]
    DuplicateName { name: String },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
