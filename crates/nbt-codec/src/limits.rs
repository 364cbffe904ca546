//! Wire constants and default safety limits.

/// Number of tag kinds, ids `0..TAG_TYPE_COUNT`.
pub const TAG_TYPE_COUNT: usize = 11;

/// Default maximum nesting of lists and compounds when decoding.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Maximum String payload (and name) length, from the u16 length prefix.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Maximum ByteArray length and List count, from the i32 count prefix.
pub const MAX_ARRAY_LEN: usize = i32::MAX as usize;
