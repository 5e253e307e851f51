//! Stateless byte-level classification helpers shared by candidate
//! preprocessing and the query matcher.
//!
//! Classification is deliberately ASCII-class: bytes outside the ASCII range
//! are never uppercase and never fold, but they still get a well-defined slot
//! in the letter-presence bitset. Multi-byte sequences are classified
//! byte-wise, which keeps every input deterministic.

/// Fixed offset between an ASCII uppercase letter and its lowercase form.
/// Adding it lowercases a byte that is known to be uppercase, without a
/// classification-table lookup.
pub const UPPER_TO_LOWER_OFFSET: u8 = b'a' - b'A';

/// True iff `byte` is an ASCII uppercase letter.
#[inline]
pub fn is_uppercase(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// Case-folds `byte` to lowercase; identity on anything that is not an ASCII
/// uppercase letter.
#[inline]
pub fn fold_to_lower(byte: u8) -> u8 {
    if is_uppercase(byte) { byte + UPPER_TO_LOWER_OFFSET } else { byte }
}

/// Slot in the letter-presence bitset for `byte`, case-folding first so that
/// `index_for_char(b'A') == index_for_char(b'a')`.
///
/// The bitset domain covers the full byte range, so every possible input maps
/// to a valid slot.
#[inline]
pub fn index_for_char(byte: u8) -> usize {
    fold_to_lower(byte) as usize
}
