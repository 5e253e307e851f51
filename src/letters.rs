//! Fixed-domain letter-presence bitset.
//!
//! One bit per case-folded byte value lets a ranking engine reject a
//! candidate against a query in O(1) — if any query letter's bit is missing
//! from the candidate's bitset, no subsequence match is possible and the O(n)
//! matcher never runs.

use crate::charclass::index_for_char;

/// Number of 64-bit words backing the bitset: 256 slots, one per possible
/// byte value after case folding. Sizing to the full byte range means no
/// input byte can ever index out of bounds.
const BITSET_WORDS: usize = 4;

/// A 256-bit set over case-folded byte values.
///
/// Plain `Copy` value type with no ownership concerns; `Default` is the empty
/// set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharBitset([u64; BITSET_WORDS]);

impl CharBitset {
    /// Marks `slot` as present. Slots at or beyond 256 are ignored rather
    /// than wrapped, though `index_for_char` never produces one.
    #[inline]
    pub fn set(&mut self, slot: usize) {
        if slot < BITSET_WORDS * 64 {
            self.0[slot / 64] |= 1u64 << (slot % 64);
        }
    }

    /// True iff `slot` is present.
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot < BITSET_WORDS * 64 && self.0[slot / 64] & (1u64 << (slot % 64)) != 0
    }

    /// True iff every slot of `other` is also present in `self`.
    #[inline]
    pub fn contains_all(&self, other: &CharBitset) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(mine, theirs)| mine & theirs == *theirs)
    }

    /// True iff no slot is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }
}

/// Builds the letter-presence bitset for `text`: one bit per distinct
/// case-folded byte occurring anywhere in it.
pub fn letter_bitset_from_string(text: &str) -> CharBitset {
    let mut letters = CharBitset::default();
    for &byte in text.as_bytes() {
        letters.set(index_for_char(byte));
    }
    letters
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    fn slots(letters: &CharBitset) -> Vec<usize> {
        (0..256).filter(|&slot| letters.contains(slot)).collect()
    }

    #[test]
    fn test_empty_text_empty_bitset() {
        assert!(letter_bitset_from_string("").is_empty());
    }

    #[test]
    fn test_exact_bits_set() {
        let letters = letter_bitset_from_string("abc");
        assert_eq!(
            slots(&letters),
            vec![b'a' as usize, b'b' as usize, b'c' as usize]
        );
    }

    #[test]
    fn test_case_folded() {
        // "AbC" sets the same three bits as "abc".
        assert_eq!(
            letter_bitset_from_string("AbC"),
            letter_bitset_from_string("abc")
        );
    }

    #[test]
    fn test_non_letter_bytes_get_slots() {
        let letters = letter_bitset_from_string("a_1");
        assert!(letters.contains(b'a' as usize));
        assert!(letters.contains(b'_' as usize));
        assert!(letters.contains(b'1' as usize));
        assert!(!letters.contains(b'b' as usize));
    }

    #[test]
    fn test_contains_all() {
        let candidate = letter_bitset_from_string("foobar");
        assert!(candidate.contains_all(&letter_bitset_from_string("fb")));
        assert!(candidate.contains_all(&letter_bitset_from_string("")));
        assert!(candidate.contains_all(&candidate));
        assert!(!candidate.contains_all(&letter_bitset_from_string("fz")));
    }

    #[test]
    fn test_out_of_range_slot_ignored() {
        let mut letters = CharBitset::default();
        letters.set(300);
        assert!(letters.is_empty());
        assert!(!letters.contains(300));
    }
}
