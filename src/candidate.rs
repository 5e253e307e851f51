//! Candidate construction and the query-time subsequence matcher.
//!
//! A [`Candidate`] is built once per identifier — O(len) — and then queried
//! any number of times. The matcher is a greedy leftmost subsequence scan:
//! no backtracking, O(len) time, O(1) extra space. Greedy leftmost alignment
//! is sufficient for match/no-match correctness (if any alignment exists, the
//! leftmost one does), and "leftmost among remaining positions" is the policy
//! downstream ranking relies on for reproducible scores.

use memchr::{memchr, memchr2};

use crate::charclass::{UPPER_TO_LOWER_OFFSET, fold_to_lower, is_uppercase};
use crate::letters::{CharBitset, letter_bitset_from_string};
use crate::word_boundary::word_boundary_chars;

/// An identifier plus the matching metadata precomputed from it.
///
/// Immutable after construction; every field is a function of the text alone.
/// Shared references can be queried concurrently from any number of threads
/// without coordination.
#[derive(Debug, Clone)]
pub struct Candidate {
    text: String,
    word_boundary_chars: String,
    text_is_lowercase: bool,
    letters_present: CharBitset,
}

/// The payload of a successful query match.
///
/// Borrows the candidate's text and the caller's query rather than copying
/// them; the borrow checker keeps a `QueryMatch` from outliving either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryMatch<'c, 'q> {
    /// The matched candidate's original text.
    pub text: &'c str,
    /// Whether the candidate text contains no uppercase characters.
    pub text_is_lowercase: bool,
    /// Sum of the candidate byte positions consumed by the greedy leftmost
    /// alignment. Lower means a tighter, earlier match.
    pub index_sum: usize,
    /// The candidate's word-boundary characters, for initials-style ranking.
    pub word_boundary_chars: &'c str,
    /// The query that produced this match.
    pub query: &'q str,
}

impl Candidate {
    /// Builds a candidate from `text`, computing word-boundary characters,
    /// the lowercase flag, and the letter-presence bitset in one O(len) pass
    /// each. Never fails, including for the empty string.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            word_boundary_chars: word_boundary_chars(&text),
            text_is_lowercase: !text.bytes().any(is_uppercase),
            letters_present: letter_bitset_from_string(&text),
            text,
        }
    }

    /// The original candidate text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased word-boundary characters of the text (see
    /// [`word_boundary_chars`]).
    pub fn word_boundary_chars(&self) -> &str {
        &self.word_boundary_chars
    }

    /// True iff no byte of the text is an ASCII uppercase letter.
    pub fn text_is_lowercase(&self) -> bool {
        self.text_is_lowercase
    }

    /// Bitset of case-folded byte values occurring anywhere in the text.
    pub fn letters_present(&self) -> &CharBitset {
        &self.letters_present
    }

    /// O(1) pre-check: can `query_bitset`'s letters possibly be found in this
    /// candidate? A `false` here means no query with exactly those letters
    /// can match, so the O(len) matcher can be skipped.
    pub fn matches_query_bitset(&self, query_bitset: &CharBitset) -> bool {
        self.letters_present.contains_all(query_bitset)
    }

    /// Matches `query` as a subsequence of this candidate's text.
    ///
    /// Returns `None` when the query is not a subsequence under the active
    /// case mode. On success the returned [`QueryMatch`] carries the
    /// accumulated `index_sum` (sum of matched byte positions, lower is
    /// better) plus the candidate metadata downstream ranking needs.
    ///
    /// An empty query always matches with `index_sum = 0`; a non-empty query
    /// never matches empty text.
    ///
    /// Case modes:
    /// - `case_sensitive = false`: both sides are case-folded before
    ///   comparison.
    /// - `case_sensitive = true` (smart case): decided per query character.
    ///   An uppercase query character must match exactly; any other query
    ///   character compares against the case-folded candidate character, so
    ///   `f` matches both `f` and `F` while `F` matches only `F`.
    ///
    /// The scan consumes the leftmost remaining candidate position for each
    /// query character. Pure: identical calls return identical results.
    pub fn query_match_result<'c, 'q>(
        &'c self,
        query: &'q str,
        case_sensitive: bool,
    ) -> Option<QueryMatch<'c, 'q>> {
        let text = self.text.as_bytes();
        let mut index_sum = 0usize;
        let mut from = 0usize;

        for &query_byte in query.as_bytes() {
            let position = next_match(text, from, query_byte, case_sensitive)?;
            index_sum += position;
            from = position + 1;
        }

        trace!(
            "query {:?} matched {:?} with index_sum {}",
            query, self.text, index_sum
        );
        Some(QueryMatch {
            text: &self.text,
            text_is_lowercase: self.text_is_lowercase,
            index_sum,
            word_boundary_chars: &self.word_boundary_chars,
            query,
        })
    }
}

/// Finds the leftmost position at or after `from` whose byte matches
/// `query_byte` under the active case mode.
///
/// Every mode's acceptance set is one or two concrete byte values, so the
/// greedy leftmost step reduces to a memchr over the remaining text:
/// - smart case, uppercase query byte: exactly that byte;
/// - otherwise, the folded query byte — and, when it is a letter, its
///   uppercase form as well (folding the candidate side is equivalent to
///   accepting both cases).
#[inline]
fn next_match(text: &[u8], from: usize, query_byte: u8, case_sensitive: bool) -> Option<usize> {
    let rest = &text[from..];
    let found = if case_sensitive && is_uppercase(query_byte) {
        memchr(query_byte, rest)
    } else {
        let folded = fold_to_lower(query_byte);
        if folded.is_ascii_lowercase() {
            memchr2(folded, folded - UPPER_TO_LOWER_OFFSET, rest)
        } else {
            memchr(folded, rest)
        }
    };
    found.map(|offset| from + offset)
}
