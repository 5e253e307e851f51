//! Seqmatch is a fuzzy subsequence-matching primitive for identifier
//! completion engines.
//!
//! A [`Candidate`] precomputes matching metadata for one identifier once
//! (word-boundary characters, case classification, letter-presence bitset) and
//! then answers any number of query-time subsequence matches in a single
//! O(len) scan each. Ranking across candidates, candidate storage, and editor
//! integration are left to the caller.
//!
//! # Examples
//!
//! ```
//! use seqmatch::Candidate;
//!
//! let candidate = Candidate::new("FooBar");
//! assert_eq!(candidate.word_boundary_chars(), "fb");
//!
//! // Smart case: lowercase query letters match either case,
//! // uppercase query letters force an uppercase match.
//! let result = candidate.query_match_result("fb", true).unwrap();
//! assert_eq!(result.index_sum, 3); // 'F' at 0, 'B' at 3
//! assert!(Candidate::new("foobar").query_match_result("FB", true).is_none());
//! ```
//!
//! Candidates are immutable after construction, so a ranking engine may fan a
//! single query out across many candidates from multiple threads without
//! locking.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod candidate;
pub mod charclass;
pub mod letters;
pub mod word_boundary;

pub use candidate::{Candidate, QueryMatch};
pub use letters::{CharBitset, letter_bitset_from_string};
pub use word_boundary::word_boundary_chars;
