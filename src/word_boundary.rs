//! Word-boundary character extraction for camelCase and snake_case
//! identifiers.
//!
//! The extracted string is what downstream ranking aligns a query against to
//! detect "initials" matches (`fb` hitting `FooBar`), so the rules here are a
//! stability contract, not a heuristic to tune freely.

/// Returns the lowercased word-boundary characters of `text`, in order.
///
/// A character is a word-boundary character when any of these holds:
/// - it is the first character and not an underscore;
/// - it is uppercase and the previous character is not (a camelCase segment
///   start; an acronym run contributes only its first letter);
/// - the previous character is an underscore and it is alphabetic (a
///   snake_case segment start).
///
/// The result is a subsequence of `text`, case-folded to lowercase. Single
/// left-to-right pass, pure and deterministic.
///
/// ```
/// use seqmatch::word_boundary_chars;
///
/// assert_eq!(word_boundary_chars("FooBar"), "fb");
/// assert_eq!(word_boundary_chars("foo_bar"), "fb");
/// assert_eq!(word_boundary_chars("_foo"), "f");
/// ```
pub fn word_boundary_chars(text: &str) -> String {
    let mut result = String::new();
    let mut prev: Option<char> = None;

    for (i, ch) in text.chars().enumerate() {
        let first_but_not_underscore = i == 0 && ch != '_';
        let camel_segment_start =
            ch.is_ascii_uppercase() && prev.is_some_and(|p| !p.is_ascii_uppercase());
        let after_underscore = prev == Some('_') && ch.is_ascii_alphabetic();

        if first_but_not_underscore || camel_segment_start || after_underscore {
            result.push(ch.to_ascii_lowercase());
        }

        prev = Some(ch);
    }

    result
}
