//! Display-name canonicalization.
//!
//! A *normalized key* is the case- and punctuation-insensitive form a display
//! name is indexed under: lowercase ASCII letters and spaces only.  Two names
//! that normalize identically are treated as variants of the same key.

/// Reduce a display name to its normalized lookup key.
///
/// Keeps letters and spaces, drops everything else, lowercases the result.
/// Normalization is idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
