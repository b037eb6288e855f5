//! Canonical key space for token matching.
//!
//! The same token is spelled many ways across the documents:
//! `Color/Text/Primary` in the design-label list, `text.primary` in the
//! dev-code list, `Text_Primary` in older sections. [`normalize`]
//! collapses prefix, separator style, and casing so all of them compare
//! equal; [`NormalizedIndex`] maps the canonical form back to the
//! original spelling for one layer's vocabulary.

use std::collections::HashMap;

/// The prefix token stripped during normalization, compared case-insensitively.
const PREFIX: &str = "color";

/// Canonicalizes a token key.
///
/// Strips one leading case-insensitive `color` token (any separator:
/// `Color/`, `color_`, `Color.`), drops every character that is not an
/// ASCII letter or digit, and lowercases the remainder. Total: never
/// fails. Distinct keys that normalize equal are treated as intentional
/// aliasing; within one document, last write wins.
///
/// # Example
///
/// ```rust
/// use tokenmill::key::normalize;
///
/// assert_eq!(normalize("Color/Text/Primary"), "textprimary");
/// assert_eq!(normalize("text.primary"), "textprimary");
/// assert_eq!(normalize("Text_Primary"), "textprimary");
/// ```
pub fn normalize(key: &str) -> String {
    let mut rest = key;
    if let Some(head) = key.get(..PREFIX.len()) {
        if head.eq_ignore_ascii_case(PREFIX) {
            let tail = &key[PREFIX.len()..];
            let mut chars = tail.chars();
            // Only a separator makes this a prefix token; `colors` is a key.
            if chars.next().is_some_and(|c| !c.is_ascii_alphanumeric()) {
                rest = chars.as_str();
            }
        }
    }

    rest.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One-shot lookup from canonical key to the original-cased key.
///
/// Built per run and scoped to a single layer's vocabulary; never
/// persisted. Insertion collisions are last-write-wins, matching the
/// normalization contract.
#[derive(Debug, Clone, Default)]
pub struct NormalizedIndex {
    entries: HashMap<String, String>,
}

impl NormalizedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes an original-cased key under its canonical form.
    pub fn insert(&mut self, original: &str) {
        self.entries
            .insert(normalize(original), original.to_string());
    }

    /// Looks up the original spelling for any spelling of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
