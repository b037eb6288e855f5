//! Line scanner shared by the three token-document grammars.
//!
//! All three layers (primitives, semantic, theme) are line-oriented
//! markdown lists with the same skeleton: `##` headers switch the active
//! section, `###` headers name a sub-family, `- key: value` lines carry
//! records, and `/* ... */` blocks hide staged content. One scanner walks
//! that skeleton; the grammars differ only in how `##` headers are
//! recognized and whether a bare `- key` (no colon) is a record.
//!
//! The scanner never fails. Documents are hand-edited and full of prose,
//! so any line that matches no pattern — including a list item outside an
//! active section — is dropped and scanning continues.
//!
//! # Example
//!
//! ```rust
//! use tokenmill::scan::{scan, Record, ScanOptions, SectionRule};
//!
//! let doc = "## Light Theme\n### Blue\n- Blue/10: #17191C\n";
//! let options = ScanOptions {
//!     sections: SectionRule::Enumerated(&["Light Theme", "Dark Theme"]),
//!     bare_items: false,
//! };
//! let records = scan(doc, options);
//! assert_eq!(records[0].key, "Blue/10");
//! assert_eq!(records[0].family.as_deref(), Some("Blue"));
//! ```

/// How `## <header>` lines map to sections.
#[derive(Debug, Clone, Copy)]
pub enum SectionRule {
    /// The header must be one of the listed names; any other header
    /// deactivates the section, silently dropping the items under it.
    Enumerated(&'static [&'static str]),
    /// `## <prefix><name>` opens section `<name>`; headers without the
    /// prefix deactivate the section.
    Prefixed(&'static str),
}

/// Per-grammar scanner configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub sections: SectionRule,
    /// Emit `- key` items (no colon) with an empty value instead of
    /// dropping them.
    pub bare_items: bool,
}

/// One list item, with the section and sub-family context it was seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub section: String,
    /// The most recent `###` header, if any.
    pub family: Option<String>,
    pub key: String,
    /// Everything after the first `:`, trimmed; empty for bare items.
    pub value: String,
}

/// Scans a document in a single pass, in document order.
pub fn scan(text: &str, options: ScanOptions) -> Vec<Record> {
    let mut records = Vec::new();
    let mut section: Option<String> = None;
    let mut family: Option<String> = None;
    let mut in_comment = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if in_comment {
            if closes_comment(line) {
                in_comment = false;
            }
            continue;
        }
        if opens_comment(line) {
            // A self-delimited `/* note */` line never enters block state.
            in_comment = !closes_comment(line);
            continue;
        }

        if let Some(header) = line.strip_prefix("## ") {
            let header = header.trim();
            section = match options.sections {
                SectionRule::Enumerated(names) => names
                    .iter()
                    .find(|name| **name == header)
                    .map(|name| name.to_string()),
                SectionRule::Prefixed(prefix) => {
                    header.strip_prefix(prefix).map(|name| name.trim().to_string())
                }
            };
            family = None;
            continue;
        }

        if let Some(name) = line.strip_prefix("### ") {
            family = Some(name.trim().to_string());
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            let Some(section) = &section else {
                continue;
            };
            match item.split_once(':') {
                Some((key, value)) => records.push(Record {
                    section: section.clone(),
                    family: family.clone(),
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                }),
                None if options.bare_items => records.push(Record {
                    section: section.clone(),
                    family: family.clone(),
                    key: item.trim().to_string(),
                    value: String::new(),
                }),
                None => {}
            }
        }
        // Anything else is commentary; dropped.
    }

    records
}

/// A comment block opens on `/*` or the `/****`-style marker run.
fn opens_comment(line: &str) -> bool {
    line.starts_with("/*") || line.starts_with("****")
}

/// A comment block closes on a line ending `*/` (covers `****/`).
fn closes_comment(line: &str) -> bool {
    line.ends_with("*/")
}
