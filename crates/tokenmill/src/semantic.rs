//! Semantic alias resolution: dev tokens matched to design labels.
//!
//! Two companion documents describe the semantic layer. The design-label
//! document lists the human-authored token names per category
//! (`- Color/text/primary`); the dev-code document lists the dotted dev
//! tokens with their target paths (`- text.primary: neutral/100`). The
//! resolver joins them through the canonical key space: a dev token with
//! no matching label still produces a record with an empty `designToken`,
//! so incomplete documentation is visible in the output instead of
//! silently shrinking it.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::family;
use crate::key::{self, NormalizedIndex};
use crate::scan::{scan, ScanOptions, SectionRule};

/// Category headers in both semantic documents: `## COLOR - <CATEGORY>`.
pub const CATEGORY_PREFIX: &str = "COLOR - ";

const OPTIONS: ScanOptions = ScanOptions {
    sections: SectionRule::Prefixed(CATEGORY_PREFIX),
    bare_items: true,
};

/// One dev-token record in the semantic mapping document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticAlias {
    /// Grouping key in the emitted document, not a serialized field.
    #[serde(skip)]
    pub category: String,
    /// Dotted dev path, e.g. `avatar.coolGray.bg`.
    pub dev_token: String,
    /// Matched design label in its original casing; empty on a miss.
    pub design_token: String,
    /// Target path as authored in the dev-code document.
    pub value: String,
}

/// The resolved semantic layer: categories in document order.
///
/// Serializes as `{ <category>: [alias, ...] }`.
#[derive(Debug, Clone, Default)]
pub struct SemanticTable {
    categories: Vec<(String, Vec<SemanticAlias>)>,
    unmatched: usize,
}

impl SemanticTable {
    /// Joins the dev-code document against the design-label document.
    pub fn resolve(design_doc: &str, dev_doc: &str) -> Self {
        let labels = design_label_index(design_doc);

        let mut table = SemanticTable::default();
        for record in scan(dev_doc, OPTIONS) {
            let design_token = labels
                .get(&lookup_key(&record.key))
                .unwrap_or_default()
                .to_string();
            if design_token.is_empty() {
                table.unmatched += 1;
            }

            let alias = SemanticAlias {
                category: record.section.clone(),
                dev_token: record.key,
                design_token,
                value: record.value,
            };
            match table.categories.iter_mut().find(|(c, _)| *c == record.section) {
                Some((_, aliases)) => aliases.push(alias),
                None => table.categories.push((record.section, vec![alias])),
            }
        }
        table
    }

    /// Categories in emission order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[SemanticAlias])> {
        self.categories
            .iter()
            .map(|(name, aliases)| (name.as_str(), aliases.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn alias_count(&self) -> usize {
        self.categories.iter().map(|(_, a)| a.len()).sum()
    }

    /// Dev tokens with no design-label match.
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// Flat lookup used by the theme pass: every alias's design label and
    /// dev token map, normalized, to its value. Aliases with no value are
    /// skipped — an empty target would erase a theme value on substitution.
    pub fn value_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for (_, aliases) in &self.categories {
            for alias in aliases {
                if alias.value.is_empty() {
                    continue;
                }
                if !alias.design_token.is_empty() {
                    map.insert(key::normalize(&alias.design_token), alias.value.clone());
                }
                map.insert(key::normalize(&alias.dev_token), alias.value.clone());
            }
        }
        map
    }
}

impl Serialize for SemanticTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, aliases) in &self.categories {
            map.serialize_entry(name, aliases)?;
        }
        map.end()
    }
}

/// Rebuilds the flat normalized value map from an emitted semantic
/// mapping document, for passes that run from the JSON artifact.
pub fn document_value_map(text: &str) -> Result<HashMap<String, String>, serde_json::Error> {
    let doc: HashMap<String, Vec<SemanticAlias>> = serde_json::from_str(text)?;
    let mut map = HashMap::new();
    for alias in doc.into_values().flatten() {
        if alias.value.is_empty() {
            continue;
        }
        if !alias.design_token.is_empty() {
            map.insert(key::normalize(&alias.design_token), alias.value.clone());
        }
        map.insert(key::normalize(&alias.dev_token), alias.value);
    }
    Ok(map)
}

/// Builds the design-label index: every `- Color/...` list item, keyed by
/// its canonical form, original casing preserved as the value.
fn design_label_index(text: &str) -> NormalizedIndex {
    let mut index = NormalizedIndex::new();
    for record in scan(text, OPTIONS) {
        if record.key.starts_with("Color/") {
            index.insert(&record.key);
        }
    }
    index
}

/// Constructs the label lookup key for a dev token.
///
/// The `avatar` category carries its family as one camelCase segment
/// (`avatar.coolGray.bg`) while the labels spell it as words
/// (`Color/Avatar/Cool Gray/BG`); the family segment is space-joined
/// before normalization so the two meet. Every other category joins its
/// dotted segments with underscores.
pub(crate) fn lookup_key(dev_token: &str) -> String {
    let parts: Vec<&str> = dev_token.split('.').collect();
    if parts.first() == Some(&"avatar") && parts.len() >= 2 {
        let family = family::camel_to_spaced(parts[1]);
        let suffix = parts[2..].join("_");
        format!("Color_avatar_{}_{}", family, suffix)
    } else {
        format!("Color_{}", dev_token.replace('.', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESIGN_DOC: &str = "\
## COLOR - TEXT
- Color/Text/Primary
- Color/Text/Secondary

## COLOR - AVATAR
### AVATAR - COOL GRAY
- Color/Avatar/Cool Gray/BG
- Color/Avatar/Cool Gray/Text
";

    const DEV_DOC: &str = "\
## COLOR - TEXT
- text.primary: neutral/100
- text.secondary: neutral/80
- text.undocumented: neutral/60

## COLOR - AVATAR
- avatar.coolGray.bg: color_cool_gray_20
- avatar.coolGray.text: color_cool_gray_90
";

    // =========================================================================
    // Matching
    // =========================================================================

    #[test]
    fn test_dev_tokens_match_design_labels() {
        let table = SemanticTable::resolve(DESIGN_DOC, DEV_DOC);
        let (_, text) = table.categories().next().unwrap();
        assert_eq!(text[0].design_token, "Color/Text/Primary");
        assert_eq!(text[0].value, "neutral/100");
    }

    #[test]
    fn test_avatar_family_segment_matches_spaced_label() {
        let table = SemanticTable::resolve(DESIGN_DOC, DEV_DOC);
        let avatar = table
            .categories()
            .find(|(name, _)| *name == "AVATAR")
            .map(|(_, aliases)| aliases)
            .unwrap();
        assert_eq!(avatar[0].design_token, "Color/Avatar/Cool Gray/BG");
        assert_eq!(avatar[1].design_token, "Color/Avatar/Cool Gray/Text");
    }

    #[test]
    fn test_miss_emits_record_with_empty_design_token() {
        let table = SemanticTable::resolve(DESIGN_DOC, DEV_DOC);
        let (_, text) = table.categories().next().unwrap();
        // Output length equals dev-token count: nothing is omitted.
        assert_eq!(text.len(), 3);
        assert_eq!(text[2].dev_token, "text.undocumented");
        assert_eq!(text[2].design_token, "");
        assert_eq!(table.unmatched(), 1);
    }

    #[test]
    fn test_bare_dev_token_keeps_empty_value() {
        let table = SemanticTable::resolve(DESIGN_DOC, "## COLOR - TEXT\n- text.primary\n");
        let (_, text) = table.categories().next().unwrap();
        assert_eq!(text[0].value, "");
        assert_eq!(text[0].design_token, "Color/Text/Primary");
    }

    #[test]
    fn test_lookup_key_construction() {
        assert_eq!(lookup_key("text.primary"), "Color_text_primary");
        assert_eq!(
            lookup_key("bg.interactive.primary"),
            "Color_bg_interactive_primary"
        );
        assert_eq!(lookup_key("avatar.coolGray.bg"), "Color_avatar_cool gray_bg");
        assert_eq!(
            lookup_key("avatar.coolGray.bg.bold"),
            "Color_avatar_cool gray_bg_bold"
        );
    }

    // =========================================================================
    // Value map
    // =========================================================================

    #[test]
    fn test_value_map_keyed_by_both_spellings() {
        let table = SemanticTable::resolve(DESIGN_DOC, DEV_DOC);
        let map = table.value_map();
        assert_eq!(map.get("textprimary").map(String::as_str), Some("neutral/100"));
        // The design label lands on the same canonical key as the dev token.
        assert_eq!(
            map.get(&key::normalize("Color/Text/Primary")).map(String::as_str),
            Some("neutral/100")
        );
    }

    #[test]
    fn test_document_value_map_round_trip() {
        let table = SemanticTable::resolve(DESIGN_DOC, DEV_DOC);
        let json = serde_json::to_string_pretty(&table).unwrap();
        let map = document_value_map(&json).unwrap();
        assert_eq!(map, table.value_map());
    }
}
