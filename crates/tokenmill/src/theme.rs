//! Theme alias resolution.
//!
//! The theme document scopes brand-specific aliases under a fixed set of
//! sections. Each `- key: value` entry becomes a `color_<snake>` key, and
//! its value runs through a three-step pipeline:
//!
//! 1. **Semantic substitution** — while the value names a known semantic
//!    key, replace it with that key's target. Capped at two hops: the
//!    real data never chains deeper than theme → semantic → primitive,
//!    and a reference cycle must not loop. A deeper chain stays partially
//!    resolved and shows up in the output as a non-variable value.
//! 2. **Reformat** — `color/...` values are already slash-delimited and
//!    pass through with the prefix stripped; everything else drops a
//!    `color_` prefix, rewrites compound snake families to camelCase, and
//!    turns the remaining underscores into slashes.
//! 3. **Canonicalize** — a result that matches a primitive `variable`
//!    path case-insensitively takes that variable's exact casing, so
//!    `color_Blue_10` and `color_blue_10` both land on `Blue/10`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::family;
use crate::key;
use crate::scan::{scan, Record, ScanOptions, SectionRule};

/// Section headers recognized in the theme document.
pub const SECTIONS: &[&str] = &["BRAND", "NEUTRAL", "ERROR", "LOADING", "SUCCESS", "AVATAR"];

const OPTIONS: ScanOptions = ScanOptions {
    sections: SectionRule::Enumerated(SECTIONS),
    // The theme grammar requires a value; bare lines are dropped.
    bare_items: false,
};

/// One resolved theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAlias {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// The emitted theme mapping document: one object per section, keys
/// sorted for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMapping {
    pub brand: BTreeMap<String, String>,
    pub neutral: BTreeMap<String, String>,
    pub error: BTreeMap<String, String>,
    pub loading: BTreeMap<String, String>,
    pub success: BTreeMap<String, String>,
    pub avatar: BTreeMap<String, String>,
}

impl ThemeMapping {
    pub fn entry_count(&self) -> usize {
        [
            &self.brand,
            &self.neutral,
            &self.error,
            &self.loading,
            &self.success,
            &self.avatar,
        ]
        .iter()
        .map(|section| section.len())
        .sum()
    }
}

/// Resolves theme values against the semantic layer and the primitive
/// variable table.
#[derive(Debug, Clone, Default)]
pub struct ThemeResolver {
    /// Normalized semantic key → target value.
    semantic: HashMap<String, String>,
    /// Lowercased `variable` path → canonical casing.
    variables: HashMap<String, String>,
}

/// Build outcome: the mapping plus the counts surfaced in the summary.
#[derive(Debug, Clone)]
pub struct ThemeBuild {
    pub mapping: ThemeMapping,
    /// Entries whose resolved value matches no primitive variable.
    /// Visible in the output as-is; never fatal.
    pub unresolved: usize,
}

impl ThemeResolver {
    pub fn new(
        semantic: HashMap<String, String>,
        variables: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            semantic,
            variables: variables
                .into_iter()
                .map(|v| (v.to_ascii_lowercase(), v))
                .collect(),
        }
    }

    /// Parses the theme document and resolves every entry.
    pub fn resolve_document(&self, text: &str) -> ThemeBuild {
        let mut build = ThemeBuild {
            mapping: ThemeMapping::default(),
            unresolved: 0,
        };

        for record in scan(text, OPTIONS) {
            let Some(section) = section_map(&mut build.mapping, &record.section) else {
                continue;
            };
            let alias = self.resolve_entry(&record);
            section.insert(alias.key, alias.value);
        }
        build.unresolved = self.count_unresolved(&build.mapping);
        build
    }

    /// Resolves one `- key: value` record.
    pub fn resolve_entry(&self, record: &Record) -> ThemeAlias {
        ThemeAlias {
            section: record.section.clone(),
            key: theme_key(&record.key),
            value: self.resolve_value(&record.value),
        }
    }

    /// Runs the value pipeline: semantic hops, reformat, canonicalize.
    pub fn resolve_value(&self, raw: &str) -> String {
        let mut value = raw.trim().to_string();
        if value.is_empty() {
            return value;
        }

        // At most two indirection hops; deeper chains are a data-quality
        // issue to surface, not to chase.
        for _ in 0..2 {
            match self.semantic.get(&key::normalize(&value)) {
                Some(next) if *next != value => value = next.clone(),
                _ => break,
            }
        }

        let formatted = format_value(&value);
        match self.variables.get(&formatted.to_ascii_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => formatted,
        }
    }

    fn count_unresolved(&self, mapping: &ThemeMapping) -> usize {
        [
            &mapping.brand,
            &mapping.neutral,
            &mapping.error,
            &mapping.loading,
            &mapping.success,
            &mapping.avatar,
        ]
        .iter()
        .flat_map(|section| section.values())
        .filter(|value| {
            !value.is_empty() && !self.variables.contains_key(&value.to_ascii_lowercase())
        })
        .count()
    }
}

fn section_map<'m>(
    mapping: &'m mut ThemeMapping,
    section: &str,
) -> Option<&'m mut BTreeMap<String, String>> {
    match section {
        "BRAND" => Some(&mut mapping.brand),
        "NEUTRAL" => Some(&mut mapping.neutral),
        "ERROR" => Some(&mut mapping.error),
        "LOADING" => Some(&mut mapping.loading),
        "SUCCESS" => Some(&mut mapping.success),
        "AVATAR" => Some(&mut mapping.avatar),
        _ => None,
    }
}

/// Emitted key convention: camelCase segments split on capitals, path
/// separators flattened, `color_` prefix
/// (`avatar/yellowOrange/20` → `color_avatar_yellow_orange_20`).
fn theme_key(path: &str) -> String {
    let mut snake = String::with_capacity(path.len() + 8);
    for (i, c) in path.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else if c == '/' || c == ' ' {
            snake.push('_');
        } else {
            snake.push(c);
        }
    }
    format!("color_{}", snake)
}

/// The reformat step of the value pipeline.
fn format_value(value: &str) -> String {
    if let Some(rest) = value.strip_prefix("color/") {
        return rest.to_string();
    }
    let value = value.strip_prefix("color_").unwrap_or(value);
    family::rewrite_snake_families(value).replace('_', "/")
}
