//! Primitive palette assembly from the light/dark token document.
//!
//! The primitives document lists each family twice, once under
//! `## Light Theme` and once under `## Dark Theme`. Assembly merges the
//! two parses per family and level: either side may be missing, and a
//! family authored in only one mode still appears with the other hex left
//! empty. RGB/HSL strings are derived from the light hex when present,
//! falling back to the dark hex.
//!
//! A malformed hex literal skips that one token — the count is carried on
//! the build report so the CLI can surface it — and never aborts the run.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::color;
use crate::family;
use crate::scan::{scan, ScanOptions, SectionRule};

/// Mode markers recognized in the primitives document.
pub const MODE_SECTIONS: &[&str] = &["Light Theme", "Dark Theme"];

const LIGHT: &str = "Light Theme";

/// Display rewrite for the literal `alpha` level.
///
/// The `(10%)` suffix is a fixed labeling convention carried over from
/// the site, not a value derived from the hex alpha byte; the `variable`
/// path keeps the raw level name so identifiers survive re-labeling.
/// TODO: revisit if a primitive ever ships an alpha byte other than 0x1A.
const ALPHA_DISPLAY: &str = "alpha (10%)";

/// A single primitive color record, immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    pub family: String,
    /// Display form of the level (`alpha` is shown as `alpha (10%)`).
    pub level: String,
    pub hex_light: String,
    pub hex_dark: String,
    pub rgb: String,
    pub hsl: String,
    /// Stable `Family/Level` identifier, using the Pascal no-space family
    /// and the pre-rewrite level name (`Red/alpha`, never `Red/alpha (10%)`).
    pub variable: String,
}

/// The assembled primitive table: families in encounter order, each an
/// ordered run of [`ColorToken`].
///
/// Serializes as the palette document shape
/// `{ "colors": { "palette": { <Family>: [token, ...] } } }`.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    families: Vec<(String, Vec<ColorToken>)>,
    skipped: usize,
}

impl Palette {
    /// Builds the palette from the primitives document text.
    pub fn from_markdown(text: &str) -> Self {
        let records = scan(
            text,
            ScanOptions {
                sections: SectionRule::Enumerated(MODE_SECTIONS),
                bare_items: false,
            },
        );

        // Families and levels keep document encounter order; the light
        // section is scanned first, so dark-only families append after.
        let mut order: Vec<String> = Vec::new();
        let mut merged: HashMap<String, FamilyLevels> = HashMap::new();

        for record in records {
            let Some(header) = record.family else {
                continue;
            };
            // `- Family/Level: #hex` — the family half of the key is
            // redundant with the `###` header and ignored.
            let level = match record.key.split_once('/') {
                Some((_, level)) => level.trim(),
                None => record.key.as_str(),
            };
            // Hand-edited values sometimes carry trailing commentary.
            let Some(hex) = record.value.split_whitespace().next() else {
                continue;
            };

            let levels = merged.entry(header.clone()).or_insert_with(|| {
                order.push(header.clone());
                FamilyLevels::default()
            });
            levels.record(level, hex, record.section == LIGHT);
        }

        let mut palette = Palette::default();
        for header in order {
            let levels = &merged[&header];
            let display_family = family::display_name(&header);
            let variable_family = family::collapse(&display_family);

            let mut sorted: Vec<&String> = levels.order.iter().collect();
            sorted.sort_by_key(|level| level_sort_key(level.as_str()));

            let mut tokens = Vec::with_capacity(sorted.len());
            for level in sorted {
                let hex_light = levels.light.get(level).cloned().unwrap_or_default();
                let hex_dark = levels.dark.get(level).cloned().unwrap_or_default();
                let base = if hex_light.is_empty() { &hex_dark } else { &hex_light };

                let rgb = match color::hex_to_rgb(base) {
                    Ok(rgb) => rgb,
                    Err(_) => {
                        palette.skipped += 1;
                        continue;
                    }
                };

                tokens.push(ColorToken {
                    family: display_family.clone(),
                    level: display_level(level),
                    hex_light,
                    hex_dark,
                    rgb: color::rgb_string(rgb),
                    hsl: color::hsl_string(rgb),
                    variable: format!("{}/{}", variable_family, level),
                });
            }
            palette.families.push((display_family, tokens));
        }
        palette
    }

    /// Families in emission order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &[ColorToken])> {
        self.families
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn token_count(&self) -> usize {
        self.families.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    /// Tokens dropped because their hex literal would not decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Every `variable` path, in emission order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.families
            .iter()
            .flat_map(|(_, tokens)| tokens.iter().map(|t| t.variable.as_str()))
    }
}

/// Per-family merge state: level encounter order plus one hex map per mode.
#[derive(Debug, Default)]
struct FamilyLevels {
    order: Vec<String>,
    light: HashMap<String, String>,
    dark: HashMap<String, String>,
}

impl FamilyLevels {
    fn record(&mut self, level: &str, hex: &str, is_light: bool) {
        let side = if is_light { &mut self.light } else { &mut self.dark };
        if !self.order.iter().any(|known| known == level) {
            self.order.push(level.to_string());
        }
        side.insert(level.to_string(), hex.to_string());
    }
}

/// Sort key for levels within a family: `white` first, numeric levels
/// ascending, alpha-bearing levels after all numerics, anything else
/// last. Ties keep encounter order (the sort is stable).
fn level_sort_key(level: &str) -> i64 {
    let level = level.to_ascii_lowercase();
    if level == "white" {
        return -1;
    }
    if level.contains("alpha") {
        return 9_000;
    }
    match level.parse::<i64>() {
        Ok(n) => n,
        Err(_) => 9_999,
    }
}

fn display_level(level: &str) -> String {
    if level == "alpha" {
        ALPHA_DISPLAY.to_string()
    } else {
        level.to_string()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct FamilyMap<'a>(&'a [(String, Vec<ColorToken>)]);
        impl Serialize for FamilyMap<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, tokens) in self.0 {
                    map.serialize_entry(name, tokens)?;
                }
                map.end()
            }
        }

        struct Colors<'a>(&'a Palette);
        impl Serialize for Colors<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("palette", &FamilyMap(&self.0.families))?;
                map.end()
            }
        }

        let mut root = serializer.serialize_map(Some(1))?;
        root.serialize_entry("colors", &Colors(self))?;
        root.end()
    }
}

/// Reads the `variable` paths back out of an emitted palette document.
///
/// The theme pass consumes the palette JSON written by an earlier run
/// rather than re-parsing the markdown, so run ordering is part of the
/// pipeline contract.
pub fn document_variables(text: &str) -> Result<Vec<String>, serde_json::Error> {
    #[derive(Deserialize)]
    struct Doc {
        colors: Colors,
    }
    #[derive(Deserialize)]
    struct Colors {
        palette: std::collections::BTreeMap<String, Vec<ColorToken>>,
    }

    let doc: Doc = serde_json::from_str(text)?;
    Ok(doc
        .colors
        .palette
        .into_values()
        .flatten()
        .map(|token| token.variable)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
## Light Theme

### Blue
- Blue/10: #E9F0FD
- Blue/20: #D3E1FB

### Gray
- Gray/white: #FFFFFF
- Gray/10: #F7F7F8
- Gray/alpha: #1D1D1E14

## Dark Theme

### Blue
- Blue/10: #17191C
- Blue/30: #1E3A5F

### CoolGray
- CoolGray/20: #33373D
";

    // =========================================================================
    // Merge semantics
    // =========================================================================

    #[test]
    fn test_levels_union_across_modes() {
        let palette = Palette::from_markdown(DOC);
        let (_, blue) = palette.families().next().unwrap();
        let levels: Vec<&str> = blue.iter().map(|t| t.level.as_str()).collect();
        assert_eq!(levels, vec!["10", "20", "30"]);

        let ten = &blue[0];
        assert_eq!(ten.hex_light, "#E9F0FD");
        assert_eq!(ten.hex_dark, "#17191C");
        // Light-only and dark-only levels keep the missing side empty.
        assert_eq!(blue[1].hex_dark, "");
        assert_eq!(blue[2].hex_light, "");
    }

    #[test]
    fn test_dark_only_family_still_appears() {
        let palette = Palette::from_markdown(DOC);
        let names: Vec<&str> = palette.families().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Blue", "Gray", "Cool Gray"]);

        let (_, cool_gray) = palette.families().last().unwrap();
        assert_eq!(cool_gray[0].hex_light, "");
        assert_eq!(cool_gray[0].hex_dark, "#33373D");
        assert_eq!(cool_gray[0].variable, "CoolGray/20");
    }

    #[test]
    fn test_rgb_hsl_prefer_light_hex() {
        let palette = Palette::from_markdown(DOC);
        let (_, blue) = palette.families().next().unwrap();
        assert_eq!(blue[0].rgb, "rgb(233, 240, 253)");
        // Dark-only level derives from the dark hex.
        assert_eq!(blue[2].rgb, "rgb(30, 58, 95)");
    }

    // =========================================================================
    // Level naming and ordering
    // =========================================================================

    #[test]
    fn test_level_sort_order() {
        let doc = "\
## Light Theme
### Red
- Red/20: #FFCDD2
- Red/white: #FFFFFF
- Red/alpha: #D323231A
- Red/10: #FFEBEE
";
        let palette = Palette::from_markdown(doc);
        let (_, red) = palette.families().next().unwrap();
        let levels: Vec<&str> = red.iter().map(|t| t.level.as_str()).collect();
        assert_eq!(levels, vec!["white", "10", "20", "alpha (10%)"]);
    }

    #[test]
    fn test_alpha_display_rewrite_keeps_variable_stable() {
        let palette = Palette::from_markdown(DOC);
        let gray = palette
            .families()
            .find(|(name, _)| *name == "Gray")
            .map(|(_, tokens)| tokens)
            .unwrap();
        let alpha = gray.iter().find(|t| t.level.contains("alpha")).unwrap();
        assert_eq!(alpha.level, "alpha (10%)");
        assert_eq!(alpha.variable, "Gray/alpha");
        // The 8-digit literal decodes with its alpha byte discarded.
        assert_eq!(alpha.rgb, "rgb(29, 29, 30)");
    }

    #[test]
    fn test_compound_family_display_and_variable_forms() {
        let doc = "\
## Light Theme
### YellowOrange
- YellowOrange/20: #FFE0B2
";
        let palette = Palette::from_markdown(doc);
        let (name, tokens) = palette.families().next().unwrap();
        assert_eq!(name, "Yellow Orange");
        assert_eq!(tokens[0].family, "Yellow Orange");
        assert_eq!(tokens[0].variable, "YellowOrange/20");
    }

    // =========================================================================
    // Malformed input
    // =========================================================================

    #[test]
    fn test_malformed_hex_skips_token_not_run() {
        let doc = "\
## Light Theme
### Blue
- Blue/10: #NOTHEX
- Blue/20: #D3E1FB
";
        let palette = Palette::from_markdown(doc);
        assert_eq!(palette.skipped(), 1);
        assert_eq!(palette.token_count(), 1);
        let (_, blue) = palette.families().next().unwrap();
        assert_eq!(blue[0].level, "20");
    }

    #[test]
    fn test_trailing_commentary_after_hex_is_ignored() {
        let doc = "\
## Light Theme
### Blue
- Blue/10: #17191C needs review
";
        let palette = Palette::from_markdown(doc);
        assert_eq!(palette.token_count(), 1);
    }

    // =========================================================================
    // Document round trip
    // =========================================================================

    #[test]
    fn test_document_variables_read_back() {
        let palette = Palette::from_markdown(DOC);
        let json = serde_json::to_string_pretty(&palette).unwrap();
        let mut variables = document_variables(&json).unwrap();
        variables.sort();

        let mut expected: Vec<String> = palette.variables().map(String::from).collect();
        expected.sort();
        assert_eq!(variables, expected);
        assert!(variables.iter().any(|v| v == "Blue/10"));
    }
}
