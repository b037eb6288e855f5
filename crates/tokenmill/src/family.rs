//! Compound family-name codec.
//!
//! Six two-word color families recur throughout the documents in four
//! spellings: display (`Yellow Orange`), Pascal no-space (`YellowOrange`),
//! camelCase (`yellowOrange`), and snake (`yellow_orange`). Conversions
//! are keyed by this explicit list rather than by pattern-matching, so a
//! new compound family is added in exactly one place. Single-word
//! families (`Blue`, `Red`, `Gray`) pass through every conversion
//! unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

struct FamilyForms {
    display: &'static str,
    pascal: &'static str,
    camel: &'static str,
    snake: &'static str,
}

const COMPOUND: &[FamilyForms] = &[
    FamilyForms {
        display: "Cool Gray",
        pascal: "CoolGray",
        camel: "coolGray",
        snake: "cool_gray",
    },
    FamilyForms {
        display: "Deep Blue",
        pascal: "DeepBlue",
        camel: "deepBlue",
        snake: "deep_blue",
    },
    FamilyForms {
        display: "Yellow Orange",
        pascal: "YellowOrange",
        camel: "yellowOrange",
        snake: "yellow_orange",
    },
    FamilyForms {
        display: "Light Blue",
        pascal: "LightBlue",
        camel: "lightBlue",
        snake: "light_blue",
    },
    FamilyForms {
        display: "Deep Green",
        pascal: "DeepGreen",
        camel: "deepGreen",
        snake: "deep_green",
    },
    FamilyForms {
        display: "Black Alpha",
        pascal: "BlackAlpha",
        camel: "blackAlpha",
        snake: "black_alpha",
    },
];

static BY_PASCAL: Lazy<HashMap<&'static str, &'static FamilyForms>> =
    Lazy::new(|| COMPOUND.iter().map(|f| (f.pascal, f)).collect());

static BY_DISPLAY: Lazy<HashMap<&'static str, &'static FamilyForms>> =
    Lazy::new(|| COMPOUND.iter().map(|f| (f.display, f)).collect());

/// Display form for a primitives-document family header.
///
/// Headers are authored Pascal no-space (`### YellowOrange`); the palette
/// document keys families by display form (`Yellow Orange`). Unknown
/// headers pass through unchanged.
pub fn display_name(header: &str) -> String {
    match BY_PASCAL.get(header) {
        Some(f) => f.display.to_string(),
        None => header.to_string(),
    }
}

/// Collapses a display-form family name to its Pascal no-space form,
/// used in `variable` paths (`Yellow Orange` → `YellowOrange`).
pub fn collapse(display: &str) -> String {
    match BY_DISPLAY.get(display) {
        Some(f) => f.pascal.to_string(),
        None => display.replace(' ', ""),
    }
}

/// Rewrites every compound snake-form family inside `value` to camelCase
/// (`color_cool_gray_20` → `color_coolGray_20`). Applied to theme values
/// before the remaining underscores become slashes.
pub fn rewrite_snake_families(value: &str) -> String {
    let mut out = value.to_string();
    for f in COMPOUND {
        if out.contains(f.snake) {
            out = out.replace(f.snake, f.camel);
        }
    }
    out
}

/// Splits a camelCase family into lowercased space-joined words
/// (`coolGray` → `cool gray`). Used when constructing the avatar
/// semantic lookup key.
pub fn camel_to_spaced(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
