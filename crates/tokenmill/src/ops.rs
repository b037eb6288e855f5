//! High-level pipeline entry points.
//!
//! One function per transform, consumed by the CLI and by integration
//! tests. Each reads its inputs whole, rebuilds its table from scratch,
//! and overwrites its output document; given unchanged inputs, reruns
//! are byte-identical. The theme pass reads the palette and semantic
//! JSON artifacts rather than the markdown, so `generate_palette` and
//! `generate_semantic` must have run (this invocation or an earlier one)
//! before `generate_theme`.

use crate::config::Paths;
use crate::emit;
use crate::error::PipelineError;
use crate::key;
use crate::palette::{self, Palette};
use crate::semantic::{self, SemanticTable};
use crate::theme::ThemeResolver;

/// Counts reported by [`generate_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSummary {
    pub families: usize,
    pub tokens: usize,
    /// Tokens dropped for a malformed hex literal.
    pub skipped_hex: usize,
}

/// Counts reported by [`generate_semantic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticSummary {
    pub categories: usize,
    pub aliases: usize,
    /// Dev tokens with no design-label match (emitted with an empty
    /// `designToken`, not omitted).
    pub unmatched: usize,
}

/// Counts reported by [`generate_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSummary {
    pub entries: usize,
    /// Entries whose value landed on no primitive variable.
    pub unresolved: usize,
}

/// Rebuilds the palette document from the primitives markdown.
pub fn generate_palette(paths: &Paths) -> Result<PaletteSummary, PipelineError> {
    let text = emit::read_input(&paths.primitives_doc())?;
    let palette = Palette::from_markdown(&text);
    emit::write_json(&paths.palette_json(), &palette)?;
    Ok(PaletteSummary {
        families: palette.family_count(),
        tokens: palette.token_count(),
        skipped_hex: palette.skipped(),
    })
}

/// Rebuilds the semantic mapping document from the design-label and
/// dev-code markdown.
pub fn generate_semantic(paths: &Paths) -> Result<SemanticSummary, PipelineError> {
    let design = emit::read_input(&paths.semantic_doc())?;
    let dev = emit::read_input(&paths.semantic_dev_doc())?;
    let table = SemanticTable::resolve(&design, &dev);
    emit::write_json(&paths.semantic_json(), &table)?;
    Ok(SemanticSummary {
        categories: table.category_count(),
        aliases: table.alias_count(),
        unmatched: table.unmatched(),
    })
}

/// Rebuilds the theme mapping document from the theme markdown plus the
/// palette and semantic JSON artifacts.
pub fn generate_theme(paths: &Paths) -> Result<ThemeSummary, PipelineError> {
    let text = emit::read_input(&paths.theme_doc())?;
    let resolver = load_resolver(paths)?;
    let build = resolver.resolve_document(&text);
    emit::write_json(&paths.theme_json(), &build.mapping)?;
    Ok(ThemeSummary {
        entries: build.mapping.entry_count(),
        unresolved: build.unresolved,
    })
}

/// Returns the dev-code document text with each resolvable token's line
/// rewritten as `- token: resolved-value`; everything else passes through
/// untouched. Nothing is written to disk — the caller decides where the
/// annotated text goes.
pub fn annotate_dev_tokens(paths: &Paths) -> Result<String, PipelineError> {
    let dev = emit::read_input(&paths.semantic_dev_doc())?;
    let resolver = load_resolver(paths)?;
    let values = semantic::document_value_map(&emit::read_input(&paths.semantic_json())?)?;

    let mut out = Vec::with_capacity(dev.lines().count());
    for line in dev.lines() {
        let annotated = line.strip_prefix("- ").and_then(|item| {
            let token = item.split(':').next().unwrap_or(item).trim();
            let lookup = semantic::lookup_key(token);
            values
                .get(&key::normalize(&lookup))
                .map(|value| format!("- {}: {}", token, resolver.resolve_value(value)))
        });
        out.push(annotated.unwrap_or_else(|| line.to_string()));
    }
    Ok(out.join("\n"))
}

/// Builds the theme-pass resolver from the emitted JSON artifacts.
fn load_resolver(paths: &Paths) -> Result<ThemeResolver, PipelineError> {
    let palette_text = emit::read_input(&paths.palette_json())?;
    let semantic_text = emit::read_input(&paths.semantic_json())?;
    Ok(ThemeResolver::new(
        semantic::document_value_map(&semantic_text)?,
        palette::document_variables(&palette_text)?,
    ))
}
