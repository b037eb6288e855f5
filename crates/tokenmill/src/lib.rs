//! # tokenmill
//!
//! `tokenmill` turns the hand-edited markdown token documents of the
//! design-system site into the JSON artifacts the site consumes. Three
//! layers stay linked through the pipeline:
//!
//! - **Primitives** — raw hex values per family and level, authored
//!   twice (light and dark) and merged into one record per level.
//! - **Semantic tokens** — named aliases (`text.primary`) joined to
//!   their design labels through a canonical key space.
//! - **Theme tokens** — brand-scoped aliases resolved through the
//!   semantic layer down to primitive `Family/Level` variables.
//!
//! Data flows one direction: documents → [`scan`] →
//! { [`palette`] | [`semantic`] | [`theme`] } → [`emit`]. Every run
//! rebuilds each table from the current document text; nothing persists
//! between runs except the emitted JSON, which is overwritten whole.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenmill::Palette;
//!
//! let doc = "## Light Theme\n### Blue\n- Blue/10: #E9F0FD\n\n## Dark Theme\n### Blue\n- Blue/10: #17191C\n";
//!
//! let palette = Palette::from_markdown(doc);
//! assert_eq!(palette.token_count(), 1);
//!
//! let (family, tokens) = palette.families().next().unwrap();
//! assert_eq!(family, "Blue");
//! assert_eq!(tokens[0].hex_light, "#E9F0FD");
//! assert_eq!(tokens[0].hex_dark, "#17191C");
//! assert_eq!(tokens[0].variable, "Blue/10");
//! ```
//!
//! Documents are hand-edited, so parsing is resilient by design: lines
//! that match no grammar rule are dropped, a malformed hex skips one
//! token, and an alias with no target is emitted with the gap visible.
//! Only a missing input document or an I/O failure aborts a run.

pub mod color;
pub mod config;
pub mod emit;
pub mod error;
pub mod family;
pub mod key;
pub mod ops;
pub mod palette;
pub mod scan;
pub mod semantic;
pub mod theme;

pub use color::{ColorError, Rgb};
pub use config::Paths;
pub use error::PipelineError;
pub use palette::{ColorToken, Palette};
pub use semantic::{SemanticAlias, SemanticTable};
pub use theme::{ThemeMapping, ThemeResolver};
