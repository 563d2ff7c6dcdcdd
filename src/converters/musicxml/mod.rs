//! MusicXML interchange
//!
//! Import and export of partwise MusicXML documents.
//!
//! # Overview
//!
//! 1. **Classify**: reject compressed containers, non-UTF-8 input, foreign
//!    root elements and unsupported versions up front
//! 2. **Read**: walk the location-aware token stream ([`reader`]) into the
//!    score model, resolving vocabulary through the [`accidentals`] tables
//! 3. **Write**: serialize the score deterministically ([`writer`])
//!
//! Recoverable irregularities never abort an import; they are collected as
//! located diagnostics in [`ImportResult::diagnostics`].
//!
//! # Basic Usage
//!
//! ```ignore
//! use score_interchange::converters::musicxml::{export_musicxml, import_musicxml_from_buffer};
//!
//! let result = import_musicxml_from_buffer(bytes, None)?;
//! for mark in result.diagnostics.iter() {
//!     println!("{}", mark.located_message());
//! }
//! let xml = export_musicxml(&result.score, None)?;
//! ```

pub mod accidentals;
pub mod errors;
pub mod export;
pub mod import;
pub mod reader;
pub mod support;
pub mod types;
pub mod writer;

// Re-export main API
pub use accidentals::{infer_from_alter_value, legacy_alias, to_glyph_name, CanonicalName};
pub use errors::{ConversionError, ParseError};
pub use export::{export_musicxml, export_musicxml_file};
pub use import::{import_musicxml_file, import_musicxml_from_buffer};
pub use reader::XmlStreamReader;
pub use support::Resolution;
pub use types::{ExportSettings, ImportResult, ImportSettings};
pub use writer::XmlWriter;
