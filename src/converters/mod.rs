//! Format converters
//!
//! This module contains converters between the score model and interchange
//! formats.

pub mod musicxml;

// Re-export for convenience
pub use musicxml::{
    export_musicxml,
    export_musicxml_file,
    import_musicxml_file,
    import_musicxml_from_buffer,
    ConversionError,
    ExportSettings,
    ImportResult,
    ImportSettings,
    ParseError,
};
