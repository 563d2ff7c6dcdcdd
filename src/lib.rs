//! Score interchange WASM module
//!
//! MusicXML import and export for the score document model: exact rational
//! durations, accidental and glyph vocabulary tables, the segment annotation
//! codec and the orchestration around them.

pub mod annotations;
pub mod api;
pub mod converters;
pub mod diagnostics;
pub mod models;

// Re-export commonly used types
pub use converters::musicxml::{
    export_musicxml, import_musicxml_from_buffer, ConversionError, ExportSettings, ImportResult, ImportSettings,
};
pub use diagnostics::{DiagnosticMark, Diagnostics};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // fails only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Score interchange WASM module initialized");
}
