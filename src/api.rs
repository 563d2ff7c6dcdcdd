//! WASM API for MusicXML interchange
//!
//! Thin wrappers over the converters. Results cross the boundary as JSON or
//! plain strings; errors become `"category: message"` strings.

use crate::converters::musicxml::{
    export_musicxml, import_musicxml_from_buffer, ConversionError, ExportSettings, ImportResult,
};
use crate::diagnostics::DiagnosticMark;
use crate::models::Fraction;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Summary of an import, as returned to JavaScript
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub title: Option<String>,
    pub parts: Vec<PartSummary>,
    pub diagnostics: Vec<DiagnosticMark>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSummary {
    pub id: String,
    pub name: String,
    pub measures: usize,
    pub notes: usize,
    pub annotations: usize,
}

impl ImportReport {
    pub fn from_result(result: &ImportResult) -> Self {
        let parts = result
            .score
            .parts
            .iter()
            .map(|part| PartSummary {
                id: part.id.clone(),
                name: part.name.clone(),
                measures: part.measures.len(),
                notes: part.measures.iter().map(|m| m.notes().count()).sum(),
                annotations: part.measures.iter().map(|m| m.annotations().count()).sum(),
            })
            .collect();
        Self {
            title: result.score.title.clone(),
            parts,
            diagnostics: result.diagnostics.marks.clone(),
        }
    }
}

/// Import and summarize
pub fn import_report(data: &[u8]) -> Result<ImportReport, ConversionError> {
    let result = import_musicxml_from_buffer(data, None)?;
    Ok(ImportReport::from_result(&result))
}

/// Import then re-export, yielding the canonical form of a document
pub fn normalize_musicxml(data: &[u8], settings: Option<ExportSettings>) -> Result<String, ConversionError> {
    let result = import_musicxml_from_buffer(data, None)?;
    export_musicxml(&result.score, settings)
}

fn to_js_error(err: ConversionError) -> JsValue {
    log::warn!("MusicXML conversion failed: {}", err);
    JsValue::from_str(&format!("{}: {}", err.category(), err))
}

// ============================================================================
// Exported functions
// ============================================================================

/// Import a MusicXML document and return a JSON report
#[wasm_bindgen(js_name = importMusicXml)]
pub fn import_musicxml_js(data: &[u8]) -> Result<String, JsValue> {
    let report = import_report(data).map_err(to_js_error)?;
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Report serialization error: {}", e)))
}

/// Import and re-export a MusicXML document
///
/// `settings` is an optional `ExportSettings` object.
#[wasm_bindgen(js_name = normalizeMusicXml)]
pub fn normalize_musicxml_js(data: &[u8], settings: JsValue) -> Result<String, JsValue> {
    let settings = if settings.is_undefined() || settings.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value::<ExportSettings>(settings)
                .map_err(|e| JsValue::from_str(&format!("Settings deserialization error: {}", e)))?,
        )
    };
    normalize_musicxml(data, settings).map_err(to_js_error)
}

/// Duration of a note type with dots and tuplet ratio, as `"n/d"`
///
/// Returns `undefined` for an unknown note type.
#[wasm_bindgen(js_name = deriveDuration)]
pub fn derive_duration_js(type_name: &str, dots: u32, normal_notes: i32, actual_notes: i32) -> Option<String> {
    let duration = Fraction::derive_duration(type_name, dots, normal_notes, actual_notes);
    duration.is_valid().then(|| duration.to_string())
}
