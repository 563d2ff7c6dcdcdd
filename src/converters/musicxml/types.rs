//! Settings and result types for MusicXML interchange

use crate::diagnostics::Diagnostics;
use crate::models::Score;
use serde::{Deserialize, Serialize};

/// Import configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Highest MusicXML major version accepted
    pub max_major_version: u32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { max_major_version: 4 }
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Value of the `version` attribute on `<score-partwise>`
    pub version: String,

    /// Spaces per nesting level
    pub indent: usize,

    /// Whether to emit the partwise DOCTYPE
    pub write_doctype: bool,

    /// Written to `identification/encoding/software` when set
    pub software: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            version: "4.0".to_string(),
            indent: 2,
            write_doctype: true,
            software: Some(format!("score-interchange {}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Result of a successful import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// The imported score
    pub score: Score,

    /// Recoverable irregularities met along the way
    pub diagnostics: Diagnostics,
}
