//! Small MusicXML vocabulary helpers shared by import and export

use crate::models::{Placement, SymId};

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of a lenient lookup
///
/// `diagnostic` is `None` for an exact match. Otherwise `value` is the
/// sentinel or default the caller should use and `diagnostic` says why.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    pub value: T,
    pub diagnostic: Option<String>,
}

impl<T> Resolution<T> {
    pub fn found(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    pub fn defaulted(value: T, diagnostic: impl Into<String>) -> Self {
        Self {
            value,
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// Whether the lookup matched without falling back
    pub fn is_exact(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Parse an integer, tolerating a trailing ".0"
///
/// Some OMR tools write `<divisions>4.0</divisions>`; only an exact `.0`
/// suffix is accepted, real fractions are rejected.
pub fn string_to_int(text: &str) -> Option<i32> {
    let text = text.trim();
    let text = text.strip_suffix(".0").unwrap_or(text);
    text.parse().ok()
}

/// Format a decimal for output, without a trailing ".0" on whole numbers
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// Accidentals in text
// ============================================================================

/// Unicode character for an accidental named inside running text
pub fn accidental_text_to_char(name: &str) -> Option<&'static str> {
    match name {
        "sharp" => Some("\u{266F}"),
        "natural" => Some("\u{266E}"),
        "flat" => Some("\u{266D}"),
        _ => {
            log::debug!("unsupported accidental in text '{}'", name);
            None
        }
    }
}

// ============================================================================
// Articulations
// ============================================================================

pub fn is_laissez_vibrer(id: SymId) -> bool {
    matches!(id, SymId::ArticLaissezVibrerAbove | SymId::ArticLaissezVibrerBelow)
}

/// First laissez-vibrer glyph among a note's articulations
pub fn find_laissez_vibrer(articulations: &[SymId]) -> Option<SymId> {
    articulations.iter().copied().find(|id| is_laissez_vibrer(*id))
}

pub fn laissez_vibrer_glyph(placement: Placement) -> SymId {
    match placement {
        Placement::Above => SymId::ArticLaissezVibrerAbove,
        Placement::Below => SymId::ArticLaissezVibrerBelow,
    }
}

/// Glyph for an `<articulations>` child element
pub fn articulation_from_xml(name: &str, placement: Placement) -> Option<SymId> {
    let below = placement == Placement::Below;
    let id = match (name, below) {
        ("accent", false) => SymId::ArticAccentAbove,
        ("accent", true) => SymId::ArticAccentBelow,
        ("staccato", false) => SymId::ArticStaccatoAbove,
        ("staccato", true) => SymId::ArticStaccatoBelow,
        ("staccatissimo", false) => SymId::ArticStaccatissimoAbove,
        ("staccatissimo", true) => SymId::ArticStaccatissimoBelow,
        ("tenuto", false) => SymId::ArticTenutoAbove,
        ("tenuto", true) => SymId::ArticTenutoBelow,
        ("strong-accent", false) => SymId::ArticMarcatoAbove,
        ("strong-accent", true) => SymId::ArticMarcatoBelow,
        _ => return None,
    };
    Some(id)
}

/// `<articulations>` child element and placement for a glyph
pub fn articulation_to_xml(id: SymId) -> Option<(&'static str, Placement)> {
    let name = match id {
        SymId::ArticAccentAbove | SymId::ArticAccentBelow => "accent",
        SymId::ArticStaccatoAbove | SymId::ArticStaccatoBelow => "staccato",
        SymId::ArticStaccatissimoAbove | SymId::ArticStaccatissimoBelow => "staccatissimo",
        SymId::ArticTenutoAbove | SymId::ArticTenutoBelow => "tenuto",
        SymId::ArticMarcatoAbove | SymId::ArticMarcatoBelow => "strong-accent",
        _ => return None,
    };
    let placement = if id.is_below() { Placement::Below } else { Placement::Above };
    Some((name, placement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_int() {
        assert_eq!(string_to_int("4"), Some(4));
        assert_eq!(string_to_int("4.0"), Some(4));
        assert_eq!(string_to_int(" -2 "), Some(-2));
        assert_eq!(string_to_int("4.5"), None);
        assert_eq!(string_to_int("four"), None);
        assert_eq!(string_to_int(""), None);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.0), "1");
        assert_eq!(format_decimal(-1.5), "-1.5");
        assert_eq!(format_decimal(0.5), "0.5");
    }

    #[test]
    fn test_accidental_text_to_char() {
        assert_eq!(accidental_text_to_char("flat"), Some("♭"));
        assert_eq!(accidental_text_to_char("sharp"), Some("♯"));
        assert_eq!(accidental_text_to_char("koron"), None);
    }

    #[test]
    fn test_find_laissez_vibrer() {
        let artics = [SymId::ArticAccentAbove, SymId::ArticLaissezVibrerBelow];
        assert_eq!(find_laissez_vibrer(&artics), Some(SymId::ArticLaissezVibrerBelow));
        assert_eq!(find_laissez_vibrer(&artics[..1]), None);
        assert!(!is_laissez_vibrer(SymId::ArticTenutoAbove));
    }

    #[test]
    fn test_articulation_names_pair_up() {
        for id in SymId::ALL.iter().copied().filter(|id| id.is_articulation()) {
            if is_laissez_vibrer(id) {
                continue;
            }
            let (name, placement) = articulation_to_xml(id).unwrap();
            assert_eq!(articulation_from_xml(name, placement), Some(id));
        }
        assert_eq!(articulation_from_xml("doit", Placement::Above), None);
    }
}
