//! Accidental vocabulary tables
//!
//! Bidirectional maps between MusicXML `<accidental>` values and the internal
//! [`SymId`] / [`AccidentalType`] enumerations. Each table is built once from
//! a static entry list whose first entry for a value is its preferred
//! (exported) name; later entries for the same value are import-only aliases.
//!
//! When the MusicXML name is `other`, the `smufl` attribute is consulted:
//! glyphs resolve against the full SMuFL name table, accidental types only
//! against the microtonal SMuFL subset that has no MusicXML name.
//!
//! `natural-sharp` and `natural-flat` resolve to the combined
//! [`AccidentalType::NaturalSharp`] / [`AccidentalType::NaturalFlat`] glyphs.
//! Readers that fold them into plain sharp and flat lose the natural sign on
//! the way back out; keeping them distinct makes every named value
//! round-trip.

use super::support::Resolution;
use crate::models::{AccidentalType, SymId};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::hash::Hash;

/// MusicXML name used for values without a dedicated one
pub const OTHER: &str = "other";

// ============================================================================
// Name tables
// ============================================================================

/// Bidirectional name ↔ value table
pub struct NameTable<T: 'static> {
    by_name: HashMap<&'static str, T>,
    by_value: HashMap<T, &'static str>,
}

impl<T: Copy + Eq + Hash> NameTable<T> {
    fn new(entries: &[(&'static str, T)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());
        for (name, value) in entries {
            by_name.insert(*name, *value);
            by_value.entry(*value).or_insert(*name);
        }
        Self { by_name, by_value }
    }

    pub fn value(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }

    /// Preferred name of `value`
    pub fn name(&self, value: T) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Whether `name` is accepted but never produced
    pub fn is_alias(&self, name: &str) -> bool {
        self.value(name).map_or(false, |v| self.name(v) != Some(name))
    }

}

const SYM_ID_NAMES: &[(&str, SymId)] = &[
    ("sharp", SymId::AccidentalSharp),
    ("natural", SymId::AccidentalNatural),
    ("flat", SymId::AccidentalFlat),
    ("double-sharp", SymId::AccidentalDoubleSharp),
    ("sharp-sharp", SymId::AccidentalDoubleSharp),
    ("flat-flat", SymId::AccidentalDoubleFlat),
    ("natural-sharp", SymId::AccidentalNaturalSharp),
    ("natural-flat", SymId::AccidentalNaturalFlat),
    ("quarter-flat", SymId::AccidentalQuarterToneFlatStein),
    ("quarter-sharp", SymId::AccidentalQuarterToneSharpStein),
    ("three-quarters-flat", SymId::AccidentalThreeQuarterTonesFlatZimmermann),
    ("three-quarters-sharp", SymId::AccidentalThreeQuarterTonesSharpStein),
    ("sharp-down", SymId::AccidentalQuarterToneSharpArrowDown),
    ("sharp-up", SymId::AccidentalThreeQuarterTonesSharpArrowUp),
    ("natural-down", SymId::AccidentalQuarterToneFlatNaturalArrowDown),
    ("natural-up", SymId::AccidentalQuarterToneSharpNaturalArrowUp),
    ("flat-down", SymId::AccidentalThreeQuarterTonesFlatArrowDown),
    ("flat-up", SymId::AccidentalQuarterToneFlatArrowUp),
    ("double-sharp-down", SymId::AccidentalThreeQuarterTonesSharpArrowDown),
    ("double-sharp-up", SymId::AccidentalFiveQuarterTonesSharpArrowUp),
    ("flat-flat-down", SymId::AccidentalFiveQuarterTonesFlatArrowDown),
    ("flat-flat-up", SymId::AccidentalThreeQuarterTonesFlatArrowUp),
    ("arrow-down", SymId::AccidentalArrowDown),
    ("arrow-up", SymId::AccidentalArrowUp),
    ("triple-sharp", SymId::AccidentalTripleSharp),
    ("triple-flat", SymId::AccidentalTripleFlat),
    ("slash-quarter-sharp", SymId::AccidentalKucukMucennebSharp),
    ("slash-sharp", SymId::AccidentalBuyukMucennebSharp),
    ("slash-flat", SymId::AccidentalBakiyeFlat),
    ("double-slash-flat", SymId::AccidentalBuyukMucennebFlat),
    ("sharp-1", SymId::Accidental1CommaSharp),
    ("sharp-2", SymId::Accidental2CommaSharp),
    ("sharp-3", SymId::Accidental3CommaSharp),
    ("sharp-5", SymId::Accidental5CommaSharp),
    ("flat-1", SymId::Accidental1CommaFlat),
    ("flat-2", SymId::Accidental2CommaFlat),
    ("flat-3", SymId::Accidental3CommaFlat),
    ("flat-4", SymId::Accidental4CommaFlat),
    ("sori", SymId::AccidentalSori),
    ("koron", SymId::AccidentalKoron),
];

const ACCIDENTAL_TYPE_NAMES: &[(&str, AccidentalType)] = &[
    ("sharp", AccidentalType::Sharp),
    ("natural", AccidentalType::Natural),
    ("flat", AccidentalType::Flat),
    ("double-sharp", AccidentalType::Sharp2),
    ("sharp-sharp", AccidentalType::Sharp2),
    ("flat-flat", AccidentalType::Flat2),
    ("natural-sharp", AccidentalType::NaturalSharp),
    ("natural-flat", AccidentalType::NaturalFlat),
    ("quarter-flat", AccidentalType::MirroredFlat),
    ("quarter-sharp", AccidentalType::SharpSlash),
    ("three-quarters-flat", AccidentalType::MirroredFlat2),
    ("three-quarters-sharp", AccidentalType::SharpSlash4),
    ("sharp-up", AccidentalType::SharpArrowUp),
    ("natural-down", AccidentalType::NaturalArrowDown),
    ("natural-up", AccidentalType::NaturalArrowUp),
    ("sharp-down", AccidentalType::SharpArrowDown),
    ("flat-down", AccidentalType::FlatArrowDown),
    ("flat-up", AccidentalType::FlatArrowUp),
    ("double-sharp-down", AccidentalType::Sharp2ArrowDown),
    ("double-sharp-up", AccidentalType::Sharp2ArrowUp),
    ("flat-flat-down", AccidentalType::Flat2ArrowDown),
    ("flat-flat-up", AccidentalType::Flat2ArrowUp),
    ("arrow-down", AccidentalType::ArrowDown),
    ("arrow-up", AccidentalType::ArrowUp),
    ("triple-sharp", AccidentalType::Sharp3),
    ("triple-flat", AccidentalType::Flat3),
    ("slash-quarter-sharp", AccidentalType::SharpSlash3),
    ("slash-sharp", AccidentalType::SharpSlash2),
    ("slash-flat", AccidentalType::FlatSlash),
    ("double-slash-flat", AccidentalType::FlatSlash2),
    ("sharp-1", AccidentalType::OneCommaSharp),
    ("sharp-2", AccidentalType::TwoCommaSharp),
    ("sharp-3", AccidentalType::ThreeCommaSharp),
    ("sharp-5", AccidentalType::FiveCommaSharp),
    ("flat-1", AccidentalType::OneCommaFlat),
    ("flat-2", AccidentalType::TwoCommaFlat),
    ("flat-3", AccidentalType::ThreeCommaFlat),
    ("flat-4", AccidentalType::FourCommaFlat),
    ("sori", AccidentalType::Sori),
    ("koron", AccidentalType::Koron),
];

/// Accidental types reachable only through `smufl` (no MusicXML name)
const SMUFL_ACCIDENTAL_TYPES: &[AccidentalType] = &[
    AccidentalType::DoubleFlatOneArrowDown,
    AccidentalType::FlatOneArrowDown,
    AccidentalType::NaturalOneArrowDown,
    AccidentalType::SharpOneArrowDown,
    AccidentalType::DoubleSharpOneArrowDown,
    AccidentalType::DoubleFlatOneArrowUp,
    AccidentalType::FlatOneArrowUp,
    AccidentalType::NaturalOneArrowUp,
    AccidentalType::SharpOneArrowUp,
    AccidentalType::DoubleSharpOneArrowUp,
    AccidentalType::DoubleFlatTwoArrowsDown,
    AccidentalType::FlatTwoArrowsDown,
    AccidentalType::NaturalTwoArrowsDown,
    AccidentalType::SharpTwoArrowsDown,
    AccidentalType::DoubleSharpTwoArrowsDown,
    AccidentalType::DoubleFlatTwoArrowsUp,
    AccidentalType::FlatTwoArrowsUp,
    AccidentalType::NaturalTwoArrowsUp,
    AccidentalType::SharpTwoArrowsUp,
    AccidentalType::DoubleSharpTwoArrowsUp,
    AccidentalType::DoubleFlatThreeArrowsDown,
    AccidentalType::FlatThreeArrowsDown,
    AccidentalType::NaturalThreeArrowsDown,
    AccidentalType::SharpThreeArrowsDown,
    AccidentalType::DoubleSharpThreeArrowsDown,
    AccidentalType::DoubleFlatThreeArrowsUp,
    AccidentalType::FlatThreeArrowsUp,
    AccidentalType::NaturalThreeArrowsUp,
    AccidentalType::SharpThreeArrowsUp,
    AccidentalType::DoubleSharpThreeArrowsUp,
    AccidentalType::LowerOneSeptimalComma,
    AccidentalType::RaiseOneSeptimalComma,
    AccidentalType::LowerTwoSeptimalCommas,
    AccidentalType::RaiseTwoSeptimalCommas,
    AccidentalType::LowerOneUndecimalQuartertone,
    AccidentalType::RaiseOneUndecimalQuartertone,
    AccidentalType::LowerOneTridecimalQuartertone,
    AccidentalType::RaiseOneTridecimalQuartertone,
    AccidentalType::DoubleFlatEqualTempered,
    AccidentalType::FlatEqualTempered,
    AccidentalType::NaturalEqualTempered,
    AccidentalType::SharpEqualTempered,
    AccidentalType::DoubleSharpEqualTempered,
    AccidentalType::QuarterFlatEqualTempered,
    AccidentalType::QuarterSharpEqualTempered,
];

/// Names read by old producers with a different meaning than today's table
const LEGACY_ACCIDENTAL_NAMES: &[(&str, AccidentalType)] =
    &[("three-quarters-flat", AccidentalType::FlatFlatSlash)];

pub static SYM_ID_TABLE: Lazy<NameTable<SymId>> = Lazy::new(|| NameTable::new(SYM_ID_NAMES));

pub static ACCIDENTAL_TYPE_TABLE: Lazy<NameTable<AccidentalType>> =
    Lazy::new(|| NameTable::new(ACCIDENTAL_TYPE_NAMES));

pub static SMUFL_ACCIDENTAL_TABLE: Lazy<NameTable<AccidentalType>> = Lazy::new(|| {
    let entries: Vec<(&'static str, AccidentalType)> = SMUFL_ACCIDENTAL_TYPES
        .iter()
        .map(|t| (t.sym_id().name(), *t))
        .collect();
    NameTable::new(&entries)
});

// ============================================================================
// Canonical names
// ============================================================================

/// Conversion between a value and its MusicXML accidental name
pub trait CanonicalName: Sized + Copy {
    /// Preferred MusicXML name, or `"other"` when there is none
    fn to_canonical_name(self) -> &'static str;

    /// Resolve a MusicXML name; `glyph` is the `smufl` attribute, consulted
    /// only when `name` is `"other"`
    fn from_canonical_name(name: &str, glyph: &str) -> Resolution<Self>;
}

impl CanonicalName for SymId {
    fn to_canonical_name(self) -> &'static str {
        SYM_ID_TABLE.name(self).unwrap_or(OTHER)
    }

    fn from_canonical_name(name: &str, glyph: &str) -> Resolution<SymId> {
        if let Some(id) = SYM_ID_TABLE.value(name) {
            return Resolution::found(id);
        }
        if name == OTHER {
            return match SymId::from_name(glyph) {
                SymId::NoSym => Resolution::defaulted(
                    SymId::NoSym,
                    format!("unknown smufl glyph '{}' for accidental 'other'", glyph),
                ),
                id => Resolution::found(id),
            };
        }
        Resolution::defaulted(SymId::NoSym, format!("unknown accidental '{}'", name))
    }
}

impl CanonicalName for AccidentalType {
    fn to_canonical_name(self) -> &'static str {
        ACCIDENTAL_TYPE_TABLE.name(self).unwrap_or(OTHER)
    }

    fn from_canonical_name(name: &str, glyph: &str) -> Resolution<AccidentalType> {
        if let Some(t) = ACCIDENTAL_TYPE_TABLE.value(name) {
            return Resolution::found(t);
        }
        if name == OTHER {
            return match SMUFL_ACCIDENTAL_TABLE.value(glyph) {
                Some(t) => Resolution::found(t),
                None => Resolution::defaulted(
                    AccidentalType::None,
                    format!("unknown smufl glyph '{}' for accidental 'other'", glyph),
                ),
            };
        }
        Resolution::defaulted(AccidentalType::None, format!("unknown accidental '{}'", name))
    }
}

/// SMuFL name written in the `smufl` attribute when the MusicXML name is
/// `other`
pub fn to_glyph_name(t: AccidentalType) -> Option<&'static str> {
    SMUFL_ACCIDENTAL_TABLE.name(t)
}

/// Historical reading of `name`, if it differs from the current table
pub fn legacy_alias(name: &str) -> Option<AccidentalType> {
    LEGACY_ACCIDENTAL_NAMES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, t)| *t)
}

// ============================================================================
// Alter inference
// ============================================================================

const ALTER_EPSILON: f64 = 0.001;

const ALTER_STEPS: [(f64, AccidentalType); 9] = [
    (-2.0, AccidentalType::Flat2),
    (-1.5, AccidentalType::MirroredFlat2),
    (-1.0, AccidentalType::Flat),
    (-0.5, AccidentalType::MirroredFlat),
    (0.0, AccidentalType::Natural),
    (0.5, AccidentalType::SharpSlash),
    (1.0, AccidentalType::Sharp),
    (1.5, AccidentalType::SharpSlash4),
    (2.0, AccidentalType::Sharp2),
];

/// Guess an accidental from a numeric `<alter>` value
///
/// Only quarter-tone steps between -2 and 2 are recognised.
pub fn infer_from_alter_value(alter: f64) -> Resolution<AccidentalType> {
    ALTER_STEPS
        .iter()
        .find(|(step, _)| alter > step - ALTER_EPSILON && alter < step + ALTER_EPSILON)
        .map(|(_, t)| Resolution::found(*t))
        .unwrap_or_else(|| {
            Resolution::defaulted(
                AccidentalType::None,
                format!("no accidental for alter value {}", alter),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_collapse() {
        let r = AccidentalType::from_canonical_name("sharp-sharp", "");
        assert_eq!(r, Resolution::found(AccidentalType::Sharp2));
        assert_eq!(AccidentalType::Sharp2.to_canonical_name(), "double-sharp");
        assert!(ACCIDENTAL_TYPE_TABLE.is_alias("sharp-sharp"));
        assert!(!ACCIDENTAL_TYPE_TABLE.is_alias("double-sharp"));
        assert!(SYM_ID_TABLE.is_alias("sharp-sharp"));
    }

    #[test]
    fn test_every_named_value_round_trips() {
        for t in AccidentalType::ALL.iter().copied() {
            let name = t.to_canonical_name();
            if name == OTHER {
                continue;
            }
            assert_eq!(AccidentalType::from_canonical_name(name, "").value, t, "{}", name);
        }
        for id in SymId::ALL.iter().copied() {
            let name = id.to_canonical_name();
            if name == OTHER {
                continue;
            }
            assert_eq!(SymId::from_canonical_name(name, "").value, id, "{}", name);
        }
    }

    #[test]
    fn test_smufl_fallback() {
        let r = AccidentalType::from_canonical_name(OTHER, "accidentalSharpTwoArrowsUp");
        assert_eq!(r.value, AccidentalType::SharpTwoArrowsUp);
        assert!(r.is_exact());
        assert_eq!(to_glyph_name(r.value), Some("accidentalSharpTwoArrowsUp"));

        let sym = SymId::from_canonical_name(OTHER, "accidentalKoron");
        assert_eq!(sym.value, SymId::AccidentalKoron);

        // named types are not part of the smufl subset
        let r = AccidentalType::from_canonical_name(OTHER, "accidentalSharp");
        assert_eq!(r.value, AccidentalType::None);
        assert!(r.diagnostic.is_some());
        assert_eq!(SMUFL_ACCIDENTAL_TYPES.len(), 45);
        assert!(SMUFL_ACCIDENTAL_TYPES.iter().all(|t| to_glyph_name(*t).is_some()));
    }

    #[test]
    fn test_unknown_name_yields_sentinel_and_one_message() {
        let r = AccidentalType::from_canonical_name("bogus", "");
        assert_eq!(r.value, AccidentalType::None);
        assert!(r.diagnostic.unwrap().contains("bogus"));

        let r = SymId::from_canonical_name(OTHER, "notAGlyph");
        assert_eq!(r.value, SymId::NoSym);
        assert!(r.diagnostic.is_some());
    }

    #[test]
    fn test_values_without_name_export_as_other() {
        assert_eq!(AccidentalType::None.to_canonical_name(), OTHER);
        assert_eq!(AccidentalType::FlatFlatSlash.to_canonical_name(), OTHER);
        assert_eq!(AccidentalType::SharpOneArrowUp.to_canonical_name(), OTHER);
        assert_eq!(SymId::NoSym.to_canonical_name(), OTHER);
        assert_eq!(SymId::ArticAccentAbove.to_canonical_name(), OTHER);
    }

    #[test]
    fn test_three_quarters_flat_readings() {
        let current = AccidentalType::from_canonical_name("three-quarters-flat", "");
        assert_eq!(current.value, AccidentalType::MirroredFlat2);
        assert_eq!(legacy_alias("three-quarters-flat"), Some(AccidentalType::FlatFlatSlash));
        assert_eq!(legacy_alias("flat"), None);
    }

    #[test]
    fn test_infer_from_alter_value() {
        assert_eq!(infer_from_alter_value(0.5).value, AccidentalType::SharpSlash);
        assert_eq!(infer_from_alter_value(-2.0).value, AccidentalType::Flat2);
        assert_eq!(infer_from_alter_value(1.5004).value, AccidentalType::SharpSlash4);
        assert_eq!(infer_from_alter_value(-0.5).value, AccidentalType::MirroredFlat);

        let r = infer_from_alter_value(0.73);
        assert_eq!(r.value, AccidentalType::None);
        assert!(r.diagnostic.is_some());
    }
}
