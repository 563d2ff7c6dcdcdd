//! Glyph identifiers
//!
//! `SymId` names the SMuFL glyphs the score model can draw for accidentals and
//! articulations. Each identifier carries exactly one SMuFL glyph name; the
//! name table doubles as the fallback vocabulary for MusicXML `smufl`
//! attributes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! sym_ids {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Glyph identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum SymId {
            $($variant),*
        }

        impl SymId {
            /// Every glyph identifier, `NoSym` first
            pub const ALL: &'static [SymId] = &[$(SymId::$variant),*];

            /// SMuFL glyph name
            pub fn name(self) -> &'static str {
                match self {
                    $(SymId::$variant => $name),*
                }
            }
        }
    };
}

sym_ids! {
    NoSym => "noSym",

    // Standard accidentals
    AccidentalSharp => "accidentalSharp",
    AccidentalNatural => "accidentalNatural",
    AccidentalFlat => "accidentalFlat",
    AccidentalDoubleSharp => "accidentalDoubleSharp",
    AccidentalDoubleFlat => "accidentalDoubleFlat",
    AccidentalTripleSharp => "accidentalTripleSharp",
    AccidentalTripleFlat => "accidentalTripleFlat",
    AccidentalNaturalSharp => "accidentalNaturalSharp",
    AccidentalNaturalFlat => "accidentalNaturalFlat",

    // Quarter tones (Stein-Zimmermann)
    AccidentalQuarterToneFlatStein => "accidentalQuarterToneFlatStein",
    AccidentalQuarterToneSharpStein => "accidentalQuarterToneSharpStein",
    AccidentalThreeQuarterTonesFlatZimmermann => "accidentalThreeQuarterTonesFlatZimmermann",
    AccidentalThreeQuarterTonesSharpStein => "accidentalThreeQuarterTonesSharpStein",

    // Arrows (Gould)
    AccidentalQuarterToneSharpArrowDown => "accidentalQuarterToneSharpArrowDown",
    AccidentalThreeQuarterTonesSharpArrowUp => "accidentalThreeQuarterTonesSharpArrowUp",
    AccidentalQuarterToneFlatNaturalArrowDown => "accidentalQuarterToneFlatNaturalArrowDown",
    AccidentalQuarterToneSharpNaturalArrowUp => "accidentalQuarterToneSharpNaturalArrowUp",
    AccidentalThreeQuarterTonesFlatArrowDown => "accidentalThreeQuarterTonesFlatArrowDown",
    AccidentalQuarterToneFlatArrowUp => "accidentalQuarterToneFlatArrowUp",
    AccidentalThreeQuarterTonesSharpArrowDown => "accidentalThreeQuarterTonesSharpArrowDown",
    AccidentalFiveQuarterTonesSharpArrowUp => "accidentalFiveQuarterTonesSharpArrowUp",
    AccidentalFiveQuarterTonesFlatArrowDown => "accidentalFiveQuarterTonesFlatArrowDown",
    AccidentalThreeQuarterTonesFlatArrowUp => "accidentalThreeQuarterTonesFlatArrowUp",
    AccidentalArrowDown => "accidentalArrowDown",
    AccidentalArrowUp => "accidentalArrowUp",
    AccidentalReversedFlatAndFlatArrowDown => "accidentalReversedFlatAndFlatArrowDown",

    // Turkish (Arel-Ezgi-Uzdilek)
    AccidentalKucukMucennebSharp => "accidentalKucukMucennebSharp",
    AccidentalBuyukMucennebSharp => "accidentalBuyukMucennebSharp",
    AccidentalBakiyeFlat => "accidentalBakiyeFlat",
    AccidentalBuyukMucennebFlat => "accidentalBuyukMucennebFlat",

    // Commas
    Accidental1CommaSharp => "accidental1CommaSharp",
    Accidental2CommaSharp => "accidental2CommaSharp",
    Accidental3CommaSharp => "accidental3CommaSharp",
    Accidental5CommaSharp => "accidental5CommaSharp",
    Accidental1CommaFlat => "accidental1CommaFlat",
    Accidental2CommaFlat => "accidental2CommaFlat",
    Accidental3CommaFlat => "accidental3CommaFlat",
    Accidental4CommaFlat => "accidental4CommaFlat",

    // Persian
    AccidentalSori => "accidentalSori",
    AccidentalKoron => "accidentalKoron",

    // Extended Helmholtz-Ellis arrows
    AccidentalDoubleFlatOneArrowDown => "accidentalDoubleFlatOneArrowDown",
    AccidentalFlatOneArrowDown => "accidentalFlatOneArrowDown",
    AccidentalNaturalOneArrowDown => "accidentalNaturalOneArrowDown",
    AccidentalSharpOneArrowDown => "accidentalSharpOneArrowDown",
    AccidentalDoubleSharpOneArrowDown => "accidentalDoubleSharpOneArrowDown",
    AccidentalDoubleFlatOneArrowUp => "accidentalDoubleFlatOneArrowUp",
    AccidentalFlatOneArrowUp => "accidentalFlatOneArrowUp",
    AccidentalNaturalOneArrowUp => "accidentalNaturalOneArrowUp",
    AccidentalSharpOneArrowUp => "accidentalSharpOneArrowUp",
    AccidentalDoubleSharpOneArrowUp => "accidentalDoubleSharpOneArrowUp",
    AccidentalDoubleFlatTwoArrowsDown => "accidentalDoubleFlatTwoArrowsDown",
    AccidentalFlatTwoArrowsDown => "accidentalFlatTwoArrowsDown",
    AccidentalNaturalTwoArrowsDown => "accidentalNaturalTwoArrowsDown",
    AccidentalSharpTwoArrowsDown => "accidentalSharpTwoArrowsDown",
    AccidentalDoubleSharpTwoArrowsDown => "accidentalDoubleSharpTwoArrowsDown",
    AccidentalDoubleFlatTwoArrowsUp => "accidentalDoubleFlatTwoArrowsUp",
    AccidentalFlatTwoArrowsUp => "accidentalFlatTwoArrowsUp",
    AccidentalNaturalTwoArrowsUp => "accidentalNaturalTwoArrowsUp",
    AccidentalSharpTwoArrowsUp => "accidentalSharpTwoArrowsUp",
    AccidentalDoubleSharpTwoArrowsUp => "accidentalDoubleSharpTwoArrowsUp",
    AccidentalDoubleFlatThreeArrowsDown => "accidentalDoubleFlatThreeArrowsDown",
    AccidentalFlatThreeArrowsDown => "accidentalFlatThreeArrowsDown",
    AccidentalNaturalThreeArrowsDown => "accidentalNaturalThreeArrowsDown",
    AccidentalSharpThreeArrowsDown => "accidentalSharpThreeArrowsDown",
    AccidentalDoubleSharpThreeArrowsDown => "accidentalDoubleSharpThreeArrowsDown",
    AccidentalDoubleFlatThreeArrowsUp => "accidentalDoubleFlatThreeArrowsUp",
    AccidentalFlatThreeArrowsUp => "accidentalFlatThreeArrowsUp",
    AccidentalNaturalThreeArrowsUp => "accidentalNaturalThreeArrowsUp",
    AccidentalSharpThreeArrowsUp => "accidentalSharpThreeArrowsUp",
    AccidentalDoubleSharpThreeArrowsUp => "accidentalDoubleSharpThreeArrowsUp",
    AccidentalLowerOneSeptimalComma => "accidentalLowerOneSeptimalComma",
    AccidentalRaiseOneSeptimalComma => "accidentalRaiseOneSeptimalComma",
    AccidentalLowerTwoSeptimalCommas => "accidentalLowerTwoSeptimalCommas",
    AccidentalRaiseTwoSeptimalCommas => "accidentalRaiseTwoSeptimalCommas",
    AccidentalLowerOneUndecimalQuartertone => "accidentalLowerOneUndecimalQuartertone",
    AccidentalRaiseOneUndecimalQuartertone => "accidentalRaiseOneUndecimalQuartertone",
    AccidentalLowerOneTridecimalQuartertone => "accidentalLowerOneTridecimalQuartertone",
    AccidentalRaiseOneTridecimalQuartertone => "accidentalRaiseOneTridecimalQuartertone",
    AccidentalDoubleFlatEqualTempered => "accidentalDoubleFlatEqualTempered",
    AccidentalFlatEqualTempered => "accidentalFlatEqualTempered",
    AccidentalNaturalEqualTempered => "accidentalNaturalEqualTempered",
    AccidentalSharpEqualTempered => "accidentalSharpEqualTempered",
    AccidentalDoubleSharpEqualTempered => "accidentalDoubleSharpEqualTempered",
    AccidentalQuarterFlatEqualTempered => "accidentalQuarterFlatEqualTempered",
    AccidentalQuarterSharpEqualTempered => "accidentalQuarterSharpEqualTempered",

    // Articulations
    ArticAccentAbove => "articAccentAbove",
    ArticAccentBelow => "articAccentBelow",
    ArticStaccatoAbove => "articStaccatoAbove",
    ArticStaccatoBelow => "articStaccatoBelow",
    ArticStaccatissimoAbove => "articStaccatissimoAbove",
    ArticStaccatissimoBelow => "articStaccatissimoBelow",
    ArticTenutoAbove => "articTenutoAbove",
    ArticTenutoBelow => "articTenutoBelow",
    ArticMarcatoAbove => "articMarcatoAbove",
    ArticMarcatoBelow => "articMarcatoBelow",
    ArticLaissezVibrerAbove => "articLaissezVibrerAbove",
    ArticLaissezVibrerBelow => "articLaissezVibrerBelow",
}

static BY_NAME: Lazy<HashMap<&'static str, SymId>> =
    Lazy::new(|| SymId::ALL.iter().map(|id| (id.name(), *id)).collect());

impl SymId {
    /// Look up a glyph by its SMuFL name; `NoSym` when unknown
    pub fn from_name(name: &str) -> SymId {
        BY_NAME.get(name).copied().unwrap_or(SymId::NoSym)
    }

    pub fn is_accidental(self) -> bool {
        self.name().starts_with("accidental")
    }

    pub fn is_articulation(self) -> bool {
        self.name().starts_with("artic")
    }

    /// Whether this glyph is drawn below the staff
    pub fn is_below(self) -> bool {
        self.name().ends_with("Below")
    }
}

impl Default for SymId {
    fn default() -> Self {
        SymId::NoSym
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SymId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), SymId::ALL.len());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SymId::from_name("accidentalSori"), SymId::AccidentalSori);
        assert_eq!(SymId::from_name("articStaccatoBelow"), SymId::ArticStaccatoBelow);
        assert_eq!(SymId::from_name("notAGlyph"), SymId::NoSym);
    }

    #[test]
    fn test_categories() {
        assert!(SymId::AccidentalKoron.is_accidental());
        assert!(!SymId::AccidentalKoron.is_articulation());
        assert!(SymId::ArticTenutoBelow.is_articulation());
        assert!(SymId::ArticTenutoBelow.is_below());
        assert!(!SymId::NoSym.is_accidental());
    }
}
