//! Accidental types and the accidental element

use super::property::{ElementProperties, Pid, PropertyError, PropertyValue};
use super::sym_id::SymId;
use serde::{Deserialize, Serialize};

macro_rules! accidental_types {
    ($($variant:ident => $sym:ident),* $(,)?) => {
        /// Pitch-alteration symbol; `None` means "no accidental / unrecognized"
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum AccidentalType {
            $($variant),*
        }

        impl AccidentalType {
            /// Every accidental type, `None` first
            pub const ALL: &'static [AccidentalType] = &[$(AccidentalType::$variant),*];

            /// Glyph drawn for this accidental
            pub fn sym_id(self) -> SymId {
                match self {
                    $(AccidentalType::$variant => SymId::$sym),*
                }
            }
        }
    };
}

accidental_types! {
    None => NoSym,
    Flat => AccidentalFlat,
    Natural => AccidentalNatural,
    Sharp => AccidentalSharp,
    Sharp2 => AccidentalDoubleSharp,
    Flat2 => AccidentalDoubleFlat,
    Sharp3 => AccidentalTripleSharp,
    Flat3 => AccidentalTripleFlat,
    NaturalFlat => AccidentalNaturalFlat,
    NaturalSharp => AccidentalNaturalSharp,

    FlatArrowUp => AccidentalQuarterToneFlatArrowUp,
    FlatArrowDown => AccidentalThreeQuarterTonesFlatArrowDown,
    NaturalArrowUp => AccidentalQuarterToneSharpNaturalArrowUp,
    NaturalArrowDown => AccidentalQuarterToneFlatNaturalArrowDown,
    SharpArrowUp => AccidentalThreeQuarterTonesSharpArrowUp,
    SharpArrowDown => AccidentalQuarterToneSharpArrowDown,
    Sharp2ArrowUp => AccidentalFiveQuarterTonesSharpArrowUp,
    Sharp2ArrowDown => AccidentalThreeQuarterTonesSharpArrowDown,
    Flat2ArrowUp => AccidentalThreeQuarterTonesFlatArrowUp,
    Flat2ArrowDown => AccidentalFiveQuarterTonesFlatArrowDown,
    ArrowDown => AccidentalArrowDown,
    ArrowUp => AccidentalArrowUp,

    MirroredFlat => AccidentalQuarterToneFlatStein,
    MirroredFlat2 => AccidentalThreeQuarterTonesFlatZimmermann,
    SharpSlash => AccidentalQuarterToneSharpStein,
    SharpSlash4 => AccidentalThreeQuarterTonesSharpStein,
    FlatFlatSlash => AccidentalReversedFlatAndFlatArrowDown,

    FlatSlash2 => AccidentalBuyukMucennebFlat,
    FlatSlash => AccidentalBakiyeFlat,
    SharpSlash3 => AccidentalKucukMucennebSharp,
    SharpSlash2 => AccidentalBuyukMucennebSharp,

    OneCommaFlat => Accidental1CommaFlat,
    TwoCommaFlat => Accidental2CommaFlat,
    ThreeCommaFlat => Accidental3CommaFlat,
    FourCommaFlat => Accidental4CommaFlat,
    OneCommaSharp => Accidental1CommaSharp,
    TwoCommaSharp => Accidental2CommaSharp,
    ThreeCommaSharp => Accidental3CommaSharp,
    FiveCommaSharp => Accidental5CommaSharp,

    Sori => AccidentalSori,
    Koron => AccidentalKoron,

    DoubleFlatOneArrowDown => AccidentalDoubleFlatOneArrowDown,
    FlatOneArrowDown => AccidentalFlatOneArrowDown,
    NaturalOneArrowDown => AccidentalNaturalOneArrowDown,
    SharpOneArrowDown => AccidentalSharpOneArrowDown,
    DoubleSharpOneArrowDown => AccidentalDoubleSharpOneArrowDown,
    DoubleFlatOneArrowUp => AccidentalDoubleFlatOneArrowUp,
    FlatOneArrowUp => AccidentalFlatOneArrowUp,
    NaturalOneArrowUp => AccidentalNaturalOneArrowUp,
    SharpOneArrowUp => AccidentalSharpOneArrowUp,
    DoubleSharpOneArrowUp => AccidentalDoubleSharpOneArrowUp,
    DoubleFlatTwoArrowsDown => AccidentalDoubleFlatTwoArrowsDown,
    FlatTwoArrowsDown => AccidentalFlatTwoArrowsDown,
    NaturalTwoArrowsDown => AccidentalNaturalTwoArrowsDown,
    SharpTwoArrowsDown => AccidentalSharpTwoArrowsDown,
    DoubleSharpTwoArrowsDown => AccidentalDoubleSharpTwoArrowsDown,
    DoubleFlatTwoArrowsUp => AccidentalDoubleFlatTwoArrowsUp,
    FlatTwoArrowsUp => AccidentalFlatTwoArrowsUp,
    NaturalTwoArrowsUp => AccidentalNaturalTwoArrowsUp,
    SharpTwoArrowsUp => AccidentalSharpTwoArrowsUp,
    DoubleSharpTwoArrowsUp => AccidentalDoubleSharpTwoArrowsUp,
    DoubleFlatThreeArrowsDown => AccidentalDoubleFlatThreeArrowsDown,
    FlatThreeArrowsDown => AccidentalFlatThreeArrowsDown,
    NaturalThreeArrowsDown => AccidentalNaturalThreeArrowsDown,
    SharpThreeArrowsDown => AccidentalSharpThreeArrowsDown,
    DoubleSharpThreeArrowsDown => AccidentalDoubleSharpThreeArrowsDown,
    DoubleFlatThreeArrowsUp => AccidentalDoubleFlatThreeArrowsUp,
    FlatThreeArrowsUp => AccidentalFlatThreeArrowsUp,
    NaturalThreeArrowsUp => AccidentalNaturalThreeArrowsUp,
    SharpThreeArrowsUp => AccidentalSharpThreeArrowsUp,
    DoubleSharpThreeArrowsUp => AccidentalDoubleSharpThreeArrowsUp,
    LowerOneSeptimalComma => AccidentalLowerOneSeptimalComma,
    RaiseOneSeptimalComma => AccidentalRaiseOneSeptimalComma,
    LowerTwoSeptimalCommas => AccidentalLowerTwoSeptimalCommas,
    RaiseTwoSeptimalCommas => AccidentalRaiseTwoSeptimalCommas,
    LowerOneUndecimalQuartertone => AccidentalLowerOneUndecimalQuartertone,
    RaiseOneUndecimalQuartertone => AccidentalRaiseOneUndecimalQuartertone,
    LowerOneTridecimalQuartertone => AccidentalLowerOneTridecimalQuartertone,
    RaiseOneTridecimalQuartertone => AccidentalRaiseOneTridecimalQuartertone,
    DoubleFlatEqualTempered => AccidentalDoubleFlatEqualTempered,
    FlatEqualTempered => AccidentalFlatEqualTempered,
    NaturalEqualTempered => AccidentalNaturalEqualTempered,
    SharpEqualTempered => AccidentalSharpEqualTempered,
    DoubleSharpEqualTempered => AccidentalDoubleSharpEqualTempered,
    QuarterFlatEqualTempered => AccidentalQuarterFlatEqualTempered,
    QuarterSharpEqualTempered => AccidentalQuarterSharpEqualTempered,
}

impl Default for AccidentalType {
    fn default() -> Self {
        AccidentalType::None
    }
}

/// Accidental attached to a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accidental {
    pub accidental_type: AccidentalType,
    /// Drawn in parentheses (cautionary)
    #[serde(default)]
    pub bracket: bool,
}

impl Accidental {
    pub fn new(accidental_type: AccidentalType) -> Self {
        Self { accidental_type, bracket: false }
    }
}

impl ElementProperties for Accidental {
    fn get_property(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::AccidentalType => Some(PropertyValue::AccidentalType(self.accidental_type)),
            Pid::AccidentalBracket => Some(PropertyValue::Bool(self.bracket)),
            _ => None,
        }
    }

    fn set_property(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError> {
        match (id, value) {
            (Pid::AccidentalType, PropertyValue::AccidentalType(t)) => self.accidental_type = t,
            (Pid::AccidentalBracket, PropertyValue::Bool(b)) => self.bracket = b,
            (Pid::AccidentalType | Pid::AccidentalBracket, value) => {
                return Err(PropertyError::InvalidValue { pid: id, value })
            }
            _ => return Err(PropertyError::Unsupported(id)),
        }
        Ok(())
    }

    fn property_default(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::AccidentalType => Some(PropertyValue::AccidentalType(AccidentalType::None)),
            Pid::AccidentalBracket => Some(PropertyValue::Bool(false)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glyphs_are_distinct() {
        let syms: HashSet<_> = AccidentalType::ALL.iter().map(|t| t.sym_id()).collect();
        assert_eq!(syms.len(), AccidentalType::ALL.len());
        assert!(AccidentalType::ALL
            .iter()
            .filter(|t| **t != AccidentalType::None)
            .all(|t| t.sym_id().is_accidental()));
    }

    #[test]
    fn test_accidental_properties() {
        let mut acc = Accidental::new(AccidentalType::Sharp);
        assert_eq!(
            acc.get_property(Pid::AccidentalType),
            Some(PropertyValue::AccidentalType(AccidentalType::Sharp))
        );

        acc.set_property(Pid::AccidentalBracket, PropertyValue::Bool(true)).unwrap();
        assert!(acc.bracket);

        assert!(acc.set_property(Pid::Text, PropertyValue::String("x".into())).is_err());
        assert!(acc.set_property(Pid::AccidentalType, PropertyValue::Int(3)).is_err());

        acc.reset_property(Pid::AccidentalType).unwrap();
        assert_eq!(acc.accidental_type, AccidentalType::None);
    }
}
