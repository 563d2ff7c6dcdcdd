//! Exact rational durations
//!
//! Durations are measured in whole notes (a quarter is 1/4). A [`Fraction`]
//! with denominator 0 is the *invalid* sentinel meaning "could not derive a
//! duration"; callers check [`Fraction::is_valid`] before storing or doing
//! arithmetic with it. All arithmetic goes through `num_rational::Ratio`, so
//! chained durations never accumulate rounding error.
//!
//! Operations run on `Ratio<i64>` and narrow back to `i32` terms. A result
//! whose reduced terms do not fit is the invalid sentinel, never a panic or a
//! wrapped value.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Working precision for arithmetic on `i32` terms
type Wide = Ratio<i64>;

/// Symbolic note length as written in MusicXML `<type>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteType {
    N1024th,
    N512th,
    N256th,
    N128th,
    N64th,
    N32nd,
    N16th,
    Eighth,
    Quarter,
    Half,
    Whole,
    Breve,
    Long,
    Maxima,
}

impl NoteType {
    /// All note types, shortest first
    pub const ALL: [NoteType; 14] = [
        NoteType::N1024th,
        NoteType::N512th,
        NoteType::N256th,
        NoteType::N128th,
        NoteType::N64th,
        NoteType::N32nd,
        NoteType::N16th,
        NoteType::Eighth,
        NoteType::Quarter,
        NoteType::Half,
        NoteType::Whole,
        NoteType::Breve,
        NoteType::Long,
        NoteType::Maxima,
    ];

    /// MusicXML name of this note type
    pub fn name(&self) -> &'static str {
        match self {
            NoteType::N1024th => "1024th",
            NoteType::N512th => "512th",
            NoteType::N256th => "256th",
            NoteType::N128th => "128th",
            NoteType::N64th => "64th",
            NoteType::N32nd => "32nd",
            NoteType::N16th => "16th",
            NoteType::Eighth => "eighth",
            NoteType::Quarter => "quarter",
            NoteType::Half => "half",
            NoteType::Whole => "whole",
            NoteType::Breve => "breve",
            NoteType::Long => "long",
            NoteType::Maxima => "maxima",
        }
    }

    /// Parse a MusicXML note type name
    pub fn from_name(name: &str) -> Option<NoteType> {
        NoteType::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Undotted length of this note type in whole notes
    pub fn fraction(&self) -> Fraction {
        match self {
            NoteType::N1024th => Fraction::new(1, 1024),
            NoteType::N512th => Fraction::new(1, 512),
            NoteType::N256th => Fraction::new(1, 256),
            NoteType::N128th => Fraction::new(1, 128),
            NoteType::N64th => Fraction::new(1, 64),
            NoteType::N32nd => Fraction::new(1, 32),
            NoteType::N16th => Fraction::new(1, 16),
            NoteType::Eighth => Fraction::new(1, 8),
            NoteType::Quarter => Fraction::new(1, 4),
            NoteType::Half => Fraction::new(1, 2),
            NoteType::Whole => Fraction::new(1, 1),
            NoteType::Breve => Fraction::new(2, 1),
            NoteType::Long => Fraction::new(4, 1),
            NoteType::Maxima => Fraction::new(8, 1),
        }
    }
}

/// Exact rational duration, denominator 0 = invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl Fraction {
    /// Create a fraction as given (not reduced)
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Fraction { numerator, denominator }
    }

    /// The invalid sentinel
    pub const fn invalid() -> Self {
        Fraction { numerator: 0, denominator: 0 }
    }

    /// Zero duration
    pub const fn zero() -> Self {
        Fraction { numerator: 0, denominator: 1 }
    }

    pub fn is_valid(&self) -> bool {
        self.denominator != 0
    }

    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.numerator == 0
    }

    /// View as a rational, `None` for the invalid sentinel
    pub fn to_ratio(&self) -> Option<Ratio<i32>> {
        Fraction::narrow(self.wide()?)
    }

    fn wide(&self) -> Option<Wide> {
        if self.is_valid() {
            Some(Ratio::new(i64::from(self.numerator), i64::from(self.denominator)))
        } else {
            None
        }
    }

    /// Back to `i32` terms, `None` when the reduced value does not fit
    fn narrow(ratio: Wide) -> Option<Ratio<i32>> {
        let numerator = i32::try_from(*ratio.numer()).ok()?;
        let denominator = i32::try_from(*ratio.denom()).ok()?;
        Some(Ratio::new_raw(numerator, denominator))
    }

    fn from_ratio(ratio: Ratio<i32>) -> Self {
        Fraction::new(*ratio.numer(), *ratio.denom())
    }

    fn from_wide(ratio: Wide) -> Self {
        Fraction::narrow(ratio).map(Fraction::from_ratio).unwrap_or_else(Fraction::invalid)
    }

    /// Lowest terms with a positive denominator; invalid stays invalid
    pub fn reduced(&self) -> Self {
        self.to_ratio().map(Fraction::from_ratio).unwrap_or_else(Fraction::invalid)
    }

    /// Duration of a MusicXML note type name, invalid for anything unknown
    pub fn from_note_type_name(name: &str) -> Self {
        NoteType::from_name(name)
            .map(|t| t.fraction())
            .unwrap_or_else(Fraction::invalid)
    }

    /// Duration from note type, dots and tuplet ratio
    ///
    /// Each dot adds half of the previous addition (base/2, base/4, ...).
    /// The tuplet ratio `normal_notes/actual_notes` is applied only when both
    /// counts are positive, so a triplet eighth is 1/8 × 2/3 = 1/12.
    /// An unknown type yields the invalid fraction and ignores dots and tuplet,
    /// and so does a dot count or tuplet ratio too fine for `i32` terms.
    pub fn derive_duration(type_name: &str, dots: u32, normal_notes: i32, actual_notes: i32) -> Self {
        let base = Fraction::from_note_type_name(type_name);
        let Some(base) = base.wide() else {
            return Fraction::invalid();
        };

        let mut total = base;
        let mut addition = base;
        for _ in 0..dots {
            addition = addition / Ratio::from_integer(2);
            total = total + addition;
            // the next halving doubles the denominator, stop while it still fits
            if Fraction::narrow(total).is_none() {
                return Fraction::invalid();
            }
        }

        if actual_notes > 0 && normal_notes > 0 {
            total = total * Ratio::new(i64::from(normal_notes), i64::from(actual_notes));
        }

        Fraction::from_wide(total)
    }

    /// Duration of `count` MusicXML divisions at `divisions_per_quarter`
    pub fn from_divisions(count: i32, divisions_per_quarter: i32) -> Self {
        if divisions_per_quarter <= 0 {
            return Fraction::invalid();
        }
        Fraction::from_wide(Ratio::new(i64::from(count), i64::from(divisions_per_quarter) * 4))
    }

    /// Express this duration in MusicXML divisions, if it is a whole number of them
    pub fn to_divisions(&self, divisions_per_quarter: i32) -> Option<i64> {
        let r = self.wide()?;
        let num = r.numer().checked_mul(4)?.checked_mul(i64::from(divisions_per_quarter))?;
        let den = *r.denom();
        if num % den == 0 {
            Some(num / den)
        } else {
            None
        }
    }

    /// Find the note type and dot count (up to 3 dots) spelling this duration
    pub fn to_note_type_and_dots(&self) -> Option<(NoteType, u32)> {
        let target = self.to_ratio()?;
        for dots in 0..=3u32 {
            for note_type in NoteType::ALL {
                let candidate = Fraction::derive_duration(note_type.name(), dots, 0, 0);
                if candidate.to_ratio() == Some(target) {
                    return Some((note_type, dots));
                }
            }
        }
        None
    }

    /// Denominator once expressed in quarter notes, used to pick `<divisions>`
    pub fn quarter_denominator(&self) -> Option<i32> {
        let r = self.wide()? * Ratio::from_integer(4);
        i32::try_from(*r.denom()).ok()
    }

    /// Apply `op` on widened terms; operands are `i32`, so one operation
    /// cannot overflow `i64`, only the narrowing can fail
    fn combine(self, other: Fraction, op: impl Fn(Wide, Wide) -> Option<Wide>) -> Fraction {
        match (self.wide(), other.wide()) {
            (Some(a), Some(b)) => op(a, b).map(Fraction::from_wide).unwrap_or_else(Fraction::invalid),
            _ => Fraction::invalid(),
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        self.combine(rhs, |a, b| Some(a + b))
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self.combine(rhs, |a, b| Some(a - b))
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        self.combine(rhs, |a, b| Some(a * b))
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        self.combine(rhs, |a, b| if *b.numer() == 0 { None } else { Some(a / b) })
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.wide()?.cmp(&other.wide()?))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_type_names() {
        assert_eq!(Fraction::from_note_type_name("1024th"), Fraction::new(1, 1024));
        assert_eq!(Fraction::from_note_type_name("quarter"), Fraction::new(1, 4));
        assert_eq!(Fraction::from_note_type_name("breve"), Fraction::new(2, 1));
        assert_eq!(Fraction::from_note_type_name("maxima"), Fraction::new(8, 1));
        assert!(!Fraction::from_note_type_name("crotchet").is_valid());
        assert!(!Fraction::from_note_type_name("").is_valid());
    }

    #[test]
    fn test_derive_plain_and_dotted() {
        assert_eq!(Fraction::derive_duration("16th", 0, 0, 0), Fraction::new(1, 16));
        assert_eq!(Fraction::derive_duration("quarter", 1, 0, 0), Fraction::new(3, 8));
        assert_eq!(Fraction::derive_duration("half", 2, 0, 0), Fraction::new(7, 8));
        assert_eq!(Fraction::derive_duration("whole", 3, 0, 0), Fraction::new(15, 8));
    }

    #[test]
    fn test_derive_tuplets() {
        assert_eq!(Fraction::derive_duration("eighth", 0, 2, 3), Fraction::new(1, 12));
        assert_eq!(Fraction::derive_duration("16th", 0, 4, 5), Fraction::new(1, 20));
        // dotted quarter in a duplet-over-three (2:3 inverted)
        assert_eq!(Fraction::derive_duration("quarter", 1, 3, 2), Fraction::new(9, 16));
        // one side missing: tuplet ignored
        assert_eq!(Fraction::derive_duration("eighth", 0, 0, 3), Fraction::new(1, 8));
    }

    #[test]
    fn test_derive_unknown_type_is_invalid() {
        let f = Fraction::derive_duration("bogus", 2, 2, 3);
        assert!(!f.is_valid());
        assert!(!(f + Fraction::new(1, 4)).is_valid());
        assert_eq!(f.to_divisions(4), None);
        assert_eq!(f.partial_cmp(&Fraction::zero()), None);
    }

    #[test]
    fn test_reduced() {
        assert_eq!(Fraction::new(4, 16).reduced(), Fraction::new(1, 4));
        assert_eq!(Fraction::new(2, -4).reduced(), Fraction::new(-1, 2));
        assert!(!Fraction::new(3, 0).reduced().is_valid());
    }

    #[test]
    fn test_divisions() {
        assert_eq!(Fraction::from_divisions(2, 4), Fraction::new(1, 8));
        assert!(!Fraction::from_divisions(2, 0).is_valid());
        assert_eq!(Fraction::new(1, 12).to_divisions(3), Some(1));
        assert_eq!(Fraction::new(1, 12).to_divisions(2), None);
        assert_eq!(Fraction::new(1, 12).quarter_denominator(), Some(3));
    }

    #[test]
    fn test_to_note_type_and_dots() {
        assert_eq!(Fraction::new(3, 8).to_note_type_and_dots(), Some((NoteType::Quarter, 1)));
        assert_eq!(Fraction::new(1, 1).to_note_type_and_dots(), Some((NoteType::Whole, 0)));
        assert_eq!(Fraction::new(1, 12).to_note_type_and_dots(), None);
    }

    #[test]
    fn test_arithmetic_and_order() {
        let a = Fraction::new(1, 8);
        let b = Fraction::new(1, 12);
        assert_eq!(a + b, Fraction::new(5, 24));
        assert_eq!(a - b, Fraction::new(1, 24));
        assert_eq!(a * b, Fraction::new(1, 96));
        assert_eq!(a / b, Fraction::new(3, 2));
        assert!(!(a / Fraction::zero()).is_valid());
        assert!(b < a);
        assert_eq!(a.to_string(), "1/8");
    }

    #[test]
    fn test_overflow_yields_invalid() {
        assert!(!Fraction::derive_duration("eighth", 0, 2, i32::MAX).is_valid());
        assert!(!Fraction::derive_duration("1024th", 40, 0, 0).is_valid());
        assert!(!Fraction::derive_duration("maxima", u32::MAX, 0, 0).is_valid());

        let huge = Fraction::new(i32::MAX, 1);
        assert!(!(huge + huge).is_valid());
        assert!(!(huge * Fraction::new(2, 1)).is_valid());
        assert!(!(Fraction::new(1, i32::MAX) / huge).is_valid());
        assert_eq!(huge.to_divisions(i32::MAX), None);
        assert_eq!(Fraction::new(i32::MIN, -1).to_ratio(), None);
    }

    #[test]
    fn test_large_terms_that_reduce_stay_valid() {
        assert_eq!(Fraction::from_divisions(1_000_000_000, 1_000_000_000), Fraction::new(1, 4));
        assert!(!Fraction::from_divisions(1, i32::MAX).is_valid());
        let near = Fraction::new(i32::MAX - 1, i32::MAX);
        assert_eq!(near - near, Fraction::zero());
        assert_eq!(near * Fraction::new(i32::MAX, i32::MAX - 1), Fraction::new(1, 1));
    }
}
