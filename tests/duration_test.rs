// Test: note durations derived from MusicXML vocabulary
// Input: note type name, dot count, tuplet normal/actual notes
// Expected: exact reduced fractions of a whole note; unknown names are invalid

use score_interchange::converters::musicxml::support::string_to_int;
use score_interchange::{Fraction, NoteType};

#[test]
fn test_sixteenth() {
    assert_eq!(Fraction::derive_duration("16th", 0, 0, 0), Fraction::new(1, 16));
}

#[test]
fn test_dotted_quarter() {
    assert_eq!(Fraction::derive_duration("quarter", 1, 0, 0), Fraction::new(3, 8));
}

#[test]
fn test_triplet_eighth() {
    let d = Fraction::derive_duration("eighth", 0, 2, 3);
    assert_eq!(d, Fraction::new(1, 12));
    assert_eq!(d.to_string(), "1/12");
}

#[test]
fn test_double_dotted_half() {
    assert_eq!(Fraction::derive_duration("half", 2, 0, 0), Fraction::new(7, 8));
}

#[test]
fn test_unknown_type_is_invalid_and_stays_invalid() {
    let bogus = Fraction::derive_duration("bogus", 0, 0, 0);
    assert!(!bogus.is_valid());

    // downstream arithmetic must not panic on an invalid value
    let sum = bogus + Fraction::new(1, 4);
    assert!(!sum.is_valid());
    assert_eq!(bogus.to_divisions(4), None);
    assert_eq!(bogus.to_note_type_and_dots(), None);
}

#[test]
fn test_every_note_type_name_resolves() {
    for t in NoteType::ALL {
        assert_eq!(NoteType::from_name(t.name()), Some(t));
        assert!(Fraction::from_note_type_name(t.name()).is_valid(), "{}", t.name());
    }
}

#[test]
fn test_divisions_round_trip() {
    // 3 divisions of a quarter at 2 per quarter = dotted quarter
    let d = Fraction::from_divisions(3, 2);
    assert_eq!(d, Fraction::new(3, 8));
    assert_eq!(d.to_divisions(2), Some(3));
    assert_eq!(d.to_note_type_and_dots(), Some((NoteType::Quarter, 1)));
}

#[test]
fn test_string_to_int_tolerates_trailing_zero_fraction() {
    assert_eq!(string_to_int("4"), Some(4));
    assert_eq!(string_to_int("4.0"), Some(4));
    assert_eq!(string_to_int(" 12 "), Some(12));
    assert_eq!(string_to_int("4.5"), None);
    assert_eq!(string_to_int("four"), None);
}

#[test]
fn test_extreme_tuplet_counts_are_invalid_not_a_panic() {
    assert!(!Fraction::derive_duration("eighth", 0, 2, i32::MAX).is_valid());
    assert!(!Fraction::derive_duration("maxima", 0, i32::MAX, 1).is_valid());
    // a large tuplet that still reduces to i32 terms is kept
    assert_eq!(
        Fraction::derive_duration("whole", 0, 1_000_000, 1_000_000),
        Fraction::new(1, 1)
    );
}

#[test]
fn test_many_dots_are_invalid_not_a_panic() {
    assert!(!Fraction::derive_duration("quarter", 31, 0, 0).is_valid());
    assert!(!Fraction::derive_duration("breve", 200, 0, 0).is_valid());
    assert_eq!(Fraction::derive_duration("quarter", 4, 0, 0), Fraction::new(31, 64));
}

#[test]
fn test_arithmetic_overflow_yields_invalid() {
    let big = Fraction::new(i32::MAX, 1);
    assert!(!(big + Fraction::new(1, 1)).is_valid());
    assert!(!(Fraction::new(i32::MIN, 1) - Fraction::new(1, 1)).is_valid());
    assert!(!(big * big).is_valid());
    assert!(!(Fraction::new(1, 3) + Fraction::new(1, i32::MAX)).is_valid());
    // invalid stays invalid through further arithmetic
    assert!(!((big + big) - big).is_valid());
}

#[test]
fn test_huge_divisions() {
    assert_eq!(
        Fraction::from_divisions(1_000_000_000, 1_000_000_000),
        Fraction::new(1, 4)
    );
    assert!(!Fraction::from_divisions(1, 1_000_000_000).is_valid());
    assert_eq!(Fraction::new(1, 4).to_divisions(i32::MAX), Some(i64::from(i32::MAX)));
    assert_eq!(Fraction::new(i32::MAX, 1).to_divisions(i32::MAX), None);
}
