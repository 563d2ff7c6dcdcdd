//! MusicXML (partwise) export
//!
//! Output is fully determined by the score and the settings: same input,
//! same bytes. Each part gets a single `<divisions>` value large enough to
//! express every tick and duration in it; voices are serialized one after
//! the other inside a measure, joined by `<backup>`.

use super::accidentals::{to_glyph_name, CanonicalName, OTHER};
use super::errors::ConversionError;
use super::support::{articulation_to_xml, find_laissez_vibrer, format_decimal};
use super::types::ExportSettings;
use super::writer::XmlWriter;
use crate::models::{Accidental, AccidentalType, Fraction, Measure, Note, Part, Placement, Score, SymId};
use std::collections::BTreeSet;
use std::path::Path;

/// Export a score as a partwise MusicXML document
pub fn export_musicxml(score: &Score, settings: Option<ExportSettings>) -> Result<String, ConversionError> {
    let settings = settings.unwrap_or_default();
    let mut w = XmlWriter::new(settings.indent);

    w.declaration();
    if settings.write_doctype {
        w.doctype(&format!(
            "score-partwise PUBLIC \"-//Recordare//DTD MusicXML {} Partwise//EN\" \"http://www.musicxml.org/dtds/partwise.dtd\"",
            settings.version
        ));
    }
    w.start_element("score-partwise", &[("version", settings.version.as_str())]);

    if let Some(title) = &score.title {
        w.text_element("movement-title", title);
    }
    if let Some(software) = &settings.software {
        w.start_element("identification", &[]);
        w.start_element("encoding", &[]);
        w.text_element("software", software);
        w.end_element();
        w.end_element();
    }

    w.start_element("part-list", &[]);
    for part in &score.parts {
        w.start_element("score-part", &[("id", part.id.as_str())]);
        w.text_element("part-name", &part.name);
        w.end_element();
    }
    w.end_element();

    for part in &score.parts {
        write_part(&mut w, part);
    }

    w.end_element();
    log::info!("exported MusicXML: {} part(s)", score.parts.len());
    Ok(w.finish())
}

/// Export a score to a MusicXML file
pub fn export_musicxml_file(
    score: &Score,
    path: impl AsRef<Path>,
    settings: Option<ExportSettings>,
) -> Result<(), ConversionError> {
    let path = path.as_ref();
    let xml = export_musicxml(score, settings)?;
    std::fs::write(path, xml).map_err(|e| ConversionError::Io(format!("cannot write {}: {}", path.display(), e)))
}

// ============================================================================
// Divisions
// ============================================================================

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// `None` when the result overflows
fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Smallest divisions-per-quarter expressing every tick and duration of `part`
fn part_divisions(part: &Part) -> i32 {
    let mut divisions = 1i32;
    for segment in part.measures.iter().flat_map(|m| m.segments.iter()) {
        let fractions = std::iter::once(segment.tick).chain(segment.notes.iter().map(|n| n.duration));
        for denominator in fractions.filter_map(|f| f.quarter_denominator()) {
            let next = lcm(i64::from(divisions), i64::from(denominator)).and_then(|d| i32::try_from(d).ok());
            match next {
                Some(d) => divisions = d,
                None => {
                    log::warn!("part '{}' needs more than {} divisions, clamping", part.id, i32::MAX);
                    return i32::MAX;
                }
            }
        }
    }
    divisions
}

fn division_count(amount: Fraction, divisions: i32) -> i64 {
    amount.to_divisions(divisions).unwrap_or_else(|| {
        log::warn!("{} is not a whole number of divisions at {}", amount, divisions);
        0
    })
}

// ============================================================================
// Parts and measures
// ============================================================================

fn write_part(w: &mut XmlWriter, part: &Part) {
    let divisions = part_divisions(part);
    w.start_element("part", &[("id", part.id.as_str())]);
    for (index, measure) in part.measures.iter().enumerate() {
        w.start_element("measure", &[("number", measure.number.as_str())]);
        if index == 0 {
            w.start_element("attributes", &[]);
            w.text_element("divisions", &divisions.to_string());
            w.end_element();
        }
        write_measure(w, measure, divisions);
        w.end_element();
    }
    w.end_element();
}

fn write_measure(w: &mut XmlWriter, measure: &Measure, divisions: i32) {
    let voices: BTreeSet<u32> = measure.notes().map(|n| n.voice).collect();
    let voices: Vec<u32> = if voices.is_empty() {
        vec![1]
    } else {
        voices.into_iter().collect()
    };

    for (index, voice) in voices.iter().enumerate() {
        // annotations travel with the first voice
        let with_annotations = index == 0;
        let mut cursor = Fraction::zero();

        for segment in &measure.segments {
            let notes: Vec<&Note> = segment.notes.iter().filter(|n| n.voice == *voice).collect();
            let annotations = with_annotations && !segment.annotations.is_empty();
            if notes.is_empty() && !annotations {
                continue;
            }

            move_cursor(w, &mut cursor, segment.tick, divisions);
            if annotations {
                for annotation in &segment.annotations {
                    annotation.write(w);
                }
            }

            let (graces, regular): (Vec<&Note>, Vec<&Note>) = notes.into_iter().partition(|n| n.grace);
            for (i, note) in graces.iter().enumerate() {
                write_note(w, note, i > 0 && note.chord, divisions);
            }
            if let Some((lead, chord)) = regular.split_first() {
                write_note(w, lead, false, divisions);
                for note in chord {
                    write_note(w, note, true, divisions);
                }
                cursor = cursor + lead.duration;
            }
        }

        if index + 1 < voices.len() && !cursor.is_zero() {
            write_shift(w, "backup", cursor, divisions);
        }
    }
}

fn move_cursor(w: &mut XmlWriter, cursor: &mut Fraction, tick: Fraction, divisions: i32) {
    if tick > *cursor {
        write_shift(w, "forward", tick - *cursor, divisions);
    } else if tick < *cursor {
        write_shift(w, "backup", *cursor - tick, divisions);
    }
    *cursor = tick;
}

fn write_shift(w: &mut XmlWriter, element: &str, amount: Fraction, divisions: i32) {
    w.start_element(element, &[]);
    w.text_element("duration", &division_count(amount, divisions).to_string());
    w.end_element();
}

// ============================================================================
// Notes
// ============================================================================

fn write_note(w: &mut XmlWriter, note: &Note, chord: bool, divisions: i32) {
    w.start_element("note", &[]);
    if note.grace {
        w.empty_element("grace", &[]);
    }
    if chord {
        w.empty_element("chord", &[]);
    }

    match &note.pitch {
        Some(pitch) => {
            w.start_element("pitch", &[]);
            w.text_element("step", pitch.step.name());
            if pitch.alter != 0.0 {
                w.text_element("alter", &format_decimal(pitch.alter));
            }
            w.text_element("octave", &pitch.octave.to_string());
            w.end_element();
        }
        None => w.empty_element("rest", &[]),
    }

    if !note.grace {
        w.text_element("duration", &division_count(note.duration, divisions).to_string());
    }
    w.text_element("voice", &note.voice.to_string());

    let spelled = note
        .note_type
        .map(|t| (t, note.dots))
        .or_else(|| note.duration.to_note_type_and_dots());
    if let Some((note_type, dots)) = spelled {
        w.text_element("type", note_type.name());
        for _ in 0..dots {
            w.empty_element("dot", &[]);
        }
    }

    if let Some(accidental) = &note.accidental {
        write_accidental(w, accidental);
    }

    if let Some(tm) = &note.time_modification {
        w.start_element("time-modification", &[]);
        w.text_element("actual-notes", &tm.actual_notes.to_string());
        w.text_element("normal-notes", &tm.normal_notes.to_string());
        w.end_element();
    }

    write_notations(w, note);
    w.end_element();
}

fn write_accidental(w: &mut XmlWriter, accidental: &Accidental) {
    if accidental.accidental_type == AccidentalType::None {
        return;
    }
    let name = accidental.accidental_type.to_canonical_name();
    let mut attributes = Vec::new();
    if accidental.bracket {
        attributes.push(("parentheses", "yes"));
    }
    if name == OTHER {
        match to_glyph_name(accidental.accidental_type) {
            Some(glyph) => attributes.push(("smufl", glyph)),
            None => log::debug!(
                "accidental {:?} has no MusicXML name or smufl glyph",
                accidental.accidental_type
            ),
        }
    }
    w.text_element_with_attributes("accidental", &attributes, name);
}

fn write_notations(w: &mut XmlWriter, note: &Note) {
    let let_ring = find_laissez_vibrer(&note.articulations);
    let articulations: Vec<(&str, Placement)> = note
        .articulations
        .iter()
        .filter_map(|id| articulation_to_xml(*id))
        .collect();
    let marks: Vec<SymId> = note
        .accidental_marks
        .iter()
        .copied()
        .filter(|id| *id != SymId::NoSym)
        .collect();
    if let_ring.is_none() && articulations.is_empty() && marks.is_empty() {
        return;
    }

    w.start_element("notations", &[]);
    if let Some(id) = let_ring {
        let placement = if id.is_below() { Placement::Below } else { Placement::Above };
        w.empty_element("tied", &[("type", "let-ring"), ("placement", placement.name())]);
    }
    if !articulations.is_empty() {
        w.start_element("articulations", &[]);
        for (name, placement) in articulations {
            w.empty_element(name, &[("placement", placement.name())]);
        }
        w.end_element();
    }
    if !marks.is_empty() {
        w.start_element("ornaments", &[]);
        for id in marks {
            let name = id.to_canonical_name();
            let attributes: Vec<(&str, &str)> = if name == OTHER { vec![("smufl", id.name())] } else { Vec::new() };
            w.text_element_with_attributes("accidental-mark", &attributes, name);
        }
        w.end_element();
    }
    w.end_element();
}
