//! MusicXML (partwise) import
//!
//! Entry points classify the input first (compressed container, encoding,
//! root element, version) and only then walk the document. The walk is
//! lenient: anything recoverable becomes a diagnostic and a default, only
//! structural damage aborts the import.

use super::accidentals::{infer_from_alter_value, CanonicalName};
use super::errors::{ConversionError, ParseError};
use super::reader::XmlStreamReader;
use super::support::{accidental_text_to_char, articulation_from_xml, laissez_vibrer_glyph, string_to_int};
use super::types::{ImportResult, ImportSettings};
use crate::annotations::{read_annotation, AnnotationCodec, PlayTechAnnotation, StaffText};
use crate::models::{
    Accidental, AccidentalType, Fraction, Measure, Note, NoteType, Part, Pitch, Placement, Score, Segment, Step,
    SymId, TimeModification,
};
use std::path::Path;

const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

/// Import a MusicXML document from memory
///
/// # Arguments
///
/// * `data` - Uncompressed MusicXML document bytes
/// * `settings` - Optional import settings (uses defaults if None)
///
/// # Returns
///
/// * `Ok(ImportResult)` - The score plus all recoverable diagnostics
/// * `Err(ConversionError)` - Unknown file type, unsupported version or
///   structural parse error
pub fn import_musicxml_from_buffer(
    data: &[u8],
    settings: Option<ImportSettings>,
) -> Result<ImportResult, ConversionError> {
    let settings = settings.unwrap_or_default();

    if data.starts_with(ZIP_SIGNATURE) {
        return Err(ConversionError::UnknownFileType(
            "compressed MusicXML must be unpacked before import".to_string(),
        ));
    }
    if std::str::from_utf8(data).is_err() {
        return Err(ConversionError::UnknownFileType("document is not UTF-8 text".to_string()));
    }

    let mut reader = XmlStreamReader::new(data);
    if !reader.read_next_start_element()? {
        return Err(ConversionError::UnknownFileType("document has no root element".to_string()));
    }
    match reader.name() {
        "score-partwise" => {}
        "score-timewise" => {
            return Err(ConversionError::UnknownFileType(
                "timewise MusicXML is not supported".to_string(),
            ))
        }
        other => {
            return Err(ConversionError::UnknownFileType(format!(
                "unexpected root element <{}>",
                other
            )))
        }
    }
    check_version(reader.attribute("version").unwrap_or("1.0"), &settings)?;

    let mut importer = PartwiseImporter::default();
    importer.read_score(&mut reader)?;
    reader.check_at_end_element("score-partwise")?;

    let score = importer.finish();
    let diagnostics = reader.into_diagnostics();
    log::info!(
        "imported MusicXML: {} part(s), {} diagnostic(s)",
        score.parts.len(),
        diagnostics.len()
    );
    Ok(ImportResult { score, diagnostics })
}

/// Import a MusicXML file
pub fn import_musicxml_file(
    path: impl AsRef<Path>,
    settings: Option<ImportSettings>,
) -> Result<ImportResult, ConversionError> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| ConversionError::Io(format!("cannot read {}: {}", path.display(), e)))?;
    import_musicxml_from_buffer(&data, settings)
}

/// `major[.minor]`
fn parse_version(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor))
}

fn check_version(version: &str, settings: &ImportSettings) -> Result<(), ConversionError> {
    match parse_version(version) {
        Some((major, _)) if major <= settings.max_major_version => Ok(()),
        Some(_) => Err(ConversionError::UnsupportedVersion(format!(
            "{} (newest supported is {}.x)",
            version, settings.max_major_version
        ))),
        None => Err(ConversionError::UnsupportedVersion(format!(
            "unreadable version '{}'",
            version
        ))),
    }
}

// ============================================================================
// Document walk
// ============================================================================

/// Per-part reading state that survives measure boundaries
struct PartState {
    divisions: i32,
}

/// A decoded note plus how it moves the measure cursor
struct ImportedNote {
    note: Note,
    chord: bool,
    advance: Fraction,
}

#[derive(Default)]
struct PartwiseImporter {
    score: Score,
    movement_title: Option<String>,
    work_title: Option<String>,
    saw_part: bool,
}

impl PartwiseImporter {
    fn finish(mut self) -> Score {
        self.score.title = self.movement_title.or(self.work_title);
        self.score
    }

    fn read_score(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            match tag.as_str() {
                "movement-title" => self.movement_title = non_empty(reader.read_text()?),
                "work" => self.read_work(reader)?,
                "part-list" => self.read_part_list(reader)?,
                "part" => self.read_part(reader)?,
                "identification" | "defaults" | "credit" | "movement-number" => reader.skip_current_element()?,
                _ => reader.unknown()?,
            }
        }
        if !self.saw_part {
            return Err(reader.missing_element("part"));
        }
        Ok(())
    }

    fn read_work(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        while reader.read_next_start_element()? {
            if reader.name() == "work-title" {
                self.work_title = non_empty(reader.read_text()?);
            } else {
                reader.skip_current_element()?;
            }
        }
        Ok(())
    }

    fn read_part_list(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            match tag.as_str() {
                "score-part" => self.read_score_part(reader)?,
                "part-group" => reader.skip_current_element()?,
                _ => reader.unknown()?,
            }
        }
        Ok(())
    }

    fn read_score_part(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        let id = match reader.attribute("id") {
            Some(id) => id.to_string(),
            None => {
                let id = format!("P{}", self.score.parts.len() + 1);
                reader.warn("missing_attribute", format!("<score-part> without id, using '{}'", id));
                id
            }
        };
        let mut name = String::new();
        let mut display_name = None;
        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            match tag.as_str() {
                "part-name" => name = reader.read_text()?,
                "part-name-display" => display_name = non_empty(read_name_display(reader)?),
                _ => reader.skip_current_element()?,
            }
        }
        reader.check_at_end_element("score-part")?;
        // the display form wins, it carries the real accidentals
        if let Some(display_name) = display_name {
            name = display_name;
        }

        if self.score.parts.iter().any(|p| p.id == id) {
            reader.warn("duplicate_part", format!("part '{}' declared twice", id));
        } else {
            self.score.parts.push(Part::new(id, name));
        }
        Ok(())
    }

    fn read_part(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        self.saw_part = true;
        let id = reader.attribute("id").map(str::to_string);
        let index = match id {
            Some(id) => match self.score.parts.iter().position(|p| p.id == id) {
                Some(index) => index,
                None => {
                    reader.warn("undeclared_part", format!("part '{}' missing from <part-list>", id));
                    self.score.parts.push(Part::new(id.clone(), id));
                    self.score.parts.len() - 1
                }
            },
            None => {
                let id = format!("P{}", self.score.parts.len() + 1);
                reader.warn("missing_attribute", format!("<part> without id, using '{}'", id));
                self.score.parts.push(Part::new(id.clone(), id));
                self.score.parts.len() - 1
            }
        };

        let mut state = PartState { divisions: 1 };
        while reader.read_next_start_element()? {
            if reader.name() == "measure" {
                let measure = self.read_measure(reader, &mut state)?;
                self.score.parts[index].measures.push(measure);
            } else {
                reader.unknown()?;
            }
        }
        reader.check_at_end_element("part")
    }

    fn read_measure(&mut self, reader: &mut XmlStreamReader, state: &mut PartState) -> Result<Measure, ParseError> {
        let mut measure = Measure::new(reader.attribute("number").unwrap_or_default());
        let mut cursor = Fraction::zero();
        let mut chord_tick = Fraction::zero();

        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            match tag.as_str() {
                "attributes" => read_attributes(reader, state)?,
                "note" => {
                    if let Some(imported) = read_note(reader, state)? {
                        let tick = if imported.chord { chord_tick } else { cursor };
                        if !imported.chord {
                            // grace notes lead chords too, they just do not advance
                            chord_tick = cursor;
                            cursor = advance_cursor(reader, cursor, imported.advance);
                        }
                        segment_at(&mut self.score, &mut measure, tick).notes.push(imported.note);
                    }
                }
                "backup" => {
                    let amount = read_shift(reader, state)?;
                    cursor = cursor - amount;
                    if cursor < Fraction::zero() {
                        reader.warn("invalid_value", "<backup> moves before the start of the measure");
                        cursor = Fraction::zero();
                    }
                }
                "forward" => {
                    let amount = read_shift(reader, state)?;
                    cursor = advance_cursor(reader, cursor, amount);
                }
                tag if tag == PlayTechAnnotation::TAG => {
                    let segment = segment_at(&mut self.score, &mut measure, cursor).id;
                    let annotation = read_annotation::<PlayTechAnnotation>(segment, reader)?;
                    segment_at(&mut self.score, &mut measure, cursor)
                        .annotations
                        .push(annotation.into());
                }
                tag if tag == StaffText::TAG => {
                    let segment = segment_at(&mut self.score, &mut measure, cursor).id;
                    let annotation = read_annotation::<StaffText>(segment, reader)?;
                    segment_at(&mut self.score, &mut measure, cursor)
                        .annotations
                        .push(annotation.into());
                }
                "direction" | "barline" | "print" | "sound" | "harmony" | "figured-bass" | "bookmark" | "link"
                | "grouping" => reader.skip_current_element()?,
                _ => reader.unknown()?,
            }
        }
        reader.check_at_end_element("measure")?;
        Ok(measure)
    }
}

fn segment_at<'m>(score: &mut Score, measure: &'m mut Measure, tick: Fraction) -> &'m mut Segment {
    measure.segment_at(tick, || score.allocate_segment_id())
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

// ============================================================================
// Element decoders
// ============================================================================

/// Read the current element as an integer, reporting unparseable text
fn read_int(reader: &mut XmlStreamReader, element: &str) -> Result<Option<i32>, ParseError> {
    let text = reader.read_text()?;
    let value = string_to_int(&text);
    if value.is_none() {
        reader.warn("invalid_value", format!("invalid <{}> value '{}'", element, text.trim()));
    }
    Ok(value)
}

fn placement_attribute(reader: &XmlStreamReader) -> Placement {
    reader
        .attribute("placement")
        .and_then(Placement::from_name)
        .unwrap_or(Placement::Above)
}

/// Flatten `<display-text>` / `<accidental-text>` runs into one string
fn read_name_display(reader: &mut XmlStreamReader) -> Result<String, ParseError> {
    let mut name = String::new();
    while reader.read_next_start_element()? {
        let tag = reader.name().to_string();
        match tag.as_str() {
            "display-text" => name.push_str(&reader.read_text()?),
            "accidental-text" => {
                let text = reader.read_text()?;
                match accidental_text_to_char(text.trim()) {
                    Some(c) => name.push_str(c),
                    None => {
                        reader.warn("unknown_accidental", format!("no text form for accidental '{}'", text.trim()));
                        name.push_str(text.trim());
                    }
                }
            }
            _ => reader.unknown()?,
        }
    }
    Ok(name)
}

fn read_attributes(reader: &mut XmlStreamReader, state: &mut PartState) -> Result<(), ParseError> {
    while reader.read_next_start_element()? {
        if reader.name() == "divisions" {
            match read_int(reader, "divisions")? {
                Some(d) if d > 0 => state.divisions = d,
                Some(d) => reader.warn("invalid_value", format!("divisions must be positive, got {}", d)),
                None => {}
            }
        } else {
            reader.skip_current_element()?;
        }
    }
    Ok(())
}

/// Move the measure cursor forward, keeping it where it is when the new
/// position has no exact `i32` representation
fn advance_cursor(reader: &mut XmlStreamReader, cursor: Fraction, amount: Fraction) -> Fraction {
    let next = cursor + amount;
    if next.is_valid() {
        next
    } else {
        reader.warn("invalid_value", format!("measure position {} + {} is out of range", cursor, amount));
        cursor
    }
}

/// Duration of a `<backup>` or `<forward>`
fn read_shift(reader: &mut XmlStreamReader, state: &PartState) -> Result<Fraction, ParseError> {
    let element = reader.name().to_string();
    let mut amount = None;
    while reader.read_next_start_element()? {
        if reader.name() == "duration" {
            amount = read_int(reader, "duration")?;
        } else {
            reader.skip_current_element()?;
        }
    }
    match amount.map(|d| Fraction::from_divisions(d, state.divisions)) {
        Some(f) if f.is_valid() && f >= Fraction::zero() => Ok(f),
        _ => {
            reader.warn("invalid_value", format!("<{}> without a usable duration ignored", element));
            Ok(Fraction::zero())
        }
    }
}

fn read_note(reader: &mut XmlStreamReader, state: &PartState) -> Result<Option<ImportedNote>, ParseError> {
    let mut pitch = None;
    let mut chord = false;
    let mut grace = false;
    let mut duration = None;
    let mut voice = 1u32;
    let mut type_name: Option<String> = None;
    let mut dots = 0u32;
    let mut time_modification = None;
    let mut accidental = None;
    let mut articulations = Vec::new();
    let mut accidental_marks = Vec::new();

    while reader.read_next_start_element()? {
        let tag = reader.name().to_string();
        match tag.as_str() {
            "chord" => {
                chord = true;
                reader.skip_current_element()?;
            }
            "grace" => {
                grace = true;
                reader.skip_current_element()?;
            }
            "dot" => {
                dots += 1;
                reader.skip_current_element()?;
            }
            "rest" => reader.skip_current_element()?,
            "pitch" => pitch = Some(read_pitch(reader)?),
            "duration" => duration = read_int(reader, "duration")?,
            "voice" => match read_int(reader, "voice")? {
                Some(v) if v > 0 => voice = v as u32,
                Some(v) => reader.warn("invalid_value", format!("invalid voice {}", v)),
                None => {}
            },
            "type" => type_name = Some(reader.read_text()?.trim().to_string()),
            "time-modification" => time_modification = read_time_modification(reader)?,
            "accidental" => accidental = read_accidental(reader)?,
            "notations" => read_notations(reader, &mut articulations, &mut accidental_marks)?,
            "tie" | "stem" | "beam" | "staff" | "notehead" | "lyric" | "instrument" | "footnote" | "level"
            | "play" | "listen" | "cue" => reader.skip_current_element()?,
            _ => reader.unknown()?,
        }
    }
    reader.check_at_end_element("note")?;

    let (normal, actual) = time_modification
        .map(|t: TimeModification| (t.normal_notes, t.actual_notes))
        .unwrap_or((0, 0));
    let symbolic = match type_name.as_deref() {
        Some(name) => {
            let d = Fraction::derive_duration(name, dots, normal, actual);
            if NoteType::from_name(name).is_none() {
                reader.warn("unknown_note_type", format!("unknown note type '{}'", name));
            } else if !d.is_valid() {
                reader.warn(
                    "invalid_value",
                    format!("{} with {} dots in {}:{} has no exact duration", name, dots, actual, normal),
                );
            }
            Some(d).filter(Fraction::is_valid)
        }
        None => None,
    };
    let timed = duration.map(|d| Fraction::from_divisions(d, state.divisions));
    if timed.map_or(false, |d| !d.is_valid()) {
        reader.warn(
            "invalid_value",
            format!("duration at {} divisions per quarter has no exact value", state.divisions),
        );
    }
    let timed = timed.filter(Fraction::is_valid);

    let Some(note_duration) = symbolic.or(timed) else {
        reader.warn("missing_duration", "note without type or duration skipped");
        return Ok(None);
    };

    if accidental.is_none() {
        if let Some(p) = &pitch {
            if p.alter.fract() != 0.0 {
                let inferred = reader.resolve("unknown_alter", infer_from_alter_value(p.alter));
                if inferred != AccidentalType::None {
                    accidental = Some(Accidental::new(inferred));
                }
            }
        }
    }

    let advance = if chord || grace {
        Fraction::zero()
    } else {
        timed.unwrap_or(note_duration)
    };
    let note = Note {
        pitch,
        voice,
        duration: note_duration,
        note_type: type_name.as_deref().and_then(NoteType::from_name),
        dots,
        time_modification,
        accidental,
        grace,
        chord,
        articulations,
        accidental_marks,
    };
    Ok(Some(ImportedNote { note, chord, advance }))
}

fn read_pitch(reader: &mut XmlStreamReader) -> Result<Pitch, ParseError> {
    let mut step = None;
    let mut alter = 0.0;
    let mut octave = None;
    while reader.read_next_start_element()? {
        let tag = reader.name().to_string();
        match tag.as_str() {
            "step" => {
                let text = reader.read_text()?;
                step = Step::from_name(text.trim());
                if step.is_none() {
                    reader.warn("invalid_value", format!("invalid <step> value '{}'", text.trim()));
                }
            }
            "alter" => {
                let text = reader.read_text()?;
                match text.trim().parse::<f64>() {
                    Ok(a) if a.is_finite() => alter = a,
                    _ => reader.warn("invalid_value", format!("invalid <alter> value '{}'", text.trim())),
                }
            }
            "octave" => octave = read_int(reader, "octave")?,
            _ => reader.unknown()?,
        }
    }
    reader.check_at_end_element("pitch")?;

    let step = step.unwrap_or_else(|| {
        reader.warn("missing_element", "pitch without a valid <step>, using C");
        Step::C
    });
    let octave = octave.unwrap_or_else(|| {
        reader.warn("missing_element", "pitch without a valid <octave>, using 4");
        4
    });
    Ok(Pitch { step, alter, octave })
}

fn read_time_modification(reader: &mut XmlStreamReader) -> Result<Option<TimeModification>, ParseError> {
    let mut actual = None;
    let mut normal = None;
    while reader.read_next_start_element()? {
        let tag = reader.name().to_string();
        match tag.as_str() {
            "actual-notes" => actual = read_int(reader, "actual-notes")?,
            "normal-notes" => normal = read_int(reader, "normal-notes")?,
            _ => reader.skip_current_element()?,
        }
    }
    match (actual, normal) {
        (Some(actual_notes), Some(normal_notes)) if actual_notes > 0 && normal_notes > 0 => {
            Ok(Some(TimeModification {
                actual_notes,
                normal_notes,
            }))
        }
        _ => {
            reader.warn("invalid_value", "incomplete <time-modification> ignored");
            Ok(None)
        }
    }
}

fn read_accidental(reader: &mut XmlStreamReader) -> Result<Option<Accidental>, ParseError> {
    let glyph = reader.attribute("smufl").unwrap_or_default().to_string();
    let bracket = reader.attribute("parentheses") == Some("yes");
    let name = reader.read_text()?;
    let accidental_type = reader.resolve(
        "unknown_accidental",
        AccidentalType::from_canonical_name(name.trim(), &glyph),
    );
    if accidental_type == AccidentalType::None {
        return Ok(None);
    }
    Ok(Some(Accidental {
        accidental_type,
        bracket,
    }))
}

fn read_notations(
    reader: &mut XmlStreamReader,
    articulations: &mut Vec<SymId>,
    accidental_marks: &mut Vec<SymId>,
) -> Result<(), ParseError> {
    while reader.read_next_start_element()? {
        let tag = reader.name().to_string();
        match tag.as_str() {
            "tied" => {
                if reader.attribute("type") == Some("let-ring") {
                    articulations.push(laissez_vibrer_glyph(placement_attribute(reader)));
                }
                reader.skip_current_element()?;
            }
            "articulations" => {
                while reader.read_next_start_element()? {
                    let name = reader.name().to_string();
                    match articulation_from_xml(&name, placement_attribute(reader)) {
                        Some(id) => {
                            articulations.push(id);
                            reader.skip_current_element()?;
                        }
                        None => reader.unknown()?,
                    }
                }
            }
            "ornaments" => {
                while reader.read_next_start_element()? {
                    if reader.name() != "accidental-mark" {
                        reader.unknown()?;
                        continue;
                    }
                    let glyph = reader.attribute("smufl").unwrap_or_default().to_string();
                    let name = reader.read_text()?;
                    let id = reader.resolve("unknown_accidental", SymId::from_canonical_name(name.trim(), &glyph));
                    if id != SymId::NoSym {
                        accidental_marks.push(id);
                    }
                }
            }
            "slur" | "tuplet" | "fermata" | "dynamics" | "technical" | "arpeggiate" | "non-arpeggiate"
            | "glissando" | "slide" | "other-notation" => reader.skip_current_element()?,
            _ => reader.unknown()?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("3.1"), Some((3, 1)));
        assert_eq!(parse_version("4"), Some((4, 0)));
        assert_eq!(parse_version("4.x"), None);
        assert_eq!(parse_version("1.0.2"), None);
    }

    #[test]
    fn test_check_version_against_settings() {
        let settings = ImportSettings::default();
        assert!(check_version("4.0", &settings).is_ok());
        assert!(matches!(
            check_version("5.0", &settings),
            Err(ConversionError::UnsupportedVersion(_))
        ));
        let strict = ImportSettings { max_major_version: 3 };
        assert!(check_version("4.0", &strict).is_err());
    }

    #[test]
    fn test_read_note_tuplet_and_inferred_accidental() {
        let xml = b"<note>\
            <pitch><step>D</step><alter>0.5</alter><octave>5</octave></pitch>\
            <duration>2</duration><type>eighth</type>\
            <time-modification><actual-notes>3</actual-notes><normal-notes>2</normal-notes></time-modification>\
            </note>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        let imported = read_note(&mut reader, &PartState { divisions: 6 }).unwrap().unwrap();

        assert_eq!(imported.note.duration, Fraction::new(1, 12));
        assert_eq!(imported.advance, Fraction::new(1, 12));
        assert_eq!(
            imported.note.accidental.map(|a| a.accidental_type),
            Some(AccidentalType::SharpSlash)
        );
        assert!(reader.diagnostics().is_empty());
    }

    #[test]
    fn test_read_note_without_duration_is_skipped() {
        let xml = b"<note><rest/><type>semiquaver</type></note>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        assert!(read_note(&mut reader, &PartState { divisions: 1 }).unwrap().is_none());
        assert_eq!(reader.diagnostics().len(), 2);
    }

    #[test]
    fn test_part_name_display_with_accidental() {
        let xml = b"<part-name-display>\
            <display-text>B</display-text><accidental-text>flat</accidental-text>\
            <accidental-text>koron</accidental-text>\
            </part-name-display>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        assert_eq!(read_name_display(&mut reader).unwrap(), "B\u{266D}koron");
        assert_eq!(reader.diagnostics().of_kind("unknown_accidental").count(), 1);
    }

    #[test]
    fn test_part_name_display_keeps_run_spacing() {
        let xml = b"<part-name-display>\n  <display-text>Clarinet in B</display-text>\n  \
            <accidental-text>flat</accidental-text><display-text> 2</display-text>\n</part-name-display>";
        let mut reader = XmlStreamReader::new(xml);
        reader.read_next_start_element().unwrap();
        assert_eq!(read_name_display(&mut reader).unwrap(), "Clarinet in B\u{266D} 2");
        assert!(reader.diagnostics().is_empty());
    }

    #[test]
    fn test_cursor_overflow_keeps_position() {
        let mut reader = XmlStreamReader::new(b"<measure/>");
        let cursor = Fraction::new(1, 4);
        let next = advance_cursor(&mut reader, cursor, Fraction::new(1, i32::MAX));
        assert_eq!(next, cursor);
        assert_eq!(reader.diagnostics().of_kind("invalid_value").count(), 1);
        assert_eq!(advance_cursor(&mut reader, cursor, cursor), Fraction::new(1, 2));
    }
}
