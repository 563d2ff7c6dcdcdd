//! Score document model
//!
//! The slice of the document model the interchange layer reads and writes:
//! parts, measures and time-positioned segments. A [`Segment`] owns the notes
//! and annotations that start at its tick; annotations point back at their
//! segment by [`SegmentId`] only.

use super::accidental::Accidental;
use super::fraction::{Fraction, NoteType};
use super::sym_id::SymId;
use crate::annotations::Annotation;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Identifier of a segment within a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub u32);

/// External layout collaborator
///
/// Elements call this after every successful property change so the engraving
/// side can re-layout the affected segment.
pub trait LayoutListener {
    fn segment_changed(&self, segment: SegmentId);
}

/// Diatonic step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::C => "C",
            Step::D => "D",
            Step::E => "E",
            Step::F => "F",
            Step::G => "G",
            Step::A => "A",
            Step::B => "B",
        }
    }

    pub fn from_name(name: &str) -> Option<Step> {
        match name {
            "C" => Some(Step::C),
            "D" => Some(Step::D),
            "E" => Some(Step::E),
            "F" => Some(Step::F),
            "G" => Some(Step::G),
            "A" => Some(Step::A),
            "B" => Some(Step::B),
            _ => None,
        }
    }
}

/// Written pitch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub step: Step,
    /// Chromatic alteration in semitones (may be fractional for microtones)
    pub alter: f64,
    pub octave: i32,
}

/// Tuplet ratio: `actual_notes` in the time of `normal_notes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeModification {
    pub actual_notes: i32,
    pub normal_notes: i32,
}

/// A note or rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// `None` for rests
    pub pitch: Option<Pitch>,
    pub voice: u32,
    /// Sounding length in whole notes
    pub duration: Fraction,
    pub note_type: Option<NoteType>,
    pub dots: u32,
    pub time_modification: Option<TimeModification>,
    pub accidental: Option<Accidental>,
    #[serde(default)]
    pub grace: bool,
    /// Sounds with the previous note of its voice in the same segment.
    /// Export honours it for grace notes only; regular notes sharing a
    /// segment and voice are always written as one chord.
    #[serde(default)]
    pub chord: bool,
    /// Articulation glyphs, including laissez vibrer
    #[serde(default)]
    pub articulations: Vec<SymId>,
    /// Accidentals drawn above or below an ornament
    #[serde(default)]
    pub accidental_marks: Vec<SymId>,
}

impl Note {
    /// A plain note of the given symbolic length
    pub fn new(pitch: Option<Pitch>, note_type: NoteType, dots: u32) -> Self {
        Self {
            pitch,
            voice: 1,
            duration: Fraction::derive_duration(note_type.name(), dots, 0, 0),
            note_type: Some(note_type),
            dots,
            time_modification: None,
            accidental: None,
            grace: false,
            chord: false,
            articulations: Vec::new(),
            accidental_marks: Vec::new(),
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }
}

/// Time position inside a measure, owning what starts there
#[derive(Debug, Clone)]
pub struct Segment {
    pub id: SegmentId,
    /// Offset from the start of the measure, in whole notes
    pub tick: Fraction,
    pub notes: Vec<Note>,
    pub annotations: Vec<Annotation>,
}

impl Segment {
    pub fn new(id: SegmentId, tick: Fraction) -> Self {
        Self {
            id,
            tick,
            notes: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

/// A measure: segments kept in tick order
#[derive(Debug, Clone, Default)]
pub struct Measure {
    pub number: String,
    pub segments: Vec<Segment>,
}

impl Measure {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            segments: Vec::new(),
        }
    }

    /// Segment at `tick`, created (with an id from `next_id`) if missing
    pub fn segment_at(&mut self, tick: Fraction, next_id: impl FnOnce() -> SegmentId) -> &mut Segment {
        let index = match self.segments.iter().position(|s| s.tick >= tick) {
            Some(i) if self.segments[i].tick == tick => i,
            Some(i) => {
                self.segments.insert(i, Segment::new(next_id(), tick));
                i
            }
            None => {
                self.segments.push(Segment::new(next_id(), tick));
                self.segments.len() - 1
            }
        };
        &mut self.segments[index]
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.segments.iter().flat_map(|s| s.notes.iter())
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.segments.iter().flat_map(|s| s.annotations.iter())
    }
}

/// A part (one instrument / staff)
#[derive(Debug, Clone, Default)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub measures: Vec<Measure>,
}

impl Part {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            measures: Vec::new(),
        }
    }
}

/// A score document
#[derive(Debug, Clone, Default)]
pub struct Score {
    pub title: Option<String>,
    pub parts: Vec<Part>,
    next_segment_id: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh segment id
    pub fn allocate_segment_id(&mut self) -> SegmentId {
        let id = SegmentId(self.next_segment_id);
        self.next_segment_id += 1;
        id
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.parts
            .iter()
            .flat_map(|p| p.measures.iter())
            .flat_map(|m| m.segments.iter())
    }

    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.parts
            .iter_mut()
            .flat_map(|p| p.measures.iter_mut())
            .flat_map(|m| m.segments.iter_mut())
    }

    pub fn find_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments().find(|s| s.id == id)
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.segments().flat_map(|s| s.annotations.iter())
    }

    /// Connect every annotation to the layout collaborator
    pub fn set_layout_listener(&mut self, listener: Rc<dyn LayoutListener>) {
        for segment in self.segments_mut() {
            for annotation in &mut segment.annotations {
                annotation.set_layout_listener(Rc::clone(&listener));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_at_keeps_tick_order() {
        let mut next = 0u32;
        let mut alloc = || {
            next += 1;
            SegmentId(next)
        };
        let mut measure = Measure::new("1");
        measure.segment_at(Fraction::new(1, 2), &mut alloc);
        measure.segment_at(Fraction::new(0, 1), &mut alloc);
        measure.segment_at(Fraction::new(1, 4), &mut alloc);
        let again = measure.segment_at(Fraction::new(1, 2), &mut alloc).id;

        let ticks: Vec<_> = measure.segments.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![Fraction::new(0, 1), Fraction::new(1, 4), Fraction::new(1, 2)]);
        assert_eq!(again, SegmentId(1));
        assert_eq!(measure.segments.len(), 3);
    }

    #[test]
    fn test_allocate_segment_ids() {
        let mut score = Score::new();
        assert_eq!(score.allocate_segment_id(), SegmentId(0));
        assert_eq!(score.allocate_segment_id(), SegmentId(1));
    }

    #[test]
    fn test_note_new_derives_duration() {
        let note = Note::new(None, NoteType::Quarter, 1);
        assert_eq!(note.duration, Fraction::new(3, 8));
        assert!(note.is_rest());
    }
}
