//! Models module for the score interchange layer
//!
//! Value types (durations, glyphs, accidentals, techniques), the property
//! contract and the score document the converters read and write.

pub mod accidental;
pub mod fraction;
pub mod property;
pub mod score;
pub mod sym_id;
pub mod technique;

// Re-export commonly used types
pub use accidental::{Accidental, AccidentalType};
pub use fraction::{Fraction, NoteType};
pub use property::{ElementProperties, Pid, Placement, PropertyError, PropertyValue, TextStyleType};
pub use score::{LayoutListener, Measure, Note, Part, Pitch, Score, Segment, SegmentId, Step, TimeModification};
pub use sym_id::SymId;
pub use technique::PlayingTechniqueType;
