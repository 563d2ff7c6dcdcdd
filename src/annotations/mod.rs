//! Segment-attached text annotations and their MusicXML codec
//!
//! Every annotation kind follows the same pattern: an own typed property (if
//! any) handled first, everything else delegated to the embedded
//! [`TextBaseProperties`]. Decoding walks the child elements of the
//! annotation's tag, encoding writes the own property followed by the base
//! properties in a fixed order.

pub mod play_tech;
pub mod staff_text;
pub mod text_base;

pub use play_tech::PlayTechAnnotation;
pub use staff_text::StaffText;
pub use text_base::TextBaseProperties;

use crate::converters::musicxml::errors::ParseError;
use crate::converters::musicxml::reader::XmlStreamReader;
use crate::converters::musicxml::writer::XmlWriter;
use crate::models::{ElementProperties, LayoutListener, Pid, PropertyError, PropertyValue, SegmentId};
use std::rc::Rc;

/// MusicXML encoding of one annotation kind
pub trait AnnotationCodec: ElementProperties + Sized {
    /// Element name of the annotation
    const TAG: &'static str;

    /// Fresh annotation with default properties, attached to `segment`
    fn new_in(segment: SegmentId) -> Self;

    /// Decode the children of the current `TAG` start element
    ///
    /// Unknown children are reported and skipped. On return the reader sits
    /// on the matching end element.
    fn read(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError>;

    /// Encode as a `TAG` element
    fn write(&self, writer: &mut XmlWriter);
}

/// Decode an annotation attached to `segment`
pub fn read_annotation<T: AnnotationCodec>(
    segment: SegmentId,
    reader: &mut XmlStreamReader,
) -> Result<T, ParseError> {
    let mut annotation = T::new_in(segment);
    annotation.read(reader)?;
    reader.check_at_end_element(T::TAG)?;
    Ok(annotation)
}

/// Any annotation a segment can carry
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    PlayTech(PlayTechAnnotation),
    StaffText(StaffText),
}

impl Annotation {
    pub fn tag(&self) -> &'static str {
        match self {
            Annotation::PlayTech(_) => PlayTechAnnotation::TAG,
            Annotation::StaffText(_) => StaffText::TAG,
        }
    }

    pub fn segment(&self) -> SegmentId {
        match self {
            Annotation::PlayTech(a) => a.segment(),
            Annotation::StaffText(a) => a.segment(),
        }
    }

    pub fn base(&self) -> &TextBaseProperties {
        match self {
            Annotation::PlayTech(a) => a.base(),
            Annotation::StaffText(a) => a.base(),
        }
    }

    pub fn write(&self, writer: &mut XmlWriter) {
        match self {
            Annotation::PlayTech(a) => a.write(writer),
            Annotation::StaffText(a) => a.write(writer),
        }
    }

    pub fn set_layout_listener(&mut self, listener: Rc<dyn LayoutListener>) {
        match self {
            Annotation::PlayTech(a) => a.set_layout_listener(listener),
            Annotation::StaffText(a) => a.set_layout_listener(listener),
        }
    }
}

impl ElementProperties for Annotation {
    fn get_property(&self, id: Pid) -> Option<PropertyValue> {
        match self {
            Annotation::PlayTech(a) => a.get_property(id),
            Annotation::StaffText(a) => a.get_property(id),
        }
    }

    fn set_property(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError> {
        match self {
            Annotation::PlayTech(a) => a.set_property(id, value),
            Annotation::StaffText(a) => a.set_property(id, value),
        }
    }

    fn property_default(&self, id: Pid) -> Option<PropertyValue> {
        match self {
            Annotation::PlayTech(a) => a.property_default(id),
            Annotation::StaffText(a) => a.property_default(id),
        }
    }
}

impl From<PlayTechAnnotation> for Annotation {
    fn from(a: PlayTechAnnotation) -> Self {
        Annotation::PlayTech(a)
    }
}

impl From<StaffText> for Annotation {
    fn from(a: StaffText) -> Self {
        Annotation::StaffText(a)
    }
}
