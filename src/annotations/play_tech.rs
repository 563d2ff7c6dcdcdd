//! Playing technique annotation (`<play-tech-annotation>`)

use super::text_base::TextBaseProperties;
use super::AnnotationCodec;
use crate::converters::musicxml::errors::ParseError;
use crate::converters::musicxml::reader::XmlStreamReader;
use crate::converters::musicxml::writer::XmlWriter;
use crate::models::{
    ElementProperties, LayoutListener, Pid, PlayingTechniqueType, PropertyError, PropertyValue, SegmentId,
    TextStyleType,
};
use std::fmt;
use std::rc::Rc;

const TECHNIQUE_TAG: &str = "play-tech-type";

/// Text annotation switching the playing technique from its segment onwards
#[derive(Clone)]
pub struct PlayTechAnnotation {
    segment: SegmentId,
    technique: PlayingTechniqueType,
    base: TextBaseProperties,
    layout: Option<Rc<dyn LayoutListener>>,
}

impl PlayTechAnnotation {
    pub fn new(segment: SegmentId, technique: PlayingTechniqueType, text_style: TextStyleType) -> Self {
        Self {
            segment,
            technique,
            base: TextBaseProperties::with_style(text_style),
            layout: None,
        }
    }

    pub fn with_layout_listener(mut self, listener: Rc<dyn LayoutListener>) -> Self {
        self.layout = Some(listener);
        self
    }

    pub fn set_layout_listener(&mut self, listener: Rc<dyn LayoutListener>) {
        self.layout = Some(listener);
    }

    pub fn segment(&self) -> SegmentId {
        self.segment
    }

    pub fn technique(&self) -> PlayingTechniqueType {
        self.technique
    }

    /// Change the technique directly, without a layout pass
    pub fn set_technique(&mut self, technique: PlayingTechniqueType) {
        self.technique = technique;
    }

    pub fn base(&self) -> &TextBaseProperties {
        &self.base
    }

    fn trigger_layout(&self) {
        if let Some(listener) = &self.layout {
            listener.segment_changed(self.segment);
        }
    }

    fn read_technique(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        let value = reader.read_text()?;
        match PlayingTechniqueType::parse(&value) {
            Some(t) => self.technique = t,
            None => {
                self.technique = PlayingTechniqueType::default();
                reader.warn(
                    "unknown_technique",
                    format!("unknown playing technique '{}', using '{}'", value, self.technique.name()),
                );
            }
        }
        Ok(())
    }
}

impl AnnotationCodec for PlayTechAnnotation {
    const TAG: &'static str = "play-tech-annotation";

    fn new_in(segment: SegmentId) -> Self {
        PlayTechAnnotation::new(segment, PlayingTechniqueType::Natural, TextStyleType::Staff)
    }

    fn read(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            if tag == TECHNIQUE_TAG {
                self.read_technique(reader)?;
            } else if !self.base.read_property(&tag, reader)? {
                reader.unknown()?;
            }
        }
        Ok(())
    }

    fn write(&self, writer: &mut XmlWriter) {
        writer.start_element(Self::TAG, &[]);
        writer.text_element(TECHNIQUE_TAG, self.technique.name());
        self.base.write_properties(writer);
        writer.end_element();
    }
}

impl ElementProperties for PlayTechAnnotation {
    fn get_property(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::PlayTechType => Some(PropertyValue::PlayTechType(self.technique)),
            _ => self.base.get(id),
        }
    }

    fn set_property(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError> {
        match (id, value) {
            (Pid::PlayTechType, PropertyValue::PlayTechType(t)) => self.technique = t,
            (Pid::PlayTechType, PropertyValue::Int(i)) => {
                self.technique = PlayingTechniqueType::from_index(i).ok_or(PropertyError::InvalidValue {
                    pid: id,
                    value: PropertyValue::Int(i),
                })?
            }
            (Pid::PlayTechType, value) => return Err(PropertyError::InvalidValue { pid: id, value }),
            (id, value) => self.base.set(id, value)?,
        }
        self.trigger_layout();
        Ok(())
    }

    fn property_default(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::PlayTechType => Some(PropertyValue::PlayTechType(PlayingTechniqueType::Natural)),
            Pid::TextStyle => Some(PropertyValue::TextStyle(TextStyleType::Staff)),
            _ => TextBaseProperties::default_for(id),
        }
    }
}

impl fmt::Debug for PlayTechAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayTechAnnotation")
            .field("segment", &self.segment)
            .field("technique", &self.technique)
            .field("base", &self.base)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}

impl PartialEq for PlayTechAnnotation {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment && self.technique == other.technique && self.base == other.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::read_annotation;
    use crate::models::Placement;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<SegmentId>>);

    impl LayoutListener for Recorder {
        fn segment_changed(&self, segment: SegmentId) {
            self.0.borrow_mut().push(segment);
        }
    }

    fn decode(xml: &str) -> (PlayTechAnnotation, XmlStreamReader<'_>) {
        let mut reader = XmlStreamReader::new(xml.as_bytes());
        assert!(reader.read_next_start_element().unwrap());
        let annotation = read_annotation::<PlayTechAnnotation>(SegmentId(7), &mut reader).unwrap();
        (annotation, reader)
    }

    #[test]
    fn test_defaults() {
        let a = PlayTechAnnotation::new_in(SegmentId(1));
        assert_eq!(a.technique(), PlayingTechniqueType::Natural);
        assert_eq!(a.base().text_style, TextStyleType::Staff);
        assert_eq!(
            a.property_default(Pid::TextStyle),
            Some(PropertyValue::TextStyle(TextStyleType::Staff))
        );
        assert_eq!(a.property_default(Pid::MinDistance), Some(PropertyValue::Double(0.5)));
        assert_eq!(a.property_default(Pid::AccidentalBracket), None);
    }

    #[test]
    fn test_read_name_or_index() {
        let (a, reader) = decode("<play-tech-annotation><play-tech-type>mute</play-tech-type></play-tech-annotation>");
        assert_eq!(a.technique(), PlayingTechniqueType::Mute);
        assert!(reader.diagnostics().is_empty());

        let (a, _) = decode("<play-tech-annotation><play-tech-type>2</play-tech-type></play-tech-annotation>");
        assert_eq!(a.technique(), PlayingTechniqueType::Pizzicato);
    }

    #[test]
    fn test_unknown_technique_defaults_to_natural() {
        let (a, reader) =
            decode("<play-tech-annotation><play-tech-type>spiccato</play-tech-type></play-tech-annotation>");
        assert_eq!(a.technique(), PlayingTechniqueType::Natural);
        assert_eq!(reader.diagnostics().of_kind("unknown_technique").count(), 1);
    }

    #[test]
    fn test_unknown_child_is_skipped() {
        let (a, reader) = decode(
            "<play-tech-annotation>\
               <play-tech-type>tremolo</play-tech-type>\
               <bogus><nested/></bogus>\
               <placement>below</placement>\
             </play-tech-annotation>",
        );
        assert_eq!(a.technique(), PlayingTechniqueType::Tremolo);
        assert_eq!(a.base().placement, Placement::Below);
        assert_eq!(reader.diagnostics().len(), 1);
        assert!(reader.diagnostics().iter().next().unwrap().message.contains("bogus"));
    }

    #[test]
    fn test_write_own_property_first() {
        let a = PlayTechAnnotation::new(SegmentId(0), PlayingTechniqueType::ColLegno, TextStyleType::Staff);
        let mut w = XmlWriter::new(0);
        a.write(&mut w);
        let out = w.finish();
        assert!(out.starts_with("<play-tech-annotation>\n<play-tech-type>col-legno</play-tech-type>\n<text-style>"));
        assert!(out.ends_with("<text></text>\n</play-tech-annotation>\n"));
    }

    #[test]
    fn test_set_property_notifies_layout_once() {
        let recorder = Rc::new(Recorder::default());
        let mut a = PlayTechAnnotation::new_in(SegmentId(3)).with_layout_listener(recorder.clone());

        a.set_property(Pid::PlayTechType, PropertyValue::PlayTechType(PlayingTechniqueType::Vibrato))
            .unwrap();
        assert_eq!(*recorder.0.borrow(), vec![SegmentId(3)]);

        a.set_property(Pid::Placement, PropertyValue::Placement(Placement::Below)).unwrap();
        assert_eq!(recorder.0.borrow().len(), 2);

        assert!(a.set_property(Pid::AccidentalBracket, PropertyValue::Bool(false)).is_err());
        assert!(a.set_property(Pid::PlayTechType, PropertyValue::Int(99)).is_err());
        assert_eq!(recorder.0.borrow().len(), 2);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut a = PlayTechAnnotation::new(SegmentId(0), PlayingTechniqueType::Mute, TextStyleType::Tempo);
        a.reset_property(Pid::PlayTechType).unwrap();
        a.reset_property(Pid::TextStyle).unwrap();
        assert_eq!(a.technique(), PlayingTechniqueType::Natural);
        assert_eq!(a.base().text_style, TextStyleType::Staff);
    }
}
