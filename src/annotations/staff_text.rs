//! Plain staff text (`<staff-text>`), base properties only

use super::text_base::TextBaseProperties;
use super::AnnotationCodec;
use crate::converters::musicxml::errors::ParseError;
use crate::converters::musicxml::reader::XmlStreamReader;
use crate::converters::musicxml::writer::XmlWriter;
use crate::models::{ElementProperties, LayoutListener, Pid, PropertyError, PropertyValue, SegmentId, TextStyleType};
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct StaffText {
    segment: SegmentId,
    base: TextBaseProperties,
    layout: Option<Rc<dyn LayoutListener>>,
}

impl StaffText {
    pub fn new(segment: SegmentId, text: impl Into<String>) -> Self {
        let mut base = TextBaseProperties::with_style(TextStyleType::Staff);
        base.text = text.into();
        Self {
            segment,
            base,
            layout: None,
        }
    }

    pub fn set_layout_listener(&mut self, listener: Rc<dyn LayoutListener>) {
        self.layout = Some(listener);
    }

    pub fn segment(&self) -> SegmentId {
        self.segment
    }

    pub fn base(&self) -> &TextBaseProperties {
        &self.base
    }

    pub fn text(&self) -> &str {
        &self.base.text
    }
}

impl AnnotationCodec for StaffText {
    const TAG: &'static str = "staff-text";

    fn new_in(segment: SegmentId) -> Self {
        StaffText::new(segment, "")
    }

    fn read(&mut self, reader: &mut XmlStreamReader) -> Result<(), ParseError> {
        while reader.read_next_start_element()? {
            let tag = reader.name().to_string();
            if !self.base.read_property(&tag, reader)? {
                reader.unknown()?;
            }
        }
        Ok(())
    }

    fn write(&self, writer: &mut XmlWriter) {
        writer.start_element(Self::TAG, &[]);
        self.base.write_properties(writer);
        writer.end_element();
    }
}

impl ElementProperties for StaffText {
    fn get_property(&self, id: Pid) -> Option<PropertyValue> {
        self.base.get(id)
    }

    fn set_property(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError> {
        self.base.set(id, value)?;
        if let Some(listener) = &self.layout {
            listener.segment_changed(self.segment);
        }
        Ok(())
    }

    fn property_default(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::TextStyle => Some(PropertyValue::TextStyle(TextStyleType::Staff)),
            _ => TextBaseProperties::default_for(id),
        }
    }
}

impl fmt::Debug for StaffText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffText")
            .field("segment", &self.segment)
            .field("base", &self.base)
            .finish()
    }
}

impl PartialEq for StaffText {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment && self.base == other.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::read_annotation;

    #[test]
    fn test_read_text_and_ignore_foreign_own_tag() {
        let xml = "<staff-text><play-tech-type>mute</play-tech-type><text>dolce</text></staff-text>";
        let mut reader = XmlStreamReader::new(xml.as_bytes());
        reader.read_next_start_element().unwrap();
        let st = read_annotation::<StaffText>(SegmentId(0), &mut reader).unwrap();
        assert_eq!(st.text(), "dolce");
        assert_eq!(reader.diagnostics().of_kind("unexpected_element").count(), 1);
    }

    #[test]
    fn test_property_delegation() {
        let mut st = StaffText::new(SegmentId(0), "a");
        st.set_property(Pid::Text, PropertyValue::String("b".into())).unwrap();
        assert_eq!(st.get_property(Pid::Text), Some(PropertyValue::String("b".into())));
        assert_eq!(st.get_property(Pid::PlayTechType), None);
        assert!(st.set_property(Pid::PlayTechType, PropertyValue::Int(1)).is_err());
    }
}
