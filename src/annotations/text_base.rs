//! Base text properties shared by text-like annotations
//!
//! Annotations embed a [`TextBaseProperties`] and forward every property id
//! they do not own to it, both for property access and for serialization.

use crate::converters::musicxml::errors::ParseError;
use crate::converters::musicxml::reader::XmlStreamReader;
use crate::converters::musicxml::support::format_decimal;
use crate::converters::musicxml::writer::XmlWriter;
use crate::models::{Pid, Placement, PropertyError, PropertyValue, TextStyleType};

pub const DEFAULT_MIN_DISTANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct TextBaseProperties {
    pub text: String,
    pub placement: Placement,
    /// Minimum distance to other elements, in staff spaces
    pub min_distance: f64,
    pub text_style: TextStyleType,
}

impl TextBaseProperties {
    pub fn with_style(text_style: TextStyleType) -> Self {
        Self {
            text_style,
            ..Self::default()
        }
    }

    pub fn get(&self, id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::Text => Some(PropertyValue::String(self.text.clone())),
            Pid::Placement => Some(PropertyValue::Placement(self.placement)),
            Pid::MinDistance => Some(PropertyValue::Double(self.min_distance)),
            Pid::TextStyle => Some(PropertyValue::TextStyle(self.text_style)),
            _ => None,
        }
    }

    pub fn set(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError> {
        match (id, value) {
            (Pid::Text, PropertyValue::String(text)) => self.text = text,
            (Pid::Placement, PropertyValue::Placement(p)) => self.placement = p,
            (Pid::MinDistance, PropertyValue::Double(d)) => self.min_distance = d,
            (Pid::MinDistance, PropertyValue::Int(i)) => self.min_distance = f64::from(i),
            (Pid::TextStyle, PropertyValue::TextStyle(s)) => self.text_style = s,
            (Pid::Text | Pid::Placement | Pid::MinDistance | Pid::TextStyle, value) => {
                return Err(PropertyError::InvalidValue { pid: id, value })
            }
            (id, _) => return Err(PropertyError::Unsupported(id)),
        }
        Ok(())
    }

    /// Defaults of the base layer; owners override what they specialise
    pub fn default_for(id: Pid) -> Option<PropertyValue> {
        match id {
            Pid::Text => Some(PropertyValue::String(String::new())),
            Pid::Placement => Some(PropertyValue::Placement(Placement::Above)),
            Pid::MinDistance => Some(PropertyValue::Double(DEFAULT_MIN_DISTANCE)),
            Pid::TextStyle => Some(PropertyValue::TextStyle(TextStyleType::Default)),
            _ => None,
        }
    }

    /// Decode one base child element
    ///
    /// Returns `Ok(false)` when `tag` is not a base property; the reader has
    /// not moved in that case. Bad values keep the current value and are
    /// reported.
    pub fn read_property(&mut self, tag: &str, reader: &mut XmlStreamReader) -> Result<bool, ParseError> {
        match tag {
            "text" => self.text = reader.read_text()?,
            "placement" => {
                let value = reader.read_text()?;
                match Placement::from_name(value.trim()) {
                    Some(p) => self.placement = p,
                    None => reader.warn("invalid_value", format!("unknown placement '{}'", value)),
                }
            }
            "min-distance" => {
                let value = reader.read_text()?;
                match value.trim().parse::<f64>() {
                    Ok(d) if d.is_finite() => self.min_distance = d,
                    _ => reader.warn("invalid_value", format!("invalid min-distance '{}'", value)),
                }
            }
            "text-style" => {
                let value = reader.read_text()?;
                match TextStyleType::from_name(value.trim()) {
                    Some(s) => self.text_style = s,
                    None => reader.warn("invalid_value", format!("unknown text style '{}'", value)),
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Encode all base properties in their fixed order
    pub fn write_properties(&self, writer: &mut XmlWriter) {
        writer.text_element("text-style", self.text_style.name());
        writer.text_element("placement", self.placement.name());
        writer.text_element("min-distance", &format_decimal(self.min_distance));
        writer.text_element("text", &self.text);
    }
}

impl Default for TextBaseProperties {
    fn default() -> Self {
        Self {
            text: String::new(),
            placement: Placement::Above,
            min_distance: DEFAULT_MIN_DISTANCE,
            text_style: TextStyleType::Default,
        }
    }
}
