//! Property contract shared with the score document model
//!
//! Elements expose their editable state through a closed set of property
//! identifiers ([`Pid`]). An element answers the identifiers it owns and hands
//! every other one to the component it embeds, so a chain like
//! "technique annotation → text base" is an explicit delegation rather than
//! an inheritance artifact.

use super::accidental::AccidentalType;
use super::technique::PlayingTechniqueType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pid {
    PlayTechType,
    TextStyle,
    Placement,
    MinDistance,
    Text,
    AccidentalType,
    AccidentalBracket,
}

/// Placement of an element relative to its staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    Above,
    Below,
}

impl Placement {
    pub fn name(&self) -> &'static str {
        match self {
            Placement::Above => "above",
            Placement::Below => "below",
        }
    }

    pub fn from_name(name: &str) -> Option<Placement> {
        match name {
            "above" => Some(Placement::Above),
            "below" => Some(Placement::Below),
            _ => None,
        }
    }
}

/// Text style classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyleType {
    Default,
    Staff,
    Expression,
    Technique,
    Tempo,
    Title,
}

impl TextStyleType {
    pub const ALL: [TextStyleType; 6] = [
        TextStyleType::Default,
        TextStyleType::Staff,
        TextStyleType::Expression,
        TextStyleType::Technique,
        TextStyleType::Tempo,
        TextStyleType::Title,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextStyleType::Default => "default",
            TextStyleType::Staff => "staff",
            TextStyleType::Expression => "expression",
            TextStyleType::Technique => "technique",
            TextStyleType::Tempo => "tempo",
            TextStyleType::Title => "title",
        }
    }

    pub fn from_name(name: &str) -> Option<TextStyleType> {
        TextStyleType::ALL.iter().copied().find(|s| s.name() == name)
    }
}

/// Value carried by a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Placement(Placement),
    TextStyle(TextStyleType),
    PlayTechType(PlayingTechniqueType),
    AccidentalType(AccidentalType),
}

/// Why a property could not be set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("property {0:?} is not supported by this element")]
    Unsupported(Pid),

    #[error("property {pid:?} cannot take value {value:?}")]
    InvalidValue { pid: Pid, value: PropertyValue },
}

/// Generic get/set/default access to an element's properties
pub trait ElementProperties {
    /// Current value, `None` when no component in the chain owns `id`
    fn get_property(&self, id: Pid) -> Option<PropertyValue>;

    /// Set a value; fails when no component in the chain accepts it
    fn set_property(&mut self, id: Pid, value: PropertyValue) -> Result<(), PropertyError>;

    /// Statically defined default, `None` when no component in the chain owns `id`
    fn property_default(&self, id: Pid) -> Option<PropertyValue>;

    /// Restore the default value of `id`
    fn reset_property(&mut self, id: Pid) -> Result<(), PropertyError> {
        let value = self.property_default(id).ok_or(PropertyError::Unsupported(id))?;
        self.set_property(id, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_names() {
        assert_eq!(Placement::from_name("above"), Some(Placement::Above));
        assert_eq!(Placement::from_name(Placement::Below.name()), Some(Placement::Below));
        assert_eq!(Placement::from_name("left"), None);
    }

    #[test]
    fn test_text_style_names() {
        for style in TextStyleType::ALL {
            assert_eq!(TextStyleType::from_name(style.name()), Some(style));
        }
        assert_eq!(TextStyleType::from_name("lyrics"), None);
    }
}
