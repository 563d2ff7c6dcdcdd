//! Playing technique classification carried by technique annotations

use serde::{Deserialize, Serialize};

/// Playing technique, closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayingTechniqueType {
    Undefined,
    Natural,
    Pizzicato,
    Open,
    Mute,
    Tremolo,
    Detache,
    Martele,
    ColLegno,
    SulPonticello,
    SulTasto,
    Vibrato,
    Legato,
    Distortion,
    Overdrive,
    Harmonics,
    JazzTone,
}

impl PlayingTechniqueType {
    /// All techniques in index order
    pub const ALL: [PlayingTechniqueType; 17] = [
        PlayingTechniqueType::Undefined,
        PlayingTechniqueType::Natural,
        PlayingTechniqueType::Pizzicato,
        PlayingTechniqueType::Open,
        PlayingTechniqueType::Mute,
        PlayingTechniqueType::Tremolo,
        PlayingTechniqueType::Detache,
        PlayingTechniqueType::Martele,
        PlayingTechniqueType::ColLegno,
        PlayingTechniqueType::SulPonticello,
        PlayingTechniqueType::SulTasto,
        PlayingTechniqueType::Vibrato,
        PlayingTechniqueType::Legato,
        PlayingTechniqueType::Distortion,
        PlayingTechniqueType::Overdrive,
        PlayingTechniqueType::Harmonics,
        PlayingTechniqueType::JazzTone,
    ];

    /// Interchange name
    pub fn name(&self) -> &'static str {
        match self {
            PlayingTechniqueType::Undefined => "undefined",
            PlayingTechniqueType::Natural => "natural",
            PlayingTechniqueType::Pizzicato => "pizzicato",
            PlayingTechniqueType::Open => "open",
            PlayingTechniqueType::Mute => "mute",
            PlayingTechniqueType::Tremolo => "tremolo",
            PlayingTechniqueType::Detache => "detache",
            PlayingTechniqueType::Martele => "martele",
            PlayingTechniqueType::ColLegno => "col-legno",
            PlayingTechniqueType::SulPonticello => "sul-ponticello",
            PlayingTechniqueType::SulTasto => "sul-tasto",
            PlayingTechniqueType::Vibrato => "vibrato",
            PlayingTechniqueType::Legato => "legato",
            PlayingTechniqueType::Distortion => "distortion",
            PlayingTechniqueType::Overdrive => "overdrive",
            PlayingTechniqueType::Harmonics => "harmonics",
            PlayingTechniqueType::JazzTone => "jazz-tone",
        }
    }

    pub fn from_name(name: &str) -> Option<PlayingTechniqueType> {
        PlayingTechniqueType::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn index(&self) -> i32 {
        *self as i32
    }

    pub fn from_index(index: i32) -> Option<PlayingTechniqueType> {
        usize::try_from(index)
            .ok()
            .and_then(|i| PlayingTechniqueType::ALL.get(i).copied())
    }

    /// Decode either a name or a numeric index
    pub fn parse(text: &str) -> Option<PlayingTechniqueType> {
        let text = text.trim();
        PlayingTechniqueType::from_name(text)
            .or_else(|| text.parse::<i32>().ok().and_then(PlayingTechniqueType::from_index))
    }
}

impl Default for PlayingTechniqueType {
    fn default() -> Self {
        PlayingTechniqueType::Natural
    }
}
