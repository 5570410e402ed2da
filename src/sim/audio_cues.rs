//! Audio cue table
//!
//! Every cue lives in one shared sfx sample; a cue is a slice of it.
//! Cues are looked up by name, never by position in the table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic cue names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueName {
    AlienDeath,
    BossHit,
    Escape,
    Meow,
    Numkey,
    Ping,
    Death,
    Shot,
    Squit,
}

impl CueName {
    pub const ALL: [CueName; 9] = [
        CueName::AlienDeath,
        CueName::BossHit,
        CueName::Escape,
        CueName::Meow,
        CueName::Numkey,
        CueName::Ping,
        CueName::Death,
        CueName::Shot,
        CueName::Squit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CueName::AlienDeath => "alien death",
            CueName::BossHit => "boss hit",
            CueName::Escape => "escape",
            CueName::Meow => "meow",
            CueName::Numkey => "numkey",
            CueName::Ping => "ping",
            CueName::Death => "death",
            CueName::Shot => "shot",
            CueName::Squit => "squit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cue| cue.as_str() == s)
    }
}

impl fmt::Display for CueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playback parameters for one cue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    pub name: CueName,
    /// Offset into the sfx sample (seconds)
    pub start: f32,
    /// Playback length (seconds)
    pub duration: f32,
    pub volume: Option<f32>,
}

impl AudioCue {
    const fn new(name: CueName, start: f32, duration: f32, volume: Option<f32>) -> Self {
        Self {
            name,
            start,
            duration,
            volume,
        }
    }
}

/// Immutable name -> cue mapping
#[derive(Debug, Clone)]
pub struct AudioCueTable {
    cues: HashMap<CueName, AudioCue>,
}

impl Default for AudioCueTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl AudioCueTable {
    /// The cue layout of the bundled sfx mixdown
    pub fn standard() -> Self {
        use CueName::*;
        let cues = [
            AudioCue::new(AlienDeath, 1.0, 1.0, None),
            AudioCue::new(BossHit, 3.0, 0.5, Some(0.02)),
            AudioCue::new(Escape, 4.0, 3.2, None),
            AudioCue::new(Meow, 8.0, 0.5, None),
            AudioCue::new(Numkey, 9.0, 0.1, None),
            AudioCue::new(Ping, 10.0, 1.0, Some(0.5)),
            AudioCue::new(Death, 12.0, 4.2, None),
            AudioCue::new(Shot, 17.0, 1.0, None),
            AudioCue::new(Squit, 19.0, 0.3, None),
        ];
        Self {
            cues: cues.into_iter().map(|cue| (cue.name, cue)).collect(),
        }
    }

    /// Look up a cue. The standard table defines every name.
    pub fn get(&self, name: CueName) -> Option<&AudioCue> {
        self.cues.get(&name)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_complete() {
        let table = AudioCueTable::standard();
        assert_eq!(table.len(), CueName::ALL.len());
        for name in CueName::ALL {
            assert_eq!(table.get(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let table = AudioCueTable::standard();
        let ping = table.get(CueName::from_str("ping").unwrap()).unwrap();
        assert_eq!(ping.start, 10.0);
        assert_eq!(ping.duration, 1.0);
        assert_eq!(ping.volume, Some(0.5));

        let death = table.get(CueName::Death).unwrap();
        assert_eq!(death.start, 12.0);
        assert_eq!(death.volume, None);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(CueName::from_str("kazoo"), None);
        assert_eq!(CueName::from_str("boss hit"), Some(CueName::BossHit));
    }
}
