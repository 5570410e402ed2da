//! Per-level background tint
//!
//! Levels past the last entry are a configuration error, never clamped.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Corner tints and alpha for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPaletteEntry {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_left: u32,
    pub bottom_right: u32,
    pub alpha: f32,
    pub index: u32,
}

impl LevelPaletteEntry {
    const fn uniform(index: u32, tint: u32, alpha: f32) -> Self {
        Self {
            top_left: tint,
            top_right: tint,
            bottom_left: tint,
            bottom_right: tint,
            alpha,
            index,
        }
    }

    /// Tints in top-left, top-right, bottom-left, bottom-right order
    pub fn corners(&self) -> [u32; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}

/// Ordered palette, one entry per level starting at 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPalette {
    entries: Vec<LevelPaletteEntry>,
}

impl Default for LevelPalette {
    fn default() -> Self {
        Self::standard()
    }
}

impl LevelPalette {
    /// The seven shipped levels
    pub fn standard() -> Self {
        Self {
            entries: vec![
                LevelPaletteEntry::uniform(0, 0xffffff, 0.05),
                LevelPaletteEntry::uniform(1, 0x00a00f, 0.1),
                LevelPaletteEntry::uniform(2, 0xf000f0, 0.2),
                LevelPaletteEntry {
                    bottom_right: 0x0b0f00,
                    ..LevelPaletteEntry::uniform(3, 0x0b0fcc, 0.1)
                },
                LevelPaletteEntry {
                    top_right: 0xf0ab34,
                    ..LevelPaletteEntry::uniform(4, 0x10ff34, 0.1)
                },
                LevelPaletteEntry::uniform(5, 0xa0ab34, 0.1),
                LevelPaletteEntry::uniform(6, 0xff0000, 0.9),
            ],
        }
    }

    /// Build a palette from entries in any order.
    ///
    /// After sorting, entry `i` must carry index `i`: gaps and repeats are rejected.
    pub fn from_entries(mut entries: Vec<LevelPaletteEntry>) -> GameResult<Self> {
        entries.sort_by_key(|e| e.index);
        if let Some((position, entry)) = entries
            .iter()
            .enumerate()
            .find(|(i, e)| e.index as usize != *i)
        {
            return Err(GameError::PaletteOutOfOrder {
                position,
                index: entry.index,
            });
        }
        Ok(Self { entries })
    }

    /// Highest configured level
    pub fn max_index(&self) -> Option<u32> {
        self.entries.last().map(|e| e.index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for `level`
    pub fn get(&self, level: u32) -> GameResult<&LevelPaletteEntry> {
        self.entries
            .get(level as usize)
            .ok_or(GameError::PaletteExhausted {
                level,
                max_index: self.max_index(),
            })
    }
}
