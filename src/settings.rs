//! Game settings and tuning
//!
//! Defaults mirror `crate::consts`. Persisted as JSON next to the binary.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, GameResult};

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Movement ===
    /// Horizontal speed while a direction is held
    pub walk_speed: f32,
    /// Upward speed granted by a jump
    pub jump_speed: f32,

    // === Scoring ===
    /// Score awarded per collect
    pub collect_reward: u64,

    // === Collectibles ===
    pub collectible_count: usize,
    pub collectible_start_x: f32,
    pub collectible_spacing: f32,
    /// Vertical bounce is rolled once per collectible from this range
    pub collectible_bounce_min: f32,
    pub collectible_bounce_max: f32,

    // === Hazards ===
    /// Arena width used by the spawn-side rule
    pub arena_width: f32,
    /// Player x below this spawns the hazard on the right half
    pub side_split_x: f32,
    /// Horizontal hazard speed is drawn from [-max, max]
    pub hazard_max_vx: i32,
    pub hazard_vy: f32,
    /// Maximum hazards alive at once (None = grows with every level)
    pub max_hazards: Option<usize>,

    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Multiplier applied to cue volume overrides (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Visuals ===
    pub death_tint: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            jump_speed: JUMP_SPEED,

            collect_reward: COLLECT_REWARD,

            collectible_count: COLLECTIBLE_COUNT,
            collectible_start_x: COLLECTIBLE_START_X,
            collectible_spacing: COLLECTIBLE_SPACING,
            collectible_bounce_min: COLLECTIBLE_BOUNCE_MIN,
            collectible_bounce_max: COLLECTIBLE_BOUNCE_MAX,

            arena_width: ARENA_WIDTH,
            side_split_x: SIDE_SPLIT_X,
            hazard_max_vx: HAZARD_MAX_VX,
            hazard_vy: HAZARD_VY,
            max_hazards: None,

            music_volume: MUSIC_VOLUME,
            sfx_volume: 1.0,

            death_tint: DEATH_TINT,
        }
    }
}

impl Settings {
    /// Bounce range for newly created collectibles
    pub fn collectible_bounce_range(&self) -> RangeInclusive<f32> {
        self.collectible_bounce_min..=self.collectible_bounce_max
    }

    /// Spawn x-range for a hazard, on the half away from `player_x`
    pub fn hazard_spawn_range(&self, player_x: f32) -> RangeInclusive<i32> {
        let split = self.side_split_x as i32;
        if player_x < self.side_split_x {
            split..=self.arena_width as i32
        } else {
            0..=split
        }
    }

    /// Whether another hazard may be spawned when `current` already exist
    pub fn allows_hazard(&self, current: usize) -> bool {
        self.max_hazards.is_none_or(|cap| current < cap)
    }

    /// Scale a cue's volume override by the sfx volume
    pub fn effective_cue_volume(&self, volume: Option<f32>) -> Option<f32> {
        volume.map(|v| (v * self.sfx_volume).clamp(0.0, 1.0))
    }

    /// Reject values that would leave a random draw with an empty range
    pub fn validate(&self) -> GameResult<()> {
        let invalid = |msg: String| -> GameResult<()> { Err(GameError::InvalidSettings(msg)) };

        if self.collectible_count == 0 {
            return invalid("collectible_count must be at least 1".into());
        }
        if !(self.collectible_bounce_min.is_finite() && self.collectible_bounce_max.is_finite())
            || self.collectible_bounce_min > self.collectible_bounce_max
        {
            return invalid(format!(
                "collectible bounce range {}..={} is empty",
                self.collectible_bounce_min, self.collectible_bounce_max
            ));
        }
        if !self.arena_width.is_finite() || self.arena_width < 0.0 {
            return invalid(format!("arena_width {} must be >= 0", self.arena_width));
        }
        if !self.side_split_x.is_finite()
            || self.side_split_x < 0.0
            || self.side_split_x > self.arena_width
        {
            return invalid(format!(
                "side_split_x {} must lie within 0..={}",
                self.side_split_x, self.arena_width
            ));
        }
        if self.hazard_max_vx < 0 {
            return invalid(format!("hazard_max_vx {} must be >= 0", self.hazard_max_vx));
        }
        if !(0.0..=1.0).contains(&self.music_volume) || !(0.0..=1.0).contains(&self.sfx_volume) {
            return invalid("volumes must lie within 0.0..=1.0".into());
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> GameResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON
    pub fn save(&self, path: &Path) -> GameResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
