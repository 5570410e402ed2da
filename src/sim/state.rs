//! Session state and the handle threaded through every reaction
//!
//! A `Session` is built by `bootstrap` and owns everything one game needs.
//! Nothing is global, so independent sessions can run side by side.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::audio_cues::AudioCueTable;
use super::entities::{EntityId, EntityRegistry};
use super::palette::LevelPalette;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player touched a hazard
    GameOver,
    /// A configuration error stopped the session
    Faulted,
}

/// Score, level and phase. Only the reaction functions mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    score: u64,
    level: u32,
    phase: GamePhase,
    /// Collect reactions that changed state
    collects: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 0,
            phase: GamePhase::Playing,
            collects: 0,
        }
    }
}

impl SessionState {
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn collects(&self) -> u64 {
        self.collects
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Frame ticks and reactions are ignored unless this is true
    pub fn is_live(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub(super) fn record_collect(&mut self, reward: u64) {
        self.score += reward;
        self.collects += 1;
    }

    pub(super) fn next_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    pub(super) fn end(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    pub(super) fn fault(&mut self) {
        self.phase = GamePhase::Faulted;
    }
}

/// Read-only view for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} level: {}", self.score, self.level)
    }
}

/// Player body state read from the physics engine each step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: Vec2,
    /// Body is resting on something below it
    pub touching_down: bool,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub(super) state: SessionState,
    pub(super) registry: EntityRegistry,
    pub(super) player: EntityId,
    pub(super) palette: LevelPalette,
    pub(super) cues: AudioCueTable,
    pub(super) settings: Settings,
}

impl Session {
    pub(super) fn new(
        seed: u64,
        registry: EntityRegistry,
        player: EntityId,
        settings: Settings,
        palette: LevelPalette,
        cues: AudioCueTable,
    ) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state: SessionState::default(),
            registry,
            player,
            palette,
            cues,
            settings,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn palette(&self) -> &LevelPalette {
        &self.palette
    }

    pub fn cues(&self) -> &AudioCueTable {
        &self.cues
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.state.score,
            level: self.state.level,
            game_over: self.state.game_over(),
        }
    }
}
