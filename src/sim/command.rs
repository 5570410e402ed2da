//! Commands issued to the engine's physics, rendering and audio layers
//!
//! The core never touches the engine directly; it returns these and an
//! adapter applies them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::audio_cues::{AudioCue, CueName};
use super::entities::EntityId;
use super::palette::LevelPaletteEntry;
use crate::consts::*;

/// Player animation to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationHint {
    Left,
    Right,
    /// Facing the camera ("turn" frame)
    Idle,
}

impl AnimationHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationHint::Left => "left",
            AnimationHint::Right => "right",
            AnimationHint::Idle => "idle",
        }
    }
}

/// Per-frame velocity command for the player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionCommand {
    Move {
        vx: f32,
        /// `None` leaves vertical velocity to gravity
        vy: Option<f32>,
        animation: AnimationHint,
    },
    /// Issue nothing; the body keeps whatever velocity it had
    Hold,
}

impl MotionCommand {
    pub fn is_hold(&self) -> bool {
        matches!(self, MotionCommand::Hold)
    }
}

/// Particle blend modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    Normal,
    Add,
}

/// Particle emitter that follows an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmitterSpec {
    pub attach_to: EntityId,
    pub speed: f32,
    pub scale_start: f32,
    pub scale_end: f32,
    pub blend: BlendMode,
}

impl EmitterSpec {
    /// Red trail used for every hazard
    pub fn hazard_trail(attach_to: EntityId) -> Self {
        Self {
            attach_to,
            speed: EMITTER_SPEED,
            scale_start: EMITTER_SCALE_START,
            scale_end: EMITTER_SCALE_END,
            blend: BlendMode::Add,
        }
    }
}

/// Side effects requested by a reaction, in the order they must be applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Hide a collectible and remove it from the physics step
    DisableBody { id: EntityId },
    /// Show a collectible again at `pos` with physics re-enabled
    EnableBody { id: EntityId, pos: Vec2 },
    /// Create a hazard body: no gravity, full bounce, collides with world bounds
    SpawnHazard {
        id: EntityId,
        pos: Vec2,
        vel: Vec2,
        bounce: f32,
    },
    SpawnEmitter(EmitterSpec),
    SetBackgroundTint { corners: [u32; 4], alpha: f32 },
    TintPlayer { color: u32 },
    PlayAnimation(AnimationHint),
    PlayCue {
        name: CueName,
        start: f32,
        duration: f32,
        volume: Option<f32>,
    },
    PlayMusic { volume: f32 },
    StopMusic,
    PauseSimulation,
}

impl Command {
    pub fn play_cue(cue: &AudioCue, volume: Option<f32>) -> Self {
        Command::PlayCue {
            name: cue.name,
            start: cue.start,
            duration: cue.duration,
            volume,
        }
    }

    pub fn background(entry: &LevelPaletteEntry) -> Self {
        Command::SetBackgroundTint {
            corners: entry.corners(),
            alpha: entry.alpha,
        }
    }
}
