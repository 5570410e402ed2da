//! Star Catcher - gameplay core for a small platformer
//!
//! Core modules:
//! - `sim`: Deterministic session logic (reactions, level progression, hazards)
//! - `settings`: Data-driven game tuning
//! - `error`: Configuration and invariant errors raised by reactions

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{GameError, GameResult};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Engine step used by the headless demo (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Nominal arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Hazards spawn on the opposite side of this line from the player
    pub const SIDE_SPLIT_X: f32 = 400.0;
    /// World gravity (pixels/s², positive is down)
    pub const GRAVITY_Y: f32 = 300.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    pub const WALK_SPEED: f32 = 160.0;
    pub const JUMP_SPEED: f32 = 330.0;
    /// Tint applied to the player on death
    pub const DEATH_TINT: u32 = 0xff0000;

    /// Collectibles: 12 stars, 70 px apart starting at x = 12
    pub const COLLECTIBLE_COUNT: usize = 12;
    pub const COLLECTIBLE_START_X: f32 = 12.0;
    pub const COLLECTIBLE_SPACING: f32 = 70.0;
    pub const COLLECTIBLE_SPAWN_Y: f32 = 0.0;
    pub const COLLECTIBLE_BOUNCE_MIN: f32 = 0.4;
    pub const COLLECTIBLE_BOUNCE_MAX: f32 = 0.8;
    /// Score awarded per collect
    pub const COLLECT_REWARD: u64 = 10;

    /// Hazards bounce forever off platforms and walls
    pub const HAZARD_SPAWN_Y: f32 = 16.0;
    pub const HAZARD_MAX_VX: i32 = 200;
    pub const HAZARD_VY: f32 = 20.0;
    pub const HAZARD_BOUNCE: f32 = 1.0;

    /// Particle trail following each hazard
    pub const EMITTER_SPEED: f32 = 30.0;
    pub const EMITTER_SCALE_START: f32 = 0.2;
    pub const EMITTER_SCALE_END: f32 = 0.0;

    /// Background music volume
    pub const MUSIC_VOLUME: f32 = 0.5;
}
