//! Deterministic session module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, physics or audio dependencies; those get `Command`s

pub mod audio_cues;
pub mod bootstrap;
pub mod command;
pub mod entities;
pub mod event;
pub mod input;
pub mod palette;
pub mod reaction;
pub mod state;
pub mod tick;

pub use audio_cues::{AudioCue, AudioCueTable, CueName};
pub use bootstrap::{WorldLayout, bootstrap, bootstrap_with};
pub use command::{AnimationHint, BlendMode, Command, EmitterSpec, MotionCommand};
pub use entities::{EntityId, EntityKind, EntityRegistry, HazardSpec};
pub use event::{PhysicsEvent, Reaction, dispatch, dispatch_all};
pub use input::{Direction, MotionIntent, RawInput, translate};
pub use palette::{LevelPalette, LevelPaletteEntry};
pub use reaction::{
    CollectReaction, HazardReaction, HazardSpawn, LevelAdvance, on_collectible_overlap,
    on_hazard_bounce, on_hazard_collision,
};
pub use state::{GamePhase, PlayerState, Session, SessionState, Snapshot};
pub use tick::on_frame_tick;
