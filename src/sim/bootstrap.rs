//! Session setup
//!
//! Seeds a fresh session and describes the static world the engine must
//! build around it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::audio_cues::AudioCueTable;
use super::command::Command;
use super::entities::{EntityId, EntityRegistry};
use super::palette::LevelPalette;
use super::state::Session;
use crate::consts::*;
use crate::error::GameResult;
use crate::settings::Settings;

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Sprite center
    pub pos: Vec2,
    pub scale: f32,
}

/// Initial player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub id: EntityId,
    pub pos: Vec2,
    pub bounce: f32,
    pub collide_world_bounds: bool,
}

/// Initial collectible body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleSpawn {
    pub id: EntityId,
    pub pos: Vec2,
    pub bounce_y: f32,
}

/// Everything the engine needs to build the world for a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub width: f32,
    pub height: f32,
    pub gravity_y: f32,
    pub platforms: Vec<Platform>,
    pub player: PlayerSpawn,
    pub collectibles: Vec<CollectibleSpawn>,
    /// Commands to apply once the world exists (music, starting background)
    pub commands: Vec<Command>,
}

/// Ground plus three ledges
pub fn platform_layout() -> Vec<Platform> {
    vec![
        Platform {
            pos: Vec2::new(400.0, 568.0),
            scale: 2.0,
        },
        Platform {
            pos: Vec2::new(600.0, 400.0),
            scale: 1.0,
        },
        Platform {
            pos: Vec2::new(50.0, 250.0),
            scale: 1.0,
        },
        Platform {
            pos: Vec2::new(750.0, 220.0),
            scale: 1.0,
        },
    ]
}

/// Start a session with the standard palette and cue table
pub fn bootstrap(seed: u64, settings: Settings) -> GameResult<(Session, WorldLayout)> {
    bootstrap_with(
        seed,
        settings,
        LevelPalette::standard(),
        AudioCueTable::standard(),
    )
}

/// Start a session with explicit tables.
///
/// Fails on invalid settings or a palette without a level 0 entry.
pub fn bootstrap_with(
    seed: u64,
    settings: Settings,
    palette: LevelPalette,
    cues: AudioCueTable,
) -> GameResult<(Session, WorldLayout)> {
    settings
        .validate()
        .inspect_err(|e| log::error!("Session {seed} not started: {e}"))?;
    let background = palette
        .get(0)
        .map(Command::background)
        .inspect_err(|e| log::error!("Session {seed} not started: {e}"))?;

    let mut registry = EntityRegistry::new();
    let player = registry.register_player();
    let mut session = Session::new(seed, registry, player, settings, palette, cues);

    // Bounce is rolled once here and kept for the session
    let mut collectibles = Vec::with_capacity(session.settings.collectible_count);
    for i in 0..session.settings.collectible_count {
        let x = session.settings.collectible_start_x + session.settings.collectible_spacing * i as f32;
        let pos = Vec2::new(x, COLLECTIBLE_SPAWN_Y);
        let bounce_y = session
            .rng
            .random_range(session.settings.collectible_bounce_range());
        let id = session.registry.add_collectible(pos, bounce_y);
        collectibles.push(CollectibleSpawn { id, pos, bounce_y });
    }

    let commands = vec![
        Command::PlayMusic {
            volume: session.settings.music_volume,
        },
        background,
    ];

    let layout = WorldLayout {
        width: ARENA_WIDTH,
        height: ARENA_HEIGHT,
        gravity_y: GRAVITY_Y,
        platforms: platform_layout(),
        player: PlayerSpawn {
            id: player,
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            bounce: PLAYER_BOUNCE,
            collide_world_bounds: true,
        },
        collectibles,
        commands,
    };

    log::info!(
        "Session {seed} started: {} collectibles, {} palette levels",
        layout.collectibles.len(),
        session.palette.len()
    );

    Ok((session, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::sim::EntityKind;

    #[test]
    fn test_twelve_evenly_spaced_collectibles() {
        let (session, layout) = bootstrap(7, Settings::default()).unwrap();
        assert_eq!(layout.collectibles.len(), 12);
        for (i, c) in layout.collectibles.iter().enumerate() {
            assert_eq!(c.pos, Vec2::new(12.0 + 70.0 * i as f32, 0.0));
            assert!((0.4..=0.8).contains(&c.bounce_y));
        }
        assert_eq!(session.registry().count_active(EntityKind::Collectible), 12);
        assert_eq!(session.registry().count_active(EntityKind::Hazard), 0);
    }

    #[test]
    fn test_initial_state() {
        let (session, layout) = bootstrap(7, Settings::default()).unwrap();
        let snapshot = session.snapshot();
        assert_eq!((snapshot.score, snapshot.level, snapshot.game_over), (0, 0, false));
        assert_eq!(layout.player.id, session.player());
        assert_eq!(layout.player.pos, Vec2::new(100.0, 450.0));
        assert_eq!(layout.platforms.len(), 4);
        assert_eq!(layout.commands[0], Command::PlayMusic { volume: 0.5 });
        assert_eq!(
            layout.commands[1],
            Command::SetBackgroundTint {
                corners: [0xffffff; 4],
                alpha: 0.05
            }
        );
    }

    #[test]
    fn test_palette_without_level_zero_refused() {
        let palette = LevelPalette::from_entries(Vec::new()).unwrap();
        let result = bootstrap_with(7, Settings::default(), palette, AudioCueTable::standard());
        assert!(matches!(
            result,
            Err(GameError::PaletteExhausted {
                level: 0,
                max_index: None
            })
        ));
    }

    #[test]
    fn test_invalid_settings_refused() {
        let settings = Settings {
            collectible_bounce_min: 0.9,
            collectible_bounce_max: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            bootstrap(7, settings),
            Err(GameError::InvalidSettings(_))
        ));

        let settings = Settings {
            hazard_max_vx: -5,
            ..Default::default()
        };
        assert!(matches!(
            bootstrap(7, settings),
            Err(GameError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_same_seed_same_bounces() {
        let (_, a) = bootstrap(42, Settings::default()).unwrap();
        let (_, b) = bootstrap(42, Settings::default()).unwrap();
        assert_eq!(a, b);

        let (_, c) = bootstrap(43, Settings::default()).unwrap();
        assert_ne!(a.collectibles, c.collectibles);
    }

    #[test]
    fn test_collectible_count_from_settings() {
        let settings = Settings {
            collectible_count: 3,
            ..Default::default()
        };
        let (session, layout) = bootstrap(1, settings).unwrap();
        assert_eq!(layout.collectibles.len(), 3);
        assert_eq!(session.registry().collectibles().len(), 3);
    }
}
