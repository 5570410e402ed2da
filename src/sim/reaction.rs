//! Collision and overlap reactions
//!
//! Each reaction applies all of its state changes before returning, so the
//! next reaction in the same physics step never sees a half-finished level.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::audio_cues::CueName;
use super::command::{AnimationHint, Command, EmitterSpec};
use super::entities::{EntityId, EntityKind, HazardSpec};
use super::palette::LevelPaletteEntry;
use super::state::{GamePhase, Session, Snapshot};
use crate::consts::*;
use crate::error::{GameError, GameResult};

/// Outcome of a collectible overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectReaction {
    /// False when the event was a duplicate or the session is over
    pub applied: bool,
    pub snapshot: Snapshot,
    pub commands: Vec<Command>,
    /// Set when this collect cleared the level
    pub level_advance: Option<LevelAdvance>,
}

/// Outcome of a player/hazard collision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReaction {
    pub applied: bool,
    pub snapshot: Snapshot,
    pub commands: Vec<Command>,
}

/// A hazard created by a level advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpawn {
    pub id: EntityId,
    pub spec: HazardSpec,
}

/// What a level advance did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelAdvance {
    /// The level just entered
    pub level: u32,
    /// Collectibles switched back on
    pub restocked: usize,
    /// None only when a hazard cap is configured and reached
    pub hazard: Option<HazardSpawn>,
    pub palette: LevelPaletteEntry,
}

fn ensure_not_faulted(session: &Session) -> GameResult<()> {
    if session.state.phase() == GamePhase::Faulted {
        return Err(GameError::SessionFaulted);
    }
    Ok(())
}

fn cue_command(session: &Session, name: CueName) -> Option<Command> {
    let Some(cue) = session.cues.get(name) else {
        log::warn!("No audio cue named '{name}'");
        return None;
    };
    Some(Command::play_cue(cue, session.settings.effective_cue_volume(cue.volume)))
}

/// The player overlapped a collectible.
///
/// Duplicate overlaps for an already-collected star, and any overlap after
/// game over, change nothing. Collecting the last active star advances the
/// level within this same call. If the next level has no palette entry the
/// whole collect is refused and the session is faulted.
pub fn on_collectible_overlap(
    session: &mut Session,
    collectible: EntityId,
    player_pos: Vec2,
) -> GameResult<CollectReaction> {
    ensure_not_faulted(session)?;
    session
        .registry
        .expect_kind(collectible, EntityKind::Collectible)
        .inspect_err(|e| log::error!("Collect reaction rejected: {e}"))?;

    let active = session
        .registry
        .collectible(collectible)
        .is_some_and(|c| c.active);
    if !session.state.is_live() || !active {
        if active {
            log::debug!("Ignoring overlap with {collectible} after game over");
        } else {
            log::warn!("Duplicate overlap with collected {collectible}");
        }
        return Ok(CollectReaction {
            applied: false,
            snapshot: session.snapshot(),
            commands: Vec::new(),
            level_advance: None,
        });
    }

    // Validate the next level before touching anything
    let clears_level = session.registry.count_active(EntityKind::Collectible) == 1;
    let next_palette = if clears_level {
        match session.palette.get(session.state.level() + 1) {
            Ok(entry) => Some(*entry),
            Err(e) => {
                log::error!("Cannot advance past level {}: {e}", session.state.level());
                session.state.fault();
                return Err(e);
            }
        }
    } else {
        None
    };

    session.registry.deactivate(collectible)?;
    session.state.record_collect(session.settings.collect_reward);
    log::debug!("Collected {collectible}, score {}", session.state.score());

    let mut commands = vec![Command::DisableBody { id: collectible }];
    commands.extend(cue_command(session, CueName::Ping));

    let level_advance =
        next_palette.map(|entry| advance_level(session, player_pos.x, entry, &mut commands));

    Ok(CollectReaction {
        applied: true,
        snapshot: session.snapshot(),
        commands,
        level_advance,
    })
}

/// Move to the next level: restock, spawn a hazard away from the player,
/// retint the background.
fn advance_level(
    session: &mut Session,
    player_x: f32,
    palette: LevelPaletteEntry,
    commands: &mut Vec<Command>,
) -> LevelAdvance {
    let level = session.state.next_level();

    let restocked = session
        .registry
        .reactivate_all(EntityKind::Collectible, |c| {
            Vec2::new(c.spawn.x, COLLECTIBLE_SPAWN_Y)
        });
    commands.extend(
        session
            .registry
            .collectibles()
            .iter()
            .map(|c| Command::EnableBody { id: c.id, pos: c.pos }),
    );

    let hazard = if session
        .settings
        .allows_hazard(session.registry.count_active(EntityKind::Hazard))
    {
        let x = session
            .rng
            .random_range(session.settings.hazard_spawn_range(player_x)) as f32;
        let max_vx = session.settings.hazard_max_vx;
        let vx = session.rng.random_range(-max_vx..=max_vx) as f32;
        let spec = HazardSpec {
            spawn: Vec2::new(x, HAZARD_SPAWN_Y),
            vel: Vec2::new(vx, session.settings.hazard_vy),
        };
        let id = session.registry.spawn_hazard(spec);
        commands.push(Command::SpawnHazard {
            id,
            pos: spec.spawn,
            vel: spec.vel,
            bounce: HAZARD_BOUNCE,
        });
        Some(HazardSpawn { id, spec })
    } else {
        log::warn!("Hazard cap reached, level {level} spawns no hazard");
        None
    };

    commands.push(Command::background(&palette));
    if let Some(spawn) = hazard {
        commands.push(Command::SpawnEmitter(EmitterSpec::hazard_trail(spawn.id)));
    }

    log::info!(
        "Level {level}: restocked {restocked}, hazard {:?}, palette {}",
        hazard.map(|h| h.spec.spawn),
        palette.index
    );

    LevelAdvance {
        level,
        restocked,
        hazard,
        palette,
    }
}

/// The player touched a hazard. Ends the session; later calls are no-ops.
pub fn on_hazard_collision(
    session: &mut Session,
    player: EntityId,
    hazard: EntityId,
) -> GameResult<HazardReaction> {
    ensure_not_faulted(session)?;
    if player != session.player {
        log::error!("Hazard collision from unknown player {player}");
        return Err(GameError::UnknownPlayer { id: player });
    }
    session
        .registry
        .expect_kind(hazard, EntityKind::Hazard)
        .inspect_err(|e| log::error!("Hazard reaction rejected: {e}"))?;

    if !session.state.is_live() {
        return Ok(HazardReaction {
            applied: false,
            snapshot: session.snapshot(),
            commands: Vec::new(),
        });
    }

    session.state.end();

    let mut commands = vec![
        Command::PauseSimulation,
        Command::TintPlayer {
            color: session.settings.death_tint,
        },
        Command::PlayAnimation(AnimationHint::Idle),
    ];
    commands.extend(cue_command(session, CueName::Death));
    commands.push(Command::StopMusic);

    log::info!(
        "Game over: hit {hazard} with score {} on level {}",
        session.state.score(),
        session.state.level()
    );

    Ok(HazardReaction {
        applied: true,
        snapshot: session.snapshot(),
        commands,
    })
}

/// A hazard bounced off a platform or wall
pub fn on_hazard_bounce(session: &Session, hazard: EntityId) -> GameResult<Vec<Command>> {
    ensure_not_faulted(session)?;
    session.registry.expect_kind(hazard, EntityKind::Hazard)?;
    if !session.state.is_live() {
        return Ok(Vec::new());
    }
    Ok(cue_command(session, CueName::Escape).into_iter().collect())
}
