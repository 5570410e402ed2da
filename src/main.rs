//! Star Catcher headless demo
//!
//! Drives one session with a scripted player standing in for the real
//! engine: walk to the nearest star, report overlaps, and walk into a
//! hazard once the target level is reached.
//!
//! Usage: star-catcher [seed] [levels] [settings.json]

use std::path::Path;

use star_catcher::consts::*;
use star_catcher::sim::{
    Command, EntityKind, MotionCommand, PhysicsEvent, PlayerState, Reaction, RawInput, Session,
    bootstrap, dispatch_all, on_frame_tick, translate,
};
use star_catcher::{GameResult, Settings};

/// Overlap distance between the player and a star
const REACH: f32 = 16.0;
/// Give up after this many frames
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Scripted player that always heads for the closest active star
fn autopilot(session: &Session, player: &PlayerState) -> (RawInput, Option<f32>) {
    let target = session
        .registry()
        .collectibles()
        .iter()
        .filter(|c| c.active)
        .map(|c| c.spawn.x)
        .min_by(|a, b| (a - player.pos.x).abs().total_cmp(&(b - player.pos.x).abs()));

    let raw = match target {
        Some(x) if x < player.pos.x - 1.0 => RawInput {
            left: true,
            ..Default::default()
        },
        Some(x) if x > player.pos.x + 1.0 => RawInput {
            right: true,
            ..Default::default()
        },
        _ => RawInput::default(),
    };
    (raw, target)
}

fn apply(commands: &[Command]) {
    for command in commands {
        log::debug!("-> {command:?}");
    }
}

fn run(seed: u64, levels: u32, settings: Settings) -> GameResult<()> {
    let (mut session, layout) = bootstrap(seed, settings)?;
    apply(&layout.commands);

    let mut player = PlayerState {
        pos: layout.player.pos,
        touching_down: true,
    };
    let player_id = session.player();
    println!("{}", session.snapshot());

    for frame in 0..MAX_FRAMES {
        let (raw, target) = autopilot(&session, &player);
        match on_frame_tick(&session, &translate(&raw), &player) {
            MotionCommand::Move { vx, .. } => {
                player.pos.x = (player.pos.x + vx * SIM_DT).clamp(0.0, ARENA_WIDTH);
            }
            MotionCommand::Hold => {
                log::info!("Frozen after {frame} frames");
                break;
            }
        }

        let mut events = Vec::new();
        if let Some(x) = target.filter(|x| (x - player.pos.x).abs() < REACH) {
            let star = session
                .registry()
                .collectibles()
                .iter()
                .find(|c| c.active && c.spawn.x == x)
                .map(|c| c.id);
            if let Some(star) = star {
                events.push(PhysicsEvent::Overlap { a: player_id, b: star });
            }
        }
        if session.state().level() >= levels {
            if let Some(hazard) = session.registry().hazards().first() {
                events.push(PhysicsEvent::Collision {
                    a: player_id,
                    b: hazard.id,
                });
            }
        }

        for reaction in dispatch_all(&mut session, events, &player)? {
            apply(reaction.commands());
            match reaction {
                Reaction::Collect(r) if r.applied => println!("{}", r.snapshot),
                Reaction::Hazard(r) if r.applied => println!("{} - game over", r.snapshot),
                _ => {}
            }
        }
    }

    log::info!(
        "Finished with {} hazards in play",
        session.registry().count_active(EntityKind::Hazard)
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Star Catcher (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let levels = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let settings = args
        .next()
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();

    if let Err(e) = run(seed, levels, settings) {
        log::error!("Session aborted: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM builds are driven by the engine adapter, not this binary
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_autopilot_heads_for_nearest_star() {
        let (session, _) = bootstrap(7, Settings::default()).unwrap();
        // Stars sit at x = 12 + 70k; 230 is nearest to 222
        let player = PlayerState {
            pos: Vec2::new(230.0, 450.0),
            touching_down: true,
        };
        let (raw, target) = autopilot(&session, &player);
        assert_eq!(target, Some(222.0));
        assert!(raw.left && !raw.right);
    }
}
