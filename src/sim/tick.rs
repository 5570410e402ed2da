//! Per-frame player motion
//!
//! Called once per simulation step, before that step's collision reactions.

use super::command::{AnimationHint, MotionCommand};
use super::input::{Direction, MotionIntent};
use super::state::{PlayerState, Session};

/// Decide the player's velocity for this frame.
///
/// Once the session is over (or faulted) this returns `Hold`: no command is
/// issued and the body keeps its last velocity. The simulation is paused by
/// the game-over reaction anyway.
pub fn on_frame_tick(session: &Session, intent: &MotionIntent, player: &PlayerState) -> MotionCommand {
    if !session.state.is_live() {
        return MotionCommand::Hold;
    }

    let speed = session.settings.walk_speed;
    let (vx, animation) = match intent.direction {
        Direction::Left => (-speed, AnimationHint::Left),
        Direction::Right => (speed, AnimationHint::Right),
        Direction::None => (0.0, AnimationHint::Idle),
    };

    // Jump only off the ground; otherwise gravity owns vy
    let vy = (intent.jump_requested && player.touching_down).then(|| -session.settings.jump_speed);

    MotionCommand::Move { vx, vy, animation }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::Settings;
    use crate::sim::bootstrap::bootstrap;

    fn grounded() -> PlayerState {
        PlayerState {
            pos: Vec2::new(100.0, 450.0),
            touching_down: true,
        }
    }

    #[test]
    fn test_walk_left_and_right() {
        let (session, _) = bootstrap(1, Settings::default()).unwrap();
        let left = MotionIntent {
            direction: Direction::Left,
            jump_requested: false,
        };
        assert_eq!(
            on_frame_tick(&session, &left, &grounded()),
            MotionCommand::Move {
                vx: -160.0,
                vy: None,
                animation: AnimationHint::Left
            }
        );

        let right = MotionIntent {
            direction: Direction::Right,
            ..left
        };
        assert_eq!(
            on_frame_tick(&session, &right, &grounded()),
            MotionCommand::Move {
                vx: 160.0,
                vy: None,
                animation: AnimationHint::Right
            }
        );
    }

    #[test]
    fn test_idle_stops_horizontal() {
        let (session, _) = bootstrap(1, Settings::default()).unwrap();
        assert_eq!(
            on_frame_tick(&session, &MotionIntent::default(), &grounded()),
            MotionCommand::Move {
                vx: 0.0,
                vy: None,
                animation: AnimationHint::Idle
            }
        );
    }

    #[test]
    fn test_jump_needs_ground() {
        let (session, _) = bootstrap(1, Settings::default()).unwrap();
        let jump = MotionIntent {
            direction: Direction::None,
            jump_requested: true,
        };

        let MotionCommand::Move { vy, .. } = on_frame_tick(&session, &jump, &grounded()) else {
            panic!("expected Move");
        };
        assert_eq!(vy, Some(-330.0));

        let airborne = PlayerState {
            touching_down: false,
            ..grounded()
        };
        let MotionCommand::Move { vy, .. } = on_frame_tick(&session, &jump, &airborne) else {
            panic!("expected Move");
        };
        assert_eq!(vy, None);
    }

    #[test]
    fn test_frozen_after_game_over() {
        let (mut session, _) = bootstrap(1, Settings::default()).unwrap();
        session.state.end();
        let intent = MotionIntent {
            direction: Direction::Right,
            jump_requested: true,
        };
        assert!(on_frame_tick(&session, &intent, &grounded()).is_hold());
    }
}
