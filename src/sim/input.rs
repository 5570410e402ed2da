//! Raw directional input to motion intent

use serde::{Deserialize, Serialize};

/// Cursor key state polled by the engine for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Horizontal direction the player wants to move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

/// What the player is asking for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionIntent {
    pub direction: Direction,
    pub jump_requested: bool,
}

/// Translate raw key state into an intent.
///
/// Left wins when both left and right are held. Down is ignored.
pub fn translate(raw: &RawInput) -> MotionIntent {
    let direction = if raw.left {
        Direction::Left
    } else if raw.right {
        Direction::Right
    } else {
        Direction::None
    };
    MotionIntent {
        direction,
        jump_requested: raw.up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        assert_eq!(translate(&RawInput::default()), MotionIntent::default());
    }

    #[test]
    fn test_left_wins_over_right() {
        let raw = RawInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(translate(&raw).direction, Direction::Left);
    }

    #[test]
    fn test_jump_with_direction() {
        let raw = RawInput {
            right: true,
            up: true,
            ..Default::default()
        };
        let intent = translate(&raw);
        assert_eq!(intent.direction, Direction::Right);
        assert!(intent.jump_requested);
    }

    #[test]
    fn test_down_does_nothing() {
        let raw = RawInput {
            down: true,
            ..Default::default()
        };
        assert_eq!(translate(&raw), MotionIntent::default());
    }
}
