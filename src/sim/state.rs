//! Shared simulation types
//!
//! Small value types passed between the ball, the paddle controllers and the
//! match orchestrator.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{clamp_paddle_x, paddle_line};

/// One end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human player, defends the negative depth end
    Player,
    /// Scripted opponent, defends the positive depth end
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Sign of the depth axis pointing at this side's end
    pub fn depth_sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Ai => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Where the current rally stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball parked at center until the game starts
    WaitingToServe,
    /// Ball in motion
    InPlay,
}

/// A paddle on its fixed depth line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Lateral position of the paddle center
    pub x: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side, x: 0.0 }
    }

    /// Depth of the line this paddle travels on
    #[inline]
    pub fn z(&self) -> f32 {
        paddle_line(self.side)
    }

    /// Move by `dx`, staying on the court
    pub fn shift(&mut self, dx: f32) {
        self.x = clamp_paddle_x(self.x + dx);
    }

    /// Place at `x`, staying on the court
    pub fn set_x(&mut self, x: f32) {
        self.x = clamp_paddle_x(x);
    }

    /// Paddle center in world space for rendering
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.x, PADDLE_VISUAL_HEIGHT, self.z())
    }
}

/// Something the UI layer may want to react to (sound, HUD, game over)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A paddle returned the ball
    PaddleHit { side: Side, speed: f32 },
    /// A point was scored; carries the score after the point
    Scored {
        scorer: Side,
        player_score: u32,
        ai_score: u32,
    },
    /// Ball wedged outside the lateral bounds and was re-served
    BallReset { served_to: Side },
}

/// Read-only view of a match for rendering/HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub ball: Vec2,
    pub player_x: f32,
    pub ai_x: f32,
    pub player_score: u32,
    pub ai_score: u32,
    pub rally_difficulty: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
        assert_eq!(Side::Player.depth_sign(), -1.0);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let mut paddle = Paddle::new(Side::Ai);
        paddle.shift(100.0);
        assert_eq!(paddle.x, 4.75);
        paddle.shift(-0.75);
        assert_eq!(paddle.x, 4.0);
        paddle.set_x(-9.0);
        assert_eq!(paddle.x, -4.75);
        assert_eq!(paddle.world_position(), Vec3::new(-4.75, 0.2, 5.0));
    }
}
