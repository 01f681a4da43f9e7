//! Paddle contact detection and return shots
//!
//! Paddles are axis-aligned boxes on fixed depth lines, so contact reduces to
//! two interval checks. The return direction depends only on where along the
//! paddle the ball struck, not on the incoming angle.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::consts::*;

/// Where a ball touched a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Offset from paddle center, normalized by half width
    /// (about [-1, 1], slightly beyond at the edges)
    pub hit_offset: f32,
}

/// Check whether the ball overlaps a paddle.
///
/// Depth reach is half the paddle depth plus the ball radius; lateral reach
/// is half the paddle width plus the ball radius.
pub fn paddle_contact(ball_pos: Vec2, paddle: &Paddle) -> Option<PaddleContact> {
    let depth_reach = PADDLE_DEPTH / 2.0 + BALL_RADIUS;
    let lateral_reach = PADDLE_WIDTH / 2.0 + BALL_RADIUS;

    let dz = ball_pos.y - paddle.z();
    let dx = ball_pos.x - paddle.x;

    if dz.abs() <= depth_reach && dx.abs() < lateral_reach {
        Some(PaddleContact {
            hit_offset: dx / (PADDLE_WIDTH / 2.0),
        })
    } else {
        None
    }
}

/// Rally speed after one more paddle hit
#[inline]
pub fn ramp_speed(speed: f32) -> f32 {
    (speed * PADDLE_HIT_SPEEDUP).min(MAX_BALL_SPEED)
}

/// Velocity of a return shot by `side`.
///
/// The depth component always carries the full rally speed toward the
/// opponent; the lateral spread is wider for the player than for the AI.
pub fn rebound_velocity(side: Side, speed: f32, hit_offset: f32) -> Vec2 {
    let spread = match side {
        Side::Player => PLAYER_RETURN_SPREAD,
        Side::Ai => AI_RETURN_SPREAD,
    };
    Vec2::new(
        speed * hit_offset * spread,
        speed * side.opponent().depth_sign(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_at_center() {
        let paddle = Paddle::new(Side::Player);
        let contact = paddle_contact(Vec2::new(0.0, -5.0), &paddle).unwrap();
        assert_eq!(contact.hit_offset, 0.0);
    }

    #[test]
    fn test_contact_depth_reach() {
        let paddle = Paddle::new(Side::Ai);
        // Reach is 0.25 + 0.2 either side of z = 5
        assert!(paddle_contact(Vec2::new(0.0, 5.44), &paddle).is_some());
        assert!(paddle_contact(Vec2::new(0.0, 4.56), &paddle).is_some());
        assert!(paddle_contact(Vec2::new(0.0, 5.5), &paddle).is_none());
        assert!(paddle_contact(Vec2::new(0.0, 4.5), &paddle).is_none());
    }

    #[test]
    fn test_contact_lateral_reach_follows_paddle() {
        let mut paddle = Paddle::new(Side::Player);
        paddle.set_x(2.0);
        assert!(paddle_contact(Vec2::new(0.0, -5.0), &paddle).is_none());

        let contact = paddle_contact(Vec2::new(3.3, -5.0), &paddle).unwrap();
        assert!(contact.hit_offset > 1.0, "edge hits can exceed the half width");
        assert!(paddle_contact(Vec2::new(3.46, -5.0), &paddle).is_none());
    }

    #[test]
    fn test_ramp_speed() {
        assert!((ramp_speed(6.0) - 6.48).abs() < 1e-5);
        assert_eq!(ramp_speed(27.0), MAX_BALL_SPEED);
        assert_eq!(ramp_speed(MAX_BALL_SPEED), MAX_BALL_SPEED);
    }

    #[test]
    fn test_rebound_directions() {
        let v = rebound_velocity(Side::Player, 10.0, 0.5);
        assert_eq!(v, Vec2::new(3.5, 10.0));

        let v = rebound_velocity(Side::Ai, 10.0, -0.5);
        assert_eq!(v, Vec2::new(-2.5, -10.0));
    }
}
