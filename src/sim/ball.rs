//! Ball motion and side-wall handling
//!
//! The ball integrates its own position, bounces off the side walls and
//! reports when it crosses an end line. Paddle contact is resolved by the
//! match orchestrator, which sees both paddles.

use glam::{Vec2, Vec3};

use super::state::Side;
use crate::consts::*;

/// Outcome of advancing the ball by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallStep {
    /// Ball is still on the court at this position
    Moved(Vec2),
    /// Ball crossed an end line; the given side won the point
    Scored(Side),
    /// Ball stayed outside the lateral bounds past the stuck timeout
    Stuck,
}

/// Lateral coordinate at which the ball counts as touching a side wall
#[inline]
pub fn wall_bound() -> f32 {
    COURT_WIDTH / 2.0 - BALL_RADIUS / 2.0
}

/// Depth past which the ball has left the court
#[inline]
pub fn end_line_bound() -> f32 {
    COURT_DEPTH / 2.0 + SCORE_MARGIN
}

/// The ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// x = lateral, y = depth
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rally speed, tracked apart from `vel` for the per-hit ramp
    pub speed: f32,
    /// Clock time the ball was first seen outside the lateral bounds
    pub out_of_bounds_since: Option<f32>,
    /// Suppresses repeated wall bounces while the ball separates
    pub wall_cooldown: bool,
    /// Clock time of the last wall bounce
    pub last_wall_hit: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_SPEED)
    }
}

impl Ball {
    /// A resting ball at center court
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: speed.min(MAX_BALL_SPEED),
            out_of_bounds_since: None,
            wall_cooldown: false,
            last_wall_hit: 0.0,
        }
    }

    /// Put the ball back at center with a fresh velocity. Both speed and
    /// velocity are capped at `MAX_BALL_SPEED`.
    pub fn serve(&mut self, vel: Vec2, speed: f32) {
        let speed = speed.min(MAX_BALL_SPEED);
        self.pos = Vec2::ZERO;
        self.vel = vel.clamp_length_max(speed);
        self.speed = speed;
        self.out_of_bounds_since = None;
        self.wall_cooldown = false;
    }

    /// Ball center in world space, at its fixed visual height
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, BALL_VISUAL_HEIGHT, self.pos.y)
    }

    /// Advance the ball by `dt` seconds.
    ///
    /// `now` is the simulation clock (stopped while paused). When the match is
    /// not running the ball holds its position.
    pub fn advance(&mut self, dt: f32, now: f32, running: bool) -> BallStep {
        if !running {
            return BallStep::Moved(self.pos);
        }

        let dt = dt.min(MAX_FRAME_DT);
        self.pos += self.vel * dt;

        if now - self.last_wall_hit > WALL_COOLDOWN {
            self.wall_cooldown = false;
        }

        if self.pos.x.abs() >= wall_bound() {
            match self.out_of_bounds_since {
                None => self.out_of_bounds_since = Some(now),
                Some(since) if now - since >= STUCK_TIMEOUT => {
                    self.out_of_bounds_since = None;
                    log::debug!("Ball stuck at x={:.2} for {:.2}s", self.pos.x, now - since);
                    return BallStep::Stuck;
                }
                Some(_) => {}
            }

            if !self.wall_cooldown {
                self.bounce_off_wall(now);
            }
        } else {
            self.out_of_bounds_since = None;
        }

        let end = end_line_bound();
        if self.pos.y >= end {
            return BallStep::Scored(Side::Player);
        }
        if self.pos.y <= -end {
            return BallStep::Scored(Side::Ai);
        }

        BallStep::Moved(self.pos)
    }

    /// Reflect off a side wall, redirecting near-parallel approaches
    fn bounce_off_wall(&mut self, now: f32) {
        self.vel.x = -self.vel.x;
        self.last_wall_hit = now;
        self.wall_cooldown = true;

        let magnitude = self.vel.length();
        if magnitude <= 0.0 || self.vel.x.abs() / magnitude >= PARALLEL_RATIO {
            return;
        }

        // Sliding along the wall: aim back toward center, keep total speed
        let push = if self.pos.x > 0.0 { -1.0 } else { 1.0 };
        self.vel.x = push * magnitude * UNSTICK_LATERAL_RATIO;
        let depth = (magnitude * magnitude - self.vel.x * self.vel.x).sqrt();
        self.vel.y = depth.copysign(self.vel.y);
        self.pos.x += push * BALL_RADIUS;
    }
}
