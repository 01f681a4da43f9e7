//! Court Pong - A 3D court arcade game against an adaptive AI paddle
//!
//! Core modules:
//! - `sim`: Match simulation (ball physics, paddles, AI, scoring)
//! - `input`: Normalized control signal from mouse/keyboard
//! - `settings`: Player configuration (ball speed, AI difficulty, colors)
//! - `stats`: Win/loss statistics
//! - `session`: Game lifecycle around a match (start, pause, first to 11)

pub mod error;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;
pub mod stats;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::StorageError;
pub use input::{ControlInput, Key};
pub use session::{MatchObserver, Session, SessionPhase};
pub use settings::{ColorTheme, Settings};
pub use stats::MatchStats;

/// Game configuration constants
///
/// The court lies on the x/z plane. Simulation code stores positions as
/// `Vec2` where `x` is lateral and `y` carries the depth (z) axis. The player
/// defends the negative depth end, the AI the positive one.
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 12.0;
    pub const COURT_DEPTH: f32 = 12.0;

    /// Paddle box (x = width, y = height, z = depth)
    pub const PADDLE_WIDTH: f32 = 2.5;
    pub const PADDLE_HEIGHT: f32 = 0.3;
    pub const PADDLE_DEPTH: f32 = 0.5;
    /// Paddle lines sit this far inside each end of the court
    pub const PADDLE_LINE_INSET: f32 = 1.0;
    /// Visual height of paddle centers above the floor
    pub const PADDLE_VISUAL_HEIGHT: f32 = 0.2;

    /// Ball sphere radius
    pub const BALL_RADIUS: f32 = 0.2;
    /// Visual height of the ball above the floor (cosmetic only)
    pub const BALL_VISUAL_HEIGHT: f32 = 0.3;

    /// Default ball speed in units per second
    pub const BALL_SPEED: f32 = 6.0;
    /// Configurable base ball speed range
    pub const MIN_BASE_BALL_SPEED: f32 = 1.0;
    pub const MAX_BASE_BALL_SPEED: f32 = 50.0;
    /// Ball speed ceiling after repeated hits (same for all base speeds)
    pub const MAX_BALL_SPEED: f32 = 28.0;
    /// Speed multiplier applied on every paddle hit
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.08;
    /// Lateral spread of returns, per paddle
    pub const PLAYER_RETURN_SPREAD: f32 = 0.7;
    pub const AI_RETURN_SPREAD: f32 = 0.5;

    /// AI paddle step per tick (court units)
    pub const AI_SPEED: f32 = 0.07;
    /// Default AI base difficulty
    pub const AI_DIFFICULTY: f32 = 0.5;
    /// Fraction of remaining distance the player paddle covers each tick
    pub const PLAYER_EASING: f32 = 0.1;

    /// Largest frame delta fed to the simulation (absorbs tab stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Ball must stay outside the lateral bounds this long to be expelled
    pub const STUCK_TIMEOUT: f32 = 0.5;
    /// Minimum time between two lateral wall bounces
    pub const WALL_COOLDOWN: f32 = 0.1;
    /// Lateral/total speed ratio below which a wall bounce is redirected
    pub const PARALLEL_RATIO: f32 = 0.3;
    /// Lateral share of speed after a parallel-approach redirect
    pub const UNSTICK_LATERAL_RATIO: f32 = 0.4;
    /// Distance past each end line at which a point is scored
    pub const SCORE_MARGIN: f32 = 1.0;

    /// First side to reach this many points wins the match
    pub const WIN_SCORE: u32 = 11;
}

/// Depth (z) of the line a side's paddle travels on
#[inline]
pub fn paddle_line(side: sim::Side) -> f32 {
    use consts::*;
    match side {
        sim::Side::Player => -COURT_DEPTH / 2.0 + PADDLE_LINE_INSET,
        sim::Side::Ai => COURT_DEPTH / 2.0 - PADDLE_LINE_INSET,
    }
}

/// Furthest a paddle center can move from the court's center line
#[inline]
pub fn paddle_limit() -> f32 {
    consts::COURT_WIDTH / 2.0 - consts::PADDLE_WIDTH / 2.0
}

/// Clamp a paddle's lateral position to the court
#[inline]
pub fn clamp_paddle_x(x: f32) -> f32 {
    let limit = paddle_limit();
    x.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_lines() {
        assert_eq!(paddle_line(sim::Side::Player), -5.0);
        assert_eq!(paddle_line(sim::Side::Ai), 5.0);
    }

    #[test]
    fn test_clamp_paddle_x() {
        assert_eq!(paddle_limit(), 4.75);
        assert_eq!(clamp_paddle_x(10.0), 4.75);
        assert_eq!(clamp_paddle_x(-10.0), -4.75);
        assert_eq!(clamp_paddle_x(1.5), 1.5);
    }
}
