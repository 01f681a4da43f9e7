//! AI paddle controller
//!
//! Chases the ball's lateral position with a deliberate aim error, a
//! reaction dead zone and a jittery step size. All three improve with the
//! configured base difficulty and with the length of the current rally, but
//! are floored/capped so the AI can always be beaten.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Paddle, Side};
use crate::consts::AI_SPEED;

/// Seconds between aim error resamples
pub const ERROR_RESAMPLE_INTERVAL: f32 = 1.0;
/// Width of the uniform aim error before scaling (court units)
pub const MAX_AIM_ERROR: f32 = 4.0;
/// Upper bound of the sampled extra reaction delay
pub const MAX_REACTION_DELAY: f32 = 0.3;
/// Dead zone before any reaction scaling
pub const BASE_REACTION_THRESHOLD: f32 = 0.25;
/// Hard cap on the speed multiplier
pub const MAX_SPEED_INCREASE: f32 = 1.5;

/// Skill multipliers derived from base and rally difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiSkill {
    /// Scales the sampled aim error (lower is more accurate)
    pub error_reduction: f32,
    /// Scales step size, before the `MAX_SPEED_INCREASE` cap
    pub speed_increase: f32,
    /// Scales reaction delay and dead zone (lower reacts sooner)
    pub reaction_improvement: f32,
}

impl AiSkill {
    /// `base` is the configured difficulty in [0, 1], `rally` counts player
    /// returns in the current rally.
    pub fn new(base: f32, rally: u32) -> Self {
        let d = base.clamp(0.0, 1.0);
        let r = rally as f32;

        let base_error = 1.0 - d * 0.7;
        let base_speed = 0.5 + d * 0.5;
        let base_reaction = 1.0 - d * 0.8;

        let rally_error = (1.0 - r * 0.1).max(0.3);
        let rally_speed = (1.0 + r * 0.08).min(1.5);
        let rally_reaction = (1.0 - r * 0.12).max(0.2);

        Self {
            error_reduction: (base_error * rally_error).max(0.2),
            speed_increase: base_speed * rally_speed,
            reaction_improvement: (base_reaction * rally_reaction).max(0.15),
        }
    }

    /// Speed multiplier actually applied to `AI_SPEED`
    #[inline]
    pub fn effective_speed(&self) -> f32 {
        self.speed_increase.min(MAX_SPEED_INCREASE)
    }
}

/// The AI-driven paddle
#[derive(Debug, Clone)]
pub struct AiPaddle {
    pub paddle: Paddle,
    /// Current lateral aim bias
    pub error_offset: f32,
    /// Current extra reaction delay
    pub reaction_delay: f32,
    /// Clock time of the last error resample
    pub last_error_update: f32,
    rng: Pcg32,
}

impl AiPaddle {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    /// Build with an explicit generator (tests, replays)
    pub fn with_rng(rng: Pcg32) -> Self {
        Self {
            paddle: Paddle::new(Side::Ai),
            error_offset: 0.0,
            reaction_delay: 0.0,
            last_error_update: 0.0,
            rng,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.paddle.x
    }

    /// Move one tick toward `ball_x`. `now` is the simulation clock.
    pub fn update(&mut self, ball_x: f32, base_difficulty: f32, rally_difficulty: u32, now: f32) {
        let skill = AiSkill::new(base_difficulty, rally_difficulty);

        if now - self.last_error_update > ERROR_RESAMPLE_INTERVAL {
            self.resample(&skill, now);
        }

        let target_x = ball_x + self.error_offset;
        let diff = target_x - self.paddle.x;
        let threshold = (BASE_REACTION_THRESHOLD + self.reaction_delay) * skill.reaction_improvement;

        if diff.abs() > threshold {
            let jitter = 0.6 + self.rng.random_range(0.0f32..0.3);
            let step = AI_SPEED * jitter * skill.effective_speed();
            self.paddle.shift(diff.signum() * step);
        }
    }

    fn resample(&mut self, skill: &AiSkill, now: f32) {
        let centered: f32 = self.rng.random::<f32>() - 0.5;
        self.error_offset = centered * MAX_AIM_ERROR * skill.error_reduction;
        self.reaction_delay = self.rng.random::<f32>() * MAX_REACTION_DELAY * skill.reaction_improvement;
        self.last_error_update = now;
        log::debug!(
            "AI resampled: error={:.3} delay={:.3}",
            self.error_offset,
            self.reaction_delay
        );
    }
}
