//! Match orchestrator
//!
//! Owns everything that lives for a whole match (scores, rally difficulty,
//! serve RNG) and advances the components in a fixed order each frame:
//! paddles, then ball, then paddle contact, then scoring/respawn.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::ai::AiPaddle;
use super::ball::{Ball, BallStep};
use super::collision::{paddle_contact, ramp_speed, rebound_velocity};
use super::player::PlayerPaddle;
use super::state::{MatchEvent, MatchSnapshot, Paddle, RallyPhase, Side};
use crate::consts::*;
use crate::paddle_line;

/// RNG stream for serve directions (AI uses its own stream)
const SERVE_STREAM: u64 = 0x5e7e;
const AI_STREAM: u64 = 0xa1;

/// Inputs for a single frame, supplied by the UI layer
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Normalized paddle control in [-1, 1]
    pub control: f32,
    /// Configured serve speed (1-50)
    pub base_ball_speed: f32,
    /// Configured AI difficulty (0-1)
    pub ai_difficulty: f32,
    /// Game has been started by the player
    pub started: bool,
    /// Game is paused
    pub paused: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            control: 0.0,
            base_ball_speed: BALL_SPEED,
            ai_difficulty: AI_DIFFICULTY,
            started: false,
            paused: false,
        }
    }
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub ball: Ball,
    pub player: PlayerPaddle,
    pub ai: AiPaddle,
    pub player_score: u32,
    pub ai_score: u32,
    /// Player returns in the current rally; drives the AI skill ramp
    pub rally_difficulty: u32,
    /// Paddle that touched the ball last, until it re-crosses mid court
    pub last_hit_by: Option<Side>,
    pub phase: RallyPhase,
    /// Simulation clock in seconds (stopped while paused)
    pub clock: f32,
    was_started: bool,
    rng: Pcg32,
}

impl MatchState {
    /// Create a match with the ball at center, aimed at a random side
    pub fn new(seed: u64, base_ball_speed: f32) -> Self {
        let mut state = Self {
            seed,
            ball: Ball::new(base_ball_speed),
            player: PlayerPaddle::new(),
            ai: AiPaddle::with_rng(Pcg32::new(seed, AI_STREAM)),
            player_score: 0,
            ai_score: 0,
            rally_difficulty: 0,
            last_hit_by: None,
            phase: RallyPhase::WaitingToServe,
            clock: 0.0,
            was_started: false,
            rng: Pcg32::new(seed, SERVE_STREAM),
        };
        state.serve_random(clamp_base_speed(base_ball_speed));
        state.phase = RallyPhase::WaitingToServe;
        state
    }

    /// Score pair `(player, ai)`
    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player.paddle,
            Side::Ai => &self.ai.paddle,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            ball: self.ball.pos,
            player_x: self.player.x(),
            ai_x: self.ai.x(),
            player_score: self.player_score,
            ai_score: self.ai_score,
            rally_difficulty: self.rally_difficulty,
        }
    }

    /// Opening serve: straight down the center line toward a random side
    fn serve_random(&mut self, speed: f32) {
        let speed = speed.min(MAX_BALL_SPEED);
        let toward = if self.rng.random_bool(0.5) {
            Side::Player
        } else {
            Side::Ai
        };
        self.ball
            .serve(Vec2::new(0.0, speed * toward.depth_sign()), speed);
        self.rally_difficulty = 0;
        self.last_hit_by = None;
        self.phase = RallyPhase::InPlay;
        log::info!("Opening serve toward {} at speed {:.1}", toward.as_str(), speed);
    }

    /// Re-serve from center aimed at the current position of `toward`'s paddle
    fn respawn(&mut self, toward: Side, speed: f32) {
        let speed = speed.min(MAX_BALL_SPEED);
        let target = Vec2::new(self.paddle(toward).x, paddle_line(toward));
        self.ball.serve(serve_velocity(target, speed), speed);
        self.rally_difficulty = 0;
        self.last_hit_by = None;
        self.phase = RallyPhase::InPlay;
    }

    fn award_point(&mut self, scorer: Side, speed: f32, events: &mut Vec<MatchEvent>) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Ai => self.ai_score += 1,
        }
        log::info!(
            "Point to {}: {} - {} (rally difficulty was {})",
            scorer.as_str(),
            self.player_score,
            self.ai_score,
            self.rally_difficulty
        );
        events.push(MatchEvent::Scored {
            scorer,
            player_score: self.player_score,
            ai_score: self.ai_score,
        });
        // The side that conceded receives the next serve
        self.respawn(scorer.opponent(), speed);
    }

    fn reset_stuck(&mut self, speed: f32, events: &mut Vec<MatchEvent>) {
        let near = if self.ball.pos.y < 0.0 {
            Side::Player
        } else {
            Side::Ai
        };
        log::info!(
            "Ball stuck at ({:.2}, {:.2}), serving to {}",
            self.ball.pos.x,
            self.ball.pos.y,
            near.as_str()
        );
        self.respawn(near, speed);
        events.push(MatchEvent::BallReset { served_to: near });
    }

    fn resolve_paddle_hits(&mut self, events: &mut Vec<MatchEvent>) {
        for side in [Side::Player, Side::Ai] {
            if self.last_hit_by == Some(side) {
                continue;
            }
            let Some(contact) = paddle_contact(self.ball.pos, self.paddle(side)) else {
                continue;
            };

            self.ball.speed = ramp_speed(self.ball.speed);
            self.ball.vel = rebound_velocity(side, self.ball.speed, contact.hit_offset);
            self.last_hit_by = Some(side);
            if side == Side::Player {
                self.rally_difficulty += 1;
            }
            log::debug!(
                "{} hit: offset={:.2} speed={:.2} rally={}",
                side.as_str(),
                contact.hit_offset,
                self.ball.speed,
                self.rally_difficulty
            );
            events.push(MatchEvent::PaddleHit {
                side,
                speed: self.ball.speed,
            });
        }

        if self.ball.pos.y.abs() < COURT_DEPTH / 4.0 {
            self.last_hit_by = None;
        }
    }
}

/// Velocity from center court toward `target` at `speed`
pub fn serve_velocity(target: Vec2, speed: f32) -> Vec2 {
    target.normalize_or_zero() * speed
}

/// Keep a configured base speed inside its allowed range
fn clamp_base_speed(speed: f32) -> f32 {
    if speed.is_finite() {
        speed.clamp(MIN_BASE_BALL_SPEED, MAX_BASE_BALL_SPEED)
    } else {
        BALL_SPEED
    }
}

/// Advance the match by one frame and return what happened.
///
/// While paused nothing moves and the clock stands still. Before the game is
/// started the paddles move but the ball waits at center.
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) -> Vec<MatchEvent> {
    let mut events = Vec::new();

    if input.paused {
        return events;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.clock += dt;

    let base_speed = clamp_base_speed(input.base_ball_speed);
    if input.started && !state.was_started {
        state.player_score = 0;
        state.ai_score = 0;
        state.serve_random(base_speed);
    }
    state.was_started = input.started;

    // Paddles first so contact checks see this frame's positions
    state.player.update(input.control);
    state.ai.update(
        state.ball.pos.x,
        input.ai_difficulty,
        state.rally_difficulty,
        state.clock,
    );

    let running = input.started && state.phase == RallyPhase::InPlay;
    match state.ball.advance(dt, state.clock, running) {
        BallStep::Scored(scorer) => {
            state.award_point(scorer, base_speed, &mut events);
            return events;
        }
        BallStep::Stuck => {
            state.reset_stuck(base_speed, &mut events);
            return events;
        }
        BallStep::Moved(_) => {}
    }

    if running {
        state.resolve_paddle_hits(&mut events);
    }

    events
}
