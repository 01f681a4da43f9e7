//! Game session around a single match
//!
//! The session is the layer the page talks to: it starts and pauses the
//! game, feeds the control signal and settings into each simulation tick,
//! ends the match when a side reaches `WIN_SCORE`, and keeps the win/loss
//! statistics.

use crate::consts::WIN_SCORE;
use crate::input::{ControlInput, Key};
use crate::settings::Settings;
use crate::sim::{MatchEvent, MatchSnapshot, MatchState, Side, TickInput, tick};
use crate::stats::MatchStats;

/// Hooks for sound, HUD and analytics. All methods default to no-ops.
pub trait MatchObserver {
    fn on_score(&mut self, _scorer: Side, _player_score: u32, _ai_score: u32) {}
    fn on_game_over(&mut self, _winner: Side) {}
    fn on_paddle_hit(&mut self, _side: Side) {}
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the player to press start
    Menu,
    Playing,
    Paused,
    /// A side reached the winning score
    GameOver { winner: Side },
}

pub struct Session {
    pub state: MatchState,
    pub settings: Settings,
    pub stats: MatchStats,
    pub input: ControlInput,
    pub phase: SessionPhase,
    seed: u64,
    game_over_processed: bool,
    observer: Option<Box<dyn MatchObserver>>,
}

impl Session {
    pub fn new(seed: u64, settings: Settings, stats: MatchStats) -> Self {
        let input = ControlInput::new(settings.mouse_control);
        Self {
            state: MatchState::new(seed, settings.ball_speed),
            settings,
            stats,
            input,
            phase: SessionPhase::Menu,
            seed,
            game_over_processed: false,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observer = Some(observer);
    }

    pub fn start(&mut self) {
        if self.phase == SessionPhase::Menu {
            log::info!("Match started (seed {})", self.seed);
            self.phase = SessionPhase::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.phase = SessionPhase::Paused;
            log::info!("Paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Playing;
            log::info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            SessionPhase::Playing => self.pause(),
            SessionPhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Throw away the current match and return to the menu with a new seed
    pub fn reset(&mut self) {
        self.seed = next_seed(self.seed);
        self.state = MatchState::new(self.seed, self.settings.ball_speed);
        self.phase = SessionPhase::Menu;
        self.game_over_processed = false;
        self.input.reset();
        log::info!("New match ready (seed {})", self.seed);
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            SessionPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    pub fn press(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.input.release(key);
    }

    pub fn set_mouse(&mut self, client_x: f32, width: f32) {
        self.input.set_mouse(client_x, width);
    }

    pub fn set_mouse_control(&mut self, enabled: bool) {
        self.settings.mouse_control = enabled;
        self.input.mouse_enabled = enabled;
    }

    /// Takes effect at the next serve
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.settings.set_ball_speed(speed);
        self.persist_settings();
    }

    pub fn set_ai_difficulty(&mut self, difficulty: f32) {
        self.settings.set_ai_difficulty(difficulty);
        self.persist_settings();
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        if let Err(e) = self.stats.save() {
            log::error!("[resetStats] {}", e);
        }
    }

    /// Advance one rendered frame of `dt` seconds
    pub fn frame(&mut self, dt: f32) -> Vec<MatchEvent> {
        if self.phase == SessionPhase::Playing {
            self.input.advance(dt);
        }

        let input = TickInput {
            control: self.input.signal(),
            base_ball_speed: self.settings.ball_speed,
            ai_difficulty: self.settings.ai_difficulty,
            started: self.phase != SessionPhase::Menu,
            paused: !matches!(self.phase, SessionPhase::Playing | SessionPhase::Menu),
        };
        let events = tick(&mut self.state, &input, dt);

        for event in &events {
            match *event {
                MatchEvent::Scored {
                    scorer,
                    player_score,
                    ai_score,
                } => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_score(scorer, player_score, ai_score);
                    }
                    self.check_game_over(player_score, ai_score);
                }
                MatchEvent::PaddleHit { side, .. } => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.on_paddle_hit(side);
                    }
                }
                MatchEvent::BallReset { .. } => {}
            }
        }

        events
    }

    fn check_game_over(&mut self, player_score: u32, ai_score: u32) {
        if self.game_over_processed {
            return;
        }
        let winner = if player_score >= WIN_SCORE {
            Side::Player
        } else if ai_score >= WIN_SCORE {
            Side::Ai
        } else {
            return;
        };

        self.game_over_processed = true;
        self.phase = SessionPhase::GameOver { winner };
        self.stats.record(winner);
        log::info!(
            "Game over: {} wins {} - {}",
            winner.as_str(),
            player_score,
            ai_score
        );
        if let Err(e) = self.stats.save() {
            log::error!("[saveStats] {}", e);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_game_over(winner);
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            log::error!("[saveSettings] {}", e);
        }
    }
}

/// Seed for the next match (LCG step, never repeats the previous seed)
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
