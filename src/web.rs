//! Browser bindings
//!
//! Thin `wasm-bindgen` wrapper around [`Session`] for the page script. The
//! page owns rendering, audio and the animation loop; it calls `frame` once
//! per `requestAnimationFrame` and reads positions back for drawing.

use wasm_bindgen::prelude::*;

use crate::input::Key;
use crate::session::{Session, SessionPhase};
use crate::settings::{ColorTheme, Settings};
use crate::sim::Side;
use crate::stats::MatchStats;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Failed to init logger: {}", e).into());
    }
    log::info!("Court Pong initialized");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game with stored settings and stats. A seed of 0 picks one at random.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebGame {
        let seed = if seed > 0.0 {
            seed as u64
        } else {
            rand::random::<u64>()
        };
        WebGame {
            session: Session::new(seed, Settings::load(), MatchStats::load()),
        }
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Advance one frame; returns the frame's events as JSON
    pub fn frame(&mut self, dt: f32) -> String {
        let events = self.session.frame(dt);
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::error!("[frame] {}", e);
            "[]".to_string()
        })
    }

    pub fn key_down(&mut self, key: &str) {
        if let Some(key) = Key::from_dom(key) {
            self.session.press(key);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = Key::from_dom(key) {
            self.session.release(key);
        }
    }

    pub fn mouse_move(&mut self, client_x: f32, viewport_width: f32) {
        self.session.set_mouse(client_x, viewport_width);
    }

    /// Ball center `[x, y, z]` in world space
    pub fn ball_position(&self) -> Vec<f32> {
        self.session.state.ball.world_position().to_array().to_vec()
    }

    /// Paddle centers `[player_x, player_y, player_z, ai_x, ai_y, ai_z]`
    pub fn paddle_positions(&self) -> Vec<f32> {
        let player = self.session.state.player.paddle.world_position();
        let ai = self.session.state.ai.paddle.world_position();
        vec![player.x, player.y, player.z, ai.x, ai.y, ai.z]
    }

    /// `[player_score, ai_score]`
    pub fn scores(&self) -> Vec<u32> {
        let (player, ai) = self.session.state.scores();
        vec![player, ai]
    }

    /// "menu", "playing", "paused" or "game_over"
    pub fn phase(&self) -> String {
        match self.session.phase {
            SessionPhase::Menu => "menu",
            SessionPhase::Playing => "playing",
            SessionPhase::Paused => "paused",
            SessionPhase::GameOver { .. } => "game_over",
        }
        .to_string()
    }

    pub fn winner(&self) -> Option<String> {
        self.session.winner().map(|side: Side| side.as_str().to_string())
    }

    pub fn set_ball_speed(&mut self, speed: f32) {
        self.session.set_ball_speed(speed);
    }

    pub fn set_ai_difficulty(&mut self, difficulty: f32) {
        self.session.set_ai_difficulty(difficulty);
    }

    pub fn set_mouse_control(&mut self, enabled: bool) {
        self.session.set_mouse_control(enabled);
    }

    pub fn stats_json(&self) -> String {
        self.session.stats.to_json().unwrap_or_default()
    }

    pub fn reset_stats(&mut self) {
        self.session.reset_stats();
    }

    pub fn colors_json(&self) -> String {
        serde_json::to_string(&self.session.settings.colors).unwrap_or_default()
    }

    pub fn set_colors_json(&mut self, json: &str) -> Result<(), JsValue> {
        let colors: ColorTheme =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.settings.colors = colors;
        self.session
            .settings
            .save()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset_colors(&mut self) -> Result<(), JsValue> {
        self.session.settings.reset_colors();
        self.session
            .settings
            .save()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
