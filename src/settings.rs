//! Game settings and preferences
//!
//! Each value is persisted under its own LocalStorage key. Stored values are
//! validated on load; anything unreadable or out of range falls back to the
//! default for that value only.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::StorageError;

/// Colors handed to the renderer (hex strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub player_paddle: String,
    pub ai_paddle: String,
    pub ball: String,
    pub court_lines: String,
    pub court_floor: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            player_paddle: "#00ff88".to_string(),
            ai_paddle: "#ff3366".to_string(),
            ball: "#ffff00".to_string(),
            court_lines: "#ffffff".to_string(),
            court_floor: "#1a1a2e".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Serve speed in units per second (1 - 50)
    pub ball_speed: f32,
    /// AI base difficulty (0.0 easy - 1.0 hard)
    pub ai_difficulty: f32,
    /// Steer with the mouse instead of the keyboard (not persisted)
    pub mouse_control: bool,
    pub colors: ColorTheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            ai_difficulty: AI_DIFFICULTY,
            mouse_control: false,
            colors: ColorTheme::default(),
        }
    }
}

impl Settings {
    /// LocalStorage keys
    pub const BALL_SPEED_KEY: &'static str = "pongBallSpeed";
    pub const AI_DIFFICULTY_KEY: &'static str = "pongAiDifficulty";
    pub const COLOR_THEME_KEY: &'static str = "pongColorTheme";

    pub fn set_ball_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.ball_speed = speed.clamp(MIN_BASE_BALL_SPEED, MAX_BASE_BALL_SPEED);
        }
    }

    pub fn set_ai_difficulty(&mut self, difficulty: f32) {
        if difficulty.is_finite() {
            self.ai_difficulty = difficulty.clamp(0.0, 1.0);
        }
    }

    pub fn reset_colors(&mut self) {
        self.colors = ColorTheme::default();
    }

    /// Build settings from stored values looked up by key
    pub fn from_entries<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = get(Self::BALL_SPEED_KEY) {
            match parse_in_range(&raw, "ball_speed", MIN_BASE_BALL_SPEED, MAX_BASE_BALL_SPEED) {
                Ok(speed) => settings.ball_speed = speed,
                Err(e) => log::warn!("[loadBallSpeed] {}", e),
            }
        }

        if let Some(raw) = get(Self::AI_DIFFICULTY_KEY) {
            match parse_in_range(&raw, "ai_difficulty", 0.0, 1.0) {
                Ok(difficulty) => settings.ai_difficulty = difficulty,
                Err(e) => log::warn!("[loadAiDifficulty] {}", e),
            }
        }

        if let Some(raw) = get(Self::COLOR_THEME_KEY) {
            match serde_json::from_str::<ColorTheme>(&raw) {
                Ok(colors) => settings.colors = colors,
                Err(e) => log::warn!("[loadTheme] {}", StorageError::from(e)),
            }
        }

        settings
    }

    /// Key/value pairs to persist
    pub fn to_entries(&self) -> Result<Vec<(&'static str, String)>, StorageError> {
        Ok(vec![
            (Self::BALL_SPEED_KEY, self.ball_speed.to_string()),
            (Self::AI_DIFFICULTY_KEY, self.ai_difficulty.to_string()),
            (Self::COLOR_THEME_KEY, serde_json::to_string(&self.colors)?),
        ])
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match local_storage() {
            Some(storage) => {
                let settings = Self::from_entries(|key| storage.get_item(key).ok().flatten());
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        for (key, value) in self.to_entries()? {
            storage
                .set_item(key, &value)
                .map_err(|_| StorageError::Unavailable)?;
        }
        log::info!("Settings saved");
        Ok(())
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), StorageError> {
        // No-op for native
        Ok(())
    }
}

/// Parse a stored number and require it to lie in `[min, max]`
fn parse_in_range(raw: &str, field: &'static str, min: f32, max: f32) -> Result<f32, StorageError> {
    let value: f64 = serde_json::from_str(raw.trim())?;
    if value.is_nan() || value < min as f64 || value > max as f64 {
        return Err(StorageError::OutOfRange { field, value });
    }
    Ok(value as f32)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let settings = Settings::from_entries(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.ball_speed, 6.0);
        assert_eq!(settings.ai_difficulty, 0.5);
    }

    #[test]
    fn test_valid_entries_load() {
        let stored = store(&[
            ("pongBallSpeed", "12.5"),
            ("pongAiDifficulty", "0.8"),
            (
                "pongColorTheme",
                r##"{"playerPaddle":"#111111","aiPaddle":"#222222","ball":"#333333","courtLines":"#444444","courtFloor":"#555555"}"##,
            ),
        ]);
        let settings = Settings::from_entries(|k| stored.get(k).cloned());
        assert_eq!(settings.ball_speed, 12.5);
        assert_eq!(settings.ai_difficulty, 0.8);
        assert_eq!(settings.colors.ball, "#333333");
    }

    #[test]
    fn test_bad_entries_fall_back_individually() {
        let stored = store(&[
            ("pongBallSpeed", "51"),
            ("pongAiDifficulty", "banana"),
            ("pongColorTheme", "{not json"),
        ]);
        let settings = Settings::from_entries(|k| stored.get(k).cloned());
        assert_eq!(settings, Settings::default());

        let stored = store(&[("pongBallSpeed", "0.5"), ("pongAiDifficulty", "-0.1")]);
        let settings = Settings::from_entries(|k| stored.get(k).cloned());
        assert_eq!(settings.ball_speed, 6.0);
        assert_eq!(settings.ai_difficulty, 0.5);
    }

    #[test]
    fn test_entries_round_trip() {
        let mut settings = Settings::default();
        settings.set_ball_speed(20.0);
        settings.set_ai_difficulty(0.25);
        settings.colors.ball = "#abcdef".to_string();

        let stored: HashMap<String, String> = settings
            .to_entries()
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let loaded = Settings::from_entries(|k| stored.get(k).cloned());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_setters_clamp() {
        let mut settings = Settings::default();
        settings.set_ball_speed(100.0);
        assert_eq!(settings.ball_speed, 50.0);
        settings.set_ball_speed(f32::NAN);
        assert_eq!(settings.ball_speed, 50.0);
        settings.set_ai_difficulty(-2.0);
        assert_eq!(settings.ai_difficulty, 0.0);
    }

    #[test]
    fn test_out_of_range_error_names_field() {
        let err = parse_in_range("99", "ball_speed", 1.0, 50.0).unwrap_err();
        assert!(matches!(err, StorageError::OutOfRange { field: "ball_speed", .. }));
        assert!(matches!(
            parse_in_range("x", "ball_speed", 1.0, 50.0),
            Err(StorageError::Json(_))
        ));
    }
}
