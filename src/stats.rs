//! Win/loss statistics
//!
//! Persisted to LocalStorage as `{"wins": n, "losses": n}`. Corrupt or
//! negative counts load as zero.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::sim::Side;

/// Lifetime match results against the AI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchStats {
    pub wins: u32,
    pub losses: u32,
}

impl MatchStats {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pongStats";

    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished match
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Player => self.wins += 1,
            Side::Ai => self.losses += 1,
        }
    }

    /// Matches played
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    /// Rounded win percentage (0 before the first match)
    pub fn win_rate_percent(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.wins as f64 / total as f64 * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Decode stored stats, validating each count on its own
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let count = |field: &str| {
            value
                .get(field)
                .and_then(|v| v.as_f64())
                .filter(|n| *n >= 0.0)
                .map(|n| n.min(u32::MAX as f64) as u32)
                .unwrap_or(0)
        };
        Ok(Self {
            wins: count("wins"),
            losses: count("losses"),
        })
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load stats from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = crate::settings::local_storage()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        match stored.map(|json| Self::from_json(&json)) {
            Some(Ok(stats)) => {
                log::info!("Loaded stats: {} wins, {} losses", stats.wins, stats.losses);
                stats
            }
            Some(Err(e)) => {
                log::error!("[loadStats] {}", e);
                Self::new()
            }
            None => Self::new(),
        }
    }

    /// Save stats to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), StorageError> {
        let storage = crate::settings::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(Self::STORAGE_KEY, &self.to_json()?)
            .map_err(|_| StorageError::Unavailable)?;
        log::info!("Stats saved ({} games)", self.total());
        Ok(())
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), StorageError> {
        // No-op for native
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_rate() {
        let mut stats = MatchStats::new();
        assert_eq!(stats.win_rate_percent(), 0);
        stats.record(Side::Player);
        stats.record(Side::Player);
        stats.record(Side::Ai);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.win_rate_percent(), 67);
        stats.reset();
        assert_eq!(stats, MatchStats::default());
    }

    #[test]
    fn test_from_json_valid() {
        let stats = MatchStats::from_json(r#"{"wins": 4, "losses": 2}"#).unwrap();
        assert_eq!(stats, MatchStats { wins: 4, losses: 2 });
    }

    #[test]
    fn test_from_json_bad_fields_become_zero() {
        let stats = MatchStats::from_json(r#"{"wins": -3, "losses": "many"}"#).unwrap();
        assert_eq!(stats, MatchStats::default());

        let stats = MatchStats::from_json(r#"{"losses": 5}"#).unwrap();
        assert_eq!(stats, MatchStats { wins: 0, losses: 5 });
    }

    #[test]
    fn test_from_json_garbage_is_error() {
        assert!(matches!(MatchStats::from_json("{{"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let stats = MatchStats { wins: 10, losses: 7 };
        let json = stats.to_json().unwrap();
        assert_eq!(MatchStats::from_json(&json).unwrap(), stats);
    }
}
