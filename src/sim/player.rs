//! Player paddle controller
//!
//! Eases the paddle toward the spot selected by the normalized control
//! signal instead of snapping to it.

use super::state::{Paddle, Side};
use crate::consts::PLAYER_EASING;
use crate::paddle_limit;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPaddle {
    pub paddle: Paddle,
}

impl Default for PlayerPaddle {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerPaddle {
    pub fn new() -> Self {
        Self {
            paddle: Paddle::new(Side::Player),
        }
    }

    /// Lateral target for a control value in [-1, 1]
    pub fn target_for(control: f32) -> f32 {
        control.clamp(-1.0, 1.0) * paddle_limit()
    }

    /// Move a fixed fraction of the remaining distance toward the target
    pub fn update(&mut self, control: f32) {
        let target = Self::target_for(control);
        let x = self.paddle.x;
        self.paddle.set_x(x + (target - x) * PLAYER_EASING);
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.paddle.x
    }
}
