//! Match simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One explicit `tick` per frame, fixed update order
//! - Seeded RNG only
//! - Simulation clock that stops while paused
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod collision;
pub mod player;
pub mod state;
pub mod tick;

pub use ai::{AiPaddle, AiSkill};
pub use ball::{Ball, BallStep};
pub use collision::{PaddleContact, paddle_contact, ramp_speed, rebound_velocity};
pub use player::PlayerPaddle;
pub use state::{MatchEvent, MatchSnapshot, Paddle, RallyPhase, Side};
pub use tick::{MatchState, TickInput, serve_velocity, tick};
