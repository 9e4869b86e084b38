//! Game engine logic and state management.
//!
//! This module combines the core geometry into a playable runner world:
//!
//! - [`GameSession`] - One play-through, stepped frame by frame until a crash
//! - [`Observation`] - What the runner senses about the nearest obstacle ahead
//! - [`WorldConfig`] - World constants (lookahead, speeds, score rate)
//! - [`WorldSeed`] - Seed for deterministic obstacle generation
//! - [`FrameClock`] - Turns host timestamps into frame deltas
//!
//! # Frame Order
//!
//! Every call to [`GameSession::step`] performs, in order:
//!
//! 1. Scroll obstacles, drop those off screen, spawn a new one when due
//! 2. Raise the speed scale
//! 3. Accrue score
//! 4. Sense the nearest obstacle and ask the caller whether to jump
//! 5. Move the runner
//! 6. Check for a collision; a collision ends the session
//!
//! # Example
//!
//! ```
//! use dinorun_engine::{FrameClock, GameSession, WorldSeed};
//!
//! let mut session = GameSession::with_seed(WorldSeed::from_u64(5));
//! let mut clock = FrameClock::new();
//! let mut time = 0.0;
//!
//! while session.state().is_running() {
//!     if let Some(delta) = clock.tick(time) {
//!         session.step(delta, |obs| obs.is_some_and(|o| o.distance < 80.0));
//!     }
//!     time += 1000.0 / 60.0;
//!     if time > 60_000.0 {
//!         break;
//!     }
//! }
//! ```

pub use self::{frame_clock::*, game_session::*, world_config::*, world_seed::*};

mod frame_clock;
mod game_session;
mod world_config;
mod world_seed;
