//! Headless runner world.
//!
//! A runner stands at a fixed position while obstacles scroll towards it at an
//! ever-increasing speed. The only action is to jump. The world is stepped
//! frame by frame by its host and reports what the runner can sense, so the
//! same session can be driven by a trained agent or by a test.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum WorldConfigError {
    #[display("obstacle speed must be positive, got {_0}")]
    NonPositiveSpeed(#[error(not(source))] f32),
    #[display("invalid spawn interval: {min}..{max}")]
    InvalidSpawnInterval { min: f32, max: f32 },
    #[display("lookahead must be positive, got {_0}")]
    NonPositiveLookahead(#[error(not(source))] f32),
}
