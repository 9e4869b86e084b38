//! Core world geometry: bounding boxes, obstacles and the runner.
//!
//! These types hold no randomness and know nothing about time beyond the
//! `delta_ms` they are asked to advance by. [`crate::engine`] combines them
//! into a playable session.

pub mod obstacle;
pub mod rect;
pub mod runner;
