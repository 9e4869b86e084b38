//! Evolutionary training of jump-timing agents.
//!
//! This crate teaches a population of tiny decision models when to jump over
//! the obstacles of the runner world in `dinorun-engine`. No gradients are
//! involved: agents are ranked by the score they reach and the best ones are
//! bred into the next generation.
//!
//! # How Training Works
//!
//! 1. **Population** - Create N agents with random weights
//! 2. **Trial** - Each agent plays one game until it crashes
//! 3. **Fitness** - The final game score is the agent's fitness
//! 4. **Selection** - The top two agents survive unchanged; the top fifth
//!    become the parent pool
//! 5. **Reproduction** - Children are bred by uniform crossover and mutation
//! 6. **Repeat** - The new population plays the next generation
//!
//! # Architecture
//!
//! ```text
//! GameSession (dinorun-engine)
//!     ↓ senses
//! Observation (distance, height, speed)
//!     ↓ fed to
//! Agent::predict  → probability → should_jump (> 0.55)
//!     ↓ trial ends with
//! Final score
//!     ↓ reported to
//! EvolutionController → evolve() → next generation
//! ```
//!
//! # Modules
//!
//! - [`agent`] - The decision model and its genetic operators
//! - [`controller`] - Population ownership and the generation state machine
//! - [`stats`] - Fitness statistics logged at each generation boundary
//! - [`trial`] - Playing one game with one agent
//!
//! # Example
//!
//! ```
//! use dinorun_engine::{GameSession, WorldSeed};
//! use dinorun_training::{
//!     controller::{EvolutionController, EvolutionParams},
//!     trial::TrialRunner,
//! };
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let params = EvolutionParams {
//!     population_size: 6,
//!     ..EvolutionParams::default()
//! };
//! let mut controller = EvolutionController::new(params, Pcg32::seed_from_u64(0));
//! let runner = TrialRunner {
//!     time_limit_ms: Some(30_000.0),
//!     ..TrialRunner::default()
//! };
//!
//! let mut trial = 0;
//! while controller.generation() <= 2 {
//!     let mut session = GameSession::with_seed(WorldSeed::from_u64(trial));
//!     let score = runner.run(controller.current_agent_mut(), &mut session);
//!     controller.on_trial_complete(score);
//!     trial += 1;
//! }
//! assert_eq!(trial, 12);
//! ```
//!
//! # Current Limitations
//!
//! - **Linear model**: A single weighted sum cannot express "jump only within a
//!   distance band"; the bias and the distance weight have to approximate it
//! - **Speed blind**: The world's speed scale is sensed but unused, so timing
//!   degrades as the game accelerates
//! - **Single trial per agent**: Fitness comes from one game, so a lucky
//!   obstacle sequence can promote a weak agent

pub mod agent;
pub mod controller;
pub mod stats;
pub mod trial;
