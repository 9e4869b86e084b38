//! The evolving individual: a two-input linear unit with a sigmoid squash.
//!
//! An [`Agent`] turns what the runner senses about the nearest obstacle into a
//! jump probability. It carries the genetic operators used by
//! [`EvolutionController`](crate::controller::EvolutionController):
//!
//! - [`Agent::random`] - initial population
//! - [`Clone`] - elitism (parameters and fitness copied)
//! - [`Agent::crossover`] - uniform crossover, one fair coin per parameter
//! - [`Agent::mutate`] - bounded uniform perturbation, then clamping
//!
//! # Input Normalization
//!
//! | input | normalized | range |
//! |---|---|---|
//! | distance | `1 - distance / 400` | clamped to `[0, 1]`, closer is larger |
//! | height | `height / 135` | unclamped |
//! | speed | ignored | - |
//!
//! The speed scale is part of the signature so callers can pass everything
//! they sense, but it does not influence the prediction.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of weighted inputs (normalized distance, normalized height).
pub const FEATURE_COUNT: usize = 2;

/// Distance at which the normalized distance reaches zero.
pub const DISTANCE_SCALE: f32 = 400.0;
/// Height that normalizes to one (the tallest obstacle).
pub const HEIGHT_SCALE: f32 = 135.0;

/// Mutation probability used when breeding a new generation.
pub const DEFAULT_MUTATION_RATE: f32 = 0.25;
/// Largest perturbation a single mutation applies.
pub const MUTATION_STEP: f32 = 0.8;
/// Weights and bias are kept within `[-PARAM_LIMIT, PARAM_LIMIT]`.
pub const PARAM_LIMIT: f32 = 5.0;

/// A single agent: its decision parameters and the outcome of its latest trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    weights: [f32; FEATURE_COUNT],
    bias: f32,
    fitness: f32,
    score: f32,
}

impl Agent {
    /// Creates an unevaluated agent with the given parameters.
    #[must_use]
    pub const fn new(weights: [f32; FEATURE_COUNT], bias: f32) -> Self {
        Self {
            weights,
            bias,
            fitness: 0.0,
            score: 0.0,
        }
    }

    /// Like [`Self::new`], but clamps every parameter to
    /// `[-PARAM_LIMIT, PARAM_LIMIT]`.
    ///
    /// Use this for parameters from outside the genetic operators, such as a
    /// model file.
    #[must_use]
    pub fn clamped(weights: [f32; FEATURE_COUNT], bias: f32) -> Self {
        Self::new(
            weights.map(|w| w.clamp(-PARAM_LIMIT, PARAM_LIMIT)),
            bias.clamp(-PARAM_LIMIT, PARAM_LIMIT),
        )
    }

    /// Creates an agent with random parameters.
    ///
    /// The distance weight is drawn from `[-2, 2)`, the height weight and the
    /// bias from `[-1, 1)`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let weights = [rng.random_range(-2.0..2.0), rng.random_range(-1.0..1.0)];
        Self::new(weights, rng.random_range(-1.0..1.0))
    }

    #[must_use]
    pub fn weights(&self) -> &[f32; FEATURE_COUNT] {
        &self.weights
    }

    #[must_use]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Score of the most recent trial, or zero before the first one.
    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    /// Live score of the running trial.
    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Records a trial score as both the live score and the fitness.
    pub fn record_score(&mut self, score: f32) {
        self.score = score;
        self.fitness = score;
    }

    /// Returns the jump probability for the sensed obstacle, in `(0, 1)`.
    ///
    /// `_speed` is accepted but has no effect.
    ///
    /// # Example
    ///
    /// ```
    /// use dinorun_training::agent::Agent;
    ///
    /// let agent = Agent::new([4.0, 0.0], -2.0);
    /// assert!(agent.predict(50.0, 70.0, 1.0) > 0.55);
    /// assert!(agent.predict(450.0, 70.0, 1.0) < 0.55);
    /// ```
    #[must_use]
    pub fn predict(&self, distance: f32, height: f32, _speed: f32) -> f32 {
        let inputs = [normalize_distance(distance), height / HEIGHT_SCALE];
        let z = inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f32>()
            + self.bias;
        sigmoid(z)
    }

    /// Perturbs each weight and the bias independently with probability `rate`.
    ///
    /// A perturbation adds a uniform value from `[-0.8, 0.8]` and clamps the
    /// result to `[-5, 5]`.
    pub fn mutate<R>(&mut self, rate: f32, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for w in &mut self.weights {
            mutate_param(w, rate, rng);
        }
        mutate_param(&mut self.bias, rate, rng);
    }

    /// Uniform crossover: each weight and the bias come from `a` or `b` with
    /// equal probability.
    ///
    /// The child starts unevaluated.
    pub fn crossover<R>(a: &Agent, b: &Agent, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let weights = std::array::from_fn(|i| pick(a.weights[i], b.weights[i], rng));
        let bias = pick(a.bias, b.bias, rng);
        Self::new(weights, bias)
    }
}

/// Maps a raw distance to `[0, 1]`: `1` at or behind the runner, `0` at 400
/// units and beyond.
#[must_use]
pub fn normalize_distance(distance: f32) -> f32 {
    (1.0 - distance / DISTANCE_SCALE).clamp(0.0, 1.0)
}

fn sigmoid(z: f32) -> f32 {
    // exp() saturates to 0 or inf, both of which give a clean 0 or 1 here
    1.0 / (1.0 + (-z).exp())
}

fn mutate_param<R>(value: &mut f32, rate: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if rng.random_bool(rate.into()) {
        let delta = rng.random_range(-MUTATION_STEP..=MUTATION_STEP);
        *value = (*value + delta).clamp(-PARAM_LIMIT, PARAM_LIMIT);
    }
}

fn pick<R>(a: f32, b: f32, rng: &mut R) -> f32
where
    R: Rng + ?Sized,
{
    if rng.random_bool(0.5) { a } else { b }
}
