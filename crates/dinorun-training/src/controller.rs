//! Generation lifecycle: one trial per agent, then evolution.
//!
//! The [`EvolutionController`] owns the population and the run counters. The
//! host game loop plays one trial at a time with
//! [`EvolutionController::current_agent`] and reports the final score through
//! [`EvolutionController::on_trial_complete`]. Once every agent has played,
//! the controller evolves the population and starts the next generation.
//!
//! # State Machine
//!
//! ```text
//!            on_trial_complete (k + 1 < N)
//!          ┌──────────────────────────────┐
//!          ▼                              │
//! Trial k of generation g ────────────────┘
//!          │
//!          │ on_trial_complete (k + 1 == N)
//!          ▼
//!      evolve() ──▶ Trial 0 of generation g + 1
//! ```
//!
//! # Evolution Step
//!
//! 1. **Rank** - Stable sort by fitness, best first (ties keep their order)
//! 2. **Statistics** - Best, average and worst fitness are logged
//! 3. **Elitism** - The top `elite_count` agents are cloned unchanged
//! 4. **Breeding** - Two parents drawn uniformly (with replacement) from the
//!    top `ceil(survivor_ratio * N)` agents are crossed over; the child is
//!    mutated and appended until the population is full again
//!
//! # Example
//!
//! ```
//! use dinorun_training::controller::{EvolutionController, EvolutionParams, TrialOutcome};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let params = EvolutionParams {
//!     population_size: 4,
//!     ..EvolutionParams::default()
//! };
//! let mut controller = EvolutionController::new(params, Pcg32::seed_from_u64(1));
//!
//! for score in [40.0, 30.0, 20.0] {
//!     let outcome = controller.on_trial_complete(score);
//!     assert!(matches!(outcome, TrialOutcome::NextTrial { .. }));
//! }
//! let outcome = controller.on_trial_complete(10.0);
//! assert!(matches!(outcome, TrialOutcome::GenerationComplete(_)));
//! assert_eq!(controller.generation(), 2);
//! assert_eq!(controller.best_score(), 40.0);
//! ```

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    agent::{Agent, DEFAULT_MUTATION_RATE},
    stats::{FitnessStats, GenerationStats},
};

/// Evolution parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionParams {
    /// Number of agents per generation (must be positive)
    pub population_size: usize,
    /// Number of top agents cloned unchanged into the next generation
    pub elite_count: usize,
    /// Fraction of top agents eligible as crossover parents
    pub survivor_ratio: f32,
    /// Per-parameter mutation probability applied to every bred child
    pub mutation_rate: f32,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            elite_count: 2,
            survivor_ratio: 0.2,
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }
}

impl EvolutionParams {
    /// Size of the parent pool for a population of `population_size`.
    ///
    /// `ceil(survivor_ratio * population_size)`, kept within
    /// `1..=population_size`.
    ///
    /// ```
    /// # use dinorun_training::controller::EvolutionParams;
    /// let params = EvolutionParams::default();
    /// assert_eq!(params.survivor_count(50), 10);
    /// assert_eq!(params.survivor_count(4), 1);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn survivor_count(&self, population_size: usize) -> usize {
        let count = (self.survivor_ratio * population_size as f32).ceil() as usize;
        count.clamp(1, population_size.max(1))
    }

    fn assert_mutation_rate(&self) {
        assert!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "mutation rate must be within [0, 1], got {}",
            self.mutation_rate
        );
    }
}

/// What the host should do after a trial has been reported.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutcome {
    /// The generation continues with the agent at `index`.
    NextTrial { index: usize },
    /// The population has been evolved; the next trial is agent 0 of the new
    /// generation.
    GenerationComplete(GenerationStats),
}

/// Run counters for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub generation: usize,
    pub trials_completed: usize,
    pub population_size: usize,
    pub best_score: f32,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen: {} | Game: {}/{} | Best: {}",
            self.generation,
            self.trials_completed + 1,
            self.population_size,
            self.best_score.floor()
        )
    }
}

/// Owns the population and drives the generation lifecycle.
///
/// All randomness comes from the injected `rng`, so a seeded generator makes
/// a whole training run reproducible.
#[derive(Debug, Clone)]
pub struct EvolutionController<R> {
    params: EvolutionParams,
    population: Vec<Agent>,
    generation: usize,
    trials_completed: usize,
    best_score: f32,
    champion: Option<Agent>,
    rng: R,
}

impl<R> EvolutionController<R>
where
    R: Rng,
{
    /// Creates a controller with a freshly initialized random population.
    ///
    /// # Panics
    ///
    /// Panics if `params.population_size` is zero or `params.mutation_rate`
    /// lies outside `[0, 1]`.
    pub fn new(params: EvolutionParams, rng: R) -> Self {
        params.assert_mutation_rate();
        let mut this = Self {
            params,
            population: vec![],
            generation: 1,
            trials_completed: 0,
            best_score: 0.0,
            champion: None,
            rng,
        };
        this.initialize_population();
        this
    }

    /// Creates a controller over an existing population.
    ///
    /// The population size parameter is taken from `population`.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty or `params.mutation_rate` lies outside
    /// `[0, 1]`.
    pub fn with_population(mut params: EvolutionParams, population: Vec<Agent>, rng: R) -> Self {
        assert!(!population.is_empty(), "population must not be empty");
        params.assert_mutation_rate();
        params.population_size = population.len();
        Self {
            params,
            population,
            generation: 1,
            trials_completed: 0,
            best_score: 0.0,
            champion: None,
            rng,
        }
    }

    /// Replaces the population with `population_size` random agents and
    /// restarts the current generation from agent 0.
    ///
    /// # Panics
    ///
    /// Panics if the configured population size is zero.
    pub fn initialize_population(&mut self) {
        assert!(
            self.params.population_size > 0,
            "population size must be positive"
        );
        self.population = (0..self.params.population_size)
            .map(|_| Agent::random(&mut self.rng))
            .collect();
        self.trials_completed = 0;
    }

    #[must_use]
    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    #[must_use]
    pub fn population(&self) -> &[Agent] {
        &self.population
    }

    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Current generation number, starting at 1.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn trials_completed(&self) -> usize {
        self.trials_completed
    }

    /// Highest trial score seen over the whole run.
    #[must_use]
    pub fn best_score(&self) -> f32 {
        self.best_score
    }

    /// Snapshot of the agent that scored [`Self::best_score`].
    #[must_use]
    pub fn champion(&self) -> Option<&Agent> {
        self.champion.as_ref()
    }

    /// Index of the agent under trial.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.trials_completed
    }

    #[must_use]
    pub fn current_agent(&self) -> &Agent {
        &self.population[self.trials_completed]
    }

    /// Mutable access to the agent under trial, for live score updates.
    pub fn current_agent_mut(&mut self) -> &mut Agent {
        &mut self.population[self.trials_completed]
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            generation: self.generation,
            trials_completed: self.trials_completed,
            population_size: self.population.len(),
            best_score: self.best_score,
        }
    }

    /// Commits the final score of the current trial and selects the next
    /// agent, evolving the population when the generation is exhausted.
    pub fn on_trial_complete(&mut self, final_score: f32) -> TrialOutcome {
        let agent = &mut self.population[self.trials_completed];
        agent.record_score(final_score);
        if final_score > self.best_score {
            self.best_score = final_score;
            self.champion = Some(agent.clone());
        }
        self.trials_completed += 1;
        debug!(
            generation = self.generation,
            trial = self.trials_completed,
            score = final_score,
            "trial complete"
        );

        if self.trials_completed < self.population.len() {
            return TrialOutcome::NextTrial {
                index: self.trials_completed,
            };
        }

        let stats = self.evolve();
        self.generation += 1;
        self.trials_completed = 0;
        info!(
            "Generation {} started. Best score so far: {}",
            self.generation,
            self.best_score.floor()
        );
        TrialOutcome::GenerationComplete(stats)
    }

    /// Ranks the population and replaces it with the next generation.
    ///
    /// Returns the fitness statistics of the ranked (outgoing) population.
    /// Trial counters are left untouched.
    pub fn evolve(&mut self) -> GenerationStats {
        // stable: agents with equal fitness keep their previous order
        self.population
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

        let stats = GenerationStats {
            generation: self.generation,
            fitness: FitnessStats::new(self.population.iter().map(Agent::fitness))
                .expect("population is never empty"),
        };
        info!("{stats}");

        let n = self.population.len();
        let survivors = &self.population[..self.params.survivor_count(n)];
        let mut next = Vec::with_capacity(n);

        // elite selection
        next.extend(
            self.population[..self.params.elite_count.min(n)]
                .iter()
                .cloned(),
        );

        // breed the rest from the survivor pool
        while next.len() < n {
            let p1 = &survivors[self.rng.random_range(0..survivors.len())];
            let p2 = &survivors[self.rng.random_range(0..survivors.len())];
            let mut child = Agent::crossover(p1, p2, &mut self.rng);
            child.mutate(self.params.mutation_rate, &mut self.rng);
            next.push(child);
        }

        self.population = next;
        stats
    }
}
