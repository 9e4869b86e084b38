use chrono::{DateTime, Utc};
use dinorun_engine::WorldSeed;
use dinorun_training::agent::Agent;
use serde::{Deserialize, Serialize};

/// A trained agent as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AgentModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    /// Seed of the training run that produced the agent.
    pub seed: u64,
    /// Number of generations the run trained for.
    pub generations: usize,
    /// Parameters and the score of the agent's best trial.
    pub agent: Agent,
    /// World the best trial was played in, for replaying it.
    pub world_seed: WorldSeed,
}

impl AgentModel {
    /// Returns an unevaluated copy of the stored agent, ready for a new trial.
    ///
    /// Parameters edited out of range in the file are clamped back.
    pub fn to_agent(&self) -> Agent {
        Agent::clamped(*self.agent.weights(), self.agent.bias())
    }
}
