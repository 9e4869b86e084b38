use std::path::PathBuf;

use chrono::Utc;
use dinorun_engine::{GameSession, WorldSeed};
use dinorun_training::{
    controller::{EvolutionController, EvolutionParams, TrialOutcome},
    stats::GenerationStats,
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::{command::TrialArg, model::agent_model::AgentModel, util};

const POPULATION_SIZE: usize = 50;
const MAX_GENERATIONS: usize = 50;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of agents per generation
    #[arg(long, default_value_t = POPULATION_SIZE)]
    population: usize,
    /// Number of generations to train
    #[arg(long, default_value_t = MAX_GENERATIONS)]
    generations: usize,
    /// Seed for a reproducible run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Name stored in the saved model
    #[arg(long, default_value = "champion")]
    name: String,
    #[clap(flatten)]
    pub(super) trial: TrialArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for TrainArg {
    fn default() -> Self {
        Self {
            population: POPULATION_SIZE,
            generations: MAX_GENERATIONS,
            seed: None,
            name: "champion".to_owned(),
            trial: TrialArg::default(),
            output: None,
        }
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        population,
        generations,
        seed,
        name,
        trial,
        output,
    } = arg;
    anyhow::ensure!(*population > 0, "population must be positive");
    anyhow::ensure!(*generations > 0, "at least one generation is required");

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, population, generations, "training started");

    let params = EvolutionParams {
        population_size: *population,
        ..EvolutionParams::default()
    };
    let mut controller = EvolutionController::new(params, Pcg32::seed_from_u64(seed));
    let mut world_rng = Pcg32::seed_from_u64(seed.wrapping_add(1));
    let runner = trial.runner()?;

    let mut history: Vec<GenerationStats> = Vec::with_capacity(*generations);
    let mut champion_world = None;
    while controller.generation() <= *generations {
        let world_seed: WorldSeed = world_rng.random();
        let mut session = GameSession::with_seed(world_seed);
        let score = runner.run(controller.current_agent_mut(), &mut session);
        debug!("{} | Score: {}", controller.progress(), score.floor());
        if score > controller.best_score() {
            champion_world = Some(world_seed);
        }

        if let TrialOutcome::GenerationComplete(stats) = controller.on_trial_complete(score) {
            history.push(stats);
        }
    }

    eprintln!("Generation Summary:");
    for stats in &history {
        eprintln!(
            "  {:3}: best {:8.1}  mean {:8.1}  worst {:8.1}  stddev {:7.1}",
            stats.generation,
            stats.fitness.best,
            stats.fitness.mean,
            stats.fitness.worst,
            stats.fitness.std_dev
        );
    }
    eprintln!("Training completed.");

    let (Some(champion), Some(world_seed)) = (controller.champion(), champion_world) else {
        anyhow::bail!("no agent scored during training");
    };
    let model = AgentModel {
        name: name.clone(),
        trained_at: Utc::now(),
        seed,
        generations: *generations,
        agent: champion.clone(),
        world_seed,
    };
    util::save_json(&model, output.as_deref())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = &output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Best score: {:.3}", model.agent.fitness());
    eprintln!(
        "  Weights: {:.3?}, bias {:.3}",
        model.agent.weights(),
        model.agent.bias()
    );

    Ok(())
}
