use std::path::PathBuf;

use dinorun_engine::{GameSession, WorldSeed};
use dinorun_training::stats::FitnessStats;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{command::TrialArg, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Path to the model file (JSON format)
    model_path: PathBuf,
    /// Number of games to play
    #[arg(long, default_value_t = 5)]
    games: usize,
    /// Seed for the played worlds (random if omitted)
    #[arg(long, conflicts_with = "replay")]
    seed: Option<u64>,
    /// Replay the world of the model's best training trial in every game
    ///
    /// Scores match training only with the same frame length and time limit.
    #[arg(long)]
    pub(super) replay: bool,
    #[clap(flatten)]
    pub(super) trial: TrialArg,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        model_path,
        games,
        seed,
        replay,
        trial,
    } = arg;

    let model = util::read_agent_model_file(model_path)?;
    let mut agent = model.to_agent();
    let runner = trial.runner()?;
    let mut world_rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(*seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    eprintln!("Model: {} (trained {})", model.name, model.trained_at);
    if *replay {
        eprintln!(
            "Replaying training world {} (recorded score {:.1})",
            serde_json::to_string(&model.world_seed)?,
            model.agent.fitness()
        );
    }
    let mut scores = Vec::with_capacity(*games);
    for game in 0..*games {
        let world_seed: WorldSeed = if *replay {
            model.world_seed
        } else {
            world_rng.random()
        };
        let mut session = GameSession::with_seed(world_seed);
        let score = runner.run(&mut agent, &mut session);
        eprintln!(
            "  Game {game:2}: score {:8.1} ({:.1}s{})",
            score,
            session.elapsed_ms() / 1000.0,
            if session.state().is_crashed() {
                ""
            } else {
                ", time limit"
            }
        );
        scores.push(score);
    }

    if let Some(stats) = FitnessStats::new(scores) {
        eprintln!("Scores:");
        eprintln!("  Min:    {:.1}", stats.worst);
        eprintln!("  Max:    {:.1}", stats.best);
        eprintln!("  Mean:   {:.1}", stats.mean);
        eprintln!("  Median: {:.1}", stats.median);
    }

    Ok(())
}
