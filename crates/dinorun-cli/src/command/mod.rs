use clap::{Parser, Subcommand};
use dinorun_training::trial::{DEFAULT_FRAME_MS, TrialRunner};

use self::{auto_play::AutoPlayArg, train::TrainArg};

mod auto_play;
mod train;

/// Simulated time limit of a single game, in milliseconds.
const TRIAL_TIME_LIMIT_MS: f32 = 600_000.0;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train agents with the genetic algorithm
    Train(#[clap(flatten)] TrainArg),
    /// Let a trained agent play
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Train(TrainArg::default())) {
        Mode::Train(arg) => train::run(&arg)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
    }
    Ok(())
}

/// Frame timing shared by every command that plays games.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrialArg {
    /// Simulated milliseconds per frame
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    frame_ms: f64,
    /// Simulated time after which a game is stopped (0 disables the limit)
    #[arg(long, default_value_t = TRIAL_TIME_LIMIT_MS)]
    time_limit_ms: f32,
}

impl Default for TrialArg {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            time_limit_ms: TRIAL_TIME_LIMIT_MS,
        }
    }
}

impl TrialArg {
    pub(crate) fn runner(&self) -> anyhow::Result<TrialRunner> {
        anyhow::ensure!(
            self.frame_ms > 0.0,
            "frame length must be positive, got {}",
            self.frame_ms
        );
        Ok(TrialRunner {
            frame_ms: self.frame_ms,
            time_limit_ms: (self.time_limit_ms > 0.0).then_some(self.time_limit_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_clap() {
        let args = CommandArgs::parse_from(["dinorun", "train"]);
        let Some(Mode::Train(train)) = args.mode else {
            panic!("expected train mode");
        };
        assert_eq!(format!("{train:?}"), format!("{:?}", TrainArg::default()));
    }

    #[test]
    fn test_zero_time_limit_disables_limit() {
        let args = CommandArgs::parse_from([
            "dinorun",
            "auto-play",
            "m.json",
            "--time-limit-ms",
            "0",
        ]);
        let Some(Mode::AutoPlay(auto)) = args.mode else {
            panic!("expected auto-play mode");
        };
        assert_eq!(auto.trial.runner().unwrap().time_limit_ms, None);
    }

    #[test]
    fn test_replay_excludes_seed() {
        let args = CommandArgs::parse_from(["dinorun", "auto-play", "m.json", "--replay"]);
        let Some(Mode::AutoPlay(auto)) = args.mode else {
            panic!("expected auto-play mode");
        };
        assert!(auto.replay);

        let conflict = CommandArgs::try_parse_from([
            "dinorun",
            "auto-play",
            "m.json",
            "--replay",
            "--seed",
            "3",
        ]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_rejects_zero_frame_length() {
        let trial = TrialArg {
            frame_ms: 0.0,
            ..TrialArg::default()
        };
        assert!(trial.runner().is_err());
    }
}
