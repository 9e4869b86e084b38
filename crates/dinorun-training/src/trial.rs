//! Plays one trial of the runner world with one agent.

use dinorun_engine::{FrameClock, GameSession, Observation};

use crate::agent::Agent;

/// Jump when the agent's prediction exceeds this probability.
pub const JUMP_THRESHOLD: f32 = 0.55;

/// Default frame length: 60 frames per second.
pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;

/// Turns an agent's continuous prediction into a jump decision.
///
/// Without a sensed obstacle the runner never jumps.
///
/// # Example
///
/// ```
/// use dinorun_engine::Observation;
/// use dinorun_training::{agent::Agent, trial::should_jump};
///
/// let agent = Agent::new([4.0, 0.0], -2.0);
/// let near = Observation { distance: 40.0, height: 70.0, speed_scale: 1.0 };
/// assert!(should_jump(&agent, Some(near)));
/// assert!(!should_jump(&agent, None));
/// ```
#[must_use]
pub fn should_jump(agent: &Agent, observation: Option<Observation>) -> bool {
    observation
        .is_some_and(|o| agent.predict(o.distance, o.height, o.speed_scale) > JUMP_THRESHOLD)
}

/// Drives a [`GameSession`] with an agent's decisions until the runner
/// crashes.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    /// Simulated time between two frames, in milliseconds.
    pub frame_ms: f64,
    /// Ends the trial once this much simulated time has passed.
    ///
    /// A strong agent may otherwise keep running indefinitely.
    pub time_limit_ms: Option<f32>,
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            time_limit_ms: None,
        }
    }
}

impl TrialRunner {
    /// Plays `session` to its end and returns the final score.
    ///
    /// The agent's score and fitness mirror the session score every frame, so
    /// both hold the final score once the trial ends.
    pub fn run(&self, agent: &mut Agent, session: &mut GameSession) -> f32 {
        let mut clock = FrameClock::new();
        let mut time = 0.0;

        while session.state().is_running() {
            if let Some(delta) = clock.tick(time) {
                session.step(delta, |obs| should_jump(agent, obs));
                agent.record_score(session.score());
            }
            time += self.frame_ms;

            if self
                .time_limit_ms
                .is_some_and(|limit| session.elapsed_ms() >= limit)
            {
                break;
            }
        }
        session.score()
    }
}

#[cfg(test)]
mod tests {
    use dinorun_engine::WorldSeed;

    use super::*;

    fn observation(distance: f32) -> Observation {
        Observation {
            distance,
            height: 100.0,
            speed_scale: 1.0,
        }
    }

    #[test]
    fn test_jump_threshold() {
        // z = 0 gives exactly 0.5, below the threshold
        let agent = Agent::new([0.0, 0.0], 0.0);
        assert!(!should_jump(&agent, Some(observation(10.0))));

        // z = ln(0.55 / 0.45) + margin
        let agent = Agent::new([0.0, 0.0], 0.25);
        assert!(should_jump(&agent, Some(observation(10.0))));
    }

    #[test]
    fn test_passive_agent_crashes() {
        let mut agent = Agent::new([-5.0, -5.0], -5.0);
        let mut session = GameSession::with_seed(WorldSeed::from_u64(11));
        let score = TrialRunner::default().run(&mut agent, &mut session);
        assert!(session.state().is_crashed());
        assert!(score > 0.0);
        assert_eq!(agent.score(), score);
        assert_eq!(agent.fitness(), score);
    }

    #[test]
    fn test_time_limit_stops_trial() {
        let mut agent = Agent::new([5.0, 0.0], -3.0);
        let mut session = GameSession::with_seed(WorldSeed::from_u64(11));
        let runner = TrialRunner {
            time_limit_ms: Some(200.0),
            ..TrialRunner::default()
        };
        let score = runner.run(&mut agent, &mut session);
        assert!(session.elapsed_ms() >= 200.0);
        assert!(session.elapsed_ms() < 200.0 + 17.0);
        assert!((score - session.elapsed_ms() * 0.01).abs() < 1e-3);
    }

    #[test]
    fn test_same_seed_same_score() {
        let play = || {
            let mut agent = Agent::new([3.0, 1.0], -1.5);
            let mut session = GameSession::with_seed(WorldSeed::from_u64(21));
            let runner = TrialRunner {
                time_limit_ms: Some(120_000.0),
                ..TrialRunner::default()
            };
            runner.run(&mut agent, &mut session)
        };
        assert_eq!(play(), play());
    }
}
