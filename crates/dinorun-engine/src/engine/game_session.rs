use arrayvec::ArrayVec;
use rand::Rng as _;
use rand_pcg::Pcg32;

use crate::{
    WorldConfigError,
    core::{
        obstacle::Obstacle,
        runner::{RUNNER_LEFT, RUNNER_WIDTH, Runner},
    },
};

use super::{
    world_config::{WORLD_WIDTH, WorldConfig},
    world_seed::WorldSeed,
};

/// Upper bound on obstacles alive at once.
///
/// Spawn spacing in world units does not depend on the speed scale, so at most
/// five obstacles fit on screen with the default configuration.
const MAX_OBSTACLES: usize = 8;

/// What the runner senses about the nearest obstacle ahead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Gap between the runner's right edge and the obstacle's left edge.
    pub distance: f32,
    /// Obstacle height in world units.
    pub height: f32,
    /// Current speed multiplier of the world.
    pub speed_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Running,
    Crashed,
}

/// A single play-through of the runner world.
///
/// The session is advanced one frame at a time with [`GameSession::step`].
/// Each frame scrolls obstacles, speeds the world up, accrues score, asks the
/// caller for a jump decision based on the current [`Observation`], moves the
/// runner and finally checks for a collision, which ends the session.
///
/// # Example
///
/// ```
/// use dinorun_engine::{GameSession, WorldSeed};
///
/// let mut session = GameSession::with_seed(WorldSeed::from_u64(1));
/// while session.state().is_running() {
///     // never jump
///     session.step(16.0, |_| false);
/// }
/// assert!(session.score() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    config: WorldConfig,
    seed: WorldSeed,
    rng: Pcg32,
    runner: Runner,
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    next_spawn_ms: f32,
    speed_scale: f32,
    score: f32,
    elapsed_ms: f32,
    state: SessionState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with the default configuration and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic world.
    #[must_use]
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self::build(WorldConfig::default(), seed)
    }

    /// Creates a session with a custom configuration.
    pub fn with_config(config: WorldConfig, seed: WorldSeed) -> Result<Self, WorldConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: WorldConfig, seed: WorldSeed) -> Self {
        Self {
            next_spawn_ms: config.spawn_interval_min,
            config,
            seed,
            rng: seed.rng(),
            runner: Runner::new(),
            obstacles: ArrayVec::new(),
            speed_scale: 1.0,
            score: 0.0,
            elapsed_ms: 0.0,
            state: SessionState::Running,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> WorldSeed {
        self.seed
    }

    #[must_use]
    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[must_use]
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Senses the nearest obstacle strictly ahead of the runner.
    ///
    /// Returns `None` when no obstacle lies within the lookahead window.
    #[must_use]
    pub fn observe(&self) -> Option<Observation> {
        let runner_right = RUNNER_LEFT + RUNNER_WIDTH;
        let (distance, height) = self
            .obstacles
            .iter()
            .map(|o| (o.rect().left - runner_right, o.height()))
            .filter(|(distance, _)| *distance > 0.0)
            .min_by(|a, b| a.0.total_cmp(&b.0))?;
        (distance < self.config.lookahead).then_some(Observation {
            distance,
            height,
            speed_scale: self.speed_scale,
        })
    }

    /// Advances the world by one frame of `delta_ms` milliseconds.
    ///
    /// `decide` receives the observation made after obstacles moved and
    /// returns whether the runner should jump. Stepping a crashed session does
    /// nothing and does not call `decide`.
    pub fn step<F>(&mut self, delta_ms: f32, decide: F) -> SessionState
    where
        F: FnOnce(Option<Observation>) -> bool,
    {
        if self.state.is_crashed() {
            return self.state;
        }

        let scrolled = self.update_obstacles(delta_ms);
        self.speed_scale += delta_ms * self.config.speed_scale_increase;
        self.score += delta_ms * self.config.score_per_ms;
        self.elapsed_ms += delta_ms;

        let jump = decide(self.observe());
        self.runner.update(delta_ms, jump);

        if self.is_colliding(scrolled) {
            self.state = SessionState::Crashed;
        }
        self.obstacles.retain(|o| !o.is_off_screen());
        self.state
    }

    /// Scrolls and spawns obstacles, returning the distance they moved.
    fn update_obstacles(&mut self, delta_ms: f32) -> f32 {
        let distance = delta_ms * self.config.obstacle_speed * self.speed_scale;
        for obstacle in &mut self.obstacles {
            obstacle.scroll(distance);
        }

        if self.next_spawn_ms <= 0.0 {
            if !self.obstacles.is_full() {
                self.obstacles
                    .push(Obstacle::new(self.rng.random(), WORLD_WIDTH));
            }
            let interval = self
                .rng
                .random_range(self.config.spawn_interval_min..self.config.spawn_interval_max);
            self.next_spawn_ms = interval / self.speed_scale;
        }
        self.next_spawn_ms -= delta_ms;
        distance
    }

    /// Tests the runner against the whole span each obstacle swept this frame,
    /// so fast obstacles cannot jump over the runner between two frames.
    fn is_colliding(&self, scrolled: f32) -> bool {
        let runner = self.runner.rect();
        self.obstacles.iter().any(|o| {
            o.swept_rect(scrolled)
                .collides_with(&runner, self.config.collision_padding)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::obstacle::ObstacleKind;

    use super::*;

    const FRAME_MS: f32 = 16.0;

    fn session_with_obstacle(left: f32) -> GameSession {
        let mut session = GameSession::with_seed(WorldSeed::from_u64(0));
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Large, left));
        session
    }

    #[test]
    fn test_observe_within_lookahead() {
        let session = session_with_obstacle(600.0);
        let obs = session.observe().unwrap();
        assert_eq!(obs.distance, 600.0 - (RUNNER_LEFT + RUNNER_WIDTH));
        assert_eq!(obs.height, 100.0);
        assert_eq!(obs.speed_scale, 1.0);
    }

    #[test]
    fn test_observe_ignores_far_obstacles() {
        // 700 - 140 = 560 units ahead
        let session = session_with_obstacle(700.0);
        assert_eq!(session.observe(), None);
    }

    #[test]
    fn test_observe_ignores_obstacles_behind() {
        let mut session = session_with_obstacle(20.0);
        assert_eq!(session.observe(), None);
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Tall, 400.0));
        let obs = session.observe().unwrap();
        assert_eq!(obs.distance, 260.0);
        assert_eq!(obs.height, 135.0);
    }

    #[test]
    fn test_observe_picks_nearest() {
        let mut session = session_with_obstacle(500.0);
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Small, 300.0));
        assert_eq!(session.observe().unwrap().distance, 160.0);
    }

    #[test]
    fn test_overlap_crashes_session() {
        let mut session = session_with_obstacle(RUNNER_LEFT);
        assert_eq!(session.step(FRAME_MS, |_| false), SessionState::Crashed);
        let score = session.score();

        // crashed sessions are frozen
        let mut called = false;
        session.step(FRAME_MS, |_| {
            called = true;
            true
        });
        assert!(!called);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn test_fast_obstacle_cannot_pass_through_runner() {
        // at these speeds an obstacle moves further per frame than the
        // padded overlap window is wide
        for speed_scale in [11.5, 13.0, 15.0, 19.0, 40.0] {
            let mut session = GameSession::with_seed(WorldSeed::from_u64(5));
            session
                .obstacles
                .push(Obstacle::new(ObstacleKind::Small, 400.0));
            session.speed_scale = speed_scale;
            while session.state().is_running() && session.elapsed_ms() < 1000.0 {
                session.step(FRAME_MS, |_| false);
            }
            assert!(
                session.state().is_crashed(),
                "passed through at speed {speed_scale}"
            );
            assert!(session.elapsed_ms() < 500.0);
        }
    }

    #[test]
    fn test_obstacle_behind_runner_is_harmless() {
        // already past the runner's padded box before moving
        let mut session = GameSession::with_seed(WorldSeed::from_u64(5));
        session
            .obstacles
            .push(Obstacle::new(ObstacleKind::Small, 40.0));
        assert_eq!(session.step(FRAME_MS, |_| false), SessionState::Running);
    }

    #[test]
    fn test_score_and_speed_accrue_with_time() {
        let mut session = GameSession::with_seed(WorldSeed::from_u64(3));
        session.step(100.0, |_| false);
        assert!((session.score() - 1.0).abs() < 1e-6);
        assert!((session.speed_scale() - 1.003).abs() < 1e-6);
        assert_eq!(session.elapsed_ms(), 100.0);
    }

    #[test]
    fn test_never_jumping_crashes_into_first_obstacle() {
        let mut session = GameSession::with_seed(WorldSeed::from_u64(42));
        while session.state().is_running() {
            session.step(FRAME_MS, |_| false);
            assert!(session.elapsed_ms() < 5000.0);
        }
    }

    #[test]
    fn test_same_seed_same_play_through() {
        let play = |seed| {
            let mut session = GameSession::with_seed(seed);
            let mut frames = 0;
            while session.state().is_running() && frames < 10_000 {
                session.step(FRAME_MS, |obs| obs.is_some_and(|o| o.distance < 90.0));
                frames += 1;
            }
            (frames, session.score(), session.obstacles().to_vec())
        };
        let seed = WorldSeed::from_u64(9);
        assert_eq!(play(seed), play(seed));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = WorldConfig {
            obstacle_speed: 0.0,
            ..WorldConfig::default()
        };
        assert!(GameSession::with_config(config, WorldSeed::from_u64(0)).is_err());
    }
}
