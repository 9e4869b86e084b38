use super::rect::Rect;

/// Horizontal position of the runner's left edge.
pub const RUNNER_LEFT: f32 = 80.0;
pub const RUNNER_WIDTH: f32 = 60.0;
pub const RUNNER_HEIGHT: f32 = 70.0;

/// Upward velocity at take-off, in units per millisecond.
const JUMP_VELOCITY: f32 = 1.0;
/// Downward acceleration, in units per millisecond squared.
const GRAVITY: f32 = 0.003;

/// The player character.
///
/// The runner stays at a fixed horizontal position; only its height above the
/// ground changes. A jump can only start while standing on the ground.
///
/// # Example
///
/// ```
/// use dinorun_engine::core::runner::Runner;
///
/// let mut runner = Runner::new();
/// runner.update(16.0, true);
/// assert!(!runner.is_grounded());
///
/// // a full jump lands again
/// for _ in 0..100 {
///     runner.update(16.0, false);
/// }
/// assert!(runner.is_grounded());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    y: f32,
    velocity: f32,
    grounded: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            y: 0.0,
            velocity: 0.0,
            grounded: true,
        }
    }

    /// Height of the runner's feet above the ground.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(RUNNER_LEFT, self.y, RUNNER_WIDTH, RUNNER_HEIGHT)
    }

    /// Advances the runner by `delta_ms`, starting a jump first if requested
    /// and possible.
    pub fn update(&mut self, delta_ms: f32, jump: bool) {
        if jump && self.grounded {
            self.velocity = JUMP_VELOCITY;
            self.grounded = false;
        }
        if self.grounded {
            return;
        }

        self.y += self.velocity * delta_ms;
        self.velocity -= GRAVITY * delta_ms;
        if self.y <= 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
            self.grounded = true;
        }
    }
}
