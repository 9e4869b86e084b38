/// Converts externally supplied frame timestamps into frame deltas.
///
/// The host drives the simulation by handing over a monotonically increasing
/// timestamp (in milliseconds) once per frame. The first timestamp only primes
/// the clock, so no simulation step happens on that frame.
///
/// # Example
///
/// ```
/// use dinorun_engine::FrameClock;
///
/// let mut clock = FrameClock::new();
/// assert_eq!(clock.tick(1000.0), None);
/// assert_eq!(clock.tick(1016.0), Some(16.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_time: None }
    }

    /// Forgets the previous timestamp; the next tick primes the clock again.
    pub fn reset(&mut self) {
        self.last_time = None;
    }

    /// Records `time` and returns the elapsed milliseconds since the previous
    /// tick.
    ///
    /// Returns `None` on the priming tick. A timestamp earlier than the
    /// previous one yields a zero delta.
    #[expect(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, time: f64) -> Option<f32> {
        let last = self.last_time.replace(time)?;
        Some((time - last).max(0.0) as f32)
    }
}
