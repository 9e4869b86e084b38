use crate::WorldConfigError;

pub const WORLD_WIDTH: f32 = 800.0;

/// Tunable constants of the runner world.
///
/// The defaults reproduce the browser game the trainer was built around.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Obstacles farther ahead than this are not reported by sensing.
    pub lookahead: f32,
    /// Shrinks both bounding boxes during collision checks.
    pub collision_padding: f32,
    /// Score gained per elapsed millisecond.
    pub score_per_ms: f32,
    /// Growth of the speed scale per elapsed millisecond.
    pub speed_scale_increase: f32,
    /// Obstacle scroll speed at speed scale 1, in units per millisecond.
    pub obstacle_speed: f32,
    /// Lower bound of the spawn interval at speed scale 1, in milliseconds.
    pub spawn_interval_min: f32,
    /// Upper bound (exclusive) of the spawn interval at speed scale 1.
    pub spawn_interval_max: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            lookahead: 500.0,
            collision_padding: 10.0,
            score_per_ms: 0.01,
            speed_scale_increase: 0.000_03,
            obstacle_speed: 0.4,
            spawn_interval_min: 500.0,
            spawn_interval_max: 2000.0,
        }
    }
}

impl WorldConfig {
    /// Checks the values a session relies on.
    pub fn validate(&self) -> Result<(), WorldConfigError> {
        if self.obstacle_speed.is_nan() || self.obstacle_speed <= 0.0 {
            return Err(WorldConfigError::NonPositiveSpeed(self.obstacle_speed));
        }
        let interval_ok =
            self.spawn_interval_min > 0.0 && self.spawn_interval_min < self.spawn_interval_max;
        if !interval_ok {
            return Err(WorldConfigError::InvalidSpawnInterval {
                min: self.spawn_interval_min,
                max: self.spawn_interval_max,
            });
        }
        if self.lookahead.is_nan() || self.lookahead <= 0.0 {
            return Err(WorldConfigError::NonPositiveLookahead(self.lookahead));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_spawn_interval() {
        let config = WorldConfig {
            spawn_interval_min: 2000.0,
            spawn_interval_max: 500.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WorldConfigError::InvalidSpawnInterval { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_speed() {
        let config = WorldConfig {
            obstacle_speed: f32::NAN,
            ..WorldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WorldConfigError::NonPositiveSpeed(_))
        ));
    }
}
