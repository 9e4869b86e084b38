use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use super::rect::Rect;

/// Obstacle shapes that can appear in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Small,
    Large,
    Tall,
}

impl ObstacleKind {
    pub const LEN: usize = 3;
    pub const ALL: [Self; Self::LEN] = [Self::Small, Self::Large, Self::Tall];

    /// Returns the obstacle footprint as `(width, height)` in world units.
    #[must_use]
    pub const fn size(self) -> (f32, f32) {
        match self {
            Self::Small => (34.0, 70.0),
            Self::Large => (50.0, 100.0),
            Self::Tall => (40.0, 135.0),
        }
    }
}

impl Distribution<ObstacleKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ObstacleKind {
        ObstacleKind::ALL[rng.random_range(0..ObstacleKind::LEN)]
    }
}

/// An obstacle standing on the ground and scrolling towards the runner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    kind: ObstacleKind,
    left: f32,
}

impl Obstacle {
    #[must_use]
    pub const fn new(kind: ObstacleKind, left: f32) -> Self {
        Self { kind, left }
    }

    #[must_use]
    pub const fn kind(&self) -> ObstacleKind {
        self.kind
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.kind.size().1
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        let (width, height) = self.kind.size();
        Rect::new(self.left, 0.0, width, height)
    }

    /// Bounding box covering every position the obstacle held while
    /// scrolling the last `scrolled` units.
    #[must_use]
    pub fn swept_rect(&self, scrolled: f32) -> Rect {
        let rect = self.rect();
        Rect {
            width: rect.width + scrolled,
            ..rect
        }
    }

    /// Moves the obstacle left by `distance` units.
    pub fn scroll(&mut self, distance: f32) {
        self.left -= distance;
    }

    /// Returns `true` once the obstacle has left the visible world.
    #[must_use]
    pub fn is_off_screen(&self) -> bool {
        self.rect().right() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_until_off_screen() {
        let mut obstacle = Obstacle::new(ObstacleKind::Small, 10.0);
        assert!(!obstacle.is_off_screen());
        obstacle.scroll(40.0);
        assert!(!obstacle.is_off_screen());
        obstacle.scroll(10.0);
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_swept_rect_reaches_previous_position() {
        let mut obstacle = Obstacle::new(ObstacleKind::Large, 300.0);
        obstacle.scroll(120.0);
        let swept = obstacle.swept_rect(120.0);
        assert_eq!(swept.left, 180.0);
        assert_eq!(swept.right(), 350.0);
        assert_eq!(swept.top(), 100.0);
        assert_eq!(obstacle.swept_rect(0.0), obstacle.rect());
    }

    #[test]
    fn test_tallest_obstacle_matches_height_normalizer() {
        let max = ObstacleKind::ALL
            .iter()
            .map(|k| k.size().1)
            .fold(f32::MIN, f32::max);
        assert_eq!(max, 135.0);
    }
}
