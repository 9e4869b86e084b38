/// Axis-aligned bounding box in world units.
///
/// World coordinates grow rightwards (`x`) and upwards (`y`); the ground line
/// sits at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    /// Returns `true` if the two boxes overlap by more than `padding` on
    /// every side.
    ///
    /// The padding shrinks both boxes, so grazing contacts are forgiven.
    ///
    /// # Example
    ///
    /// ```
    /// use dinorun_engine::core::rect::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let b = Rect::new(45.0, 0.0, 50.0, 50.0);
    ///
    /// assert!(a.collides_with(&b, 0.0));
    /// assert!(!a.collides_with(&b, 10.0));
    /// ```
    #[must_use]
    pub fn collides_with(&self, other: &Rect, padding: f32) -> bool {
        self.left < other.right() - padding
            && self.bottom < other.top() - padding
            && self.right() > other.left + padding
            && self.top() > other.bottom + padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_boxes_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(!a.collides_with(&b, 0.0));
        assert!(!b.collides_with(&a, 0.0));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 60.0, 60.0);
        let b = Rect::new(30.0, 20.0, 60.0, 60.0);
        assert_eq!(a.collides_with(&b, 10.0), b.collides_with(&a, 10.0));
        assert!(a.collides_with(&b, 10.0));
    }

    #[test]
    fn test_padding_forgives_vertical_graze() {
        // runner hovering 5 units below the obstacle top
        let obstacle = Rect::new(0.0, 0.0, 40.0, 100.0);
        let runner = Rect::new(10.0, 95.0, 60.0, 70.0);
        assert!(obstacle.collides_with(&runner, 0.0));
        assert!(!obstacle.collides_with(&runner, 10.0));
    }
}
