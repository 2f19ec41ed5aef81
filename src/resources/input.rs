//! Normalized 8-way input direction.
//!
//! The core does not own an event source: the host flips the four direction
//! flags from whatever input backend it has, and actor update hooks read the
//! resulting direction vector.

use glam::Vec2;

pub const COS_45: f32 = std::f32::consts::FRAC_1_SQRT_2;
pub const SIN_45: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Boolean direction flags fed by the host each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputDirections {
    /// Direction vector for the current flags.
    ///
    /// Opposing flags cancel. Diagonals are scaled by cos/sin 45° so every
    /// non-zero direction has unit length; +y points down.
    pub fn direction(&self) -> Vec2 {
        let h = if self.left == self.right {
            0.0
        } else if self.left {
            -1.0
        } else {
            1.0
        };
        let v = if self.up == self.down {
            0.0
        } else if self.up {
            -1.0
        } else {
            1.0
        };
        if h != 0.0 && v != 0.0 {
            Vec2::new(h * COS_45, v * SIN_45)
        } else {
            Vec2::new(h, v)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_idle_is_zero() {
        assert_eq!(InputDirections::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_opposing_flags_cancel() {
        let dirs = InputDirections {
            left: true,
            right: true,
            up: true,
            down: false,
        };
        let v = dirs.direction();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, -1.0);
    }

    #[test]
    fn test_single_axis_is_unit_length() {
        let dirs = InputDirections {
            right: true,
            ..Default::default()
        };
        assert_eq!(dirs.direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_unit_length() {
        let dirs = InputDirections {
            right: true,
            down: true,
            ..Default::default()
        };
        let v = dirs.direction();
        assert!((v.x - COS_45).abs() < EPSILON);
        assert!((v.y - SIN_45).abs() < EPSILON);
        assert!((v.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clear_resets_flags() {
        let mut dirs = InputDirections {
            left: true,
            down: true,
            ..Default::default()
        };
        dirs.clear();
        assert_eq!(dirs, InputDirections::default());
    }
}
