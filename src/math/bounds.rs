use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding volume in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bounds3 {
    /// Build from two opposite corners in any order.
    #[must_use]
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    /// Midpoint of the extents on each axis.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Width, height and depth.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Half of the largest of width, height and depth.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size().max_element() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_corners() {
        let b = Bounds3::new(DVec3::new(1.0, -1.0, 3.0), DVec3::new(-1.0, 2.0, 0.0));
        assert_eq!(b.min, DVec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn center_and_radius() {
        let b = Bounds3::new(DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.center(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.radius(), 3.0);
    }

    #[test]
    fn from_points_covers_all() {
        let b = Bounds3::from_points([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(5.0, -2.0, 1.0),
            DVec3::new(-1.0, 3.0, 0.5),
        ])
        .unwrap();
        assert_eq!(b.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, DVec3::new(5.0, 3.0, 1.0));
        assert!(Bounds3::from_points(std::iter::empty()).is_none());
    }
}
