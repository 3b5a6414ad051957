//! Scene-space points and bounding boxes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned bounding box, used for hit-testing selections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box enclosing all points, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    pub fn inflate(self, margin: f64) -> Self {
        Self {
            min: self.min.translated(-margin, -margin),
            max: self.max.translated(margin, margin),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_enclose_all_points() {
        let b = Bounds::from_points([
            Point::new(5.0, 1.0),
            Point::new(-2.0, 4.0),
            Point::new(3.0, 9.0),
        ])
        .unwrap();

        assert_eq!(b.min, Point::new(-2.0, 1.0));
        assert_eq!(b.max, Point::new(5.0, 9.0));
        assert_eq!(b.width(), 7.0);
        assert_eq!(b.height(), 8.0);
    }

    #[test]
    fn empty_points_have_no_bounds() {
        assert!(Bounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn inflate_grows_hit_area() {
        let b = Bounds::from_points([Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).unwrap();
        assert!(!b.contains(Point::new(5.0, 1.0)));
        assert!(b.inflate(1.5).contains(Point::new(5.0, 1.0)));
    }
}
