//! Shapes that live on the scene.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Bounds, Color, Point};

/// Stable identity of a scene object across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    pub fn new() -> Self {
        ObjectId(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How the ends of an open stroke are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Ink style shared by freehand paths and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    #[serde(default)]
    pub line_cap: LineCap,
}

impl StrokeStyle {
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            line_cap: LineCap::Round,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(3.0, Color::BLACK)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Freehand ink committed from a pencil gesture.
    Path {
        points: Vec<Point>,
        stroke: StrokeStyle,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeStyle,
    },
    Textbox {
        origin: Point,
        text: String,
        font_size: f64,
        font_family: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background: Option<Color>,
    },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Path { .. } => "path",
            Shape::Line { .. } => "line",
            Shape::Textbox { .. } => "textbox",
        }
    }

    /// Hit-test box. Textbox metrics are approximated from the font size since
    /// there is no text shaping here.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Path { points, stroke } => {
                Bounds::from_points(points.iter().copied()).map(|b| b.inflate(stroke.width / 2.0))
            }
            Shape::Line { from, to, stroke } => {
                Bounds::from_points([*from, *to]).map(|b| b.inflate(stroke.width / 2.0))
            }
            Shape::Textbox {
                origin,
                text,
                font_size,
                ..
            } => {
                let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                let line_count = text.lines().count().max(1);
                let width = longest as f64 * font_size * 0.6;
                let height = line_count as f64 * font_size * 1.2;
                Some(Bounds {
                    min: *origin,
                    max: origin.translated(width, height),
                })
            }
        }
    }

    /// JSON has no encoding for NaN or infinity, so such shapes cannot be snapshotted.
    pub fn is_finite(&self) -> bool {
        let point_ok = |p: &Point| p.x.is_finite() && p.y.is_finite();
        match self {
            Shape::Path { points, stroke } => stroke.width.is_finite() && points.iter().all(point_ok),
            Shape::Line { from, to, stroke } => {
                stroke.width.is_finite() && point_ok(from) && point_ok(to)
            }
            Shape::Textbox {
                origin, font_size, ..
            } => font_size.is_finite() && point_ok(origin),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Path { points, .. } => {
                for p in points.iter_mut() {
                    *p = p.translated(dx, dy);
                }
            }
            Shape::Line { from, to, .. } => {
                *from = from.translated(dx, dy);
                *to = to.translated(dx, dy);
            }
            Shape::Textbox { origin, .. } => *origin = origin.translated(dx, dy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
}

impl SceneObject {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: ObjectId::new(),
            shape,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.shape.bounds().is_some_and(|b| b.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_bounds_include_stroke_width() {
        let path = Shape::Path {
            points: vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)],
            stroke: StrokeStyle::new(4.0, Color::BLACK),
        };
        let b = path.bounds().unwrap();
        assert_eq!(b.min, Point::new(8.0, 8.0));
        assert_eq!(b.max, Point::new(22.0, 12.0));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let path = Shape::Path {
            points: vec![],
            stroke: StrokeStyle::default(),
        };
        assert!(path.bounds().is_none());
        assert!(!SceneObject::new(path).contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn translate_moves_every_point() {
        let mut line = Shape::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(5.0, 5.0),
            stroke: StrokeStyle::default(),
        };
        line.translate(1.0, -1.0);
        assert_eq!(
            line,
            Shape::Line {
                from: Point::new(1.0, -1.0),
                to: Point::new(6.0, 4.0),
                stroke: StrokeStyle::default(),
            }
        );
    }

    #[test]
    fn non_finite_shapes_are_detected() {
        let mut line = Shape::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            stroke: StrokeStyle::default(),
        };
        assert!(line.is_finite());

        line.translate(f64::MAX, 0.0);
        line.translate(f64::MAX, 0.0);
        assert!(!line.is_finite());

        let path = Shape::Path {
            points: vec![Point::new(f64::NAN, 0.0)],
            stroke: StrokeStyle::default(),
        };
        assert!(!path.is_finite());
    }

    #[test]
    fn shape_json_is_tagged() {
        let text = Shape::Textbox {
            origin: Point::new(0.0, 0.0),
            text: "hi".into(),
            font_size: 12.0,
            font_family: "sans-serif".into(),
            background: None,
        };
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value["type"], "textbox");
        assert!(value.get("background").is_none());
    }
}
