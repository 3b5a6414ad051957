// Pointer tools for the scene canvas.

use sketchboard_core::{ObjectId, Point, SceneCanvas, SceneError};
use tracing::{debug, trace};

pub trait Tool {
    /// Run the tool over a pointer gesture (press .. release, in scene space).
    fn apply(
        &self,
        canvas: &mut SceneCanvas,
        gesture: &[Point],
    ) -> Result<Option<ObjectId>, SceneError>;

    fn name(&self) -> &str;

    fn cursor_size(&self) -> u32 {
        1
    }
}

/// Freehand ink using the canvas brush.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pencil;

impl Pencil {
    // Drop consecutive duplicate samples (pointer events repeat on a still mouse)
    pub fn simplify(gesture: &[Point]) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::with_capacity(gesture.len());
        for &p in gesture {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        points
    }
}

impl Tool for Pencil {
    fn apply(
        &self,
        canvas: &mut SceneCanvas,
        gesture: &[Point],
    ) -> Result<Option<ObjectId>, SceneError> {
        let points = Self::simplify(gesture);
        trace!(
            raw = gesture.len(),
            kept = points.len(),
            "Applying Pencil gesture"
        );
        let id = canvas.draw_stroke(points)?;
        debug!(object = %id, "Pencil stroke committed");
        Ok(Some(id))
    }

    fn name(&self) -> &str {
        "Pencil"
    }
}

/// Picks the topmost shape under the end of the gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector;

impl Tool for Selector {
    fn apply(
        &self,
        canvas: &mut SceneCanvas,
        gesture: &[Point],
    ) -> Result<Option<ObjectId>, SceneError> {
        let Some(&point) = gesture.last() else {
            trace!("Selector applied with an empty gesture");
            return Ok(None);
        };
        Ok(canvas.select_at(point))
    }

    fn name(&self) -> &str {
        "Selector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pencil_simplifies_repeats() {
        let gesture = [
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
        ];
        assert_eq!(
            Pencil::simplify(&gesture),
            vec![
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(1.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_pencil_needs_drawing_mode() {
        let mut canvas = SceneCanvas::default();
        let gesture = [Point::new(5.0, 5.0), Point::new(6.0, 6.0)];

        assert!(Pencil.apply(&mut canvas, &gesture).is_err());

        canvas.set_drawing_mode(true);
        let id = Pencil.apply(&mut canvas, &gesture).unwrap();
        assert!(id.is_some());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_selector_hits_topmost() {
        let mut canvas = SceneCanvas::default();
        canvas.set_drawing_mode(true);
        let gesture = [Point::new(10.0, 10.0), Point::new(40.0, 40.0)];
        Pencil.apply(&mut canvas, &gesture).unwrap();
        let top = Pencil.apply(&mut canvas, &gesture).unwrap();

        let hit = Selector
            .apply(&mut canvas, &[Point::new(20.0, 20.0)])
            .unwrap();
        assert_eq!(hit, top);
        assert_eq!(Selector.apply(&mut canvas, &[]).unwrap(), None);
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(Pencil.name(), "Pencil");
        assert_eq!(Selector.name(), "Selector");
        assert_eq!(Selector.cursor_size(), 1);
    }
}
