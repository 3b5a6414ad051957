// This is the scene canvas for sketchboard
// It holds the shapes, the selection and the freehand brush, and tells listeners about every edit

use tracing::{debug, info, trace, warn};

use crate::{
    ChangeEvent, ChangeHandler, ChangeKind, Color, DrawingSurface, ObjectId, Point, SceneDocument,
    SceneError, SceneObject, Shape, Snapshot, StrokeStyle, SurfaceError, SCENE_FORMAT_VERSION,
};

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

pub struct SceneCanvas {
    width: u32,
    height: u32,
    objects: Vec<SceneObject>,
    selected: Option<ObjectId>,
    drawing_mode: bool,
    brush: StrokeStyle,
    listeners: Vec<ChangeHandler>,
}

impl SceneCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        info!("Creating new scene canvas of size {}x{}", width, height);

        Self {
            width,
            height,
            objects: Vec::new(),
            selected: None,
            drawing_mode: false,
            brush: StrokeStyle::default(),
            listeners: Vec::new(),
        }
    }

    // Populate the canvas with a textbox and a red line
    pub fn seed_demo_scene(&mut self) {
        info!("Seeding demo scene");
        self.push(Shape::Textbox {
            origin: Point::new(0.0, 0.0),
            text: "Hello World".into(),
            font_size: 60.0,
            font_family: "sans-serif".into(),
            background: Some(Color::GOLD),
        });
        self.push(Shape::Line {
            from: Point::new(50.0, 100.0),
            to: Point::new(200.0, 100.0),
            stroke: StrokeStyle::new(2.0, Color::RED),
        });
    }

    // Notify every listener of a change
    fn emit(&mut self, event: ChangeEvent) {
        trace!(
            kind = ?event.kind,
            origin = ?event.origin,
            listeners = self.listeners.len(),
            "emitting change event"
        );
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn position(&self, id: ObjectId) -> Result<usize, SceneError> {
        self.objects
            .iter()
            .position(|o| o.id == id)
            .ok_or(SceneError::UnknownObject(id))
    }

    // Add a shape on top of the scene
    pub fn add(&mut self, shape: Shape) -> Result<ObjectId, SceneError> {
        if !shape.is_finite() {
            warn!(kind = shape.kind(), "Shape rejected, non-finite geometry");
            return Err(SceneError::NonFiniteGeometry(shape.kind()));
        }
        Ok(self.push(shape))
    }

    fn push(&mut self, shape: Shape) -> ObjectId {
        let object = SceneObject::new(shape);
        let id = object.id;
        debug!(object = %id, kind = object.shape.kind(), "adding object");

        self.objects.push(object);
        self.emit(ChangeEvent::user(ChangeKind::Added, Some(id)));
        id
    }

    // Commit a freehand stroke using the current brush
    pub fn draw_stroke(&mut self, points: Vec<Point>) -> Result<ObjectId, SceneError> {
        if !self.drawing_mode {
            warn!("Stroke rejected, drawing mode is off");
            return Err(SceneError::DrawingModeDisabled);
        }
        if points.is_empty() {
            warn!("Stroke rejected, no points");
            return Err(SceneError::EmptyStroke);
        }

        debug!(
            points = points.len(),
            color = %self.brush.color,
            width = self.brush.width,
            "committing freehand stroke"
        );
        self.add(Shape::Path {
            points,
            stroke: self.brush.clone(),
        })
    }

    // Move an object by an offset
    pub fn translate(&mut self, id: ObjectId, dx: f64, dy: f64) -> Result<(), SceneError> {
        let index = self.position(id)?;
        let mut moved = self.objects[index].shape.clone();
        moved.translate(dx, dy);
        if !moved.is_finite() {
            warn!(object = %id, dx, dy, "Move rejected, result is non-finite");
            return Err(SceneError::NonFiniteGeometry(moved.kind()));
        }
        self.objects[index].shape = moved;
        debug!(object = %id, dx, dy, "moved object");

        self.emit(ChangeEvent::user(ChangeKind::Modified, Some(id)));
        Ok(())
    }

    pub fn remove(&mut self, id: ObjectId) -> Result<SceneObject, SceneError> {
        let index = self.position(id)?;
        let removed = self.objects.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(object = %id, kind = removed.shape.kind(), "removed object");

        self.emit(ChangeEvent::user(ChangeKind::Removed, Some(id)));
        Ok(removed)
    }

    // Remove whatever is selected; nothing happens without a selection
    pub fn remove_selected(&mut self) -> Option<SceneObject> {
        let Some(id) = self.selected else {
            debug!("Remove requested with nothing selected");
            return None;
        };
        self.remove(id).ok()
    }

    pub fn select(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.position(id)?;
        self.selected = Some(id);
        trace!(object = %id, "selected object");
        Ok(())
    }

    // Select the topmost object under a point, or clear the selection
    pub fn select_at(&mut self, point: Point) -> Option<ObjectId> {
        self.selected = self
            .objects
            .iter()
            .rev()
            .find(|o| o.contains(point))
            .map(|o| o.id);
        debug!(
            x = point.x,
            y = point.y,
            hit = self.selected.is_some(),
            "hit-test selection"
        );
        self.selected
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    // Clear canvas
    pub fn clear(&mut self) {
        if self.objects.is_empty() {
            debug!("Canvas already empty, nothing to clear");
            return;
        }
        info!("Clearing canvas ({} objects)", self.objects.len());
        self.objects.clear();
        self.selected = None;
        self.emit(ChangeEvent::user(ChangeKind::Cleared, None));
    }

    pub fn set_drawing_mode(&mut self, enabled: bool) {
        info!("Drawing mode {}", if enabled { "on" } else { "off" });
        self.drawing_mode = enabled;
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn brush(&self) -> &StrokeStyle {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: StrokeStyle) {
        debug!(width = brush.width, color = %brush.color, "brush updated");
        self.brush = brush;
    }

    pub fn set_brush_color(&mut self, color: Color) {
        debug!(color = %color, "brush colour updated");
        self.brush.color = color;
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // Get canvas dimensions
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn to_document(&self) -> SceneDocument {
        SceneDocument {
            version: SCENE_FORMAT_VERSION,
            width: self.width,
            height: self.height,
            objects: self.objects.clone(),
        }
    }
}

impl DrawingSurface for SceneCanvas {
    fn serialize(&self) -> Result<Snapshot, SurfaceError> {
        if let Some(bad) = self.objects.iter().find(|o| !o.shape.is_finite()) {
            warn!(object = %bad.id, "refusing to snapshot non-finite geometry");
            return Err(SurfaceError::NonFiniteGeometry(bad.id));
        }
        let json = serde_json::to_string(&self.to_document()).map_err(SurfaceError::Serialize)?;
        trace!(bytes = json.len(), "scene serialized");
        Ok(Snapshot::new(json))
    }

    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        // A bad snapshot must leave the scene untouched
        let document: SceneDocument =
            serde_json::from_str(snapshot.as_str()).map_err(SurfaceError::CorruptSnapshot)?;
        if document.version != SCENE_FORMAT_VERSION {
            warn!(
                found = document.version,
                "snapshot has unsupported format version"
            );
            return Err(SurfaceError::UnsupportedVersion {
                found: document.version,
                expected: SCENE_FORMAT_VERSION,
            });
        }

        debug!(objects = document.objects.len(), "restoring scene");
        self.width = document.width;
        self.height = document.height;
        self.objects = document.objects;
        self.selected = None;

        self.emit(ChangeEvent::restore(ChangeKind::Cleared, None));
        let ids: Vec<ObjectId> = self.objects.iter().map(|o| o.id).collect();
        for id in ids {
            self.emit(ChangeEvent::restore(ChangeKind::Added, Some(id)));
        }
        Ok(())
    }

    fn on_change(&mut self, handler: ChangeHandler) {
        self.listeners.push(handler);
        debug!(listeners = self.listeners.len(), "change listener registered");
    }
}

// Create a default canvas
impl Default for SceneCanvas {
    fn default() -> Self {
        SceneCanvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
