//! sketchboard-core: the editable scene behind the sketchboard editor.
//!
//! Design rules:
//! - The scene is a flat, ordered list of shapes (last = topmost).
//! - Every user mutation emits exactly one change notification.
//! - Restores emit notifications tagged with `ChangeOrigin::Restore` so history
//!   consumers can tell them apart from user edits.
//! - The whole scene serializes to an opaque `Snapshot` (JSON text).

use thiserror::Error;

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod shape;
pub mod surface;

pub use canvas::{SceneCanvas, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use color::Color;
pub use geometry::{Bounds, Point};
pub use shape::{LineCap, ObjectId, SceneObject, Shape, StrokeStyle};
pub use surface::{
    ChangeEvent, ChangeHandler, ChangeKind, ChangeOrigin, ChangeQueue, DrawingSurface,
    SceneDocument, Snapshot, SCENE_FORMAT_VERSION,
};

/// Errors raised by scene edits.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),

    #[error("drawing mode is disabled")]
    DrawingModeDisabled,

    #[error("stroke has no points")]
    EmptyStroke,

    #[error("{0} would have non-finite coordinates")]
    NonFiniteGeometry(&'static str),

    #[error("invalid colour literal '{0}'")]
    InvalidColor(String),
}

/// Errors raised while moving scene state in and out of snapshots.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("serialize scene: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(#[source] serde_json::Error),

    #[error("object {0} has non-finite coordinates")]
    NonFiniteGeometry(ObjectId),

    #[error("unsupported scene format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
