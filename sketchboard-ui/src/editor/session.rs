//! An editing session: one scene canvas plus its undo/redo history.

use serde::Serialize;
use sketchboard_core::{Color, SceneCanvas, SceneDocument, SceneError};
use sketchboard_history::{HistoryController, HistoryError};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{EditorCommand, Pencil, Selector, Tool};
use crate::config::{ConfigError, EditorConfig};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl EditorError {
    /// History failures leave the canvas out of step with its snapshots;
    /// scene errors only reject one command.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EditorError::Scene(_))
    }
}

/// What the replay binary prints once the input is exhausted.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSummary {
    pub drawing_mode: bool,
    pub brush_color: Color,
    pub selected: Option<String>,
    pub history_len: usize,
    pub history_cursor: usize,
    pub scene: SceneDocument,
}

pub struct Editor {
    canvas: SceneCanvas,
    history: HistoryController,
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        let mut canvas = SceneCanvas::new(config.canvas.width, config.canvas.height);
        canvas.set_brush(config.brush.to_style());
        if config.seed_demo_scene {
            canvas.seed_demo_scene();
        }

        // Attach after seeding so the demo scene is the undo floor
        let history = HistoryController::attach(&mut canvas, &config.history)?;
        info!(objects = canvas.len(), "editor ready");

        Ok(Self { canvas, history })
    }

    /// Run one command, then record whatever it changed.
    pub fn apply(&mut self, command: EditorCommand) -> Result<(), EditorError> {
        debug!(command = command.name(), "applying command");

        let result = self.dispatch(command);
        // Failed commands may still have mutated the canvas
        let recorded = self.history.pump(&self.canvas)?;
        debug!(recorded, "history pumped");

        result
    }

    fn dispatch(&mut self, command: EditorCommand) -> Result<(), EditorError> {
        match command {
            EditorCommand::ToggleDrawing => {
                let enabled = !self.canvas.is_drawing_mode();
                self.canvas.set_drawing_mode(enabled);
            }
            EditorCommand::Clear => self.canvas.clear(),
            EditorCommand::RemoveSelected => {
                if self.canvas.remove_selected().is_none() {
                    warn!("Remove ignored, nothing selected");
                }
            }
            EditorCommand::SetColor(color) => self.canvas.set_brush_color(color),
            EditorCommand::Undo => {
                self.history.undo(&mut self.canvas)?;
            }
            EditorCommand::Redo => {
                self.history.redo(&mut self.canvas)?;
            }
            EditorCommand::Stroke(points) => {
                Pencil.apply(&mut self.canvas, &points)?;
            }
            EditorCommand::Select(point) => {
                Selector.apply(&mut self.canvas, &[point])?;
            }
            EditorCommand::Move { dx, dy } => match self.canvas.selected() {
                Some(id) => self.canvas.translate(id, dx, dy)?,
                None => warn!("Move ignored, nothing selected"),
            },
        }
        Ok(())
    }

    pub fn canvas(&self) -> &SceneCanvas {
        &self.canvas
    }

    pub fn history(&self) -> &HistoryController {
        &self.history
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.canvas.is_drawing_mode()
    }

    pub fn brush_color(&self) -> Color {
        self.canvas.brush().color
    }

    pub fn has_selection(&self) -> bool {
        self.canvas.selected().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn summary(&self) -> EditorSummary {
        EditorSummary {
            drawing_mode: self.canvas.is_drawing_mode(),
            brush_color: self.brush_color(),
            selected: self.canvas.selected().map(|id| id.to_string()),
            history_len: self.history.len(),
            history_cursor: self.history.cursor(),
            scene: self.canvas.to_document(),
        }
    }
}
