//! sketchboard-ui: the editor host for sketchboard.
//!
//! Wires a [`sketchboard_core::SceneCanvas`] to its
//! [`sketchboard_history::HistoryController`] and maps every user control
//! (toolbar button or replayed text command) to one [`EditorCommand`].

pub mod config;
pub mod editor;
pub mod logging;

pub use config::{load_config, save_config, EditorConfig};
pub use editor::{Editor, EditorCommand, EditorError};
