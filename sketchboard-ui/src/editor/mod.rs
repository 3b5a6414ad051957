// Editor module for sketchboard UI.

pub mod commands;
pub mod session;
pub mod toolbar;
pub mod tools;

pub use commands::{CommandParseError, EditorCommand};
pub use session::{Editor, EditorError, EditorSummary};
pub use toolbar::toolbar;
pub use tools::{Pencil, Selector, Tool};
