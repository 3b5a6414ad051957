// egui toolbar for the editor: drawing toggle, clear, remove, colour, undo, redo.

use egui::{Button, Color32, Ui};
use sketchboard_core::Color;
use tracing::trace;

use super::{Editor, EditorCommand};

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::rgba(r, g, b, a)
}

/// Draw the toolbar and return the commands the user triggered this frame.
/// The toolbar holds no state of its own; it reads everything from `editor`.
pub fn toolbar(ui: &mut Ui, editor: &Editor) -> Vec<EditorCommand> {
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        let mut drawing = editor.is_drawing_mode();
        if ui.toggle_value(&mut drawing, "Toggle Drawing").clicked() {
            commands.push(EditorCommand::ToggleDrawing);
        }
        if ui.button("Clear").clicked() {
            commands.push(EditorCommand::Clear);
        }
        if ui
            .add_enabled(editor.has_selection(), Button::new("Remove"))
            .clicked()
        {
            commands.push(EditorCommand::RemoveSelected);
        }

        let mut color = to_color32(editor.brush_color());
        if ui.color_edit_button_srgba(&mut color).changed() {
            commands.push(EditorCommand::SetColor(from_color32(color)));
        }

        ui.separator();

        if ui
            .add_enabled(editor.can_undo(), Button::new("Undo"))
            .clicked()
        {
            commands.push(EditorCommand::Undo);
        }
        if ui
            .add_enabled(editor.can_redo(), Button::new("Redo"))
            .clicked()
        {
            commands.push(EditorCommand::Redo);
        }
    });

    if !commands.is_empty() {
        trace!(count = commands.len(), "toolbar commands");
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    #[test]
    fn test_color_conversion_round_trips() {
        for color in [Color::BLACK, Color::RED, Color::GOLD, Color::rgba(10, 20, 30, 255)] {
            assert_eq!(from_color32(to_color32(color)), color);
        }
    }

    #[test]
    fn test_toolbar_renders_headless_without_commands() {
        let editor = Editor::new(&EditorConfig::default()).unwrap();
        let ctx = egui::Context::default();
        let mut commands = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                commands = toolbar(ui, &editor);
            });
        });

        assert!(commands.is_empty());
    }
}
