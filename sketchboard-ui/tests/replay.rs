use sketchboard_core::Shape;
use sketchboard_ui::{Editor, EditorCommand, EditorConfig};

fn replay(editor: &mut Editor, script: &str) {
    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let command: EditorCommand = line.parse().unwrap();
        editor.apply(command).unwrap();
    }
}

#[test]
fn drawing_session_with_undo_and_branching() {
    let mut editor = Editor::new(&EditorConfig::default()).unwrap();
    replay(
        &mut editor,
        "
        toggle-drawing
        color #ff0000
        stroke 300,300 310,320 330,340
        stroke 400,400 420,410
        stroke 500,500 520,530
        undo
        undo
        ",
    );

    assert_eq!(editor.canvas().len(), 3);
    assert_eq!(editor.history().len(), 3);
    assert_eq!(editor.history().cursor(), 1);

    replay(&mut editor, "color #0000ff\nstroke 600,600 610,610");
    assert_eq!(editor.history().len(), 2);
    assert!(!editor.can_redo());

    let colors: Vec<String> = editor
        .canvas()
        .objects()
        .iter()
        .filter_map(|o| match &o.shape {
            Shape::Path { stroke, .. } => Some(stroke.color.to_hex()),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec!["#ff0000", "#0000ff"]);

    // redo at the end of history changes nothing
    replay(&mut editor, "redo\nredo");
    assert_eq!(editor.canvas().len(), 4);
    assert_eq!(editor.history().cursor(), 2);
}

#[test]
fn summary_serializes_to_json() {
    let mut editor = Editor::new(&EditorConfig::default()).unwrap();
    replay(&mut editor, "select 120,100\nremove\nundo");

    let value = serde_json::to_value(editor.summary()).unwrap();
    assert_eq!(value["history_len"], 1);
    assert_eq!(value["history_cursor"], 0);
    assert_eq!(value["brush_color"], "#000000");
    assert_eq!(value["scene"]["objects"].as_array().unwrap().len(), 2);
    assert!(value["selected"].is_null());
}

#[test]
fn overflowing_move_is_rejected_and_history_stays_usable() {
    let mut editor = Editor::new(&EditorConfig::default()).unwrap();
    replay(&mut editor, "select 120,100\nmove 1e308,0");

    let err = editor.apply("move 1e308,0".parse().unwrap()).unwrap_err();
    assert!(!err.is_fatal());
    assert_eq!(editor.history().len(), 1);

    replay(&mut editor, "undo\nredo");
    assert_eq!(editor.history().cursor(), 1);
    assert_eq!(editor.canvas().len(), 2);
}
