use sketchboard_core::{Color, LineCap};
use sketchboard_history::HistoryConfig;
use sketchboard_ui::{load_config, save_config, Editor, EditorConfig};

#[test]
fn config_roundtrip() {
    let mut config = EditorConfig::default();
    config.canvas.width = 1024;
    config.brush.color = Color::BLUE;
    config.brush.line_cap = LineCap::Square;
    config.history = HistoryConfig::bounded(25);
    config.seed_demo_scene = false;

    let path = std::path::Path::new("target/test_configs/editor.sketchboard.json");
    save_config(path, &config).unwrap();
    let loaded = load_config(path).unwrap();

    assert_eq!(config, loaded);

    let editor = Editor::new(&loaded).unwrap();
    assert_eq!(editor.canvas().width(), 1024);
    assert_eq!(editor.brush_color(), Color::BLUE);
    assert_eq!(editor.history().max_snapshots(), Some(25));
    assert!(editor.canvas().is_empty());
}

#[test]
fn invalid_config_file_is_rejected() {
    let path = std::path::Path::new("target/test_configs/bad.sketchboard.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, r#"{"canvas": {"width": 0, "height": 10}}"#).unwrap();

    let err = load_config(path).unwrap_err();
    assert!(format!("{err:#}").contains("canvas size must be positive"));

    assert!(load_config("target/test_configs/missing.sketchboard.json").is_err());
}
