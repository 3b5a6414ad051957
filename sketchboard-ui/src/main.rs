// Headless sketchboard: replays editor commands from stdin and prints the final scene.
//
// Usage: sketchboard [config.sketchboard.json] < commands.txt

use anyhow::Context;
use sketchboard_ui::{load_config, logging, Editor, EditorCommand, EditorConfig};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    logging::init("info")?;

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => EditorConfig::default(),
    };
    let mut editor = Editor::new(&config).context("start editor")?;

    let stdin = io::stdin();
    let mut applied = 0usize;
    for (index, line) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("read command line {line_no}"))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let command: EditorCommand = match text.parse() {
            Ok(command) => command,
            Err(err) => {
                warn!(line = line_no, %err, "skipping unparseable command");
                continue;
            }
        };

        match editor.apply(command) {
            Ok(()) => applied += 1,
            Err(err) if err.is_fatal() => {
                error!(line = line_no, %err, "editor state is no longer consistent");
                return Err(err).with_context(|| format!("command on line {line_no}"));
            }
            Err(err) => warn!(line = line_no, %err, "command rejected"),
        }
    }

    info!(applied, "replay finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &editor.summary()).context("write scene summary")?;
    writeln!(out).context("write scene summary")?;
    Ok(())
}
