//! Editor commands, one per user control.
//!
//! Commands also have a one-line text form used by the command replay binary:
//!
//! ```text
//! toggle-drawing
//! color #ff0000
//! stroke 10,10 20,25 30,40
//! select 120,100
//! move 5,-3
//! remove
//! clear
//! undo
//! redo
//! ```

use sketchboard_core::{Color, Point, SceneError};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    ToggleDrawing,
    Clear,
    RemoveSelected,
    SetColor(Color),
    Undo,
    Redo,
    Stroke(Vec<Point>),
    Select(Point),
    Move { dx: f64, dy: f64 },
}

impl EditorCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::ToggleDrawing => "toggle-drawing",
            EditorCommand::Clear => "clear",
            EditorCommand::RemoveSelected => "remove",
            EditorCommand::SetColor(_) => "color",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::Stroke(_) => "stroke",
            EditorCommand::Select(_) => "select",
            EditorCommand::Move { .. } => "move",
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },

    #[error("invalid point '{0}' (expected x,y)")]
    BadPoint(String),

    #[error(transparent)]
    Color(#[from] SceneError),
}

fn parse_point(token: &str) -> Result<Point, CommandParseError> {
    let bad = || CommandParseError::BadPoint(token.to_string());
    let (x, y) = token.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok(Point::new(x, y))
}

fn single<'a>(
    command: &'static str,
    expected: &'static str,
    args: &[&'a str],
) -> Result<&'a str, CommandParseError> {
    match args {
        [one] => Ok(*one),
        [] => Err(CommandParseError::MissingArgument { command, expected }),
        _ => Err(CommandParseError::UnexpectedArgument { command }),
    }
}

impl FromStr for EditorCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let head = tokens.next().ok_or(CommandParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        let bare = |command: EditorCommand| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandParseError::UnexpectedArgument {
                    command: command.name(),
                })
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "toggle-drawing" | "draw" => bare(EditorCommand::ToggleDrawing),
            "clear" => bare(EditorCommand::Clear),
            "remove" => bare(EditorCommand::RemoveSelected),
            "undo" => bare(EditorCommand::Undo),
            "redo" => bare(EditorCommand::Redo),
            "color" => {
                let literal = single("color", "a #rrggbb colour", &args)?;
                Ok(EditorCommand::SetColor(Color::from_hex(literal)?))
            }
            "select" => {
                let point = single("select", "a point", &args)?;
                Ok(EditorCommand::Select(parse_point(point)?))
            }
            "move" => {
                let offset = parse_point(single("move", "an offset dx,dy", &args)?)?;
                Ok(EditorCommand::Move {
                    dx: offset.x,
                    dy: offset.y,
                })
            }
            "stroke" => {
                if args.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "stroke",
                        expected: "at least one point",
                    });
                }
                let points = args
                    .iter()
                    .map(|t| parse_point(t))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(EditorCommand::Stroke(points))
            }
            _ => Err(CommandParseError::Unknown(head.to_string())),
        }
    }
}
