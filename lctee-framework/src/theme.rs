use crate::provider::Level;
use crossterm::style::{Color, Stylize, style};

// one dark (non-bright) foreground per known level, written as a
// 256-palette index (`ESC[38;5;<n>m`) and reset with `ESC[39m`
pub fn get_level_color(level: &Level) -> Option<Color> {
    match level {
        Level::Verbose => Some(Color::DarkMagenta),
        Level::Debug => Some(Color::DarkBlue),
        Level::Info => Some(Color::DarkGreen),
        Level::Warn => Some(Color::DarkYellow),
        Level::Error => Some(Color::DarkRed),
        Level::Unknown(_) => None,
    }
}

/// wrap `body` in the foreground color of `level`; unknown levels stay plain
pub fn colorize(level: &Level, body: &str) -> String {
    match get_level_color(level) {
        Some(color) => style(body).with(color).to_string(),
        None => body.to_string(),
    }
}
