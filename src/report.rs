//! Styled status lines: `[symbol] LEVEL: message`.

use crossterm::style::{style, Stylize};

use crate::theme::{Level, Theme};

/// Render a status line as a string.
///
/// The bracketed symbol always carries the theme color for `level`; only
/// the message text is gated by `colorize`.
pub fn format_status(theme: Theme, level: Level, message: &str, colorize: bool) -> String {
    let (symbol, color) = theme.style(level);
    let symbol = style(symbol).with(color);
    if colorize {
        let text = style(format!("{}: {}", level.prefix(), message)).with(color);
        format!("[{symbol}] {text}")
    } else {
        format!("[{symbol}] {}: {}", level.prefix(), message)
    }
}

/// Print a status line; errors go to stderr, everything else to stdout.
pub fn emit(theme: Theme, level: Level, message: &str, colorize: bool) {
    let line = format_status(theme, level, message, colorize);
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}
