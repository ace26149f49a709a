//! Status levels and the fixed set of output themes.

use crossterm::style::Color;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    /// Upper-case prefix printed before the message text.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
        }
    }
}

/// A named mapping from status level to a `(symbol, color)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Anon,
    Hack,
    Cyber,
    Ghost,
    Virus,
    Pwn,
    Stealth,
    Binary,
    Glitch,
    Root,
}

impl Theme {
    /// Every available theme, in presentation order.
    pub const ALL: [Theme; 11] = [
        Theme::Default,
        Theme::Anon,
        Theme::Hack,
        Theme::Cyber,
        Theme::Ghost,
        Theme::Virus,
        Theme::Pwn,
        Theme::Stealth,
        Theme::Binary,
        Theme::Glitch,
        Theme::Root,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Anon => "anon",
            Theme::Hack => "hack",
            Theme::Cyber => "cyber",
            Theme::Ghost => "ghost",
            Theme::Virus => "virus",
            Theme::Pwn => "pwn",
            Theme::Stealth => "stealth",
            Theme::Binary => "binary",
            Theme::Glitch => "glitch",
            Theme::Root => "root",
        }
    }

    /// The symbol and color this theme uses for `level`.
    pub fn style(self, level: Level) -> (&'static str, Color) {
        let [success, error, warning, info] = self.table();
        match level {
            Level::Success => success,
            Level::Error => error,
            Level::Warning => warning,
            Level::Info => info,
        }
    }

    fn table(self) -> [(&'static str, Color); 4] {
        match self {
            Theme::Default => [
                ("✔", Color::Green),
                ("✖", Color::Red),
                ("!", Color::Yellow),
                ("*", Color::Cyan),
            ],
            Theme::Anon => [
                ("□", Color::White),
                ("■", Color::Red),
                ("▲", Color::Yellow),
                ("○", Color::DarkGrey),
            ],
            Theme::Hack => [
                ("++", Color::Green),
                ("--", Color::Red),
                ("##", Color::Yellow),
                ("@@", Color::Blue),
            ],
            Theme::Cyber => [
                ("**", Color::Cyan),
                ("XX", Color::Red),
                ("!!", Color::DarkYellow),
                ("##", Color::DarkBlue),
            ],
            Theme::Ghost => [
                ("~~", Color::White),
                ("XX", Color::Red),
                ("^^", Color::DarkMagenta),
                ("__", Color::DarkGrey),
            ],
            Theme::Virus => [
                ("++", Color::Green),
                ("**", Color::Red),
                ("!!", Color::Yellow),
                ("##", Color::Cyan),
            ],
            Theme::Pwn => [
                ("^_^", Color::DarkMagenta),
                ("X_X", Color::Red),
                ("#_#", Color::Yellow),
                ("*_*", Color::White),
            ],
            Theme::Stealth => [
                ("~~~", Color::DarkGrey),
                ("***", Color::Red),
                ("---", Color::DarkGrey),
                ("+++", Color::Blue),
            ],
            Theme::Binary => [
                ("00", Color::Green),
                ("01", Color::Red),
                ("!!", Color::Yellow),
                ("??", Color::Cyan),
            ],
            Theme::Glitch => [
                ("%%%", Color::Cyan),
                ("&&&", Color::Magenta),
                ("###", Color::Yellow),
                ("@@@", Color::Blue),
            ],
            Theme::Root => [
                ("$", Color::Yellow),
                ("!", Color::Red),
                ("#", Color::DarkYellow),
                ("&", Color::White),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_symbols() {
        assert_eq!(Theme::Default.style(Level::Success).0, "✔");
        assert_eq!(Theme::Default.style(Level::Error).0, "✖");
        assert_eq!(Theme::Default.style(Level::Warning).0, "!");
        assert_eq!(Theme::Default.style(Level::Info).0, "*");
    }

    #[test]
    fn test_every_theme_has_a_unique_name() {
        let mut names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Theme::ALL.len());
    }

    #[test]
    fn test_level_prefixes() {
        assert_eq!(Level::Success.prefix(), "SUCCESS");
        assert_eq!(Level::Error.prefix(), "ERROR");
        assert_eq!(Level::Warning.prefix(), "WARNING");
        assert_eq!(Level::Info.prefix(), "INFO");
    }
}
