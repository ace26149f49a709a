//! Program-level configuration read by help rendering and the reporter.

use crate::theme::Theme;

/// Presentation settings for one run, set once before parsing.
///
/// ```
/// use nyx::{RunConfig, Theme};
///
/// let config = RunConfig {
///     description: "Port scanner".to_string(),
///     example_usage: "--target 10.0.0.1 --port 8080".to_string(),
///     color_text: true,
///     theme: Theme::Hack,
/// };
/// assert_eq!(config.theme, Theme::Hack);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Shown at the top of the help screen.
    pub description: String,
    /// Example invocation appended to the usage line, program name excluded.
    pub example_usage: String,
    /// Whether status messages are colored; symbols keep their theme color
    /// either way.
    pub color_text: bool,
    /// Symbol/color table for status output.
    pub theme: Theme,
}
