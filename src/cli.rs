//! The `Nyx` facade: registration, parsing entry points and status output.

use std::env;
use std::io;
use std::process;

use log::debug;

use crate::config::RunConfig;
use crate::help;
use crate::parser::{self, ParseError, ParseOutcome, Values};
use crate::prompt;
use crate::registry::{OptionSpec, Registry};
use crate::report;
use crate::theme::Level;

/// Declarative option parsing for one command-line tool.
///
/// ```
/// use nyx::{ArgKind, Nyx, OptionSpec, ParseOutcome};
///
/// let mut cli = Nyx::new();
/// cli.add_arg(OptionSpec::new("target", 't', "Target host").required());
/// cli.add_arg(OptionSpec::new("port", 'p', "Target port").typed(ArgKind::Port));
///
/// let outcome = cli.try_parse_from(["--target", "10.0.0.1", "--port", "8080"]).unwrap();
/// let ParseOutcome::Success(values) = outcome else { panic!("no help requested") };
/// assert_eq!(values.get_str("target"), Some("10.0.0.1"));
/// assert_eq!(values.get_str("port"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nyx {
    registry: Registry,
    config: RunConfig,
}

impl Nyx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option. Last write wins on duplicate names or aliases.
    pub fn add_arg(&mut self, spec: OptionSpec) -> &mut Self {
        debug!("registering option --{} (-{})", spec.long(), spec.short());
        self.registry.add(spec);
        self
    }

    /// Set description, example usage, color policy and theme in one call.
    pub fn configure(&mut self, config: RunConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Parse the given tokens without touching the process: help requests
    /// and fatal conditions are returned, not acted on.
    pub fn try_parse_from<I, S>(&mut self, tokens: I) -> Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        parser::parse_tokens(&mut self.registry, &tokens)
    }

    /// Parse the process arguments, applying the full exit contract:
    /// `--help`/`-h` renders help and exits 0; any fatal parse condition is
    /// reported on the error channel and exits 1; success returns the bound
    /// values silently.
    pub fn parse_args(&mut self) -> Values {
        let tokens: Vec<String> = env::args().skip(1).collect();
        match parser::parse_tokens(&mut self.registry, &tokens) {
            Ok(ParseOutcome::Success(values)) => values,
            Ok(ParseOutcome::Help) => {
                print!("{}", self.render_help());
                process::exit(0);
            }
            Err(err) => {
                self.error(&err.to_string());
                process::exit(1);
            }
        }
    }

    /// Fill unset values by prompting on stdin/stdout instead of parsing
    /// tokens, then return everything bound so far.
    pub fn interactive(&mut self) -> io::Result<Values> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt::fill_values(&mut self.registry, &self.config, stdin.lock(), stdout.lock())?;
        Ok(self.registry.values())
    }

    /// The help text for the current registration state.
    pub fn render_help(&self) -> String {
        help::generate_help(&self.config, &self.registry, &help::program_name())
    }

    /// Snapshot of every bound value.
    pub fn values(&self) -> Values {
        self.registry.values()
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn emit(&self, level: Level, message: &str) {
        report::emit(self.config.theme, level, message, self.config.color_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ArgValue;
    use crate::theme::Theme;
    use crate::validate::ArgKind;

    fn scanner() -> Nyx {
        let mut cli = Nyx::new();
        cli.configure(RunConfig {
            description: "Port scanner".to_string(),
            example_usage: "--target 10.0.0.1 --port 8080".to_string(),
            color_text: false,
            theme: Theme::Default,
        });
        cli.add_arg(OptionSpec::new("target", 't', "Target host").required());
        cli.add_arg(
            OptionSpec::new("port", 'p', "Target port")
                .required()
                .typed(ArgKind::Port),
        );
        cli.add_arg(OptionSpec::new("verbose", 'v', "Chatty output"));
        cli
    }

    #[test]
    fn test_full_parse_binds_registry_and_values() {
        let mut cli = scanner();
        let outcome = cli
            .try_parse_from(["--target", "10.0.0.1", "--port", "8080", "--verbose"])
            .unwrap();

        let ParseOutcome::Success(values) = outcome else {
            panic!("expected Success");
        };
        assert_eq!(values.get_str("target"), Some("10.0.0.1"));
        assert_eq!(values.get_str("port"), Some("8080"));
        assert!(values.get("verbose").is_some_and(ArgValue::as_flag));

        // bindings are mirrored on the registry
        assert!(cli.registry().get("target").unwrap().was_supplied());
        assert_eq!(cli.values(), values);
    }

    #[test]
    fn test_help_request_is_surfaced_not_acted_on() {
        let mut cli = scanner();
        let outcome = cli.try_parse_from(["--help"]).unwrap();
        assert_eq!(outcome, ParseOutcome::Help);
    }

    #[test]
    fn test_missing_required_is_an_error() {
        let mut cli = scanner();
        let err = cli.try_parse_from(["--verbose"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingRequired(vec!["target".to_string(), "port".to_string()])
        );
    }

    #[test]
    fn test_render_help_reflects_configuration() {
        let cli = scanner();
        let help = cli.render_help();
        assert!(help.starts_with("Port scanner"));
        assert!(help.contains("--target 10.0.0.1 --port 8080"));
        assert!(help.contains("--verbose"));
    }

    #[test]
    fn test_configure_replaces_settings() {
        let mut cli = Nyx::new();
        cli.configure(RunConfig {
            theme: Theme::Stealth,
            color_text: true,
            ..RunConfig::default()
        });
        assert_eq!(cli.config().theme, Theme::Stealth);
        assert!(cli.config().color_text);
    }
}
