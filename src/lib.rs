//! nyx - declarative CLI option parsing for small tools.
//!
//! This library provides the core functionality for declaring named
//! options, parsing process arguments into validated values, falling back
//! to interactive prompts, and printing themed status lines.

pub mod cli;
pub mod config;
pub mod exec;
pub mod help;
pub mod parser;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod theme;
pub mod validate;

pub use cli::Nyx;
pub use config::RunConfig;
pub use exec::{run_isolated, ExecError};
pub use help::generate_help;
pub use parser::{parse_tokens, Namespace, ParseError, ParseOutcome, Values};
pub use registry::{ArgValue, OptionSpec, Registry};
pub use report::{emit, format_status};
pub use theme::{Level, Theme};
pub use validate::{validate, ArgKind};
