//! Token scanning and value binding for registered options.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::registry::{ArgValue, Registry};
use crate::validate::{invalid_value_message, validate, ArgKind};

/// Errors that can occur during argument parsing. All of them are fatal to
/// the run: either every required option ends up bound, or the caller stops.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("argument '--{0}' requires a value but none was provided")]
    MissingValue(String),

    #[error("the following required arguments are missing: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("{}", invalid_value_message(*.kind, .option, .value))]
    InvalidValue {
        option: String,
        value: String,
        kind: ArgKind,
    },
}

/// Outcome of parsing arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Successfully parsed arguments with every bound value.
    Success(Values),
    /// User requested help (-h or --help); nothing was validated.
    Help,
}

/// Bound values keyed by long option name - the primary parse result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: HashMap<String, ArgValue>,
}

impl Values {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries.get(name)
    }

    /// The string value bound to `name`, if there is one.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(ArgValue::as_str)
    }

    /// True when `name` was supplied, either with a value or as a bare flag.
    pub fn is_set(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Copy every entry onto a caller-supplied result object by name.
    pub fn apply_to(&self, namespace: &mut dyn Namespace) {
        for (name, value) in &self.entries {
            namespace.bind(name, value);
        }
    }

    pub(crate) fn insert(&mut self, name: String, value: ArgValue) {
        self.entries.insert(name, value);
    }
}

/// A result object that receives bound values by name.
///
/// [`Values`] is the default namespace; implement this to have parsed
/// values copied onto your own structure instead of reading the map.
pub trait Namespace {
    fn bind(&mut self, name: &str, value: &ArgValue);
}

impl Namespace for Values {
    fn bind(&mut self, name: &str, value: &ArgValue) {
        self.insert(name.to_string(), value.clone());
    }
}

/// Parse a flat token sequence (program name excluded) against the registry.
///
/// Single forward pass with one-token lookahead:
/// `--help`/`-h` anywhere short-circuits to [`ParseOutcome::Help`] before
/// any validation runs; unrecognized tokens are skipped; a recognized option
/// consumes the next token as its value unless that token starts with a
/// dash, in which case the option either fails (required) or binds `true`
/// (optional). After the pass, required options that were never supplied are
/// reported together in one error.
pub fn parse_tokens(registry: &mut Registry, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
    for (i, token) in tokens.iter().enumerate() {
        if token == "--help" || token == "-h" {
            return Ok(ParseOutcome::Help);
        }

        let Some(name) = registry.resolve_token(token) else {
            if token.starts_with('-') {
                debug!("skipping unrecognized option token: {token}");
            }
            continue;
        };
        let name = name.to_string();

        match tokens.get(i + 1) {
            // A non-dash follower is this option's value. The value token
            // stays in the stream; it fails resolution next iteration.
            Some(value) if !value.starts_with('-') => {
                registry.bind(&name, ArgValue::Str(value.clone()));
                if let Some(kind) = registry.get(&name).and_then(|spec| spec.kind()) {
                    if !validate(kind, value) {
                        return Err(ParseError::InvalidValue {
                            option: name,
                            value: value.clone(),
                            kind,
                        });
                    }
                }
            }
            // No usable follower: flags default to true, required options
            // have nothing to bind.
            _ => {
                if registry.get(&name).is_some_and(|spec| spec.is_required()) {
                    return Err(ParseError::MissingValue(name));
                }
                registry.bind(&name, ArgValue::Flag(true));
            }
        }
    }

    let missing = registry.missing_required();
    if !missing.is_empty() {
        return Err(ParseError::MissingRequired(missing));
    }

    Ok(ParseOutcome::Success(registry.values()))
}
