//! Option declarations and the registry that resolves tokens to them.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::validate::ArgKind;

/// A value bound to an option after parsing or prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A string taken from the token stream or a prompt.
    Str(String),
    /// Presence-flag semantics: the option appeared with no value.
    Flag(bool),
}

impl ArgValue {
    /// The string form of this value, if it has one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            ArgValue::Flag(_) => None,
        }
    }

    /// True when the option was supplied as a bare flag.
    pub fn as_flag(&self) -> bool {
        matches!(self, ArgValue::Flag(true))
    }
}

/// One declared option.
///
/// Built with a chain of calls:
///
/// ```
/// use nyx::{ArgKind, OptionSpec};
///
/// let spec = OptionSpec::new("port", 'p', "Target port")
///     .required()
///     .typed(ArgKind::Port);
/// assert!(spec.is_required());
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    long: String,
    short: char,
    description: String,
    required: bool,
    kind: Option<ArgKind>,
    value: Option<ArgValue>,
    supplied: bool,
}

impl OptionSpec {
    /// Declare an option with its long name, single-character short alias
    /// and description. Optional and untyped until the builder methods say
    /// otherwise.
    pub fn new(long: impl Into<String>, short: char, description: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short,
            description: description.into(),
            required: false,
            kind: None,
            value: None,
            supplied: false,
        }
    }

    /// Mark the option as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a value type; supplied values are checked against it.
    pub fn typed(mut self, kind: ArgKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> Option<ArgKind> {
        self.kind
    }

    /// The bound value, unset until a parse or prompt succeeds.
    pub fn value(&self) -> Option<&ArgValue> {
        self.value.as_ref()
    }

    /// Whether a parse or prompt supplied this option.
    pub fn was_supplied(&self) -> bool {
        self.supplied
    }
}

/// The set of declared options, keyed by long name, with a short-alias
/// index and stable registration order for help rendering.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: IndexMap<String, OptionSpec>,
    short_index: HashMap<char, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option.
    ///
    /// Registering the same long name or short alias twice silently
    /// overwrites the earlier entry (last write wins). The short alias `h`
    /// is effectively reserved: `-h` is recognized as the help token before
    /// alias resolution runs, so such an option is reachable only through
    /// its long form.
    pub fn add(&mut self, spec: OptionSpec) {
        self.short_index.insert(spec.short, spec.long.clone());
        self.options.insert(spec.long.clone(), spec);
    }

    pub fn get(&self, long: &str) -> Option<&OptionSpec> {
        self.options.get(long)
    }

    /// Resolve a dash-prefixed token to the long name it names.
    ///
    /// `--name` resolves through the long-name map, `-c` (exactly one dash
    /// and one character) through the short-alias index. Every other shape,
    /// including bare `-` and clustered shorts, is unrecognized.
    pub fn resolve_token(&self, token: &str) -> Option<&str> {
        if let Some(long) = token.strip_prefix("--") {
            return self
                .options
                .get_key_value(long)
                .map(|(name, _)| name.as_str());
        }
        if let Some(rest) = token.strip_prefix('-') {
            let mut chars = rest.chars();
            if let (Some(alias), None) = (chars.next(), chars.next()) {
                return self.short_index.get(&alias).map(String::as_str);
            }
        }
        None
    }

    /// Options in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Bind a value and mark the option as supplied.
    pub(crate) fn bind(&mut self, long: &str, value: ArgValue) {
        if let Some(spec) = self.options.get_mut(long) {
            spec.value = Some(value);
            spec.supplied = true;
        }
    }

    /// Bind a value without the supplied marker (empty prompt responses).
    pub(crate) fn set_value(&mut self, long: &str, value: ArgValue) {
        if let Some(spec) = self.options.get_mut(long) {
            spec.value = Some(value);
        }
    }

    /// Required options never marked as supplied, in registration order.
    pub fn missing_required(&self) -> Vec<String> {
        self.options
            .values()
            .filter(|spec| spec.required && !spec.supplied)
            .map(|spec| spec.long.clone())
            .collect()
    }

    /// Snapshot of every bound value, keyed by long name.
    pub fn values(&self) -> crate::parser::Values {
        let mut values = crate::parser::Values::default();
        for spec in self.options.values() {
            if let Some(value) = &spec.value {
                values.insert(spec.long.clone(), value.clone());
            }
        }
        values
    }
}
