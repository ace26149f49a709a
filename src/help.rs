//! Help text generation for registered options.

use std::env;
use std::path::Path;

use crate::config::RunConfig;
use crate::registry::Registry;

/// Generate the full help text.
///
/// Layout: program description, a usage line synthesized from the program
/// name and the configured example, then one row per registered option in
/// registration order.
pub fn generate_help(config: &RunConfig, registry: &Registry, program_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&config.description);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Usage: {} {}\n\n",
        program_name, config.example_usage
    ));
    out.push_str("Options:\n");
    for spec in registry.iter() {
        out.push_str(&format!(
            "\t--{},\t-{}\trequired: {}\t {}\n",
            spec.long(),
            spec.short(),
            spec.is_required(),
            spec.description()
        ));
    }
    out
}

/// The basename of the running executable, for the usage line.
pub(crate) fn program_name() -> String {
    env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or("program")
        .to_string()
}
