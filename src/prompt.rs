//! Interactive fallback: fill unset option values from an input stream.

use std::io::{self, BufRead, Write};

use crossterm::style::{style, Stylize};
use log::debug;

use crate::config::RunConfig;
use crate::registry::{ArgValue, Registry};
use crate::report;
use crate::theme::Level;
use crate::validate::{invalid_value_message, validate, ArgKind};

/// Prompt symbol used when the caller does not pick one.
pub const DEFAULT_SYMBOL: &str = "?";

/// Walk the registry in registration order and prompt for values.
///
/// Required options that are still unset are asked for until the response is
/// non-empty and valid for their kind; each rejected response prints an
/// error line and asks again. Optional options are asked once: an empty
/// response is bound verbatim (no validation), a non-empty one is validated
/// like the required path. Options that already have a value are skipped.
///
/// Generic over the streams so tests can drive it with in-memory buffers;
/// [`crate::Nyx::interactive`] wires it to stdin/stdout.
pub fn fill_values<R: BufRead, W: Write>(
    registry: &mut Registry,
    config: &RunConfig,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let specs: Vec<(String, bool, Option<ArgKind>, bool)> = registry
        .iter()
        .map(|spec| {
            (
                spec.long().to_string(),
                spec.is_required(),
                spec.kind(),
                spec.value().is_some(),
            )
        })
        .collect();

    for (name, required, kind, bound) in specs {
        if bound {
            debug!("skipping prompt for already-bound option: {name}");
            continue;
        }

        let hint = kind.map(ArgKind::hint).unwrap_or("a string of text");
        let verb = if required { "Enter" } else { "Optional" };

        loop {
            write!(
                output,
                "{} {verb} {name} ({hint}): ",
                prompt_tag(config, DEFAULT_SYMBOL)
            )?;
            output.flush()?;

            let response = read_response(&mut input)?;

            if response.is_empty() {
                if required {
                    // nothing to validate or report, ask again
                    continue;
                }
                // optional: accepted verbatim, opts out of validation
                registry.set_value(&name, ArgValue::Str(response));
                break;
            }

            match kind {
                Some(kind) if !validate(kind, &response) => {
                    let message = invalid_value_message(kind, &name, &response);
                    writeln!(
                        output,
                        "{}",
                        report::format_status(
                            config.theme,
                            Level::Error,
                            &message,
                            config.color_text
                        )
                    )?;
                }
                _ => {
                    registry.bind(&name, ArgValue::Str(response));
                    break;
                }
            }
        }
    }

    Ok(())
}

/// `[?]` with the theme's success color, or plain when colors are off.
fn prompt_tag(config: &RunConfig, symbol: &str) -> String {
    if config.color_text {
        let (_, color) = config.theme.style(Level::Success);
        format!("[{}]", style(symbol).with(color))
    } else {
        format!("[{symbol}]")
    }
}

/// One trimmed line from the stream; a closed stream is an error rather
/// than an endless re-prompt.
fn read_response<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed while prompting for option values",
        ));
    }
    Ok(line.trim().to_string())
}
