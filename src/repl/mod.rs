//! The session loop and command dispatcher.
//!
//! Reads one line per prompt, resolves a command keyword, splits the
//! remainder into positional arguments, invokes the handler, and prints the
//! response. Every handler failure becomes a response string; the only ways
//! out of the loop are the `Goodbye!` sentinel and end of input.
//!
//! The loop is generic over its reader and writer so tests can drive whole
//! sessions through in-memory buffers. Logging goes through `tracing`
//! (stderr in `main`), keeping stdout reserved for the conversation.

use crate::commands::{handlers, CommandKind, CommandSpec, COMMAND_TABLE, GOODBYE};
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use once_cell::sync::Lazy;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Command table sorted longest keyword first.
///
/// Matching is longest-prefix-wins; the sort is stable, so declaration
/// order breaks ties between equal-length keywords.
static COMMANDS_BY_LENGTH: Lazy<Vec<&'static CommandSpec>> = Lazy::new(|| {
    let mut specs: Vec<&CommandSpec> = COMMAND_TABLE.iter().collect();
    specs.sort_by(|a, b| b.keyword.len().cmp(&a.keyword.len()));
    specs
});

/// ASCII case-insensitive prefix test.
fn starts_with_ignore_ascii_case(input: &str, keyword: &str) -> bool {
    input.len() >= keyword.len()
        && input.as_bytes()[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

/// Resolve the command a line of input starts with.
///
/// Returns the matched table entry and the remainder of the input past the
/// keyword, trimmed. The remainder is sliced from the original input, so
/// argument case survives even though matching ignores case. The matched
/// prefix is ASCII, so the slice boundary is always valid.
pub fn resolve_command(input: &str) -> Option<(&'static CommandSpec, &str)> {
    COMMANDS_BY_LENGTH
        .iter()
        .find(|spec| starts_with_ignore_ascii_case(input, spec.keyword))
        .map(|spec| (*spec, input[spec.keyword.len()..].trim()))
}

/// Split the remainder after the keyword into positional arguments.
///
/// An empty remainder is zero arguments. Otherwise the split is into
/// exactly two parts on the first `", "`; if that separator is absent, on
/// the last single space; if neither is present the remainder is one
/// argument. Parts are trimmed.
pub fn split_args(remainder: &str) -> Vec<&str> {
    if remainder.is_empty() {
        Vec::new()
    } else if let Some((first, second)) = remainder.split_once(", ") {
        vec![first.trim(), second.trim()]
    } else if let Some((first, second)) = remainder.rsplit_once(' ') {
        vec![first.trim(), second.trim()]
    } else {
        vec![remainder]
    }
}

/// Invoke the handler for a resolved command.
///
/// Two gates run before the handler: the second argument (when present)
/// must parse as an integer — the parsed value is discarded and the
/// handler receives the original string — and the argument count must
/// match the command's declared arity. The format gate runs first, so an
/// unparseable second argument reports as a format error even when the
/// count is also wrong.
pub fn dispatch(
    book: &mut AddressBook,
    spec: &CommandSpec,
    args: &[&str],
) -> CommandResult<String> {
    if let Some(second) = args.get(1) {
        second
            .parse::<i64>()
            .map_err(|_| CommandError::WrongPhoneFormat)?;
    }

    if args.len() < spec.min_args || args.len() > spec.max_args {
        return Err(CommandError::WrongArguments);
    }

    match spec.kind {
        CommandKind::Hello => Ok(handlers::hello()),
        CommandKind::AddContact => handlers::add_contact(book, args[0], args.get(1).copied()),
        CommandKind::AddPhone => handlers::add_phone(book, args[0], args[1]),
        CommandKind::ChangePhones => handlers::change_phones(book, args[0], args[1]),
        CommandKind::RemovePhones => handlers::remove_phones(book, args[0]),
        CommandKind::ShowContact => handlers::show_contact(book, args[0]),
        CommandKind::ShowAll => Ok(handlers::show_all(book)),
        CommandKind::Exit => Ok(handlers::exit()),
    }
}

/// Process one trimmed line of input into a response string.
pub fn process_line(book: &mut AddressBook, input: &str) -> String {
    match resolve_command(input) {
        None => {
            let token = input.split_whitespace().next().unwrap_or("");
            warn!(token, "unrecognized input");
            format!("Unknown command \"{}\"", token)
        }
        Some((spec, remainder)) => {
            debug!(command = spec.keyword, "resolved command");
            let args = split_args(remainder);
            dispatch(book, spec, &args).unwrap_or_else(|err| {
                warn!(command = spec.keyword, %err, "command rejected");
                err.to_string()
            })
        }
    }
}

/// The blocking read-eval-print session.
pub struct Repl<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a session over the given reader and writer.
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            prompt: prompt.into(),
        }
    }

    /// Run until the exit sentinel is printed or the reader hits EOF.
    pub fn run(&mut self, book: &mut AddressBook) -> std::io::Result<()> {
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let response = process_line(book, line.trim());
            writeln!(self.writer, "{}", response)?;

            if response == GOODBYE {
                break;
            }
        }
        Ok(())
    }
}
