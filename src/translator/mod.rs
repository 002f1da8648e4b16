use thiserror::Error;

use crate::mapping::MappingTable;

/// Why a DOS command line could not be translated
///
/// Every variant is a recoverable user-input error; callers are expected to
/// show the message and reprompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("command not found in mapping")]
    NotFound,

    #[error("too few arguments for command '{0}'")]
    TooFewArgs(String),

    #[error("too many arguments for command '{0}'")]
    TooManyArgs(String),
}

/// Raw input split into a command token and its verbatim argument text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub raw_args: Option<String>,
    pub arg_count: u32,
}

impl ParsedCommand {
    /// Split input on the first whitespace run.
    ///
    /// Everything before the run is the command name; everything from the
    /// run onward is kept verbatim (leading whitespace included), so quoting
    /// and spacing survive into the native command line untouched.
    /// `arg_count` is the number of whitespace-delimited tokens in that
    /// trailing text.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.find(char::is_whitespace) {
            Some(split) => {
                let (name, raw_args) = input.split_at(split);

                Self {
                    name: name.to_string(),
                    raw_args: Some(raw_args.to_string()),
                    arg_count: raw_args.split_whitespace().count() as u32,
                }
            }
            None => Self {
                name: input.to_string(),
                raw_args: None,
                arg_count: 0,
            },
        }
    }
}

/// Translate a raw DOS command line into its native equivalent.
///
/// The command token is matched against the table case-insensitively; the
/// argument text is never case-folded or reflowed. On success the native
/// command line is the mapped command with the argument text appended
/// verbatim.
pub fn translate(input: &str, table: &MappingTable) -> Result<String, TranslateError> {
    let parsed = ParsedCommand::parse(input);

    let entry = table.find(&parsed.name).ok_or(TranslateError::NotFound)?;

    if parsed.arg_count < entry.min_args {
        return Err(TranslateError::TooFewArgs(parsed.name));
    }

    if !entry.max_args.allows(parsed.arg_count) {
        return Err(TranslateError::TooManyArgs(parsed.name));
    }

    let mut native = entry.native_command.clone();
    if let Some(raw_args) = &parsed.raw_args {
        native.push_str(raw_args);
    }

    Ok(native)
}
