//! Shell command parsing.
//!
//! A line is split into at most three whitespace-separated tokens (command,
//! first argument, second argument); anything after that is ignored. The
//! command token is matched case-insensitively.

use crate::core::error::Error;

/// How `LOAD` interprets its size argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeParsing {
    /// Reject anything that is not a non-negative integer
    #[default]
    Strict,
    /// C `atoi` semantics: leading digits, garbage becomes 0
    Lenient,
}

impl SizeParsing {
    pub fn from_lenient_flag(lenient: bool) -> Self {
        if lenient {
            SizeParsing::Lenient
        } else {
            SizeParsing::Strict
        }
    }

    /// Parse a byte count.
    pub fn parse(&self, raw: &str) -> Result<u64, Error> {
        match self {
            SizeParsing::Strict => raw
                .parse::<u64>()
                .map_err(|_| Error::InvalidSize(raw.to_string())),
            SizeParsing::Lenient => Ok(parse_leading_digits(raw)),
        }
    }
}

/// Leading decimal digits after an optional `+`; negative, empty or
/// overflowing input yields 0.
fn parse_leading_digits(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().unwrap_or(0)
}

/// A recognized shell command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    AddSignature(String),
    DeleteSignature(String),
    Load { name: String, size: u64 },
    Scan,
    Quarantine(String),
    Restore(String),
    Report,
    Purge,
    Help,
    Exit,
}

/// Why a line did not produce a command.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0} (type HELP for commands)")]
    Unknown(String),

    #[error("Error: {0}")]
    Invalid(#[from] Error),
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str, sizes: SizeParsing) -> Result<Option<Self>, ParseError> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(None);
        };
        let arg1 = tokens.next();
        let arg2 = tokens.next();

        let command = command.to_uppercase();
        let parsed = match command.as_str() {
            "ADD_SIG" => Self::AddSignature(required(arg1, "ADD_SIG <pattern>")?),
            "DEL_SIG" => Self::DeleteSignature(required(arg1, "DEL_SIG <pattern>")?),
            "LOAD" => {
                const USAGE: &str = "LOAD <name> <size>";
                let name = required(arg1, USAGE)?;
                let raw_size = required(arg2, USAGE)?;
                Self::Load {
                    name,
                    size: sizes.parse(&raw_size)?,
                }
            }
            "SCAN" => Self::Scan,
            "QUAR" => Self::Quarantine(required(arg1, "QUAR <name>")?),
            "RESTORE" => Self::Restore(required(arg1, "RESTORE <name>")?),
            "REPORT" => Self::Report,
            "PURGE" => Self::Purge,
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return Err(ParseError::Unknown(command)),
        };
        Ok(Some(parsed))
    }
}

fn required(arg: Option<&str>, usage: &'static str) -> Result<String, ParseError> {
    arg.map(str::to_string).ok_or(ParseError::Usage(usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<ShellCommand>, ParseError> {
        ShellCommand::parse(line, SizeParsing::Strict)
    }

    #[test]
    fn test_blank_line() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("   \t ").unwrap().is_none());
    }

    #[test]
    fn test_case_insensitive_command() {
        assert_eq!(
            parse("add_sig trojan").unwrap(),
            Some(ShellCommand::AddSignature("trojan".into()))
        );
        assert_eq!(parse("Scan").unwrap(), Some(ShellCommand::Scan));
        // Arguments keep their case
        assert_eq!(
            parse("QUAR Virus.EXE").unwrap(),
            Some(ShellCommand::Quarantine("Virus.EXE".into()))
        );
    }

    #[test]
    fn test_load() {
        assert_eq!(
            parse("LOAD setup.exe 2048").unwrap(),
            Some(ShellCommand::Load {
                name: "setup.exe".into(),
                size: 2048
            })
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            parse("DEL_SIG worm extra more").unwrap(),
            Some(ShellCommand::DeleteSignature("worm".into()))
        );
    }

    #[test]
    fn test_usage() {
        let err = parse("LOAD setup.exe").unwrap_err();
        assert_eq!(err.to_string(), "Usage: LOAD <name> <size>");

        let err = parse("restore").unwrap_err();
        assert_eq!(err.to_string(), "Usage: RESTORE <name>");
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("format c:").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command: FORMAT (type HELP for commands)"
        );
    }

    #[test]
    fn test_strict_size_rejects_garbage() {
        let err = parse("LOAD a.exe 12kb").unwrap_err();
        assert!(matches!(err, ParseError::Invalid(Error::InvalidSize(ref s)) if s == "12kb"));
        assert!(parse("LOAD a.exe -5").is_err());
    }

    #[test]
    fn test_lenient_size_like_atoi() {
        let lenient = SizeParsing::Lenient;
        assert_eq!(lenient.parse("12kb").unwrap(), 12);
        assert_eq!(lenient.parse("abc").unwrap(), 0);
        assert_eq!(lenient.parse("+7").unwrap(), 7);
        assert_eq!(lenient.parse("-5").unwrap(), 0);
        assert_eq!(lenient.parse("99999999999999999999999").unwrap(), 0);
    }
}
