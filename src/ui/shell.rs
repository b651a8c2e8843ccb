//! Line-oriented command shell.
//!
//! The shell reads one command per line, dispatches it to a [`Session`] and
//! prints the result. Domain errors are printed and the session continues;
//! only output failures end the loop early.

use crate::core::config::ShellConfig;
use crate::core::error::Result;
use crate::session::Session;
use crate::ui::cli::OutputFormat;
use crate::ui::command::{ParseError, ShellCommand, SizeParsing};
use crate::ui::report::{self, TextReporter};
use std::io::{BufRead, Write};

/// Shell behavior switches.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Prompt printed before each read; `None` for scripts
    pub prompt: Option<String>,
    /// Print the title banner before the first prompt
    pub banner: bool,
    /// Print each command before running it
    pub echo: bool,
    pub sizes: SizeParsing,
    pub format: OutputFormat,
    /// Purge the session on EXIT and end of input
    pub purge_on_exit: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: None,
            banner: false,
            echo: false,
            sizes: SizeParsing::Strict,
            format: OutputFormat::Text,
            purge_on_exit: true,
        }
    }
}

impl ShellOptions {
    /// Options for an interactive session.
    pub fn interactive(config: &ShellConfig, format: OutputFormat) -> Self {
        Self {
            prompt: Some(config.prompt.clone()),
            banner: config.banner,
            echo: false,
            sizes: SizeParsing::from_lenient_flag(config.lenient_size_parsing),
            format,
            purge_on_exit: config.purge_on_exit,
        }
    }

    /// Options for running a script file.
    pub fn script(config: &ShellConfig, format: OutputFormat, echo: bool) -> Self {
        Self {
            prompt: None,
            banner: false,
            echo,
            sizes: SizeParsing::from_lenient_flag(config.lenient_size_parsing),
            format,
            purge_on_exit: config.purge_on_exit,
        }
    }
}

/// Whether to keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How a shell run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellStats {
    /// Lines that produced a command
    pub commands: usize,
    /// Lines that failed to parse or whose command failed
    pub errors: usize,
    /// Stopped by EXIT rather than end of input
    pub exited: bool,
}

/// Dispatches command lines to a session.
pub struct Shell<'a, W: Write> {
    session: &'a mut Session,
    out: W,
    options: ShellOptions,
    text: TextReporter,
    stats: ShellStats,
}

impl<'a, W: Write> Shell<'a, W> {
    /// Create a shell writing to `out`.
    pub fn new(session: &'a mut Session, out: W, options: ShellOptions) -> Self {
        Self {
            session,
            out,
            options,
            text: TextReporter::new(),
            stats: ShellStats::default(),
        }
    }

    /// Read and execute lines until EXIT or end of input.
    pub fn run<R: BufRead>(mut self, mut input: R) -> Result<ShellStats> {
        if self.options.banner {
            self.text.write_banner(&mut self.out)?;
        }

        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.options.prompt {
                write!(self.out, "\n{}", prompt)?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("End of input");
                if self.options.purge_on_exit {
                    self.session.purge();
                }
                break;
            }

            if self.execute_line(&line)? == Flow::Exit {
                self.stats.exited = true;
                break;
            }
        }

        self.out.flush()?;
        Ok(self.stats)
    }

    /// Parse and execute a single line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if self.options.echo && !trimmed.is_empty() {
            writeln!(self.out, "> {}", trimmed)?;
        }

        let command = match ShellCommand::parse(trimmed, self.options.sizes) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.report_parse_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        self.stats.commands += 1;
        self.execute(command)
    }

    fn report_parse_error(&mut self, e: &ParseError) -> Result<()> {
        self.stats.errors += 1;
        log::debug!("Rejected input: {}", e);
        writeln!(self.out, "{}", e)?;
        Ok(())
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        log::debug!("Executing {:?}", command);
        let outcome = match command {
            ShellCommand::AddSignature(pattern) => self
                .session
                .add_signature(&pattern)
                .map(|sig| format!("Added signature: '{}'", sig)),
            ShellCommand::DeleteSignature(pattern) => self
                .session
                .delete_signature(&pattern)
                .map(|sig| format!("Removed signature: '{}'", sig)),
            ShellCommand::Load { name, size } => self
                .session
                .load_file(&name, size)
                .map(|r| format!("Loaded file: {} ({} bytes)", r.name, r.size)),
            ShellCommand::Quarantine(name) => self
                .session
                .quarantine(&name)
                .map(|r| format!("Quarantined: {}", r.name)),
            ShellCommand::Restore(name) => self
                .session
                .restore(&name)
                .map(|r| format!("Restored: {}", r.name)),
            ShellCommand::Scan => {
                let result = self.session.scan();
                report::write_scan(&mut self.out, &result, self.options.format)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Report => {
                let snapshot = self.session.report();
                report::write_report(&mut self.out, &snapshot, self.options.format)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Purge => {
                self.session.purge();
                Ok("All data purged.".to_string())
            }
            ShellCommand::Help => {
                self.text.write_help(&mut self.out)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Exit => {
                writeln!(self.out, "Cleaning up and exiting...")?;
                if self.options.purge_on_exit {
                    self.session.purge();
                }
                return Ok(Flow::Exit);
            }
        };

        match outcome {
            Ok(message) => writeln!(self.out, "{}", message)?,
            Err(e) if e.is_recoverable() => {
                self.stats.errors += 1;
                log::debug!("{} error: {}", e.category(), e);
                writeln!(self.out, "Error: {}", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }
}
