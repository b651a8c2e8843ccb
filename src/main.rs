//! Toy antivirus: interactive signature-scanning simulator.
//!
//! This is the main entry point for the CLI application.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;
use toy_antivirus::core::config::Config;
use toy_antivirus::core::error::{Error, Result};
use toy_antivirus::session::Session;
use toy_antivirus::ui::cli::{Cli, Commands, ConfigAction, OutputFormat};
use toy_antivirus::ui::command::SizeParsing;
use toy_antivirus::ui::shell::{Shell, ShellOptions};
use toy_antivirus::utils::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.suggestion() {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_config_path);
    let (config, load_error) = Config::load_for_run(&config_path);

    init_logging(LogConfig::from_flags(cli.verbose, cli.quiet, &config))?;

    log::info!("toy-antivirus v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration path: {}", config_path.display());
    if let Some(e) = load_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }

    match cli.command {
        None => run_shell(&config, false, cli.format),
        Some(Commands::Shell { lenient_sizes }) => run_shell(&config, lenient_sizes, cli.format),
        Some(Commands::Run {
            script,
            echo,
            lenient_sizes,
        }) => run_script(&config, &script, echo, lenient_sizes, cli.format),
        Some(Commands::Config { action }) => run_config(action, &config, &config_path),
        Some(Commands::Info) => run_info(&config, &config_path),
    }
}

/// Interactive session on stdin.
fn run_shell(config: &Config, lenient_sizes: bool, format: OutputFormat) -> Result<()> {
    let mut options = ShellOptions::interactive(&config.shell, format);
    if lenient_sizes {
        options.sizes = SizeParsing::Lenient;
    }

    let mut session = Session::new();
    let stdin = io::stdin();
    let stats = Shell::new(&mut session, io::stdout(), options).run(stdin.lock())?;
    log::debug!(
        "Session ended after {} command(s), {} error(s)",
        stats.commands,
        stats.errors
    );
    Ok(())
}

/// Feed a script file through the shell.
fn run_script(
    config: &Config,
    script: &Path,
    echo: bool,
    lenient_sizes: bool,
    format: OutputFormat,
) -> Result<()> {
    let file = File::open(script)
        .map_err(|e| Error::Io(format!("Failed to open script {}: {}", script.display(), e)))?;

    let mut options = ShellOptions::script(&config.shell, format, echo);
    if lenient_sizes {
        options.sizes = SizeParsing::Lenient;
    }

    log::info!("Running script {}", script.display());
    let mut session = Session::new();
    let stats = Shell::new(&mut session, io::stdout(), options).run(BufReader::new(file))?;

    if stats.errors > 0 {
        log::warn!(
            "Script finished with {} error(s) in {} command(s)",
            stats.errors,
            stats.commands
        );
    }
    Ok(())
}

/// Handle configuration commands.
fn run_config(action: ConfigAction, config: &Config, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Reset { yes } => {
            if Config::reset(path, yes)? {
                log::info!("Wrote default configuration to {}", path.display());
                println!("Configuration reset to defaults.");
            } else {
                println!("This will overwrite {}.", path.display());
                println!("Re-run with --yes to confirm.");
            }
        }
    }
    Ok(())
}

/// Show application information.
fn run_info(config: &Config, config_path: &Path) -> Result<()> {
    println!("Toy Antivirus - Signature Scanning Simulator");
    println!();
    println!("Version:          {}", env!("CARGO_PKG_VERSION"));
    println!("Config Path:      {}", config_path.display());
    println!();
    println!("Shell Settings:");
    println!("  Prompt:         {:?}", config.shell.prompt);
    println!("  Lenient Sizes:  {}", config.shell.lenient_size_parsing);
    println!("  Purge On Exit:  {}", config.shell.purge_on_exit);
    println!();
    println!("Logging:");
    println!("  Level:          {}", config.logging.log_level);
    Ok(())
}
