// CodeBug: syntax validator for the CodeBug teaching language

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codebug::{ValidationResult, ValidationService};

/// Exit status when the input could not be read
const EXIT_IO_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to validate; omit or pass `-` to read stdin
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match read_source(cli.file.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_IO_ERROR);
        }
    };

    let result = ValidationService::new().validate(&source);

    if let Err(e) = report(&result, &cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(EXIT_IO_ERROR);
    }

    if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_source(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn report(result: &ValidationResult, cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let line = match (&result.message, result.valid) {
        (_, true) => "Syntax is correct.".to_string(),
        (Some(message), false) => message.clone(),
        (None, false) => "Syntax error.".to_string(),
    };

    if cli.no_color {
        println!("{}", line);
    } else if result.valid {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }

    Ok(())
}
