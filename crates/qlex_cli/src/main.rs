//! qlex: lex q source files.
//!
//! Usage:
//!   qlex [options] [file...]
//!
//! Prints the token stream of each input, optionally with trivia and doc
//! comments, as text or JSON. Exits 1 when any input produced an error
//! diagnostic and 2 when options or inputs could not be loaded.

mod records;

use clap::{Parser as ClapParser, ValueEnum};
use qlex_diagnostics::{messages, Diagnostic};
use qlex_options::{LexOptions, LiteralMode, OptionsError};
use qlex_scanner::{ScanOutput, Scanner};
use records::FileRecord;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;
use std::sync::Once;

#[derive(ClapParser, Debug)]
#[command(name = "qlex", version, about = "qlex - a lexer for q source files")]
struct Cli {
    /// q files to lex.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to qlex.json. By default the nearest one above the working directory is used.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print trivia (whitespace and comments) along with tokens.
    #[arg(long)]
    trivia: bool,

    /// Print preserved doc comments.
    #[arg(long)]
    docs: bool,

    /// Verify that the scanned spans reconstruct each input exactly.
    #[arg(long)]
    check: bool,

    /// Literal scanner to use after the classifier.
    #[arg(long, value_enum)]
    literals: Option<LiteralArg>,

    /// Let longer identifiers win over reserved-word prefixes.
    #[arg(long = "longer-alt")]
    longer_alt: bool,

    /// Stop collecting diagnostics after this many per input.
    #[arg(long = "max-diagnostics")]
    max_diagnostics: Option<usize>,

    /// Read source from standard input.
    #[arg(long)]
    stdin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LiteralArg {
    Q,
    None,
}

impl From<LiteralArg> for LiteralMode {
    fn from(arg: LiteralArg) -> Self {
        match arg {
            LiteralArg::Q => LiteralMode::Q,
            LiteralArg::None => LiteralMode::None,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    process::exit(run(&cli));
}

/// A source buffer and the name it is reported under.
struct Input {
    name: String,
    text: String,
}

fn run(cli: &Cli) -> i32 {
    let options = match resolve_options(cli) {
        Ok(options) => options,
        Err(e) => {
            print_error(&e.to_string());
            return 2;
        }
    };
    tracing::debug!(?options, "resolved options");

    let inputs = match read_inputs(cli) {
        Ok(inputs) => inputs,
        Err(msg) => {
            print_error(&msg);
            return 2;
        }
    };
    if inputs.is_empty() {
        print_error("No input files.");
        return 2;
    }

    let use_color = std::io::stderr().is_terminal();
    let mut error_count = 0;
    let mut records = Vec::new();
    let outputs: Vec<_> = inputs
        .iter()
        .map(|input| Scanner::with_options(&input.text, &options).scan_all())
        .collect();

    for (input, output) in inputs.iter().zip(&outputs) {
        let mut diagnostics: Vec<Diagnostic> = output
            .diagnostics()
            .iter()
            .cloned()
            .map(|d| d.with_file(input.name.as_str()))
            .collect();
        if output.diagnostics().dropped() > 0 {
            let dropped = output.diagnostics().dropped().to_string();
            diagnostics.push(
                Diagnostic::new(&messages::DIAGNOSTICS_DROPPED_0, &[dropped.as_str()])
                    .with_file(input.name.as_str()),
            );
        }
        if cli.check && output.reconstruct() != input.text {
            diagnostics.push(
                Diagnostic::new(&messages::SOURCE_NOT_RECONSTRUCTED_0, &[input.name.as_str()])
                    .with_file(input.name.as_str()),
            );
        }
        error_count += output.diagnostics().dropped();
        error_count += diagnostics.iter().filter(|d| d.is_error()).count();

        match cli.format {
            Format::Text => print_text(cli, &input.name, output),
            Format::Json => records.push(FileRecord::new(&input.name, output, cli.trivia, cli.docs)),
        }
        for diagnostic in &diagnostics {
            print_diagnostic(diagnostic, use_color);
        }
    }

    if cli.format == Format::Json {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                print_error(&format!("Failed to serialize output: {}", e));
                return 2;
            }
        }
    }

    if error_count > 0 {
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                error_count,
                if error_count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                error_count,
                if error_count == 1 { "" } else { "s" }
            );
        }
        return 1;
    }
    0
}

/// Options from `--config` or the nearest `qlex.json`, overridden by flags.
fn resolve_options(cli: &Cli) -> Result<LexOptions, OptionsError> {
    let options = match &cli.config {
        Some(path) => qlex_options::read_options(path)?,
        None => match std::env::current_dir() {
            Ok(dir) => qlex_options::discover_options(&dir)?,
            Err(_) => LexOptions::default(),
        },
    };
    Ok(apply_flags(cli, options))
}

fn apply_flags(cli: &Cli, mut options: LexOptions) -> LexOptions {
    if let Some(literals) = cli.literals {
        options.literals = literals.into();
    }
    if cli.longer_alt {
        options.identifier_longer_alt = true;
    }
    if cli.max_diagnostics.is_some() {
        options.max_diagnostics = cli.max_diagnostics;
    }
    if cli.check || cli.trivia {
        options.keep_trivia = true;
    }
    options
}

fn read_inputs(cli: &Cli) -> Result<Vec<Input>, String> {
    let mut inputs = Vec::new();
    if cli.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("Failed to read standard input: {}", e))?;
        inputs.push(Input {
            name: "<stdin>".to_string(),
            text,
        });
    }
    for path in &cli.files {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
        inputs.push(Input {
            name: path.display().to_string(),
            text,
        });
    }
    Ok(inputs)
}

fn print_text(cli: &Cli, name: &str, output: &ScanOutput<'_>) {
    let use_color = std::io::stdout().is_terminal();
    if use_color {
        println!("{}{}{}", CYAN, name, RESET);
    } else {
        println!("{}", name);
    }

    let tokens = if cli.trivia {
        output.tokens_with_trivia()
    } else {
        output.tokens().to_vec()
    };
    for token in &tokens {
        let position = format!("{}:{}", token.line, token.column + 1);
        if use_color && token.suppressed {
            println!(
                "{}{:>8}  {:<28} {:?}{}",
                GRAY,
                position,
                token.kind.to_string(),
                token.lexeme,
                RESET
            );
        } else {
            println!("{:>8}  {:<28} {:?}", position, token.kind.to_string(), token.lexeme);
        }
    }

    if cli.docs {
        for doc in output.preserved() {
            println!("doc {}..{}  {}", doc.start, doc.end, doc.text(output.source()));
        }
    }
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(position) = diag.position {
                eprint!("({})", position);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}Q{}{}: {}",
            BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_config_is_an_error() {
        let cli = Cli::parse_from(["qlex", "--config", "/nonexistent/qlex.json", "a.q"]);
        assert!(matches!(resolve_options(&cli), Err(OptionsError::Io { .. })));
    }

    #[test]
    fn flags_override_options() {
        let cli = Cli::parse_from([
            "qlex",
            "--literals",
            "none",
            "--longer-alt",
            "--max-diagnostics",
            "5",
            "--check",
            "a.q",
        ]);
        assert_eq!(cli.files, vec![PathBuf::from("a.q")]);
        let file_options = LexOptions {
            keep_trivia: false,
            ..LexOptions::default()
        };
        assert_eq!(
            apply_flags(&cli, file_options),
            LexOptions {
                literals: LiteralMode::None,
                identifier_longer_alt: true,
                max_diagnostics: Some(5),
                keep_trivia: true,
            }
        );
    }

    #[test]
    fn file_options_survive_without_flags() {
        let cli = Cli::parse_from(["qlex", "a.q"]);
        let file_options = LexOptions {
            identifier_longer_alt: true,
            max_diagnostics: Some(1),
            ..LexOptions::default()
        };
        assert_eq!(apply_flags(&cli, file_options.clone()), file_options);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn json_format_flag() {
        let cli = Cli::parse_from(["qlex", "--format", "json", "--stdin"]);
        assert_eq!(cli.format, Format::Json);
        assert!(cli.stdin);
        assert!(cli.files.is_empty());
    }
}
