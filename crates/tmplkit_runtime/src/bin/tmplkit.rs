//! tmplkit CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tmplkit_language::MissingKey;
use tmplkit_runtime::{Session, read_records};

const LOG_TARGET: &str = "tmplkit::cli";

/// What the invocation asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Command {
    /// Print records the expression admits.
    #[default]
    Filter,
    /// Print the expression's value for each record.
    Eval,
    /// List the registered function names.
    Functions,
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    command: Option<Command>,
    expression: Option<String>,
    input: Option<PathBuf>,
    missing_key: MissingKey,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e
                .downcast_ref::<tmplkit_foundation::Error>()
                .and_then(|e| e.context.as_ref())
            {
                eprint!("{context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "--missing-key" => {
                i += 1;
                if i >= args.len() {
                    return Err("--missing-key requires a value".into());
                }
                config.missing_key = args[i].parse()?;
            }
            arg if arg.starts_with("--missing-key=") => {
                config.missing_key = arg["--missing-key=".len()..].parse()?;
            }
            "-" => positional.push(args[i].clone()),
            arg if arg.starts_with('-') && positional.len() != 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            // the expression may itself start with '-' (a negative literal)
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    if let Some(command) = positional.next() {
        config.command = Some(match command.as_str() {
            "filter" => Command::Filter,
            "eval" => Command::Eval,
            "functions" => Command::Functions,
            other => return Err(format!("unknown command: {other}").into()),
        });
    }
    config.expression = positional.next();
    config.input = positional
        .next()
        .filter(|path| *path != "-")
        .map(PathBuf::from);
    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument: {extra}").into());
    }

    Ok(config)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbosity >= 2)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tmplkit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbosity);

    let session = Session::new().with_missing_key(config.missing_key);
    let command = config.command.unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if command == Command::Functions {
        for name in session.registry().names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let Some(expression) = config.expression else {
        print_help();
        return Err("missing expression".into());
    };

    let text = match &config.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => io::read_to_string(io::stdin())?,
    };
    let records = read_records(&text)?;
    log::debug!(target: LOG_TARGET, "read {} records", records.len());

    match command {
        Command::Filter => {
            for record in session.filter(&expression, &records)? {
                writeln!(out, "{}", record.to_json_string(false)?)?;
            }
        }
        Command::Eval => {
            for value in session.eval(&expression, &records)? {
                writeln!(out, "{value}")?;
            }
        }
        Command::Functions => {}
    }
    out.flush()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mtmplkit\x1b[0m - Filter and evaluate JSON records with template expressions

\x1b[1mUSAGE:\x1b[0m
    tmplkit [OPTIONS] filter EXPR [FILE]
    tmplkit [OPTIONS] eval EXPR [FILE]
    tmplkit functions

\x1b[1mARGUMENTS:\x1b[0m
    EXPR      Expression, e.g. '(gt (int .cnt2014) 2)'
    [FILE]    JSON array or JSON lines (default: stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -v, --verbose            Raise log level (repeatable; RUST_LOG overrides)
    --missing-key MODE       error (default) or zero

\x1b[1mEXAMPLES:\x1b[0m
    tmplkit filter '(and .published (gt (int .year) 2000))' books.json
    cat log.jsonl | tmplkit eval '.title | slug'
    tmplkit --missing-key zero filter '.featured' items.jsonl"
    );
}
