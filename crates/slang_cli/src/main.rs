//! slang: Command-line front end for the slang scanner.
//!
//! Usage:
//!   slang [options] [script]
//!
//! With a script, scans it and prints its tokens. Without one, starts an
//! interactive prompt that scans each line as it is entered.

mod logger;
mod render;

use clap::Parser as ClapParser;
use logger::Logger;
use slang_core::SlangError;
use slang_driver::{ExitCode, Session};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "slang", about = "slang - a small scripting language", version)]
struct Cli {
    /// Script to scan. Omit to start the interactive prompt.
    #[arg(value_name = "script")]
    scripts: Vec<PathBuf>,

    /// Print tokens as JSON objects, one per line.
    #[arg(long)]
    json: bool,

    /// Render diagnostics as annotated source snippets.
    #[arg(long)]
    pretty: bool,

    /// Log driver activity to stderr.
    #[arg(long)]
    debug: bool,
}

/// Settings derived from the command line.
#[derive(Debug, Clone, Copy)]
struct RunOptions {
    json: bool,
    pretty: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            pretty: cli.pretty,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    Logger::init(cli.debug);
    let exit_code = run_cli(&cli);
    debug_log!("exiting with code {}", exit_code.code());
    process::exit(exit_code.code());
}

/// Pick the run mode from the positional arguments and carry it out.
fn run_cli(cli: &Cli) -> ExitCode {
    let options = RunOptions::from(cli);
    match cli.scripts.as_slice() {
        [] => run_prompt(options),
        [script] => run_file(script, options),
        _ => {
            let err = SlangError::Usage;
            print_error(&err.to_string());
            ExitCode::from(&err)
        }
    }
}

fn new_session(options: RunOptions) -> Session {
    if options.pretty {
        Session::quiet()
    } else {
        Session::new()
    }
}

fn run_file(path: &Path, options: RunOptions) -> ExitCode {
    debug_log!("loading {}", path.display());
    let source = match slang_driver::load_source(path) {
        Ok(source) => source,
        Err(err) => {
            let code = ExitCode::from(&err);
            render::print_fatal(err);
            return code;
        }
    };

    let mut session = new_session(options);
    let name = path.display().to_string();
    run(&mut session, &name, &source, options);
    session.exit_code()
}

fn run_prompt(options: RunOptions) -> ExitCode {
    println!("Welcome to slang");
    let mut session = new_session(options);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        session.clear_error();
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => run(&mut session, "<stdin>", &line, options),
            Err(err) => {
                print_error(&format!("failed to read input: {}", err));
                break;
            }
        }
    }

    debug_log!("prompt closed");
    ExitCode::Success
}

/// Scan one source string and print its tokens and diagnostics.
fn run(session: &mut Session, name: &str, source: &str, options: RunOptions) {
    let output = session.run(source);
    debug_log!(
        "{}: {} tokens, {} diagnostics",
        name,
        output.tokens.len(),
        output.diagnostics.len()
    );

    if options.pretty {
        render::print_pretty(output.diagnostics.diagnostics(), name, source);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = render::print_tokens(&mut out, &output.tokens, options.json) {
        debug_log!("failed to write tokens: {}", err);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["slang", "--json", "--pretty", "a.sl"]).unwrap();
        assert_eq!(cli.scripts, vec![PathBuf::from("a.sl")]);
        let options = RunOptions::from(&cli);
        assert!(options.json);
        assert!(options.pretty);
        assert!(!cli.debug);
    }

    #[test]
    fn test_two_scripts_is_usage_error() {
        let cli = Cli::try_parse_from(["slang", "a.sl", "b.sl"]).unwrap();
        assert_eq!(run_cli(&cli), ExitCode::Usage);
        assert_eq!(run_cli(&cli).code(), 64);
    }

    #[test]
    fn test_missing_script_is_io_error() {
        let missing = std::env::temp_dir().join(format!(
            "slang_cli_missing_{}/nope.sl",
            std::process::id()
        ));
        let cli = Cli::try_parse_from([PathBuf::from("slang"), missing]).unwrap();
        assert_eq!(run_cli(&cli), ExitCode::IoError);
    }

    #[test]
    fn test_script_with_lexical_error_exits_65() {
        let dir = std::env::temp_dir().join(format!("slang_cli_run_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.sl");
        let bad = dir.join("bad.sl");
        std::fs::write(&good, "var x = 1;\n").unwrap();
        std::fs::write(&bad, "var s = \"open\n").unwrap();

        let cli = Cli::try_parse_from([PathBuf::from("slang"), good]).unwrap();
        assert_eq!(run_cli(&cli), ExitCode::Success);
        let cli = Cli::try_parse_from([PathBuf::from("slang"), bad]).unwrap();
        assert_eq!(run_cli(&cli), ExitCode::DataError);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
