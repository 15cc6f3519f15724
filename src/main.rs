//! The vih interpreter CLI.
//!
//! This binary runs vih source files (optionally stopping after the lexer
//! or parser stage) and provides an interactive REPL when invoked without
//! a file. Pipeline orchestration lives in the driver module; rich parse
//! error reports in the diagnostics module.

use clap::Parser;

mod diagnostics;
mod driver;

use driver::Mode;

/// Command-line interface for the vih interpreter.
#[derive(Parser)]
#[command(name = "vih")]
#[command(about = "The vih programming language", long_about = None)]
struct Cli {
    /// The source file to run. Without a file, an interactive REPL
    /// starts.
    file: Option<String>,

    /// Pipeline stage to run: print tokens (`lexer`), print the parsed
    /// program (`parser`), or evaluate (`eval`, the default).
    #[arg(short, long, value_enum, default_value_t = Mode::Eval)]
    mode: Mode,
}

/// Entry point for the vih interpreter.
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.file {
        Some(file) => {
            if let Err(error) = driver::run_file(&file, cli.mode) {
                diagnostics::report_error(&error);
                std::process::exit(1);
            }
        }
        None => driver::run_repl(),
    }
}
