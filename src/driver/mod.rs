//! Pipeline orchestration for the vih CLI: file runs and the REPL.

use std::io::{self, BufRead, Write};

use log::debug;

use vih::eval::eval_program;
use vih::lexer::Lexer;
use vih::object::{Environment, Object};
use vih::parser::{ParseError, Parser};

/// Which pipeline stage a file run stops at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Mode {
    /// Tokenize only, printing one token per line.
    Lexer,
    /// Parse only, printing the program in canonical form.
    Parser,
    /// Parse and evaluate, printing a non-null result.
    Eval,
}

/// An error from running a source file.
///
/// Parse errors keep the file name and content so the diagnostics module
/// can render labelled reports; runtime errors carry the interpreter's
/// message.
pub(crate) enum RunError {
    /// The source file could not be read.
    FileRead { path: String, source: io::Error },
    /// The parser reported one or more syntax errors.
    Parse {
        filename: String,
        source: String,
        errors: Vec<ParseError>,
    },
    /// Evaluation produced a top-level error value.
    Runtime { message: String },
}

/// Runs a source file in the given mode.
pub(crate) fn run_file(path: &str, mode: Mode) -> Result<(), RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::FileRead {
        path: path.to_string(),
        source,
    })?;

    match mode {
        Mode::Lexer => {
            print_tokens(&source);
            Ok(())
        }
        Mode::Parser | Mode::Eval => {
            let mut parser = Parser::new(Lexer::new(&source));
            let program = parser.parse_program();
            if !parser.errors().is_empty() {
                return Err(RunError::Parse {
                    filename: path.to_string(),
                    source: source.clone(),
                    errors: parser.into_errors(),
                });
            }
            debug!("parsed {} statements", program.statements.len());

            if mode == Mode::Parser {
                println!("{}", program);
                return Ok(());
            }

            let env = Environment::new();
            let result = eval_program(&program, &env);
            debug!("evaluated to {}", result.type_name());
            match result {
                Object::Null => Ok(()),
                Object::Error(message) => Err(RunError::Runtime { message }),
                other => {
                    println!("{}", other);
                    Ok(())
                }
            }
        }
    }
}

/// Tokenizes the source and prints one `{KIND:'literal'}` line per token,
/// the end-of-file marker included.
fn print_tokens(source: &str) {
    let tokens = Lexer::new(source).tokenize();
    debug!("tokenized {} tokens", tokens.len());
    for token in tokens {
        println!("{{{}:'{}'}}", token.kind.name(), token.kind.literal());
    }
}

/// Runs the interactive REPL.
///
/// Lines are parsed and evaluated one at a time against a persistent
/// environment, so bindings survive across inputs. Parse errors are
/// printed and leave the environment untouched. End of input (Ctrl-D)
/// ends the session.
pub(crate) fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    println!("Welcome to the vih REPL!");
    loop {
        print!(">> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("{}", error);
            }
            continue;
        }

        match eval_program(&program, &env) {
            Object::Null => {}
            result => println!("{}", result),
        }
    }
    println!("\nBye!");
}
