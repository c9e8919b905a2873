//! The interactive read-eval-print loop.
//!
//! The shell accumulates accepted source lines and re-runs the joined
//! history against a fresh environment on every prompt, so bindings from
//! earlier lines stay visible by re-evaluation. Lines that fail to parse,
//! or whose evaluation produces an error, are removed from the history so
//! they do not poison later prompts.
//!
//! Three meta-commands are handled before the pipeline sees the input:
//! `exit()` leaves the shell, `clean()` clears the terminal, and `show()`
//! prints the accepted history.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use mica::evaluator::Evaluator;
use mica::lexer::Lexer;
use mica::object::Environment;
use mica::parser::Parser;

/// Runs the shell until `exit()` or end of input.
pub(crate) fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    // One evaluator per session keeps the boolean/null sentinels (and the
    // built-ins table) identical across prompts.
    let evaluator = Evaluator::new();
    let mut scanned: Vec<String> = Vec::new();

    loop {
        write!(stdout, ">> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let source = line?;

        match source.as_str() {
            "exit()" => break,
            "clean()" => {
                clean_console();
                continue;
            }
            "show()" => {
                writeln!(stdout, "{scanned:?}")?;
                continue;
            }
            _ => {}
        }

        scanned.push(source);
        let joined = scanned.join(" ");

        let lexer = Lexer::new(&joined);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                writeln!(stdout, "{error}")?;
            }
            scanned.pop();
            continue;
        }

        let env = Rc::new(RefCell::new(Environment::new()));
        if let Some(result) = evaluator.eval_program(&program, &env) {
            writeln!(stdout, "Inspect: {}", result.inspect())?;
            if result.is_error() {
                scanned.pop();
            }
        }
    }

    Ok(())
}

/// Clears the terminal, dispatching on the platform.
fn clean_console() {
    #[cfg(windows)]
    let status = std::process::Command::new("cmd").args(["/C", "cls"]).status();
    #[cfg(not(windows))]
    let status = std::process::Command::new("clear").status();
    let _ = status;
}
