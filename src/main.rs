use clap::Parser;
use numera::evaluate_line;
use rustyline::{error::ReadlineError, DefaultEditor};

/// numera is an interactive calculator for integers of unbounded magnitude.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(line) = args.expression {
        match evaluate_line(&line) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_prompt() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive read-evaluate-print loop.
///
/// One line in, one value or boolean out. Evaluation failures are printed
/// and the loop continues; nothing carries over to the next line.
fn run_prompt() -> rustyline::Result<()> {
    println!("numera {}", env!("CARGO_PKG_VERSION"));
    println!("Enter an expression to evaluate it, or 'exit' to quit.");

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" {
                    println!("Goodbye!");
                    break;
                }

                let _ = editor.add_history_entry(line);

                match evaluate_line(line) {
                    Ok(result) => println!("{result}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
