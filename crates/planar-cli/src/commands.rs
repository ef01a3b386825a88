use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;
use colored::{ColoredString, Colorize};
use planar_board::{Board, BoardConfig, CommandError, CommandResult, Outcome, Rgb};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.seed)?;
    let mut board = Board::new(config);
    match cli.command {
        Command::Repl => cmd_repl(&mut board, cli.format),
        Command::Run(args) => cmd_run(&mut board, &args.path, cli.format),
    }
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<BoardConfig> {
    let mut config = match path {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// What the console should do after a line.
#[derive(Debug)]
enum Step {
    Quit,
    Ran(CommandResult<Option<Outcome>>),
}

fn step(board: &mut Board, line: &str) -> Step {
    match line.trim() {
        "quit" | "exit" => Step::Quit,
        _ => Step::Ran(board.execute_line(line)),
    }
}

/// A block drawn in the object's own color.
fn swatch(color: Rgb) -> ColoredString {
    "■".truecolor(color.r(), color.g(), color.b())
}

fn render(outcome: &Outcome, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => match outcome {
            Outcome::Created { object } | Outcome::Info { object } => {
                format!("{} {} {}", "✓".green(), swatch(object.color), outcome)
            }
            _ => format!("{} {}", "✓".green(), outcome),
        },
        OutputFormat::Json => serde_json::to_string(outcome)?,
    })
}

fn report_error(err: &CommandError) {
    match err {
        CommandError::HelpRequested(usage) => println!("{usage}"),
        other => eprintln!("{} {}", "error:".red().bold(), other),
    }
}

fn cmd_repl(board: &mut Board, format: OutputFormat) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", "planar>".cyan().bold());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match step(board, &line?) {
            Step::Quit => break,
            Step::Ran(Ok(Some(outcome))) => println!("{}", render(&outcome, format)?),
            Step::Ran(Ok(None)) => {}
            Step::Ran(Err(err)) => report_error(&err),
        }
    }
    Ok(())
}

fn cmd_run(board: &mut Board, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    for (index, line) in source.lines().enumerate() {
        match step(board, line) {
            Step::Quit => break,
            Step::Ran(Ok(Some(outcome))) => println!("{}", render(&outcome, format)?),
            Step::Ran(Ok(None)) => {}
            Step::Ran(Err(err)) if err.is_help() => report_error(&err),
            Step::Ran(Err(err)) => {
                return Err(CommandError::Script {
                    line: index + 1,
                    source: Box::new(err),
                })
                .with_context(|| format!("running {}", path.display()));
            }
        }
    }
    Ok(())
}
