use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "planar",
    about = "Planar: interactive 2D constructions with live dependent points",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Board configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for generated colors, overriding the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read commands from standard input until quit, exit, or end of input
    Repl,
    /// Run a script file, stopping at the first failing line
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_repl() {
        let cli = Cli::try_parse_from(["planar", "repl"]).unwrap();
        assert!(matches!(cli.command, Command::Repl));
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from(["planar", "run", "figure.src"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("figure.src"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn run_requires_path() {
        assert!(Cli::try_parse_from(["planar", "run"]).is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "planar", "repl", "--seed", "7", "--config", "board.toml", "-v",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["planar", "--format", "json", "repl"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Cli::try_parse_from(["planar", "--seed", "abc", "repl"]).is_err());
    }
}
