use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Inspect UI style-token families and validate preset sheets.
#[derive(Parser)]
#[command(name = "ganui-tokens", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List token families and their labels.
    List(ListArgs),

    /// Resolve a label to its canonical form.
    Parse(ParseArgs),

    /// Load preset sheets and report errors.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show this family.
    pub family: Option<String>,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Family name, e.g. `button-size`.
    pub family: String,

    /// Label to resolve, e.g. `LG`.
    pub label: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Preset sheet files (.yaml, .yml or .json).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print each sheet back with canonical labels.
    #[arg(long)]
    pub print: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_format() {
        let cli = Cli::try_parse_from(["ganui-tokens", "list", "modal-size", "--output", "json"])
            .unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.family.as_deref(), Some("modal-size"));
                assert_eq!(args.output, OutputFormat::Json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["ganui-tokens", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["ganui-tokens", "check"]).is_err());
    }
}
