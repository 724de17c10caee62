//! `ganui-tokens` - inspect token families and check preset sheets.

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = console::colors_enabled();

    match &cli.command {
        Command::List(args) => commands::list::execute(args, color),
        Command::Parse(args) => commands::parse::execute(args),
        Command::Check(args) => commands::check::execute(args, color),
    }
}
