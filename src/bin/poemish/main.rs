mod cli;
mod commands;
mod config;
mod prompt;
mod ui;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use poemish::Library;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::Context;
use prompt::Prompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("poemish={level}"))),
        )
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let library = Library::new(cli.texts_dir, cli.poems_dir);
    let mut ctx = Context::new(library, cli.seed);
    ctx.clear_screen = io::stdout().is_terminal();

    match cli.command {
        None => commands::menu(&mut ctx, &mut Prompter::new(io::stdin().lock(), io::stdout())),
        Some(Command::Generate(args)) => commands::generate(
            &mut ctx,
            &args,
            &mut Prompter::new(io::stdin().lock(), io::stdout()),
        ),
        Some(Command::Browse) => commands::browse(&mut ctx),
        Some(Command::Add(args)) => commands::add(&ctx, &args),
        Some(Command::List) => commands::list(&ctx),
    }
}
